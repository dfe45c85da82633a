//! Scoring
//!
//! Only a four-row clear (a "Tetris") earns points; singles, doubles and
//! triples score nothing.

/// Points for clearing four rows in one lock
pub const TETRIS_POINTS: u64 = 100;

/// Points awarded for one clear event of `lines` rows
pub fn points_for_clear(lines: usize) -> u64 {
    if lines == 4 { TETRIS_POINTS } else { 0 }
}

/// Score tracking for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Score {
    /// Current score
    pub points: u64,
    /// Total rows cleared this session
    pub lines: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one clear event, returning the points it earned
    pub fn add_clear(&mut self, lines: usize) -> u64 {
        let earned = points_for_clear(lines);
        self.points += earned;
        self.lines += lines as u32;
        earned
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tetris() {
        let mut score = Score::new();
        assert_eq!(score.add_clear(4), 100);
        assert_eq!(score.points, 100);
        assert_eq!(score.lines, 4);
    }

    #[test]
    fn test_smaller_clears_score_nothing() {
        let mut score = Score::new();
        for lines in 1..=3 {
            assert_eq!(score.add_clear(lines), 0);
        }
        assert_eq!(score.points, 0);
        assert_eq!(score.lines, 6);
    }

    #[test]
    fn test_no_clear() {
        let mut score = Score::new();
        score.add_clear(0);
        assert_eq!(score, Score::default());
    }

    #[test]
    fn test_points_accumulate() {
        let mut score = Score::new();
        score.add_clear(4);
        score.add_clear(2);
        score.add_clear(4);
        assert_eq!(score.points, 200);
    }

    #[test]
    fn test_reset() {
        let mut score = Score::new();
        score.add_clear(4);
        score.reset();
        assert_eq!(score.points, 0);
        assert_eq!(score.lines, 0);
    }
}
