//! Tetromino definitions
//!
//! The 7 standard tetrominoes and the matrices they spawn with.

use crate::geometry::{MAX_SIZE, Shape};

/// The 7 tetromino types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    I, // long bar
    O, // square
    T,
    S,
    Z,
    L,
    J,
}

impl TetrominoType {
    /// Get all tetromino types for bag randomization
    pub fn all() -> [TetrominoType; 7] {
        [
            TetrominoType::I,
            TetrominoType::O,
            TetrominoType::T,
            TetrominoType::S,
            TetrominoType::Z,
            TetrominoType::L,
            TetrominoType::J,
        ]
    }

    /// Rows of the spawn matrix, top row first
    fn rows(&self) -> &'static [&'static [u8]] {
        match self {
            TetrominoType::I => &[&[1, 1, 1, 1]],
            TetrominoType::O => &[&[1, 1], &[1, 1]],
            TetrominoType::T => &[&[0, 1, 0], &[1, 1, 1]],
            TetrominoType::S => &[&[1, 1, 0], &[0, 1, 1]],
            TetrominoType::Z => &[&[0, 1, 1], &[1, 1, 0]],
            TetrominoType::L => &[&[1, 1, 1], &[1, 0, 0]],
            TetrominoType::J => &[&[1, 1, 1], &[0, 0, 1]],
        }
    }

    /// The canonical (unrotated) shape for this tetromino
    pub fn shape(&self) -> Shape {
        let rows = self.rows();
        let mut cells = [[false; MAX_SIZE]; MAX_SIZE];
        for (r, row) in rows.iter().enumerate() {
            for (c, &bit) in row.iter().enumerate() {
                cells[r][c] = bit == 1;
            }
        }
        Shape::from_cells(*self, rows.len(), rows[0].len(), cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_has_four_cells() {
        for kind in TetrominoType::all() {
            assert_eq!(kind.shape().cell_count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_spawn_dimensions() {
        let i = TetrominoType::I.shape();
        assert_eq!((i.rows(), i.cols()), (1, 4));
        let o = TetrominoType::O.shape();
        assert_eq!((o.rows(), o.cols()), (2, 2));
        for kind in [
            TetrominoType::T,
            TetrominoType::S,
            TetrominoType::Z,
            TetrominoType::L,
            TetrominoType::J,
        ] {
            let shape = kind.shape();
            assert_eq!((shape.rows(), shape.cols()), (2, 3), "{:?}", kind);
        }
    }

    #[test]
    fn test_t_matrix() {
        let t = TetrominoType::T.shape();
        assert!(!t.is_filled(0, 0));
        assert!(t.is_filled(0, 1));
        assert!(!t.is_filled(0, 2));
        assert!((0..3).all(|c| t.is_filled(1, c)));
    }

    #[test]
    fn test_l_and_j_are_mirrored() {
        let l = TetrominoType::L.shape();
        let j = TetrominoType::J.shape();
        assert!(l.is_filled(1, 0) && !l.is_filled(1, 2));
        assert!(j.is_filled(1, 2) && !j.is_filled(1, 0));
    }
}
