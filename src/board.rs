//! Game board representation and collision detection

use crate::geometry::Shape;

/// Standard board dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled)
    }
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Grid stored as [row][col], row 0 is the top
    cells: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    /// Get the cell at (row, col), or None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.cells
            .get(row as usize)
            .and_then(|cells| cells.get(col as usize))
            .copied()
    }

    /// Set a cell, returning false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        match self
            .cells
            .get_mut(row as usize)
            .and_then(|cells| cells.get_mut(col as usize))
        {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Whether a single block may sit at (row, col).
    ///
    /// Rows above the board (negative) never collide; columns outside the
    /// board and rows at or past the floor always do.
    fn is_open(&self, row: i32, col: i32) -> bool {
        if col < 0 || col >= BOARD_WIDTH as i32 || row >= BOARD_HEIGHT as i32 {
            return false;
        }
        if row < 0 {
            return true;
        }
        self.cells[row as usize][col as usize].is_empty()
    }

    /// Check whether `shape` fits with its top-left corner at (x, y)
    pub fn can_place(&self, shape: &Shape, x: i32, y: i32) -> bool {
        shape
            .filled_cells()
            .all(|(r, c)| self.is_open(y + r as i32, x + c as i32))
    }

    /// Write every filled cell of `shape` at (x, y) onto the board.
    ///
    /// Callers check [`Board::can_place`] first; cells above the board are dropped.
    pub fn lock(&mut self, shape: &Shape, x: i32, y: i32) {
        for (r, c) in shape.filled_cells() {
            self.set(y + r as i32, x + c as i32, Cell::Filled);
        }
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Rows are compacted bottom-up in one pass, so any set of full rows
    /// (contiguous or not) is removed against the board as it was on entry.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut write_row = BOARD_HEIGHT;

        for read_row in (0..BOARD_HEIGHT).rev() {
            if self.is_row_full(read_row) {
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                self.cells[write_row] = self.cells[read_row];
            }
        }

        // One fresh row on top per removed row
        let cleared = write_row;
        self.cells[..cleared].fill([Cell::Empty; BOARD_WIDTH]);
        cleared
    }

    fn is_row_full(&self, row: usize) -> bool {
        self.cells[row].iter().all(Cell::is_filled)
    }

    /// Set every cell to empty
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT];
    }

    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(Cell::is_empty))
    }

    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_filled())
            .count()
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_WIDTH]> {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::RotationDirection;
    use crate::tetromino::TetrominoType;

    fn fill_row(board: &mut Board, row: i32) {
        for col in 0..BOARD_WIDTH as i32 {
            board.set(row, col, Cell::Filled);
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.rows().count(), BOARD_HEIGHT);
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        assert!(board.set(5, 5, Cell::Filled));
        assert_eq!(board.get(5, 5), Some(Cell::Filled));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(board.get(-1, 0), None);
        assert_eq!(board.get(0, -1), None);
        assert_eq!(board.get(BOARD_HEIGHT as i32, 0), None);
        assert_eq!(board.get(0, BOARD_WIDTH as i32), None);
        assert!(!board.set(0, BOARD_WIDTH as i32, Cell::Filled));
        assert!(board.is_empty());
    }

    #[test]
    fn test_can_place_inside_empty_board() {
        let board = Board::new();
        let i = TetrominoType::I.shape();
        assert!(board.can_place(&i, 0, 0));
        assert!(board.can_place(&i, 6, 19));
    }

    #[test]
    fn test_can_place_rejects_walls_and_floor() {
        let board = Board::new();
        let i = TetrominoType::I.shape();
        assert!(!board.can_place(&i, -1, 0));
        assert!(!board.can_place(&i, 7, 0));
        assert!(!board.can_place(&i, 0, BOARD_HEIGHT as i32));

        let vertical = i.rotated(RotationDirection::Clockwise);
        assert!(board.can_place(&vertical, 9, 16));
        assert!(!board.can_place(&vertical, 9, 17));
    }

    #[test]
    fn test_can_place_rejects_overlap() {
        let mut board = Board::new();
        board.set(10, 4, Cell::Filled);
        let o = TetrominoType::O.shape();
        assert!(!board.can_place(&o, 3, 9));
        assert!(!board.can_place(&o, 4, 10));
        assert!(board.can_place(&o, 5, 10));
        assert!(board.can_place(&o, 2, 9));
    }

    #[test]
    fn test_empty_cells_of_shape_never_collide() {
        let mut board = Board::new();
        // T's top corners are empty
        board.set(0, 0, Cell::Filled);
        board.set(0, 2, Cell::Filled);
        assert!(board.can_place(&TetrominoType::T.shape(), 0, 0));
    }

    #[test]
    fn test_rows_above_board_never_collide() {
        let mut board = Board::new();
        fill_row(&mut board, 1);
        let o = TetrominoType::O.shape();
        assert!(board.can_place(&o, 0, -2));
        assert!(board.can_place(&o, 0, -1));
        assert!(!board.can_place(&o, 0, 0));
        assert!(!board.can_place(&o, -1, -2));
    }

    #[test]
    fn test_lock_fills_cells() {
        let mut board = Board::new();
        let s = TetrominoType::S.shape();
        board.lock(&s, 3, 18);
        assert_eq!(board.filled_count(), 4);
        assert_eq!(board.get(18, 3), Some(Cell::Filled));
        assert_eq!(board.get(18, 4), Some(Cell::Filled));
        assert_eq!(board.get(18, 5), Some(Cell::Empty));
        assert_eq!(board.get(19, 4), Some(Cell::Filled));
        assert_eq!(board.get(19, 5), Some(Cell::Filled));
    }

    #[test]
    fn test_clear_single_line() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        board.set(18, 0, Cell::Filled);

        assert_eq!(board.clear_full_rows(), 1);
        // The block from row 18 should now be on row 19
        assert_eq!(board.get(19, 0), Some(Cell::Filled));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_clear_non_contiguous_rows() {
        let mut board = Board::new();
        fill_row(&mut board, 5);
        fill_row(&mut board, 7);
        board.set(2, 1, Cell::Filled); // above both, moves down 2
        board.set(6, 2, Cell::Filled); // between, moves down 1
        board.set(9, 3, Cell::Filled); // below both, stays
        board.set(0, 4, Cell::Filled); // top row, moves down 2

        assert_eq!(board.clear_full_rows(), 2);

        assert_eq!(board.filled_count(), 4);
        assert_eq!(board.get(4, 1), Some(Cell::Filled));
        assert_eq!(board.get(7, 2), Some(Cell::Filled));
        assert_eq!(board.get(9, 3), Some(Cell::Filled));
        assert_eq!(board.get(2, 4), Some(Cell::Filled));
        assert!(board.rows().take(2).all(|row| row.iter().all(Cell::is_empty)));
    }

    #[test]
    fn test_clear_nothing() {
        let mut board = Board::new();
        board.set(19, 0, Cell::Filled);
        let before = board.clone();
        assert_eq!(board.clear_full_rows(), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear_four_rows() {
        let mut board = Board::new();
        for row in 16..20 {
            fill_row(&mut board, row);
        }
        assert_eq!(board.clear_full_rows(), 4);
        assert!(board.is_empty());
    }

    #[test]
    fn test_reset() {
        let mut board = Board::new();
        fill_row(&mut board, 3);
        board.set(12, 7, Cell::Filled);
        board.reset();
        assert!(board.is_empty());
    }
}
