//! Piece matrices and rotation transforms
//!
//! A [`Shape`] is a small immutable boolean matrix. Rotations never touch the
//! matrix they are given; they return a new value with the row and column
//! counts swapped.

use crate::tetromino::TetrominoType;

/// Largest dimension any tetromino matrix can have
pub const MAX_SIZE: usize = 4;

/// Direction for rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

/// An immutable piece matrix, row 0 on top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: TetrominoType,
    rows: usize,
    cols: usize,
    /// Only the `rows x cols` corner is meaningful; the rest stays false
    cells: [[bool; MAX_SIZE]; MAX_SIZE],
}

impl Shape {
    pub(crate) fn from_cells(
        kind: TetrominoType,
        rows: usize,
        cols: usize,
        cells: [[bool; MAX_SIZE]; MAX_SIZE],
    ) -> Self {
        debug_assert!(rows <= MAX_SIZE && cols <= MAX_SIZE);
        Self {
            kind,
            rows,
            cols,
            cells,
        }
    }

    pub fn kind(&self) -> TetrominoType {
        self.kind
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the cell at (row, col) is filled. Out of range is empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row][col]
    }

    /// Iterate over the (row, col) offsets of every filled cell
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let shape = *self;
        (0..shape.rows).flat_map(move |r| {
            (0..shape.cols)
                .filter(move |&c| shape.cells[r][c])
                .map(move |c| (r, c))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.filled_cells().count()
    }

    pub fn rotated(&self, direction: RotationDirection) -> Shape {
        match direction {
            RotationDirection::Clockwise => rotate_clockwise(self),
            RotationDirection::CounterClockwise => rotate_counter_clockwise(self),
        }
    }
}

/// Rotate 90 degrees clockwise: an r x c matrix becomes c x r
pub fn rotate_clockwise(shape: &Shape) -> Shape {
    let mut cells = [[false; MAX_SIZE]; MAX_SIZE];
    for (r, row) in cells.iter_mut().enumerate().take(shape.cols) {
        for (c, cell) in row.iter_mut().enumerate().take(shape.rows) {
            *cell = shape.cells[shape.rows - 1 - c][r];
        }
    }
    Shape::from_cells(shape.kind, shape.cols, shape.rows, cells)
}

/// Rotate 90 degrees counter-clockwise, the inverse of [`rotate_clockwise`]
pub fn rotate_counter_clockwise(shape: &Shape) -> Shape {
    let mut cells = [[false; MAX_SIZE]; MAX_SIZE];
    for (r, row) in cells.iter_mut().enumerate().take(shape.cols) {
        for (c, cell) in row.iter_mut().enumerate().take(shape.rows) {
            *cell = shape.cells[c][shape.cols - 1 - r];
        }
    }
    Shape::from_cells(shape.kind, shape.cols, shape.rows, cells)
}
