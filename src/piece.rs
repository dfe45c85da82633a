//! Active falling piece

use crate::board::Board;
use crate::geometry::{RotationDirection, Shape};

/// Spawn origin, the top-left corner of the board
pub const SPAWN_X: i32 = 0;
pub const SPAWN_Y: i32 = 0;

/// An active falling piece.
///
/// `x`/`y` locate the top-left corner of the shape's bounding box on the
/// board. Moves produce candidate pieces; the game commits one only after
/// the board accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl ActivePiece {
    /// Create a piece at the spawn position
    pub fn spawn(shape: Shape) -> Self {
        Self {
            shape,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Absolute (row, col) of every block
    pub fn block_positions(&self) -> impl Iterator<Item = (i32, i32)> {
        let (x, y) = (self.x, self.y);
        self.shape
            .filled_cells()
            .map(move |(r, c)| (y + r as i32, x + c as i32))
    }

    pub fn occupies(&self, row: i32, col: i32) -> bool {
        self.block_positions().any(|pos| pos == (row, col))
    }

    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same origin, rotated matrix. No kick offsets are tried.
    pub fn rotated(&self, direction: RotationDirection) -> Self {
        Self {
            shape: self.shape.rotated(direction),
            ..*self
        }
    }

    pub fn fits(&self, board: &Board) -> bool {
        board.can_place(&self.shape, self.x, self.y)
    }
}
