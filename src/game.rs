//! Core game state and logic
//!
//! [`Game`] owns every piece of mutable state and runs the lock/spawn cycle:
//! a piece falls until it cannot move down, is locked into the board, full
//! rows are cleared and scored, and the next piece spawns from the preview.
//! A spawn that collides ends the session, which restarts in place.

use crate::bag::Bag;
use crate::board::Board;
use crate::geometry::{RotationDirection, Shape};
use crate::piece::ActivePiece;
use crate::queue::Lookahead;
use crate::score::Score;
use tracing::{debug, info};

/// Input actions the game can process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCW,
    RotateCCW,
    Hold,
    Quit,
}

/// What a single tick or action did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed (blocked move, repeated hold)
    Idle,
    /// The active piece moved, rotated or was swapped via hold
    Moved,
    /// The piece locked, `lines` rows were cleared and the next piece spawned
    Locked { lines: usize, points: u64 },
    /// The next piece could not spawn; the session was reset
    GameOver,
    /// The player asked to leave
    Quit,
}

/// The main game struct
#[derive(Debug, Clone)]
pub struct Game {
    /// The game board
    pub board: Board,
    /// Current falling piece
    piece: ActivePiece,
    /// Held piece (can swap once per spawned piece)
    hold: Option<Shape>,
    /// Whether hold has been used since the last spawn
    hold_used: bool,
    /// Piece bag randomizer
    bag: Bag,
    /// Upcoming pieces
    lookahead: Lookahead,
    /// Score tracking
    pub score: Score,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_bag(Bag::new())
    }

    /// Create a game whose piece sequence is fixed by `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self::with_bag(Bag::with_seed(seed))
    }

    fn with_bag(mut bag: Bag) -> Self {
        let mut lookahead = Lookahead::filled(&mut bag);
        let first = lookahead.pop_and_refill(&mut bag);

        Self {
            board: Board::new(),
            piece: ActivePiece::spawn(first),
            hold: None,
            hold_used: false,
            bag,
            lookahead,
            score: Score::new(),
        }
    }

    pub fn piece(&self) -> &ActivePiece {
        &self.piece
    }

    pub fn hold_piece(&self) -> Option<&Shape> {
        self.hold.as_ref()
    }

    pub fn hold_used(&self) -> bool {
        self.hold_used
    }

    pub fn lookahead(&self) -> &Lookahead {
        &self.lookahead
    }

    /// Process an action
    pub fn process_action(&mut self, action: Action) -> Outcome {
        match action {
            Action::MoveLeft => self.try_commit(self.piece.shifted(-1, 0)),
            Action::MoveRight => self.try_commit(self.piece.shifted(1, 0)),
            Action::SoftDrop => self.tick(),
            Action::RotateCW => self.try_commit(self.piece.rotated(RotationDirection::Clockwise)),
            Action::RotateCCW => {
                self.try_commit(self.piece.rotated(RotationDirection::CounterClockwise))
            }
            Action::Hold => self.hold(),
            Action::Quit => Outcome::Quit,
        }
    }

    /// Apply gravity: move down one row, or lock when the piece has landed
    pub fn tick(&mut self) -> Outcome {
        match self.try_commit(self.piece.shifted(0, 1)) {
            Outcome::Idle => self.lock_piece(),
            outcome => outcome,
        }
    }

    /// Replace the active piece with `candidate` if the board accepts it
    fn try_commit(&mut self, candidate: ActivePiece) -> Outcome {
        if candidate.fits(&self.board) {
            self.piece = candidate;
            Outcome::Moved
        } else {
            Outcome::Idle
        }
    }

    /// Lock the current piece, clear and score rows, then spawn the next
    fn lock_piece(&mut self) -> Outcome {
        let ActivePiece { shape, x, y } = self.piece;
        self.board.lock(&shape, x, y);

        let lines = self.board.clear_full_rows();
        let points = self.score.add_clear(lines);
        debug!(kind = ?shape.kind(), x, y, lines, points, "piece locked");

        if !self.spawn_next() {
            return self.game_over();
        }
        Outcome::Locked { lines, points }
    }

    /// Spawn the front of the preview. Returns false if it collides.
    fn spawn_next(&mut self) -> bool {
        let shape = self.lookahead.pop_and_refill(&mut self.bag);
        self.piece = ActivePiece::spawn(shape);
        self.hold_used = false;
        self.piece.fits(&self.board)
    }

    /// Reset everything to a fresh session and spawn again
    fn game_over(&mut self) -> Outcome {
        info!(
            score = self.score.points,
            lines = self.score.lines,
            "game over, restarting"
        );

        self.board.reset();
        self.score.reset();
        self.hold = None;
        self.bag.reset();
        self.lookahead = Lookahead::filled(&mut self.bag);
        // An empty board always accepts the spawn
        self.spawn_next();

        Outcome::GameOver
    }

    /// Bank the current piece, once per spawned piece.
    ///
    /// The incoming piece starts at the spawn position without a collision
    /// check, unlike a natural spawn.
    fn hold(&mut self) -> Outcome {
        if self.hold_used {
            return Outcome::Idle;
        }

        let incoming = match self.hold.replace(self.piece.shape) {
            Some(held) => held,
            None => self.lookahead.pop_and_refill(&mut self.bag),
        };
        debug!(held = ?self.piece.shape.kind(), incoming = ?incoming.kind(), "hold");

        self.piece = ActivePiece::spawn(incoming);
        self.hold_used = true;
        Outcome::Moved
    }
}
