//! Event processing
//!
//! Gravity ticks and player actions arrive one at a time through
//! [`Session::handle`]. Each event finishes mutating the game before a
//! single frame is rendered and handed to the [`FrameSink`].

use crate::game::{Action, Game, Outcome};
use crate::render::{Frame, Glyphs, render};
use std::io;
use std::ops::ControlFlow;
use tracing::{debug, info};

/// Shown under the first frame after a session restarts
pub const GAME_OVER_BANNER: &str = "Game Over";

/// Where finished frames go
pub trait FrameSink {
    /// Replace whatever is displayed with `frame`
    fn show(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Something that drives the game forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The gravity clock fired
    Tick,
    /// The player pressed a bound key
    Action(Action),
    /// Input arrived that maps to nothing; the screen is simply redrawn
    Redraw,
}

/// A running game bound to an output sink
pub struct Session<S> {
    game: Game,
    sink: S,
    glyphs: Glyphs,
}

impl<S: FrameSink> Session<S> {
    pub fn new(game: Game, sink: S, glyphs: Glyphs) -> Self {
        Self { game, sink, glyphs }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Draw the current state without changing it
    pub fn redraw(&mut self) -> io::Result<()> {
        let frame = render(&self.game, &self.glyphs);
        self.sink.show(&frame)
    }

    /// Apply one event, then render once. Breaks when the player quits.
    pub fn handle(&mut self, event: GameEvent) -> io::Result<ControlFlow<()>> {
        let outcome = match event {
            GameEvent::Tick => self.game.tick(),
            GameEvent::Action(action) => self.game.process_action(action),
            GameEvent::Redraw => Outcome::Idle,
        };

        match outcome {
            Outcome::Quit => {
                info!(score = self.game.score.points, "quit");
                return Ok(ControlFlow::Break(()));
            }
            Outcome::Locked { lines, points } if lines > 0 => {
                debug!(lines, points, score = self.game.score.points, "rows cleared");
            }
            _ => {}
        }

        let mut frame = render(&self.game, &self.glyphs);
        if outcome == Outcome::GameOver {
            frame.push_line(GAME_OVER_BANNER);
        }
        self.sink.show(&frame)?;
        Ok(ControlFlow::Continue(()))
    }
}
