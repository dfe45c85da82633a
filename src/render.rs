//! Text frame rendering
//!
//! Projects a [`Game`] into plain lines of text: the board with the active
//! piece overlaid, a score line, then the next-piece previews and the hold
//! slot side by side. Every preview occupies a fixed-width slot so short
//! pieces or an empty hold never shift the columns that follow.

use crate::board::Cell;
use crate::game::Game;
use crate::geometry::{MAX_SIZE, Shape};
use std::fmt;

/// Blank columns between the next previews and the hold slot
const PANEL_GAP: &str = "    ";

/// Characters used for filled and empty cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub filled: char,
    pub empty: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            filled: '□',
            empty: '-',
        }
    }
}

impl Glyphs {
    fn cell(&self, filled: bool) -> char {
        if filled { self.filled } else { self.empty }
    }
}

/// One full screen of text, top line first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Render the whole game. Reads `game` only.
pub fn render(game: &Game, glyphs: &Glyphs) -> Frame {
    let mut frame = Frame::default();
    render_board(&mut frame, game, glyphs);
    frame.push_line(format!("Score: {}", game.score.points));
    render_panels(&mut frame, game, glyphs);
    frame
}

fn render_board(frame: &mut Frame, game: &Game, glyphs: &Glyphs) {
    let piece = game.piece();
    for (row, cells) in game.board.rows().enumerate() {
        let line: String = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let filled = *cell == Cell::Filled || piece.occupies(row as i32, col as i32);
                glyphs.cell(filled)
            })
            .collect();
        frame.push_line(line);
    }
}

/// Next previews and hold slot, row-aligned by index
fn render_panels(frame: &mut Frame, game: &Game, glyphs: &Glyphs) {
    let next: Vec<&Shape> = game.lookahead().iter().collect();
    let hold = game.hold_piece();

    let next_width = game.lookahead().len() * (MAX_SIZE + 1);
    frame.push_line(format!(
        "{:<width$}{}",
        "Next",
        "Hold",
        width = next_width + PANEL_GAP.len()
    ));

    let height = next
        .iter()
        .copied()
        .chain(hold)
        .map(Shape::rows)
        .max()
        .unwrap_or(0);

    for row in 0..height {
        let mut line = String::new();
        for shape in &next {
            line.push_str(&slot_row(Some(*shape), row, glyphs));
            line.push(' ');
        }
        line.push_str(PANEL_GAP);
        line.push_str(&slot_row(hold, row, glyphs));
        frame.push_line(line);
    }
}

/// One row of a preview slot, always exactly `MAX_SIZE` characters
fn slot_row(shape: Option<&Shape>, row: usize, glyphs: &Glyphs) -> String {
    let mut out = String::with_capacity(MAX_SIZE * 3);
    let cols = match shape {
        Some(shape) if row < shape.rows() => {
            for col in 0..shape.cols() {
                out.push(glyphs.cell(shape.is_filled(row, col)));
            }
            shape.cols()
        }
        _ => 0,
    };
    out.extend(std::iter::repeat_n(' ', MAX_SIZE - cols));
    out
}
