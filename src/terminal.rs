//! Terminal output with ratatui

use crate::app::FrameSink;
use crate::render::Frame;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    text::Line,
    widgets::{Clear, Paragraph},
};
use std::io::{self, Stdout, stdout};

/// Writes frames to the real terminal, one full redraw per frame
pub struct TerminalSink {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSink {
    /// Switch to raw mode on the alternate screen
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        Ok(Self { terminal })
    }
}

impl FrameSink for TerminalSink {
    fn show(&mut self, frame: &Frame) -> io::Result<()> {
        let lines: Vec<Line> = frame.lines().iter().map(|l| Line::raw(l.as_str())).collect();
        self.terminal.draw(|f| {
            let area = f.area();
            f.render_widget(Clear, area);
            f.render_widget(Paragraph::new(lines), area);
        })?;
        Ok(())
    }
}

/// Leave the alternate screen and restore cooked mode
pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}
