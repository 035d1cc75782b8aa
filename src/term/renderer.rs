//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Owns the terminal state for the lifetime of the process: raw mode,
//! alternate screen, cursor visibility. Every frame is a full redraw of the
//! bordered playfield; at snake-grid sizes diffing buys nothing.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::fb::{Cell, FrameBuffer};
use crate::types::CellKind;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    raw_mode: bool,
    entered: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            raw_mode: false,
            entered: false,
        }
    }

    /// Acquire the terminal. Raw mode is best-effort: on a non-tty stdin the
    /// game still runs, input just never arrives.
    pub fn enter(&mut self) -> Result<()> {
        self.raw_mode = terminal::enable_raw_mode().is_ok();
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        self.entered = true;
        Ok(())
    }

    /// Restore the terminal. Idempotent; also invoked from `Drop` so panics
    /// and early returns cannot leave the terminal raw.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.flush()?;
        if self.raw_mode {
            terminal::disable_raw_mode()?;
        }
        Ok(())
    }

    /// Flush one full frame: clear screen, bordered grid, all cells.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let mut current: Option<Color> = None;

        self.set_color(&mut current, BORDER_COLOR)?;
        self.stdout.queue(Print('╔'))?;
        for _ in 0..fb.width() {
            self.stdout.queue(Print('═'))?;
        }
        self.stdout.queue(Print("╗\r\n"))?;

        for y in 0..fb.height() {
            self.set_color(&mut current, BORDER_COLOR)?;
            self.stdout.queue(Print('║'))?;
            for x in 0..fb.width() {
                let cell = fb.get(x, y).unwrap_or_default();
                let (ch, color) = cell_appearance(cell);
                self.set_color(&mut current, color)?;
                self.stdout.queue(Print(ch))?;
            }
            self.set_color(&mut current, BORDER_COLOR)?;
            self.stdout.queue(Print("║\r\n"))?;
        }

        self.stdout.queue(Print('╚'))?;
        for _ in 0..fb.width() {
            self.stdout.queue(Print('═'))?;
        }
        self.stdout.queue(Print('╝'))?;

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn set_color(&mut self, current: &mut Option<Color>, color: Color) -> Result<()> {
        if *current != Some(color) {
            self.stdout.queue(SetForegroundColor(color))?;
            *current = Some(color);
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        // Best-effort: a failed restore must never abort shutdown.
        let _ = self.exit();
    }
}

const BORDER_COLOR: Color = Color::White;

/// Glyph and color for one cell. The only place cell kinds become visuals.
fn cell_appearance(cell: Cell) -> (char, Color) {
    match cell {
        Cell::Blank => (' ', Color::Reset),
        Cell::Kind(CellKind::Empty) => (' ', Color::Reset),
        Cell::Kind(CellKind::SnakeBody) => ('█', Color::Green),
        Cell::Kind(CellKind::Food) => ('●', Color::Red),
        Cell::Kind(CellKind::Highlight) => ('○', Color::White),
        Cell::Text(ch) => (ch, Color::White),
    }
}
