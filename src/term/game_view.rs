//! GameView: maps `core::GameState` into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::term::fb::FrameBuffer;
use crate::types::{CellKind, GRID_HEIGHT, GRID_WIDTH};

pub const GAME_OVER_TEXT: &str = "GAME OVER";
pub const RESTART_TEXT: &str = "Press SPACE to restart or ESC to quit";

/// Renders the playfield, the score line and the end-of-round overlay.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render the current game state into a fresh playfield-sized buffer.
    pub fn render(&self, state: &GameState) -> FrameBuffer {
        let mut fb = FrameBuffer::new(GRID_WIDTH as u16, GRID_HEIGHT as u16);
        self.render_into(state, &mut fb);
        fb
    }

    /// Render into an existing buffer, clearing it first.
    pub fn render_into(&self, state: &GameState, fb: &mut FrameBuffer) {
        fb.clear();

        for segment in state.snake.segments() {
            fb.plot(segment.x as u16, segment.y as u16, CellKind::SnakeBody);
        }

        let food = state.food.position();
        fb.plot(food.x as u16, food.y as u16, CellKind::Food);

        if state.game_over {
            // Mark the crash site before the overlay text goes on top.
            let head = state.snake.head();
            fb.plot(head.x as u16, head.y as u16, CellKind::Highlight);
        }

        fb.put_str(0, 0, &format!("Score: {}", state.score));

        if state.game_over {
            let mid = fb.height() / 2;
            fb.put_str_centered(mid.saturating_sub(1), GAME_OVER_TEXT);
            fb.put_str_centered((mid + 1).min(fb.height().saturating_sub(1)), RESTART_TEXT);
        }
    }
}
