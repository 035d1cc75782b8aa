//! Terminal rendering module.
//!
//! Renders into a simple framebuffer of semantically-tagged cells and
//! flushes it to the terminal as one bordered full-screen frame per tick.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Map simulation state to glyphs only at flush time
//! - Never write outside the allocated grid

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, FrameBuffer};
pub use game_view::GameView;
pub use renderer::TerminalRenderer;
