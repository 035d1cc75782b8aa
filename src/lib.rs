//! Terminal Snake.
//!
//! A fixed-tick Snake game rendered into a character framebuffer and flushed
//! to the terminal once per tick. `core` holds the pure simulation, `input`
//! decodes raw keyboard bytes into game events, `term` maps game state to a
//! bordered full-screen frame, and `clock` paces the loop.

pub mod clock;
pub mod core;
pub mod input;
pub mod term;
pub mod types;
