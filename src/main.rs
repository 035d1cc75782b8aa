//! Terminal Snake runner.
//!
//! Builds the session (renderer, input source, tick clock, game state) once
//! at startup and runs the fixed-tick loop: poll input, step the simulation,
//! draw, sleep. The terminal is restored on every exit path.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use tui_snake::clock::TickClock;
use tui_snake::core::GameState;
use tui_snake::input::InputSource;
use tui_snake::term::{GameView, TerminalRenderer};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut input = InputSource::new();
    let mut clock = TickClock::new();
    let mut state = GameState::new(seed_from_clock());
    let view = GameView::new();

    loop {
        for event in input.poll() {
            if !state.handle_event(event) {
                return Ok(());
            }
        }

        state.update();
        term.draw(&view.render(&state))?;
        clock.tick(state.speed);
    }
}

/// Seed the placement RNG from wall-clock time; falls back to a fixed seed
/// if the clock reads before the epoch.
fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
