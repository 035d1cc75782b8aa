//! Food placement.
//!
//! One food item exists at a time. Placement samples random cells until one
//! misses the snake; sampling is capped and falls back to a linear scan so a
//! nearly-full board cannot spin the loop forever.

use crate::core::rng::SimpleRng;
use crate::types::{GridPos, GRID_HEIGHT, GRID_WIDTH};

/// Random probes before giving up and scanning the grid in order.
const MAX_PLACEMENT_PROBES: u32 = 4 * (GRID_WIDTH as u32) * (GRID_HEIGHT as u32);

#[derive(Debug, Clone)]
pub struct Food {
    position: GridPos,
}

impl Food {
    /// Place a new food item on a cell not in `excluded`.
    ///
    /// Returns `None` only when `excluded` covers the whole grid.
    pub fn spawn(rng: &mut SimpleRng, excluded: &[GridPos]) -> Option<Self> {
        let mut food = Self {
            position: GridPos::new(0, 0),
        };
        food.relocate(rng, excluded).then_some(food)
    }

    /// Place a food item on a chosen cell. The caller is responsible for
    /// keeping it off the snake.
    pub fn at(position: GridPos) -> Self {
        Self { position }
    }

    pub fn position(&self) -> GridPos {
        self.position
    }

    /// Move the food to a random cell outside `excluded`.
    ///
    /// Returns `false` when no free cell exists; the position is left
    /// unchanged in that case.
    pub fn relocate(&mut self, rng: &mut SimpleRng, excluded: &[GridPos]) -> bool {
        for _ in 0..MAX_PLACEMENT_PROBES {
            let candidate = GridPos::new(
                rng.next_range(GRID_WIDTH as u32) as i16,
                rng.next_range(GRID_HEIGHT as u32) as i16,
            );
            if !excluded.contains(&candidate) {
                self.position = candidate;
                return true;
            }
        }

        // Board is nearly full; take the first free cell in scan order.
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                let candidate = GridPos::new(x, y);
                if !excluded.contains(&candidate) {
                    self.position = candidate;
                    return true;
                }
            }
        }

        false
    }
}
