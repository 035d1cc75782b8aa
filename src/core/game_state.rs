//! Game state module - the round state machine.
//!
//! Owns the snake, the food, score, speed and the game-over flag. The run
//! loop feeds decoded input events in, steps the simulation once per tick,
//! and reads the state back out for rendering. Two states exist: playing and
//! game over; restart rebuilds the playing state atomically.

use crate::core::{Food, SimpleRng, Snake};
use crate::types::{InputEvent, BASE_SPEED, FOOD_POINTS, MAX_SPEED, SPEED_STEP_POINTS};

#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    /// Current tick rate in ticks per second.
    pub speed: u32,
    pub game_over: bool,
    rng: SimpleRng,
}

impl GameState {
    /// Fresh round: length-1 snake at center, random food off the snake,
    /// score 0, base speed.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let snake = Snake::new();
        // A length-1 snake can never cover the grid, so spawn succeeds.
        let food = Food::spawn(&mut rng, snake.segments())
            .unwrap_or_else(|| unreachable!("grid larger than initial snake"));

        Self {
            snake,
            food,
            score: 0,
            speed: BASE_SPEED,
            game_over: false,
            rng,
        }
    }

    /// Apply one decoded input event.
    ///
    /// Returns `false` when the loop should terminate. Turns are ignored
    /// once the round is over; space is ignored while it is running.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Quit | InputEvent::Escape => return false,
            InputEvent::Space => {
                if self.game_over {
                    self.reset();
                }
            }
            InputEvent::Turn(direction) => {
                if !self.game_over {
                    self.snake.change_direction(direction);
                }
            }
        }
        true
    }

    /// Advance the simulation by one tick. A no-op once the round is over.
    pub fn update(&mut self) {
        if self.game_over {
            return;
        }

        if !self.snake.advance() {
            self.game_over = true;
            return;
        }

        if self.snake.head() == self.food.position() {
            self.snake.grow();
            self.score += FOOD_POINTS;

            if !self.food.relocate(&mut self.rng, self.snake.segments()) {
                // Board full: nothing left to eat, the round is over.
                self.game_over = true;
                return;
            }

            if self.score % SPEED_STEP_POINTS == 0 && self.speed < MAX_SPEED {
                self.speed += 1;
            }
        }
    }

    /// Rebuild the playing state in place. The RNG carries over so restarts
    /// do not replay the same food sequence.
    pub fn reset(&mut self) {
        self.snake = Snake::new();
        self.food = Food::spawn(&mut self.rng, self.snake.segments())
            .unwrap_or_else(|| unreachable!("grid larger than initial snake"));
        self.score = 0;
        self.speed = BASE_SPEED;
        self.game_over = false;
    }
}
