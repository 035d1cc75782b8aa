//! Core types shared across the application.
//! This module contains pure data types with no external dependencies.

/// Window geometry inherited from the reference game. The playfield is the
/// window divided into fixed-size cells.
pub const WINDOW_WIDTH: i16 = 800;
pub const WINDOW_HEIGHT: i16 = 600;
pub const CELL_SIZE: i16 = 20;

/// Playfield dimensions in cells.
pub const GRID_WIDTH: i16 = WINDOW_WIDTH / CELL_SIZE;
pub const GRID_HEIGHT: i16 = WINDOW_HEIGHT / CELL_SIZE;

/// Points awarded per food item.
pub const FOOD_POINTS: u32 = 10;
/// Score interval at which the tick rate increases by one.
pub const SPEED_STEP_POINTS: u32 = 50;
/// Starting and maximum tick rates (ticks per second).
pub const BASE_SPEED: u32 = 10;
pub const MAX_SPEED: u32 = 20;

/// A playfield coordinate. Signed so a candidate head position one step off
/// the grid can be represented before the bounds check rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: i16,
    pub y: i16,
}

impl GridPos {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Whether this coordinate lies on the playfield.
    pub fn in_bounds(&self) -> bool {
        self.x >= 0 && self.x < GRID_WIDTH && self.y >= 0 && self.y < GRID_HEIGHT
    }
}

/// The snake's heading, one of the four unit vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit-vector delta in grid coordinates (y grows downward).
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Discrete events decoded from the keyboard byte stream.
///
/// `Space` is context-dependent (restart after a lost round, ignored while
/// playing) and is resolved by the game loop, not the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Turn(Direction),
    Space,
    Escape,
    Quit,
}

/// Semantic tag for one display cell. The simulation and view set kinds;
/// only the renderer maps a kind to a glyph and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellKind {
    #[default]
    Empty,
    SnakeBody,
    Food,
    Highlight,
}
