//! Snake body and kinematics.
//!
//! The body is an ordered segment list with the head at index 0. Each tick
//! the head advances one cell along the heading; the tail pops unless a
//! growth is pending, so a plain move is a pure translation.

use crate::types::{Direction, GridPos, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone)]
pub struct Snake {
    segments: Vec<GridPos>,
    direction: Direction,
    grow_pending: bool,
}

impl Snake {
    /// A length-1 snake at the grid center, heading right.
    pub fn new() -> Self {
        Self {
            segments: vec![GridPos::new(GRID_WIDTH / 2, GRID_HEIGHT / 2)],
            direction: Direction::Right,
            grow_pending: false,
        }
    }

    /// Advance one cell along the current heading.
    ///
    /// Returns `false` when the candidate head leaves the grid or lands on
    /// any segment after index 0 of the pre-move body. The about-to-vacate
    /// tail still counts as occupied; this matches the reference rule and is
    /// deliberate. A failed advance leaves the body untouched, so the round
    /// ends with the snake frozen in place.
    pub fn advance(&mut self) -> bool {
        let (dx, dy) = self.direction.delta();
        let head = self.segments[0];
        let new_head = GridPos::new(head.x + dx, head.y + dy);

        if !new_head.in_bounds() {
            return false;
        }
        if self.segments[1..].contains(&new_head) {
            return false;
        }

        self.segments.insert(0, new_head);
        if self.grow_pending {
            self.grow_pending = false;
        } else {
            self.segments.pop();
        }
        true
    }

    /// Change heading, rejecting an exact reversal. Takes effect on the next
    /// `advance`.
    pub fn change_direction(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.direction = direction;
        }
    }

    /// Defer a one-segment growth to the next `advance`.
    pub fn grow(&mut self) {
        self.grow_pending = true;
    }

    pub fn head(&self) -> GridPos {
        self.segments[0]
    }

    pub fn segments(&self) -> &[GridPos] {
        &self.segments
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: length >= 1 is an invariant of the body.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Build a snake with an explicit body, for collision and end-of-board
    /// setups the public API cannot reach quickly.
    #[cfg(test)]
    pub(crate) fn from_segments(segments: Vec<GridPos>, direction: Direction) -> Self {
        assert!(!segments.is_empty());
        Self {
            segments,
            direction,
            grow_pending: false,
        }
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}
