//! Framebuffer of semantically-tagged display cells.

use crate::types::CellKind;

/// One display cell: either a simulation cell kind or a literal overlay
/// character (score line, banners). Which glyph and color a kind becomes is
/// decided by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Blank,
    Kind(CellKind),
    Text(char),
}

/// 2D grid of display cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Set one cell; out of bounds is a no-op.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn plot(&mut self, x: u16, y: u16, kind: CellKind) {
        self.set(x, y, Cell::Kind(kind));
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Write a string into one row, clipping at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.set(cx, y, Cell::Text(ch));
            cx += 1;
        }
    }

    /// Write a string horizontally centered in one row. Text wider than the
    /// buffer starts at column 0 and clips; it never writes out of bounds.
    pub fn put_str_centered(&mut self, y: u16, s: &str) {
        let text_w = s.chars().count().min(u16::MAX as usize) as u16;
        let x = self.width.saturating_sub(text_w) / 2;
        self.put_str(x, y, s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_blank() {
        let fb = FrameBuffer::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(fb.get(x, y), Some(Cell::Blank));
            }
        }
    }

    #[test]
    fn set_out_of_bounds_is_a_noop() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.plot(4, 0, CellKind::Food);
        fb.plot(0, 3, CellKind::Food);
        assert_eq!(fb.get(4, 0), None);
        assert_eq!(fb.get(0, 3), None);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(fb.get(x, y), Some(Cell::Blank));
            }
        }
    }

    #[test]
    fn clear_resets_all_cells() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.plot(1, 1, CellKind::SnakeBody);
        fb.clear();
        assert_eq!(fb.get(1, 1), Some(Cell::Blank));
    }

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "abcdef");
        assert_eq!(fb.get(2, 0), Some(Cell::Text('a')));
        assert_eq!(fb.get(3, 0), Some(Cell::Text('b')));
    }

    #[test]
    fn centered_text_wider_than_buffer_starts_at_zero_and_clips() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str_centered(0, "abcdef");
        assert_eq!(fb.get(0, 0), Some(Cell::Text('a')));
        assert_eq!(fb.get(3, 0), Some(Cell::Text('d')));
    }

    #[test]
    fn centered_text_is_centered() {
        let mut fb = FrameBuffer::new(10, 1);
        fb.put_str_centered(0, "ab");
        assert_eq!(fb.get(4, 0), Some(Cell::Text('a')));
        assert_eq!(fb.get(5, 0), Some(Cell::Text('b')));
        assert_eq!(fb.get(3, 0), Some(Cell::Blank));
        assert_eq!(fb.get(6, 0), Some(Cell::Blank));
    }
}
