//! Frame construction tests: game state to framebuffer.

use tui_snake::core::{Food, GameState};
use tui_snake::term::{Cell, GameView};
use tui_snake::types::{CellKind, GridPos, GRID_HEIGHT, GRID_WIDTH};

#[test]
fn frame_matches_grid_dimensions() {
    let state = GameState::new(1);
    let fb = GameView::new().render(&state);
    assert_eq!(fb.width(), GRID_WIDTH as u16);
    assert_eq!(fb.height(), GRID_HEIGHT as u16);
}

#[test]
fn every_snake_segment_is_drawn() {
    let mut state = GameState::new(1);

    // Grow a few segments by eating along the center row.
    for _ in 0..3 {
        let head = state.snake.head();
        state.food = Food::at(GridPos::new(head.x + 1, head.y));
        state.update();
    }
    // Park the food below the score row so the overlay text cannot hide it.
    state.food = Food::at(GridPos::new(0, 1));
    state.update();
    assert!(state.snake.len() > 1);

    let fb = GameView::new().render(&state);
    for segment in state.snake.segments() {
        assert_eq!(
            fb.get(segment.x as u16, segment.y as u16),
            Some(Cell::Kind(CellKind::SnakeBody)),
            "segment {segment:?} missing from frame"
        );
    }
    assert_eq!(fb.get(0, 1), Some(Cell::Kind(CellKind::Food)));
}

#[test]
fn score_line_tracks_the_score() {
    let mut state = GameState::new(1);
    let head = state.snake.head();
    state.food = Food::at(GridPos::new(head.x + 1, head.y));
    state.update();
    assert_eq!(state.score, 10);

    let fb = GameView::new().render(&state);
    let expected: Vec<char> = "Score: 10".chars().collect();
    for (i, ch) in expected.iter().enumerate() {
        assert_eq!(fb.get(i as u16, 0), Some(Cell::Text(*ch)));
    }
}

#[test]
fn game_over_overlay_is_centered_and_in_bounds() {
    let mut state = GameState::new(1);
    state.food = Food::at(GridPos::new(0, 0));
    for _ in 0..GRID_WIDTH {
        state.update();
    }
    assert!(state.game_over);

    let fb = GameView::new().render(&state);
    let mid = fb.height() / 2;

    let banner = "GAME OVER";
    let banner_x = (fb.width() - banner.len() as u16) / 2;
    for (i, ch) in banner.chars().enumerate() {
        assert_eq!(fb.get(banner_x + i as u16, mid - 1), Some(Cell::Text(ch)));
    }

    let prompt = "Press SPACE to restart or ESC to quit";
    let prompt_x = (fb.width() - prompt.len() as u16) / 2;
    for (i, ch) in prompt.chars().enumerate() {
        assert_eq!(fb.get(prompt_x + i as u16, mid + 1), Some(Cell::Text(ch)));
    }
}

#[test]
fn crash_site_is_highlighted_after_game_over() {
    let mut state = GameState::new(1);
    state.food = Food::at(GridPos::new(0, 0));
    for _ in 0..GRID_WIDTH {
        state.update();
    }
    assert!(state.game_over);

    let fb = GameView::new().render(&state);
    let head = state.snake.head();
    assert_eq!(
        fb.get(head.x as u16, head.y as u16),
        Some(Cell::Kind(CellKind::Highlight))
    );
}

#[test]
fn restart_clears_the_overlay() {
    let mut state = GameState::new(1);
    state.food = Food::at(GridPos::new(0, 0));
    for _ in 0..GRID_WIDTH {
        state.update();
    }
    assert!(state.game_over);
    state.reset();
    // Pin the food so the banner cell check cannot collide with it.
    state.food = Food::at(GridPos::new(0, 1));

    let fb = GameView::new().render(&state);
    let mid = fb.height() / 2;
    let banner_x = (fb.width() - "GAME OVER".len() as u16) / 2;
    assert_eq!(fb.get(banner_x, mid - 1), Some(Cell::Blank));
}
