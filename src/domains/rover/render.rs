use super::state::RoverState;
use super::types::{Direction, Position};

pub const OBSTACLE_GLYPH: char = '#';
pub const TRAIL_GLYPH: char = '*';
pub const EMPTY_GLYPH: char = '.';

pub fn rover_glyph(direction: Direction) -> char {
    match direction {
        Direction::North => '^',
        Direction::East => '>',
        Direction::South => 'v',
        Direction::West => '<',
    }
}

/// Draws the grid one row per line, top row (y = 0) first.
/// Rover wins over obstacle, obstacle over trail.
pub fn render_grid(state: &RoverState) -> String {
    let grid = state.grid_size();
    let capacity = (grid.width() as usize + 1).checked_mul(grid.height() as usize);
    let mut out = String::with_capacity(capacity.unwrap_or_default());

    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let cell = Position::new(x, y);
            let glyph = if cell == state.position() {
                rover_glyph(state.direction())
            } else if state.has_obstacle_at(&cell) {
                OBSTACLE_GLYPH
            } else if state.is_on_trail(&cell) {
                TRAIL_GLYPH
            } else {
                EMPTY_GLYPH
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

pub fn status_line(state: &RoverState) -> String {
    format!("{} {}", state.position(), state.direction())
}

pub fn history_line(state: &RoverState) -> String {
    if state.command_history().is_empty() {
        "No commands yet".to_string()
    } else {
        state.command_history().join(", ")
    }
}
