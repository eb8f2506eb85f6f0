use super::types::{Command, Direction, GridSize, MoveOutcome, Position, RoverError, RoverInit};
use serde::{Deserialize, Serialize};

/// Canonical rover/grid state and the transitions that act on it.
///
/// Every operation is total: bad input is recorded in `error` instead of
/// being returned, so callers never have to handle a failure path. The
/// engine performs no bounds or duplicate checks on obstacles or reset
/// positions; see `validation` for the checks owners run before calling in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverState {
    grid_size: GridSize,
    position: Position,
    direction: Direction,
    obstacles: Vec<Position>,
    command_history: Vec<String>,
    trail: Vec<Position>,
    error: Option<RoverError>,
}

impl RoverState {
    pub fn new(grid_size: GridSize) -> Self {
        Self {
            grid_size,
            position: Position::ORIGIN,
            direction: Direction::North,
            obstacles: Vec::new(),
            command_history: Vec::new(),
            trail: vec![Position::ORIGIN],
            error: None,
        }
    }

    pub fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn obstacles(&self) -> &[Position] {
        &self.obstacles
    }

    pub fn command_history(&self) -> &[String] {
        &self.command_history
    }

    pub fn trail(&self) -> &[Position] {
        &self.trail
    }

    pub fn error(&self) -> Option<&RoverError> {
        self.error.as_ref()
    }

    pub fn has_obstacle_at(&self, position: &Position) -> bool {
        self.obstacles.contains(position)
    }

    pub fn is_on_trail(&self, position: &Position) -> bool {
        self.trail.contains(position)
    }

    /// Applies one command token. The token is always appended to the
    /// history, even when it is rejected.
    pub fn move_rover(&mut self, token: &str) -> MoveOutcome {
        self.error = None;
        self.command_history.push(token.to_string());

        let Some(command) = Command::parse(token) else {
            self.error = Some(RoverError::InvalidCommand(token.to_string()));
            return MoveOutcome::Rejected;
        };

        match command {
            Command::Left => {
                self.direction = self.direction.left();
                MoveOutcome::Turned { to: self.direction }
            }
            Command::Right => {
                self.direction = self.direction.right();
                MoveOutcome::Turned { to: self.direction }
            }
            Command::Forward | Command::Backward => {
                let candidate = self.step_target(command);

                if self.has_obstacle_at(&candidate) {
                    self.error = Some(RoverError::ObstacleBlocked);
                    return MoveOutcome::Blocked { at: candidate };
                }

                self.position = candidate;
                if !self.is_on_trail(&candidate) {
                    self.trail.push(candidate);
                }
                MoveOutcome::Moved { to: candidate }
            }
        }
    }

    /// Replaces the obstacle set wholesale. Values are stored as given.
    pub fn set_obstacles(&mut self, obstacles: Vec<Position>) {
        self.obstacles = obstacles;
    }

    /// Full session restart. Grid size is kept.
    pub fn reset(&mut self, init: Option<RoverInit>) {
        let init = init.unwrap_or_default();
        self.position = init.position;
        self.direction = init.direction;
        self.obstacles.clear();
        self.error = None;
        self.command_history.clear();
        self.trail = vec![init.position];
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    fn step_target(&self, command: Command) -> Position {
        let (dx, dy) = self.direction.delta();
        let sign: i64 = if command == Command::Backward { -1 } else { 1 };
        self.grid_size.wrap(
            self.position.x as i64 + dx as i64 * sign,
            self.position.y as i64 + dy as i64 * sign,
        )
    }
}

impl Default for RoverState {
    fn default() -> Self {
        Self::new(GridSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_at(width: u32, height: u32, x: i32, y: i32, direction: Direction) -> RoverState {
        let mut state = RoverState::new(GridSize::new(width, height).unwrap());
        state.reset(Some(RoverInit::new(Position::new(x, y), direction)));
        state
    }

    #[test]
    fn fresh_state_matches_session_defaults() {
        let state = RoverState::default();
        assert_eq!(state.grid_size(), GridSize::new(15, 15).unwrap());
        assert_eq!(state.position(), Position::ORIGIN);
        assert_eq!(state.direction(), Direction::North);
        assert!(state.obstacles().is_empty());
        assert!(state.command_history().is_empty());
        assert_eq!(state.trail(), &[Position::ORIGIN]);
        assert!(state.error().is_none());
    }

    #[test]
    fn forward_east_off_the_edge_wraps_to_column_zero() {
        let mut state = state_at(15, 15, 14, 5, Direction::East);
        let outcome = state.move_rover("f");
        assert_eq!(outcome, MoveOutcome::Moved { to: Position::new(0, 5) });
        assert_eq!(state.position(), Position::new(0, 5));
    }

    #[test]
    fn forward_north_from_top_row_wraps_to_bottom() {
        let mut state = RoverState::default();
        state.move_rover("f");
        assert_eq!(state.position(), Position::new(0, 14));
    }

    #[test]
    fn backward_moves_against_heading() {
        let mut state = state_at(5, 5, 2, 2, Direction::North);
        state.move_rover("b");
        assert_eq!(state.position(), Position::new(2, 3));

        let mut state = state_at(5, 5, 0, 2, Direction::East);
        state.move_rover("b");
        assert_eq!(state.position(), Position::new(4, 2));

        let mut state = state_at(5, 5, 2, 2, Direction::West);
        state.move_rover("b");
        assert_eq!(state.position(), Position::new(3, 2));
    }

    #[test]
    fn full_lap_returns_to_start() {
        let mut state = state_at(7, 4, 3, 1, Direction::East);
        for _ in 0..7 {
            state.move_rover("f");
        }
        assert_eq!(state.position(), Position::new(3, 1));

        state.move_rover("r");
        for _ in 0..4 {
            state.move_rover("f");
        }
        assert_eq!(state.position(), Position::new(3, 1));
    }

    #[test]
    fn four_turns_restore_heading() {
        for start in Direction::ALL {
            let mut state = state_at(5, 5, 0, 0, start);
            for _ in 0..4 {
                state.move_rover("r");
            }
            assert_eq!(state.direction(), start);
            for _ in 0..4 {
                state.move_rover("l");
            }
            assert_eq!(state.direction(), start);
            state.move_rover("r");
            state.move_rover("l");
            assert_eq!(state.direction(), start);
        }
    }

    #[test]
    fn turning_does_not_move_or_touch_trail() {
        let mut state = state_at(5, 5, 1, 1, Direction::North);
        let outcome = state.move_rover("r");
        assert_eq!(outcome, MoveOutcome::Turned { to: Direction::East });
        assert_eq!(state.position(), Position::new(1, 1));
        assert_eq!(state.trail(), &[Position::new(1, 1)]);
    }

    #[test]
    fn obstacle_blocks_only_the_exact_cell() {
        let mut state = state_at(15, 15, 3, 2, Direction::South);
        state.set_obstacles(vec![Position::new(3, 3)]);

        let outcome = state.move_rover("f");
        assert_eq!(outcome, MoveOutcome::Blocked { at: Position::new(3, 3) });
        assert_eq!(state.error(), Some(&RoverError::ObstacleBlocked));
        assert_eq!(state.position(), Position::new(3, 2));
        assert_eq!(state.trail(), &[Position::new(3, 2)]);

        let mut state = state_at(15, 15, 3, 2, Direction::North);
        state.set_obstacles(vec![Position::new(3, 3)]);
        state.move_rover("f");
        assert!(state.error().is_none());
        assert_eq!(state.position(), Position::new(3, 1));
    }

    #[test]
    fn obstacle_check_uses_wrapped_target() {
        let mut state = RoverState::default();
        state.set_obstacles(vec![Position::new(0, 14)]);
        state.move_rover("f");
        assert_eq!(state.error(), Some(&RoverError::ObstacleBlocked));
        assert_eq!(state.position(), Position::ORIGIN);
    }

    #[test]
    fn invalid_token_is_recorded_and_reported() {
        let mut state = RoverState::default();
        let outcome = state.move_rover("x");
        assert_eq!(outcome, MoveOutcome::Rejected);
        assert_eq!(
            state.error().map(ToString::to_string).as_deref(),
            Some("Invalid command: x")
        );
        assert_eq!(state.command_history(), &["x".to_string()]);
        assert_eq!(state.position(), Position::ORIGIN);
        assert_eq!(state.direction(), Direction::North);
    }

    #[test]
    fn upper_case_token_is_invalid_for_the_engine() {
        let mut state = RoverState::default();
        state.move_rover("F");
        assert_eq!(state.error(), Some(&RoverError::InvalidCommand("F".into())));
    }

    #[test]
    fn next_move_clears_previous_error() {
        let mut state = RoverState::default();
        state.move_rover("z");
        assert!(state.error().is_some());
        state.move_rover("r");
        assert!(state.error().is_none());
    }

    #[test]
    fn history_keeps_every_token_in_order() {
        let mut state = RoverState::default();
        let tokens = ["f", "?", "r", "forward", "b", ""];
        for token in tokens {
            state.move_rover(token);
        }
        assert_eq!(state.command_history(), &tokens.map(String::from));
    }

    #[test]
    fn trail_contains_each_visited_cell_once() {
        let mut state = state_at(5, 5, 2, 2, Direction::East);
        for token in ["f", "b", "f", "b", "f"] {
            state.move_rover(token);
        }
        assert_eq!(state.trail(), &[Position::new(2, 2), Position::new(3, 2)]);
    }

    #[test]
    fn reset_restarts_everything_but_grid() {
        let mut state = RoverState::new(GridSize::new(8, 6).unwrap());
        state.set_obstacles(vec![Position::new(4, 4)]);
        for token in ["r", "f", "f", "q"] {
            state.move_rover(token);
        }

        state.reset(None);
        assert_eq!(state.grid_size(), GridSize::new(8, 6).unwrap());
        assert_eq!(state.position(), Position::ORIGIN);
        assert_eq!(state.direction(), Direction::North);
        assert!(state.obstacles().is_empty());
        assert!(state.command_history().is_empty());
        assert_eq!(state.trail(), &[Position::ORIGIN]);
        assert!(state.error().is_none());

        state.reset(Some(RoverInit::new(Position::new(3, 2), Direction::West)));
        assert_eq!(state.position(), Position::new(3, 2));
        assert_eq!(state.direction(), Direction::West);
        assert_eq!(state.trail(), &[Position::new(3, 2)]);
    }

    #[test]
    fn set_obstacles_leaves_other_fields_alone() {
        let mut state = state_at(5, 5, 1, 1, Direction::South);
        state.move_rover("f");
        let before = state.clone();

        state.set_obstacles(vec![Position::new(4, 4), Position::new(9, 9)]);
        assert_eq!(state.obstacles(), &[Position::new(4, 4), Position::new(9, 9)]);
        assert_eq!(state.position(), before.position());
        assert_eq!(state.trail(), before.trail());
        assert_eq!(state.command_history(), before.command_history());
    }

    #[test]
    fn clear_error_touches_nothing_else() {
        let mut state = RoverState::default();
        state.move_rover("k");
        let mut expected = state.clone();
        state.clear_error();
        assert!(state.error().is_none());
        expected.error = None;
        assert_eq!(state, expected);
    }

    #[test]
    fn end_to_end_scenario_on_small_grid() {
        let mut state = state_at(5, 5, 2, 2, Direction::North);
        state.set_obstacles(vec![Position::new(2, 1)]);

        state.move_rover("f");
        assert_eq!(state.error(), Some(&RoverError::ObstacleBlocked));
        assert_eq!(state.position(), Position::new(2, 2));

        state.move_rover("f");
        assert_eq!(state.error(), Some(&RoverError::ObstacleBlocked));
        assert_eq!(state.position(), Position::new(2, 2));

        state.move_rover("r");
        assert_eq!(state.direction(), Direction::East);
        assert_eq!(state.position(), Position::new(2, 2));

        state.move_rover("f");
        assert_eq!(state.position(), Position::new(3, 2));

        state.move_rover("b");
        assert_eq!(state.position(), Position::new(2, 2));

        state.move_rover("l");
        assert_eq!(state.direction(), Direction::North);

        assert!(state.error().is_none());
        assert_eq!(state.command_history(), &["f", "f", "r", "f", "b", "l"].map(String::from));
        assert_eq!(state.trail(), &[Position::new(2, 2), Position::new(3, 2)]);
    }
}
