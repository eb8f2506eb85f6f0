// Checks an owner runs before handing obstacles or a starting pose to the
// engine. The engine itself stores whatever it receives.
use super::types::{Command, GridSize, Position};
use crate::common::{DomainError, DomainResult};

/// Lower-cases and trims a raw key or button token.
pub fn normalize_command(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Splits a typed word into movement keys. Returns `None` unless every
/// character is one of f/b/l/r after normalization, so stray words never
/// reach the rover.
pub fn key_commands(word: &str) -> Option<Vec<String>> {
    let keys: Vec<String> = word
        .trim()
        .chars()
        .map(|c| normalize_command(&c.to_string()))
        .collect();

    if keys.is_empty() || keys.iter().any(|key| Command::parse(key).is_none()) {
        return None;
    }
    Some(keys)
}

fn check_bounds(grid: GridSize, position: &Position, subject: &'static str) -> DomainResult<()> {
    if grid.contains(position) {
        return Ok(());
    }
    Err(DomainError::OutOfBounds {
        subject,
        max_x: grid.width() - 1,
        max_y: grid.height() - 1,
    })
}

pub fn validate_obstacle(grid: GridSize, obstacles: &[Position], candidate: &Position) -> DomainResult<()> {
    check_bounds(grid, candidate, "Obstacle")?;

    if obstacles.contains(candidate) {
        return Err(DomainError::DuplicateObstacle {
            x: candidate.x,
            y: candidate.y,
        });
    }
    Ok(())
}

/// Validates a whole obstacle list, rejecting out-of-range cells and repeats.
pub fn validate_obstacles(grid: GridSize, obstacles: &[Position]) -> DomainResult<()> {
    for (index, obstacle) in obstacles.iter().enumerate() {
        validate_obstacle(grid, &obstacles[..index], obstacle)?;
    }
    Ok(())
}

pub fn validate_placement(grid: GridSize, obstacles: &[Position], position: &Position) -> DomainResult<()> {
    check_bounds(grid, position, "Initial position")?;

    if obstacles.contains(position) {
        return Err(DomainError::PlacementOnObstacle {
            x: position.x,
            y: position.y,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridSize {
        GridSize::new(15, 15).unwrap()
    }

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize_command(" F "), "f");
        assert_eq!(normalize_command("R"), "r");
        assert_eq!(normalize_command("Xy"), "xy");
    }

    #[test]
    fn key_commands_accepts_only_movement_keys() {
        assert_eq!(
            key_commands("fFrB"),
            Some(vec!["f".to_string(), "f".to_string(), "r".to_string(), "b".to_string()])
        );
        assert_eq!(key_commands("l"), Some(vec!["l".to_string()]));
    }

    #[test]
    fn key_commands_rejects_words_with_other_characters() {
        assert_eq!(key_commands("obstacle"), None);
        assert_eq!(key_commands("fbx"), None);
        assert_eq!(key_commands(""), None);
    }

    #[test]
    fn obstacle_outside_grid_reports_range() {
        let err = validate_obstacle(grid(), &[], &Position::new(15, 3)).unwrap_err();
        assert_eq!(err.to_string(), "Obstacle must be within grid (0-14, 0-14)");

        assert!(validate_obstacle(grid(), &[], &Position::new(-1, 0)).is_err());
        assert!(validate_obstacle(grid(), &[], &Position::new(14, 14)).is_ok());
    }

    #[test]
    fn duplicate_obstacle_is_rejected() {
        let existing = [Position::new(3, 3)];
        let err = validate_obstacle(grid(), &existing, &Position::new(3, 3)).unwrap_err();
        assert_eq!(err.to_string(), "An obstacle already exists at this position");
    }

    #[test]
    fn obstacle_list_with_repeat_is_rejected() {
        let list = [Position::new(1, 1), Position::new(2, 2), Position::new(1, 1)];
        assert!(matches!(
            validate_obstacles(grid(), &list),
            Err(DomainError::DuplicateObstacle { x: 1, y: 1 })
        ));
        assert!(validate_obstacles(grid(), &list[..2]).is_ok());
    }

    #[test]
    fn placement_checks_bounds_and_obstacles() {
        let small = GridSize::new(5, 4).unwrap();
        let err = validate_placement(small, &[], &Position::new(2, 4)).unwrap_err();
        assert_eq!(err.to_string(), "Initial position must be within grid (0-4, 0-3)");

        let err = validate_placement(small, &[Position::new(2, 2)], &Position::new(2, 2)).unwrap_err();
        assert_eq!(err.to_string(), "Cannot place rover on an existing obstacle");

        assert!(validate_placement(small, &[Position::new(2, 2)], &Position::new(2, 3)).is_ok());
    }
}
