use crate::common::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_GRID_WIDTH: u32 = 15;
pub const DEFAULT_GRID_HEIGHT: u32 = 15;
/// Largest side length; positions are `i32`.
pub const MAX_GRID_SIDE: u32 = i32::MAX as u32;

/// Dimensions of the toroidal grid. Both sides are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GridSizeRepr", into = "GridSizeRepr")]
pub struct GridSize {
    width: u32,
    height: u32,
}

#[derive(Serialize, Deserialize)]
struct GridSizeRepr {
    width: u32,
    height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> DomainResult<Self> {
        if width == 0 || height == 0 || width > MAX_GRID_SIDE || height > MAX_GRID_SIDE {
            return Err(DomainError::InvalidGridSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, position: &Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as i64) < self.width as i64
            && (position.y as i64) < self.height as i64
    }

    /// Brings arbitrary coordinates back onto the grid, re-entering from the
    /// opposite edge.
    pub fn wrap(&self, x: i64, y: i64) -> Position {
        Position {
            x: x.rem_euclid(self.width as i64) as i32,
            y: y.rem_euclid(self.height as i64) as i32,
        }
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

impl TryFrom<GridSizeRepr> for GridSize {
    type Error = DomainError;

    fn try_from(repr: GridSizeRepr) -> Result<Self, Self::Error> {
        GridSize::new(repr.width, repr.height)
    }
}

impl From<GridSize> for GridSizeRepr {
    fn from(size: GridSize) -> Self {
        Self {
            width: size.width,
            height: size.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Compass heading. Rotation is cyclic: right goes N -> E -> S -> W -> N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Unit step for forward motion. North is towards y = 0.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Direction {
    type Err = RoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Direction::North),
            "E" => Ok(Direction::East),
            "S" => Ok(Direction::South),
            "W" => Ok(Direction::West),
            other => Err(RoverError::UnexpectedDirection(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Forward,
    Backward,
    Left,
    Right,
}

impl Command {
    /// Only the exact lower-case tokens are accepted; callers normalize first.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "f" => Some(Command::Forward),
            "b" => Some(Command::Backward),
            "l" => Some(Command::Left),
            "r" => Some(Command::Right),
            _ => None,
        }
    }
}

/// Optional starting pose for a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoverInit {
    pub position: Position,
    pub direction: Direction,
}

impl RoverInit {
    pub fn new(position: Position, direction: Direction) -> Self {
        Self { position, direction }
    }
}

/// Errors the engine stores in its state rather than returning.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoverError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Obstacle detected! Movement stopped.")]
    ObstacleBlocked,

    #[error("Unexpected direction: {0}")]
    UnexpectedDirection(String),
}

/// What a single `move_rover` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Moved { to: Position },
    Turned { to: Direction },
    Blocked { at: Position },
    Rejected,
}

impl MoveOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, MoveOutcome::Blocked { .. })
    }
}
