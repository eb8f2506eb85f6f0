use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Grid sides must be between 1 and {max}, got {width}x{height}", max = i32::MAX)]
    InvalidGridSize { width: u32, height: u32 },

    #[error("{subject} must be within grid (0-{max_x}, 0-{max_y})")]
    OutOfBounds {
        subject: &'static str,
        max_x: u32,
        max_y: u32,
    },

    #[error("An obstacle already exists at this position")]
    DuplicateObstacle { x: i32, y: i32 },

    #[error("Cannot place rover on an existing obstacle")]
    PlacementOnObstacle { x: i32, y: i32 },

    #[error("Event does not belong to aggregate {expected}: got {actual}")]
    AggregateMismatch { expected: String, actual: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Event channel error: {0}")]
    EventChannel(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] anyhow::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;
pub type ApplicationResult<T> = Result<T, ApplicationError>;
