use super::types::{Direction, GridSize, MoveOutcome, Position, RoverError};
use crate::common::DomainEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RoverEvent {
    SessionStarted {
        rover_id: String,
        grid_size: GridSize,
        timestamp: DateTime<Utc>,
    },
    CommandApplied {
        rover_id: String,
        command: String,
        outcome: MoveOutcome,
        position: Position,
        direction: Direction,
        error: Option<RoverError>,
        timestamp: DateTime<Utc>,
    },
    ObstaclesReplaced {
        rover_id: String,
        obstacles: Vec<Position>,
        timestamp: DateTime<Utc>,
    },
    RoverReset {
        rover_id: String,
        position: Position,
        direction: Direction,
        timestamp: DateTime<Utc>,
    },
    ErrorCleared {
        rover_id: String,
        timestamp: DateTime<Utc>,
    },
}

impl DomainEvent for RoverEvent {
    fn event_type(&self) -> &'static str {
        match self {
            RoverEvent::SessionStarted { .. } => "RoverSessionStarted",
            RoverEvent::CommandApplied { .. } => "RoverCommandApplied",
            RoverEvent::ObstaclesReplaced { .. } => "ObstaclesReplaced",
            RoverEvent::RoverReset { .. } => "RoverReset",
            RoverEvent::ErrorCleared { .. } => "RoverErrorCleared",
        }
    }

    fn aggregate_id(&self) -> &str {
        match self {
            RoverEvent::SessionStarted { rover_id, .. } => rover_id,
            RoverEvent::CommandApplied { rover_id, .. } => rover_id,
            RoverEvent::ObstaclesReplaced { rover_id, .. } => rover_id,
            RoverEvent::RoverReset { rover_id, .. } => rover_id,
            RoverEvent::ErrorCleared { rover_id, .. } => rover_id,
        }
    }

    fn event_version(&self) -> u64 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            RoverEvent::SessionStarted { timestamp, .. } => *timestamp,
            RoverEvent::CommandApplied { timestamp, .. } => *timestamp,
            RoverEvent::ObstaclesReplaced { timestamp, .. } => *timestamp,
            RoverEvent::RoverReset { timestamp, .. } => *timestamp,
            RoverEvent::ErrorCleared { timestamp, .. } => *timestamp,
        }
    }
}
