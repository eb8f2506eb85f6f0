use super::events::RoverEvent;
use super::types::{Direction, MoveOutcome, Position, RoverError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read model a view builds from the rover event stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoverTrackingProjection {
    pub rover_id: String,
    pub position: Position,
    pub direction: Direction,
    pub trail: Vec<Position>,
    pub obstacle_count: usize,
    pub commands_applied: usize,
    pub blocked_moves: usize,
    pub last_error: Option<RoverError>,
    pub last_updated: DateTime<Utc>,
}

impl RoverTrackingProjection {
    pub fn new(rover_id: impl Into<String>) -> Self {
        Self {
            rover_id: rover_id.into(),
            position: Position::ORIGIN,
            direction: Direction::North,
            trail: vec![Position::ORIGIN],
            obstacle_count: 0,
            commands_applied: 0,
            blocked_moves: 0,
            last_error: None,
            last_updated: Utc::now(),
        }
    }

    pub fn handle(&mut self, event: &RoverEvent) {
        match event {
            RoverEvent::SessionStarted { rover_id, timestamp, .. } => {
                *self = Self::new(rover_id.clone());
                self.last_updated = *timestamp;
            }
            RoverEvent::CommandApplied {
                outcome,
                position,
                direction,
                error,
                timestamp,
                ..
            } => {
                self.commands_applied += 1;
                self.position = *position;
                self.direction = *direction;
                self.last_error = error.clone();
                match outcome {
                    MoveOutcome::Moved { to } if !self.trail.contains(to) => self.trail.push(*to),
                    MoveOutcome::Blocked { .. } => self.blocked_moves += 1,
                    _ => {}
                }
                self.last_updated = *timestamp;
            }
            RoverEvent::ObstaclesReplaced { obstacles, timestamp, .. } => {
                self.obstacle_count = obstacles.len();
                self.last_updated = *timestamp;
            }
            RoverEvent::RoverReset { position, direction, timestamp, .. } => {
                self.position = *position;
                self.direction = *direction;
                self.trail = vec![*position];
                self.obstacle_count = 0;
                self.commands_applied = 0;
                self.blocked_moves = 0;
                self.last_error = None;
                self.last_updated = *timestamp;
            }
            RoverEvent::ErrorCleared { timestamp, .. } => {
                self.last_error = None;
                self.last_updated = *timestamp;
            }
        }
    }
}
