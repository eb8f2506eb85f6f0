use super::events::RoverEvent;
use super::state::RoverState;
use super::types::{GridSize, MoveOutcome, Position, RoverInit};
use crate::common::{AggregateRoot, DomainError, DomainEvent, DomainResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One simulation session: the engine state plus the events that produced it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rover {
    pub id: String,
    state: RoverState,
    pub version: u64,
    #[serde(skip)]
    uncommitted_events: Vec<RoverEvent>,
}

impl Rover {
    pub fn new(id: String, grid_size: GridSize) -> Self {
        let mut rover = Self {
            id: id.clone(),
            state: RoverState::new(grid_size),
            version: 0,
            uncommitted_events: Vec::new(),
        };

        rover.record(RoverEvent::SessionStarted {
            rover_id: id,
            grid_size,
            timestamp: chrono::Utc::now(),
        });
        rover
    }

    /// Starts a session with a fresh random id.
    pub fn start(grid_size: GridSize) -> Self {
        Self::new(Uuid::new_v4().to_string(), grid_size)
    }

    pub fn state(&self) -> &RoverState {
        &self.state
    }

    pub fn move_rover(&mut self, command: &str) -> MoveOutcome {
        let outcome = self.state.move_rover(command);

        self.record(RoverEvent::CommandApplied {
            rover_id: self.id.clone(),
            command: command.to_string(),
            outcome,
            position: self.state.position(),
            direction: self.state.direction(),
            error: self.state.error().cloned(),
            timestamp: chrono::Utc::now(),
        });
        outcome
    }

    pub fn set_obstacles(&mut self, obstacles: Vec<Position>) {
        self.state.set_obstacles(obstacles.clone());

        self.record(RoverEvent::ObstaclesReplaced {
            rover_id: self.id.clone(),
            obstacles,
            timestamp: chrono::Utc::now(),
        });
    }

    pub fn reset(&mut self, init: Option<RoverInit>) {
        self.state.reset(init);

        self.record(RoverEvent::RoverReset {
            rover_id: self.id.clone(),
            position: self.state.position(),
            direction: self.state.direction(),
            timestamp: chrono::Utc::now(),
        });
    }

    pub fn clear_error(&mut self) {
        self.state.clear_error();

        self.record(RoverEvent::ErrorCleared {
            rover_id: self.id.clone(),
            timestamp: chrono::Utc::now(),
        });
    }

    fn record(&mut self, event: RoverEvent) {
        self.version += 1;
        self.add_event(event);
    }
}

impl AggregateRoot for Rover {
    type Event = RoverEvent;

    fn aggregate_id(&self) -> &str {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) -> DomainResult<()> {
        if !matches!(event, RoverEvent::SessionStarted { .. }) && event.aggregate_id() != self.id {
            return Err(DomainError::AggregateMismatch {
                expected: self.id.clone(),
                actual: event.aggregate_id().to_string(),
            });
        }

        match event {
            RoverEvent::SessionStarted { rover_id, grid_size, .. } => {
                self.id = rover_id.clone();
                self.state = RoverState::new(*grid_size);
            }
            RoverEvent::CommandApplied { command, .. } => {
                self.state.move_rover(command);
            }
            RoverEvent::ObstaclesReplaced { obstacles, .. } => {
                self.state.set_obstacles(obstacles.clone());
            }
            RoverEvent::RoverReset { position, direction, .. } => {
                self.state.reset(Some(RoverInit::new(*position, *direction)));
            }
            RoverEvent::ErrorCleared { .. } => {
                self.state.clear_error();
            }
        }
        self.version += 1;
        Ok(())
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn mark_events_as_committed(&mut self) {
        self.uncommitted_events.clear();
    }

    fn add_event(&mut self, event: Self::Event) {
        self.uncommitted_events.push(event);
    }
}
