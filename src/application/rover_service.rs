use crate::common::{AggregateRoot, ApplicationError, ApplicationResult, DomainResult};
use crate::config::SimulationConfig;
use crate::domains::logger::DynLogger;
use crate::domains::rover::{
    normalize_command, validate_obstacle, validate_obstacles, validate_placement, Direction,
    GridSize, MoveOutcome, Position, Rover, RoverCommandActor, RoverEvent, RoverInit, RoverState,
};
use tracing::{debug, info, warn};

/// Single owner of a rover session. Collaborators submit commands and edits
/// here and read back `state()` snapshots; nothing else mutates the rover.
pub struct RoverService {
    rover: Rover,
    logger: DynLogger,
    command_actor: Option<RoverCommandActor>,
}

impl RoverService {
    pub fn new(grid_size: GridSize, logger: DynLogger) -> Self {
        let rover = Rover::start(grid_size);
        info!(rover_id = %rover.id, width = grid_size.width(), height = grid_size.height(), "rover session started");
        Self {
            rover,
            logger,
            command_actor: None,
        }
    }

    /// Builds a session from config, placing the rover at the configured start.
    pub fn from_config(config: &SimulationConfig, logger: DynLogger) -> ApplicationResult<Self> {
        let grid = config.grid_size()?;
        let mut service = Self::new(grid, logger);

        let start = config.start();
        if start != RoverInit::default() {
            service.place_rover(start.position, start.direction)?;
        }
        Ok(service)
    }

    pub fn with_command_actor(mut self, command_actor: RoverCommandActor) -> Self {
        self.command_actor = Some(command_actor);
        self
    }

    pub fn rover_id(&self) -> &str {
        &self.rover.id
    }

    pub fn state(&self) -> &RoverState {
        self.rover.state()
    }

    /// Normalizes one key or button token and applies it. Unknown tokens
    /// still go through so they land in the history.
    pub fn submit(&mut self, raw: &str) -> MoveOutcome {
        let command = normalize_command(raw);
        let outcome = self.rover.move_rover(&command);
        let state = self.rover.state();

        match outcome {
            MoveOutcome::Moved { to } => {
                debug!(command = %command, position = %to, "rover moved");
            }
            MoveOutcome::Turned { to } => {
                debug!(command = %command, direction = %to, "rover turned");
            }
            MoveOutcome::Blocked { at } => {
                warn!(command = %command, obstacle = %at, position = %state.position(), "movement blocked");
                self.logger.warn(&format!("Obstacle at {} blocked '{}'", at, command));
            }
            MoveOutcome::Rejected => {
                warn!(command = %command, "invalid command");
                self.logger.warn(&format!("Rejected command '{}'", command));
            }
        }
        outcome
    }

    pub fn submit_sequence<'a, I>(&mut self, tokens: I) -> Vec<MoveOutcome>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens.into_iter().map(|token| self.submit(token)).collect()
    }

    /// Validates and appends a single obstacle.
    pub fn add_obstacle(&mut self, position: Position) -> DomainResult<()> {
        let state = self.rover.state();
        validate_obstacle(state.grid_size(), state.obstacles(), &position)?;

        let mut obstacles = state.obstacles().to_vec();
        obstacles.push(position);
        self.rover.set_obstacles(obstacles);

        info!(obstacle = %position, "obstacle added");
        self.logger.info(&format!("Obstacle added at {}", position));
        Ok(())
    }

    /// Validates and replaces the whole obstacle set.
    pub fn set_obstacles(&mut self, obstacles: Vec<Position>) -> DomainResult<()> {
        validate_obstacles(self.rover.state().grid_size(), &obstacles)?;

        info!(count = obstacles.len(), "obstacles replaced");
        self.logger.info(&format!("Obstacles replaced ({} total)", obstacles.len()));
        self.rover.set_obstacles(obstacles);
        Ok(())
    }

    pub fn clear_obstacles(&mut self) {
        self.rover.set_obstacles(Vec::new());
        info!("obstacles cleared");
        self.logger.info("Obstacles cleared");
    }

    /// Validates a starting pose against the current grid and obstacles, then
    /// restarts the session there. The restart clears obstacles as any reset does.
    pub fn place_rover(&mut self, position: Position, direction: Direction) -> DomainResult<()> {
        let state = self.rover.state();
        validate_placement(state.grid_size(), state.obstacles(), &position)?;

        self.rover.reset(Some(RoverInit::new(position, direction)));
        info!(position = %position, direction = %direction, "rover placed");
        self.logger.info(&format!("Rover placed at {} facing {}", position, direction));
        Ok(())
    }

    pub fn reset(&mut self) {
        self.rover.reset(None);
        info!("rover reset");
        self.logger.info("Rover reset");
    }

    pub fn dismiss_error(&mut self) {
        if let Some(err) = self.rover.state().error() {
            debug!(error = %err, "error dismissed");
            self.logger.info(&format!("Dismissed: {}", err));
        }
        self.rover.clear_error();
    }

    pub fn snapshot_json(&self) -> ApplicationResult<String> {
        let json = serde_json::to_string(self.rover.state()).map_err(crate::common::DomainError::from)?;
        Ok(json)
    }

    /// Drains recorded events, forwarding them to the command actor if one is attached.
    pub async fn take_events(&mut self) -> ApplicationResult<Vec<RoverEvent>> {
        let events = self.rover.uncommitted_events().to_vec();
        self.rover.mark_events_as_committed();

        if let Some(actor) = &self.command_actor {
            actor
                .publish(events.clone())
                .await
                .map_err(ApplicationError::EventChannel)?;
        }
        Ok(events)
    }
}
