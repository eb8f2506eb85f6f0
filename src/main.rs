use rover_sim::adapters::outbound::{init_combined_logger, init_console_logger};
use rover_sim::application::RoverService;
use rover_sim::domains::rover::{
    history_line, key_commands, render_grid, status_line, Direction, Position, RoverCommandActor,
    RoverTrackingProjection,
};
use rover_sim::Config;
use std::error::Error;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
keys: f (forward), b (backward), l (rotate left), r (rotate right); several per line are applied in order
obstacle X Y   add an obstacle
clear          remove all obstacles
place X Y D    restart at (X, Y) facing N/E/S/W
reset          restart at (0, 0) facing N
dismiss        clear the current error
json           print the state as JSON
quit           exit";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::var("ROVER_CONFIG").unwrap_or_else(|_| "rover.toml".to_string());
    let config = if Path::new(&config_path).exists() {
        let config = Config::from_file(&config_path).await?;
        info!("Configuration loaded from {}", config_path);
        config
    } else {
        info!("No {} found, using defaults", config_path);
        Config::default()
    };

    let logger = match &config.logging.file {
        Some(path) => init_combined_logger(path, config.logging.console),
        None => init_console_logger(),
    };

    let (event_sender, mut event_receiver) = mpsc::channel(100);
    let mut service = RoverService::from_config(&config.simulation, logger)?
        .with_command_actor(RoverCommandActor::new(event_sender));

    let rover_id = service.rover_id().to_string();
    let tracker = tokio::spawn(async move {
        let mut projection = RoverTrackingProjection::new(rover_id);
        while let Some(event) = event_receiver.recv().await {
            projection.handle(&event);
            debug!(
                commands = projection.commands_applied,
                blocked = projection.blocked_moves,
                trail = projection.trail.len(),
                "tracking projection updated"
            );
        }
        projection
    });

    println!("{}", HELP);
    print_view(&service);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["help"] => println!("{}", HELP),
            ["reset"] => service.reset(),
            ["dismiss"] => service.dismiss_error(),
            ["clear"] => service.clear_obstacles(),
            ["json"] => println!("{}", service.snapshot_json()?),
            ["obstacle", x, y] => match parse_position(x, y) {
                Some(position) => {
                    if let Err(e) = service.add_obstacle(position) {
                        println!("{}", e);
                    }
                }
                None => println!("Coordinates must be integers"),
            },
            ["place", x, y, d] => match (parse_position(x, y), d.to_uppercase().parse::<Direction>()) {
                (Some(position), Ok(direction)) => {
                    if let Err(e) = service.place_rover(position, direction) {
                        println!("{}", e);
                    }
                }
                (None, _) => println!("Coordinates must be integers"),
                (_, Err(e)) => println!("{}", e),
            },
            [word] => match key_commands(word) {
                Some(keys) => {
                    service.submit_sequence(keys.iter().map(String::as_str));
                }
                None => println!("Unrecognized input, type 'help'"),
            },
            _ => println!("Unrecognized input, type 'help'"),
        }

        if let Err(e) = service.take_events().await {
            error!("Failed to publish rover events: {}", e);
        }
        print_view(&service);
    }

    drop(service);
    let projection = tracker.await?;
    info!(
        "Session {} ended after {} commands ({} blocked)",
        projection.rover_id, projection.commands_applied, projection.blocked_moves
    );

    Ok(())
}

fn parse_position(x: &str, y: &str) -> Option<Position> {
    Some(Position::new(x.parse().ok()?, y.parse().ok()?))
}

fn print_view(service: &RoverService) {
    let state = service.state();
    print!("{}", render_grid(state));
    println!("{}", status_line(state));
    if let Some(err) = state.error() {
        println!("! {}", err);
    }
    println!("Command History: {}", history_line(state));
}
