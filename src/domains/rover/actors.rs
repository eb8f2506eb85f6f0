use super::events::RoverEvent;
use tokio::sync::mpsc;

/// Forwards recorded rover events to whoever renders or tracks them.
pub struct RoverCommandActor {
    event_sender: mpsc::Sender<RoverEvent>,
}

impl RoverCommandActor {
    pub fn new(event_sender: mpsc::Sender<RoverEvent>) -> Self {
        Self { event_sender }
    }

    pub async fn publish(&self, events: Vec<RoverEvent>) -> Result<(), String> {
        for event in events {
            self.event_sender
                .send(event)
                .await
                .map_err(|e| format!("Failed to send event: {}", e))?;
        }
        Ok(())
    }
}
