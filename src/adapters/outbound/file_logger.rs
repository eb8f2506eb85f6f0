use crate::domains::logger::{DomainLogger, FileLogger};
use chrono::Utc;
use std::sync::Arc;

struct BridgeLogger;

impl DomainLogger for BridgeLogger {
    fn info(&self, msg: &str) {
        log::info!("{} - {}", Utc::now().to_rfc3339(), msg);
    }

    fn warn(&self, msg: &str) {
        log::warn!("{} - {}", Utc::now().to_rfc3339(), msg);
    }

    fn error(&self, msg: &str) {
        log::error!("{} - {}", Utc::now().to_rfc3339(), msg);
    }
}

/// Initialize the rover session log file and return an injectable logger.
pub fn init_file_logger(path: &str) -> Result<Arc<dyn DomainLogger>, String> {
    FileLogger::init(path).map_err(|e| format!("Failed to initialize fast_log: {}", e))?;
    Ok(Arc::new(BridgeLogger {}))
}
