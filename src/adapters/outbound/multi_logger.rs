use crate::domains::logger::DomainLogger;
use std::sync::Arc;

/// Forwards every message to a primary and an optional secondary logger.
pub struct MultiLogger {
    primary: Arc<dyn DomainLogger>,
    secondary: Option<Arc<dyn DomainLogger>>,
}

impl MultiLogger {
    pub fn new(primary: Arc<dyn DomainLogger>, secondary: Option<Arc<dyn DomainLogger>>) -> Self {
        Self { primary, secondary }
    }
}

impl DomainLogger for MultiLogger {
    fn info(&self, msg: &str) {
        self.primary.info(msg);
        if let Some(sec) = &self.secondary {
            sec.info(msg);
        }
    }

    fn warn(&self, msg: &str) {
        self.primary.warn(msg);
        if let Some(sec) = &self.secondary {
            sec.warn(msg);
        }
    }

    fn error(&self, msg: &str) {
        self.primary.error(msg);
        if let Some(sec) = &self.secondary {
            sec.error(msg);
        }
    }
}

/// File logger with the console attached as secondary. Falls back to the
/// console alone if the file cannot be opened.
pub fn init_combined_logger(path: &str, console: bool) -> Arc<dyn DomainLogger> {
    let console_logger = crate::adapters::outbound::init_console_logger();
    match crate::adapters::outbound::file_logger::init_file_logger(path) {
        Ok(file_logger) if console => {
            Arc::new(MultiLogger::new(file_logger, Some(console_logger))) as Arc<dyn DomainLogger>
        }
        Ok(file_logger) => file_logger,
        Err(e) => {
            console_logger.warn(&e);
            console_logger
        }
    }
}
