use crate::domains::logger::DomainLogger;
use std::sync::Arc;

/// Writes session messages to the terminal, tagged with a source label.
/// Warnings and errors go to stderr so they stay visible next to the grid.
pub struct ConsoleLogger {
    tag: String,
}

impl ConsoleLogger {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    pub fn line(&self, level: &str, msg: &str) -> String {
        format!("[{}] {:<5} {}", self.tag, level, msg)
    }
}

impl DomainLogger for ConsoleLogger {
    fn info(&self, msg: &str) {
        println!("{}", self.line("INFO", msg));
    }

    fn warn(&self, msg: &str) {
        eprintln!("{}", self.line("WARN", msg));
    }

    fn error(&self, msg: &str) {
        eprintln!("{}", self.line("ERROR", msg));
    }
}

/// Console logger tagged `rover`, used when no log file is configured.
pub fn init_console_logger() -> Arc<dyn DomainLogger> {
    Arc::new(ConsoleLogger::new("rover"))
}
