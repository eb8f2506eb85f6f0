use std::sync::Arc;

/// Domain-level logging port.
/// Non-fallible from the domain's point of view.
pub trait DomainLogger: Send + Sync + 'static {
    fn info(&self, msg: &str);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
}

pub type DynLogger = Arc<dyn DomainLogger>;

/// File-backed adapter; `fast_log` does the writing.
pub struct FileLogger;

impl FileLogger {
    /// Initialize fast_log with a file appender at `path`.
    /// Console output is handled by `MultiLogger`, not here.
    pub fn init(path: &str) -> Result<(), Box<dyn std::error::Error>> {
        fast_log::init(
            fast_log::config::Config::new()
                .file(path)
                .level(log::LevelFilter::Info),
        )?;
        Ok(())
    }
}
