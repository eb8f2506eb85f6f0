pub mod logger;
pub mod rover;

pub use logger::*;
pub use rover::*;
