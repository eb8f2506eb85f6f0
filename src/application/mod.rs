pub mod rover_service;

pub use rover_service::*;
