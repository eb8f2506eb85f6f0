pub mod actors;
pub mod aggregate;
pub mod events;
pub mod projections;
pub mod render;
pub mod state;
pub mod types;
pub mod validation;

pub use actors::*;
pub use aggregate::*;
pub use events::*;
pub use projections::*;
pub use render::*;
pub use state::*;
pub use types::*;
pub use validation::*;
