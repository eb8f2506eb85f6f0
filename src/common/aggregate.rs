use crate::common::{DomainEvent, DomainResult};
use serde::{Deserialize, Serialize};

pub trait AggregateRoot: Send + Sync + Clone {
    type Event: DomainEvent + Serialize + for<'de> Deserialize<'de>;

    fn aggregate_id(&self) -> &str;
    fn version(&self) -> u64;

    /// Apply an event to update the aggregate state
    fn apply(&mut self, event: &Self::Event) -> DomainResult<()>;

    /// Get uncommitted events
    fn uncommitted_events(&self) -> &[Self::Event];

    /// Mark events as committed
    fn mark_events_as_committed(&mut self);

    /// Add a new event to the uncommitted events list
    fn add_event(&mut self, event: Self::Event);
}

/// Rebuilds an aggregate by replaying a recorded event stream.
#[derive(Debug, Clone)]
pub struct AggregateStore<T: AggregateRoot> {
    pub aggregate: T,
    pub version: u64,
}

impl<T: AggregateRoot> AggregateStore<T> {
    pub fn new(aggregate: T) -> Self {
        Self {
            version: aggregate.version(),
            aggregate,
        }
    }

    pub fn replay(&mut self, event: &T::Event) -> DomainResult<()> {
        self.aggregate.apply(event)?;
        self.version = self.aggregate.version();
        Ok(())
    }

    pub fn load_from_history(aggregate: T, events: &[T::Event]) -> DomainResult<Self> {
        let mut store = Self::new(aggregate);

        for event in events {
            store.replay(event)?;
        }

        Ok(store)
    }
}
