// Application Layer - Use Cases and Business Logic

pub mod counter_store;
pub mod export;
pub mod outcome;
pub mod queue;
mod stored;
pub mod ticket_log;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports
pub use counter_store::{CounterStore, COUNTERS_KEY};
pub use outcome::{Outcome, StoreFault};
pub use queue::{QueueService, ServingSlot, UpcomingLane, WallBoard, MAX_LANE_NUMBERS};
pub use ticket_log::{newest_first, TicketLog, QUEUE_LOG_KEY};
