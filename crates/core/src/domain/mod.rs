// Domain Layer - Pure business logic and entities

pub mod category;
pub mod counters;
pub mod error;
pub mod ticket;

// Re-exports
pub use category::QueueCategory;
pub use counters::Counters;
pub use error::DomainError;
pub use ticket::{estimated_wait_minutes, format_queue_number, Ticket};
