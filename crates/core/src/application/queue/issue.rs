// Issue Use Case

use crate::application::counter_store::CounterStore;
use crate::application::outcome::Outcome;
use crate::application::ticket_log::TicketLog;
use crate::domain::{QueueCategory, Ticket};
use crate::port::TimeProvider;
use tracing::{info, warn};

/// Execute the issue use case
///
/// Load counters, bump the category, persist, build the ticket, log it.
/// Every storage step is best-effort: the ticket is always returned and
/// the first storage fault, if any, rides along as the degraded cause.
///
/// When the counters could not be read at all, nothing is written back:
/// the in-hand record starts from zero and would overwrite every other
/// category. A corrupt record is still replaced.
///
/// The load/save pair is a read-modify-write without store-level atomicity;
/// callers sharing a store must serialize calls (see `QueueService`).
///
/// # Arguments
///
/// * `counters` - Counter store
/// * `log` - Ticket log
/// * `time_provider` - Clock (injected for determinism)
/// * `category` - Service the visitor picked
pub async fn execute(
    counters: &CounterStore,
    log: &TicketLog,
    time_provider: &dyn TimeProvider,
    category: QueueCategory,
) -> Outcome<Ticket> {
    let (mut current, load_fault) = counters.load().await.into_parts();

    let value = current.increment(category);
    let save_fault = match &load_fault {
        Some(fault) if fault.is_unavailable() => {
            warn!(service = %category, "Counters unreadable, not saving");
            None
        }
        _ => counters.save(&current).await.into_parts().1,
    };

    let ticket = Ticket::issue(category, value, time_provider.now_millis());
    let (_, log_fault) = log.append(ticket.clone()).await.into_parts();

    info!(
        queue_number = ticket.queue_number(),
        service = %category,
        estimated_wait = ticket.estimated_wait(),
        "Ticket issued"
    );

    Outcome::from_parts(ticket, load_fault)
        .merge(save_fault)
        .merge(log_fault)
}
