// Wall-board projections
//
// Display placeholders derived from the counters. Nothing here reflects
// which ticket a teller is actually serving.

use crate::domain::{format_queue_number, Counters, QueueCategory};
use serde::Serialize;

/// Most numbers a single lane shows
pub const MAX_LANE_NUMBERS: usize = 50;

/// (teller counter, category, steps behind the latest ticket)
const NOW_SERVING_LAYOUT: [(u8, QueueCategory, u64); 4] = [
    (1, QueueCategory::Cash, 2),
    (2, QueueCategory::Priority, 1),
    (3, QueueCategory::Cash, 1),
    (4, QueueCategory::Qr, 1),
];

/// One "Now Serving" tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServingSlot {
    pub counter: u8,
    pub queue_number: String,
}

/// One "Next in Queue" lane
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingLane {
    pub category: QueueCategory,
    pub numbers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WallBoard {
    pub now_serving: Vec<ServingSlot>,
    pub upcoming: Vec<UpcomingLane>,
}

/// `count` numbers ending at `current`, stepping back one per slot,
/// never below 1. `count` is capped at `MAX_LANE_NUMBERS`.
pub fn next_numbers(category: QueueCategory, current: u64, count: usize) -> Vec<String> {
    let count = count.min(MAX_LANE_NUMBERS);
    (0..count)
        .map(|i| {
            let back = (count - i - 1) as u64;
            format_queue_number(category, current.saturating_sub(back).max(1))
        })
        .collect()
}

pub fn now_serving(counters: &Counters) -> Vec<ServingSlot> {
    NOW_SERVING_LAYOUT
        .iter()
        .map(|&(counter, category, behind)| ServingSlot {
            counter,
            queue_number: format_queue_number(
                category,
                counters.get(category).saturating_sub(behind).max(1),
            ),
        })
        .collect()
}

pub fn wall_board(counters: &Counters, count: usize) -> WallBoard {
    WallBoard {
        now_serving: now_serving(counters),
        upcoming: QueueCategory::ALL
            .into_iter()
            .map(|category| UpcomingLane {
                category,
                numbers: next_numbers(category, counters.get(category), count),
            })
            .collect(),
    }
}
