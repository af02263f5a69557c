// Counters Domain Model

use super::category::QueueCategory;
use serde::{Deserialize, Serialize};

/// Last-issued sequence number per queue category.
///
/// Serialized as `{"C":n,"P":n,"Q":n,"O":n}`. A key missing from a stored
/// record reads as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    #[serde(rename = "C", default)]
    pub cash: u64,
    #[serde(rename = "P", default)]
    pub priority: u64,
    #[serde(rename = "Q", default)]
    pub qr: u64,
    #[serde(rename = "O", default)]
    pub other: u64,
}

impl Counters {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, category: QueueCategory) -> u64 {
        match category {
            QueueCategory::Cash => self.cash,
            QueueCategory::Priority => self.priority,
            QueueCategory::Qr => self.qr,
            QueueCategory::Other => self.other,
        }
    }

    fn slot_mut(&mut self, category: QueueCategory) -> &mut u64 {
        match category {
            QueueCategory::Cash => &mut self.cash,
            QueueCategory::Priority => &mut self.priority,
            QueueCategory::Qr => &mut self.qr,
            QueueCategory::Other => &mut self.other,
        }
    }

    /// Bump one category by exactly 1 and return the new value
    pub fn increment(&mut self, category: QueueCategory) -> u64 {
        let slot = self.slot_mut(category);
        *slot = slot.saturating_add(1);
        *slot
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}
