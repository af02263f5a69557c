// Queue Category Domain Model

use super::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Service class a visitor picks at the kiosk.
///
/// Each category owns its own counter and a one-letter prefix on the
/// printed ticket. The set is closed: adding a category means extending
/// every table below, which the compiler enforces through exhaustive matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueCategory {
    Cash,
    Priority,
    Qr,
    Other,
}

impl QueueCategory {
    /// All categories in wall-board order
    pub const ALL: [QueueCategory; 4] = [
        QueueCategory::Cash,
        QueueCategory::Priority,
        QueueCategory::Qr,
        QueueCategory::Other,
    ];

    /// Ticket prefix letter
    pub fn code(self) -> char {
        match self {
            QueueCategory::Cash => 'C',
            QueueCategory::Priority => 'P',
            QueueCategory::Qr => 'Q',
            QueueCategory::Other => 'O',
        }
    }

    /// Label printed on the ticket and in the log
    pub fn label(self) -> &'static str {
        match self {
            QueueCategory::Cash => "Cash/Check Transaction",
            QueueCategory::Priority => "Priority Lane",
            QueueCategory::Qr => "Scan QR",
            QueueCategory::Other => "Other Transaction",
        }
    }

    /// Section heading on the wall board
    pub fn board_heading(self) -> &'static str {
        match self {
            QueueCategory::Cash => "Cash/Check (C)",
            QueueCategory::Priority => "Priority Lane (P)",
            QueueCategory::Qr => "QR Transactions (Q)",
            QueueCategory::Other => "Other Services (O)",
        }
    }

    /// Selection value sent by the service picker
    pub fn selection(self) -> &'static str {
        match self {
            QueueCategory::Cash => "cash",
            QueueCategory::Priority => "priority",
            QueueCategory::Qr => "qr",
            QueueCategory::Other => "other",
        }
    }

    pub fn from_code(code: char) -> Result<Self> {
        match code.to_ascii_uppercase() {
            'C' => Ok(QueueCategory::Cash),
            'P' => Ok(QueueCategory::Priority),
            'Q' => Ok(QueueCategory::Qr),
            'O' => Ok(QueueCategory::Other),
            _ => Err(DomainError::UnknownCode(code)),
        }
    }
}

impl FromStr for QueueCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        QueueCategory::ALL
            .into_iter()
            .find(|c| c.selection().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownService(s.to_string()))
    }
}

impl std::fmt::Display for QueueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.selection())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_maps_to_code_and_label() {
        let cash: QueueCategory = "cash".parse().unwrap();
        assert_eq!(cash.code(), 'C');
        assert_eq!(cash.label(), "Cash/Check Transaction");

        let priority: QueueCategory = "priority".parse().unwrap();
        assert_eq!(priority.code(), 'P');
        assert_eq!(priority.label(), "Priority Lane");

        let qr: QueueCategory = "qr".parse().unwrap();
        assert_eq!(qr.code(), 'Q');
        assert_eq!(qr.label(), "Scan QR");

        let other: QueueCategory = "other".parse().unwrap();
        assert_eq!(other.code(), 'O');
        assert_eq!(other.label(), "Other Transaction");
    }

    #[test]
    fn test_selection_is_case_insensitive() {
        assert_eq!("  QR ".parse::<QueueCategory>().unwrap(), QueueCategory::Qr);
        assert_eq!("Cash".parse::<QueueCategory>().unwrap(), QueueCategory::Cash);
    }

    #[test]
    fn test_unknown_selection_rejected() {
        let err = "deposit".parse::<QueueCategory>().unwrap_err();
        assert_eq!(err, DomainError::UnknownService("deposit".to_string()));
        assert!("".parse::<QueueCategory>().is_err());
    }

    #[test]
    fn test_code_round_trips_through_from_code() {
        for category in QueueCategory::ALL {
            assert_eq!(QueueCategory::from_code(category.code()).unwrap(), category);
        }
        assert_eq!(
            QueueCategory::from_code('x'),
            Err(DomainError::UnknownCode('x'))
        );
    }
}
