// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown service selection: {0} (expected cash, priority, qr or other)")]
    UnknownService(String),

    #[error("Unknown queue code: {0} (expected C, P, Q or O)")]
    UnknownCode(char),
}

pub type Result<T> = std::result::Result<T, DomainError>;
