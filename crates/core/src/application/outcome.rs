// Degraded-or-ok result for best-effort storage

use thiserror::Error;

/// Why a store read or write fell back
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreFault {
    /// The store refused the operation (unavailable, full, locked)
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The stored value could not be decoded
    #[error("corrupt value under '{key}': {reason}")]
    Corrupt { key: String, reason: String },
}

impl StoreFault {
    pub fn corrupt(key: &str, reason: impl std::fmt::Display) -> Self {
        StoreFault::Corrupt {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    /// The store could not be read or written, as opposed to holding bad data
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreFault::Unavailable(_))
    }
}

/// Result of a best-effort operation.
///
/// Storage failures never abort a kiosk action. Instead the operation
/// completes with a well-defined fallback value and reports the fault here
/// so callers can surface or assert on it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome<T> {
    Ok(T),
    Degraded { value: T, cause: StoreFault },
}

impl<T> Outcome<T> {
    pub fn degraded(value: T, cause: StoreFault) -> Self {
        Outcome::Degraded { value, cause }
    }

    pub fn from_parts(value: T, cause: Option<StoreFault>) -> Self {
        match cause {
            Some(cause) => Outcome::Degraded { value, cause },
            None => Outcome::Ok(value),
        }
    }

    pub fn into_parts(self) -> (T, Option<StoreFault>) {
        match self {
            Outcome::Ok(value) => (value, None),
            Outcome::Degraded { value, cause } => (value, Some(cause)),
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Outcome::Ok(value) | Outcome::Degraded { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        self.into_parts().0
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded { .. })
    }

    pub fn cause(&self) -> Option<&StoreFault> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Degraded { cause, .. } => Some(cause),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        let (value, cause) = self.into_parts();
        Outcome::from_parts(f(value), cause)
    }

    /// Attach a later fault. The earliest fault is kept as the cause.
    pub fn merge(self, later: Option<StoreFault>) -> Self {
        let (value, cause) = self.into_parts();
        Outcome::from_parts(value, cause.or(later))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_first_fault() {
        let first = StoreFault::Unavailable("disk full".to_string());
        let second = StoreFault::corrupt("k", "bad json");

        let out = Outcome::degraded(1, first.clone()).merge(Some(second.clone()));
        assert_eq!(out.cause(), Some(&first));

        let out = Outcome::Ok(1).merge(Some(second.clone()));
        assert_eq!(out.cause(), Some(&second));

        let out = Outcome::Ok(1).merge(None);
        assert!(!out.is_degraded());
    }

    #[test]
    fn test_map_carries_fault() {
        let fault = StoreFault::Unavailable("gone".to_string());
        let out = Outcome::degraded(vec![1, 2], fault.clone()).map(|v| v.len());
        assert_eq!(out, Outcome::degraded(2, fault));
    }
}
