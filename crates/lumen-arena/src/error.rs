//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The allocator refused the memory for a new page.
    ResourceExhausted {
        /// Number of bytes the new page would have needed.
        requested_bytes: usize,
    },
    /// The arena configuration was rejected at construction.
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceExhausted { requested_bytes } => {
                write!(
                    f,
                    "resource exhausted: could not allocate a {requested_bytes} byte page"
                )
            }
            Self::InvalidConfig { reason } => {
                write!(f, "invalid arena config: {reason}")
            }
        }
    }
}

impl Error for ArenaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_resource_exhausted() {
        let err = ArenaError::ResourceExhausted {
            requested_bytes: 8192,
        };
        assert_eq!(
            err.to_string(),
            "resource exhausted: could not allocate a 8192 byte page"
        );
    }

    #[test]
    fn display_invalid_config() {
        let err = ArenaError::InvalidConfig {
            reason: "page_capacity must be > 0".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid arena config: page_capacity must be > 0"
        );
    }
}
