//! Error types for ringstage.

use std::fmt;

/// Errors that can occur while operating on the staging containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageError {
    /// A ring buffer was handed a zero-length arena.
    EmptyArena,

    /// A push was attempted on a buffer that is already full.
    CapacityExceeded {
        /// The fixed capacity of the buffer.
        capacity: usize,
    },

    /// A pop was attempted on an empty buffer.
    Underflow,
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageError::EmptyArena => write!(f, "arena must be non-empty"),
            StageError::CapacityExceeded { capacity } => {
                write!(f, "capacity exceeded: buffer holds {} bytes", capacity)
            }
            StageError::Underflow => write!(f, "underflow: buffer is empty"),
        }
    }
}

impl std::error::Error for StageError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = StageError::CapacityExceeded { capacity: 256 };
        assert!(err.to_string().contains("capacity exceeded"));
        assert!(err.to_string().contains("256"));
    }

    #[test]
    fn test_underflow_display() {
        assert!(StageError::Underflow.to_string().contains("empty"));
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: E) {}
        assert_error(StageError::EmptyArena);
    }
}
