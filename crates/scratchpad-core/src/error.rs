//! Scratch pad error types.

use std::error::Error;
use std::fmt;

/// Contract violations detected by the scratch pad.
///
/// Both variants indicate a defect in the calling code (an unbalanced
/// push/pop sequence or an undersized pad), not a transient condition.
/// Callers that receive one should stop the session rather than retry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PadError {
    /// A push would write past the end of the storage.
    Overflow {
        /// Size of the value being pushed, in bytes.
        requested: usize,
        /// Free bytes left above the current offset.
        remaining: usize,
        /// Total capacity of the pad in bytes.
        capacity: usize,
    },
    /// A pop asked for more bytes than the pad currently holds.
    Underflow {
        /// Size of the value being popped, in bytes.
        requested: usize,
        /// Bytes currently held (the offset).
        available: usize,
    },
}

impl fmt::Display for PadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow {
                requested,
                remaining,
                capacity,
            } => {
                write!(
                    f,
                    "scratch pad overflow: push of {requested} bytes with {remaining} of {capacity} bytes free"
                )
            }
            Self::Underflow {
                requested,
                available,
            } => {
                write!(
                    f,
                    "scratch pad underflow: pop of {requested} bytes with {available} bytes held"
                )
            }
        }
    }
}

impl Error for PadError {}

/// Errors from validating a [`PadConfig`](crate::PadConfig).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A capacity of zero bytes cannot hold any sized value.
    ZeroCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "scratch pad capacity must be non-zero"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_message_names_sizes() {
        let err = PadError::Overflow {
            requested: 8,
            remaining: 4,
            capacity: 16,
        };
        assert_eq!(
            err.to_string(),
            "scratch pad overflow: push of 8 bytes with 4 of 16 bytes free"
        );
    }

    #[test]
    fn underflow_message_names_sizes() {
        let err = PadError::Underflow {
            requested: 4,
            available: 0,
        };
        assert_eq!(
            err.to_string(),
            "scratch pad underflow: pop of 4 bytes with 0 bytes held"
        );
    }
}
