//! Scratch pad configuration parameters.

use crate::error::ConfigError;

/// Configuration for a [`ScratchPad`](crate::ScratchPad).
///
/// The capacity is fixed for the lifetime of the pad; there is no growth
/// policy to configure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PadConfig {
    /// Size of the backing storage in bytes.
    ///
    /// Default: 1024. Must be non-zero.
    pub capacity: usize,
}

impl PadConfig {
    /// Default capacity in bytes.
    pub const DEFAULT_CAPACITY: usize = 1024;

    /// Create a config with the given capacity in bytes.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Check that the configuration describes a usable pad.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}

impl Default for PadConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_1k() {
        assert_eq!(PadConfig::default().capacity, 1024);
    }

    #[test]
    fn zero_capacity_rejected() {
        assert_eq!(PadConfig::new(0).validate(), Err(ConfigError::ZeroCapacity));
    }

    #[test]
    fn non_zero_capacity_accepted() {
        assert!(PadConfig::new(1).validate().is_ok());
    }
}
