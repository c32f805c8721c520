//! The fixed-capacity LIFO byte arena.
//!
//! [`ScratchPad`] owns a single byte allocation made at construction. Values
//! are copied in and out as raw bytes through [`bytemuck`], so the pad never
//! needs `unsafe` and never allocates per value.

use std::fmt;
use std::mem::size_of;

use bytemuck::Pod;

use crate::config::PadConfig;
use crate::error::{ConfigError, PadError};

/// Fixed-capacity stack of plain-old-data values packed as bytes.
///
/// `push` appends the bytes of a value at the current offset; `pop` removes
/// the topmost `size_of::<T>()` bytes and reinterprets them as `T`. No type
/// information is recorded: a pop must name the same type as the matching
/// push, and pops must mirror pushes in reverse order.
///
/// ```
/// use scratchpad_core::ScratchPad;
///
/// let mut pad = ScratchPad::new(64);
/// pad.push(7_i32);
/// pad.push(2.5_f64);
/// assert_eq!(pad.offset(), 12);
///
/// assert_eq!(pad.pop::<f64>(), 2.5);
/// assert_eq!(pad.pop::<i32>(), 7);
/// assert!(pad.is_empty());
/// ```
#[derive(Clone)]
pub struct ScratchPad {
    /// Backing storage. Allocated once, never resized.
    storage: Box<[u8]>,
    /// High-water mark: bytes occupied, always `<= storage.len()`.
    offset: usize,
}

impl ScratchPad {
    /// Create an empty pad holding up to `capacity` bytes.
    ///
    /// A zero capacity is allowed here (only zero-sized values fit); use
    /// [`with_config`](Self::with_config) to reject it.
    pub fn new(capacity: usize) -> Self {
        Self {
            storage: vec![0u8; capacity].into_boxed_slice(),
            offset: 0,
        }
    }

    /// Create an empty pad from a validated configuration.
    pub fn with_config(config: &PadConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.capacity))
    }

    /// Push `value` onto the pad.
    ///
    /// # Panics
    ///
    /// Panics if `size_of::<T>()` exceeds [`remaining`](Self::remaining).
    /// This check is active in release builds. Nothing is written when it
    /// fires.
    #[track_caller]
    pub fn push<T: Pod>(&mut self, value: T) {
        if let Err(err) = self.try_push(value) {
            panic!("{err}");
        }
    }

    /// Pop the topmost `size_of::<T>()` bytes as a `T`.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `size_of::<T>()` bytes are held. This check is
    /// active in release builds. The offset is unchanged when it fires.
    #[track_caller]
    pub fn pop<T: Pod>(&mut self) -> T {
        match self.try_pop() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Push `value`, reporting overflow as an error instead of panicking.
    ///
    /// An `Err` is still a contract violation; it exists so that drivers
    /// returning `Result` can surface it with `?`. On error the pad is
    /// unchanged.
    pub fn try_push<T: Pod>(&mut self, value: T) -> Result<(), PadError> {
        let len = size_of::<T>();
        if len > self.remaining() {
            return Err(PadError::Overflow {
                requested: len,
                remaining: self.remaining(),
                capacity: self.capacity(),
            });
        }
        let end = self.offset + len;
        self.storage[self.offset..end].copy_from_slice(bytemuck::bytes_of(&value));
        self.offset = end;
        Ok(())
    }

    /// Pop a `T`, reporting underflow as an error instead of panicking.
    ///
    /// On error the pad is unchanged.
    pub fn try_pop<T: Pod>(&mut self) -> Result<T, PadError> {
        let len = size_of::<T>();
        if len > self.offset {
            return Err(PadError::Underflow {
                requested: len,
                available: self.offset,
            });
        }
        let start = self.offset - len;
        // Storage is a byte slice, so `start` carries no alignment guarantee.
        let value = bytemuck::pod_read_unaligned(&self.storage[start..self.offset]);
        self.offset = start;
        Ok(value)
    }

    /// Discard everything held. Storage contents are left as-is.
    pub fn clear(&mut self) {
        self.offset = 0;
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Bytes currently held.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes still free above the offset.
    pub fn remaining(&self) -> usize {
        self.storage.len() - self.offset
    }

    /// Whether the pad holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.offset == 0
    }

    /// Whether a push of `T` would currently succeed.
    pub fn fits<T: Pod>(&self) -> bool {
        size_of::<T>() <= self.remaining()
    }
}

impl Default for ScratchPad {
    fn default() -> Self {
        Self::new(PadConfig::DEFAULT_CAPACITY)
    }
}

impl fmt::Debug for ScratchPad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScratchPad")
            .field("capacity", &self.capacity())
            .field("offset", &self.offset)
            .finish()
    }
}
