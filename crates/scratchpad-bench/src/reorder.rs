//! Blocked reorder: copy a set of fixed blocks from one buffer to another.
//!
//! Each block `i` moves `sizes[i]` elements from `src[src_starts[i]..]` to
//! `dst[dst_starts[i]..]`. Two implementations are provided so their cost
//! can be compared: an element-by-element loop and a per-block slice copy.

use std::error::Error;
use std::fmt;

use rand::Rng;

/// Errors from validating a [`BlockLayout`] or [`ReorderProfile`](crate::ReorderProfile).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReorderError {
    /// The three layout arrays differ in length.
    LengthMismatch {
        /// Length of `src_starts`.
        src_starts: usize,
        /// Length of `dst_starts`.
        dst_starts: usize,
        /// Length of `sizes`.
        sizes: usize,
    },
    /// A block reads past the end of the source buffer.
    SourceOutOfBounds {
        /// Index of the offending block.
        block: usize,
        /// One past the last element the block would read.
        end: usize,
        /// Length of the source buffer.
        len: usize,
    },
    /// A block writes past the end of the destination buffer.
    DestinationOutOfBounds {
        /// Index of the offending block.
        block: usize,
        /// One past the last element the block would write.
        end: usize,
        /// Length of the destination buffer.
        len: usize,
    },
    /// A profile with zero blocks or zero elements per block.
    EmptyProfile,
    /// A profile whose element count does not fit in `u32` offsets.
    ProfileTooLarge {
        /// Requested total element count.
        elements: u64,
    },
}

impl fmt::Display for ReorderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                src_starts,
                dst_starts,
                sizes,
            } => write!(
                f,
                "layout length mismatch: {src_starts} source starts, {dst_starts} destination starts, {sizes} sizes"
            ),
            Self::SourceOutOfBounds { block, end, len } => {
                write!(f, "block {block} reads to {end}, source length {len}")
            }
            Self::DestinationOutOfBounds { block, end, len } => {
                write!(f, "block {block} writes to {end}, destination length {len}")
            }
            Self::EmptyProfile => write!(f, "profile must have at least one non-empty block"),
            Self::ProfileTooLarge { elements } => {
                write!(f, "profile needs {elements} elements, more than u32 offsets address")
            }
        }
    }
}

impl Error for ReorderError {}

/// Source offsets, destination offsets and sizes of every block, in
/// elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockLayout {
    /// Start of each block in the source buffer.
    pub src_starts: Vec<u32>,
    /// Start of each block in the destination buffer.
    pub dst_starts: Vec<u32>,
    /// Element count of each block.
    pub sizes: Vec<u32>,
}

impl BlockLayout {
    /// `num_blocks` back-to-back blocks of `elems_per_block` elements, each
    /// mapped to the same position in the destination.
    pub fn uniform(num_blocks: u32, elems_per_block: u32) -> Self {
        let starts: Vec<u32> = (0..num_blocks).map(|i| i * elems_per_block).collect();
        Self {
            src_starts: starts.clone(),
            dst_starts: starts,
            sizes: vec![elems_per_block; num_blocks as usize],
        }
    }

    /// Number of blocks.
    pub fn num_blocks(&self) -> usize {
        self.sizes.len()
    }

    /// Sum of all block sizes.
    pub fn total_elements(&self) -> usize {
        self.sizes.iter().map(|&s| s as usize).sum()
    }

    /// Check every block against the buffer lengths.
    pub fn validate(&self, src_len: usize, dst_len: usize) -> Result<(), ReorderError> {
        if self.src_starts.len() != self.sizes.len() || self.dst_starts.len() != self.sizes.len() {
            return Err(ReorderError::LengthMismatch {
                src_starts: self.src_starts.len(),
                dst_starts: self.dst_starts.len(),
                sizes: self.sizes.len(),
            });
        }
        for (block, ((&src, &dst), &size)) in self
            .src_starts
            .iter()
            .zip(&self.dst_starts)
            .zip(&self.sizes)
            .enumerate()
        {
            let src_end = src as usize + size as usize;
            if src_end > src_len {
                return Err(ReorderError::SourceOutOfBounds {
                    block,
                    end: src_end,
                    len: src_len,
                });
            }
            let dst_end = dst as usize + size as usize;
            if dst_end > dst_len {
                return Err(ReorderError::DestinationOutOfBounds {
                    block,
                    end: dst_end,
                    len: dst_len,
                });
            }
        }
        Ok(())
    }

    /// Perform `num_blocks` random swaps of source starts and of
    /// destination starts.
    ///
    /// Sizes are not moved, so this only preserves validity for layouts
    /// whose blocks all have the same size.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        let n = self.num_blocks();
        if n == 0 {
            return;
        }
        for _ in 0..n {
            let (a, b) = (rng.random_range(0..n), rng.random_range(0..n));
            self.src_starts.swap(a, b);
            let (a, b) = (rng.random_range(0..n), rng.random_range(0..n));
            self.dst_starts.swap(a, b);
        }
    }

    fn blocks(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.src_starts
            .iter()
            .zip(&self.dst_starts)
            .zip(&self.sizes)
            .map(|((&s, &d), &n)| (s as usize, d as usize, n as usize))
    }
}

/// Copy every block one element at a time.
pub fn reorder_naive(src: &[f32], dst: &mut [f32], layout: &BlockLayout) -> Result<(), ReorderError> {
    layout.validate(src.len(), dst.len())?;
    for (src_start, dst_start, size) in layout.blocks() {
        for i in 0..size {
            dst[dst_start + i] = src[src_start + i];
        }
    }
    Ok(())
}

/// Copy every block with a single slice copy.
pub fn reorder_copy(src: &[f32], dst: &mut [f32], layout: &BlockLayout) -> Result<(), ReorderError> {
    layout.validate(src.len(), dst.len())?;
    for (src_start, dst_start, size) in layout.blocks() {
        dst[dst_start..dst_start + size].copy_from_slice(&src[src_start..src_start + size]);
    }
    Ok(())
}
