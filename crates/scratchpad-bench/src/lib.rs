//! Benchmark profiles and utilities for the scratchpad workspace.
//!
//! Hosts the blocked-reorder experiment (copying shuffled fixed-size blocks
//! between two buffers) alongside criterion benches for the scratch pad:
//!
//! - [`reorder`]: block layout, validation and the two copy strategies
//! - [`ReorderProfile`]: deterministic inputs for a given block count and seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod reorder;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub use reorder::{reorder_copy, reorder_naive, BlockLayout, ReorderError};

/// Parameters for one blocked-reorder run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReorderProfile {
    /// Number of blocks.
    pub num_blocks: u32,
    /// Elements (`f32`) per block.
    pub elems_per_block: u32,
    /// Seed for the block shuffle.
    pub seed: u64,
}

/// Buffers and layout produced by [`ReorderProfile::build`].
#[derive(Clone, Debug)]
pub struct ReorderInputs {
    /// Source buffer, `src[i] == i as f32`.
    pub src: Vec<f32>,
    /// Destination buffer, filled with `-1.0`.
    pub dst: Vec<f32>,
    /// Shuffled uniform layout.
    pub layout: BlockLayout,
}

impl ReorderProfile {
    /// Elements per block in the full timing sweep.
    pub const DEFAULT_ELEMS_PER_BLOCK: u32 = 30_000;

    /// Largest block count in the sweep.
    pub const MAX_NUM_BLOCKS: u32 = 1 << 15;

    /// Profile with the default block size.
    pub fn new(num_blocks: u32, seed: u64) -> Self {
        Self {
            num_blocks,
            elems_per_block: Self::DEFAULT_ELEMS_PER_BLOCK,
            seed,
        }
    }

    /// Total `f32` elements per buffer.
    pub fn total_elements(&self) -> u64 {
        u64::from(self.num_blocks) * u64::from(self.elems_per_block)
    }

    /// Check that the profile is non-empty and addressable with `u32`
    /// offsets.
    pub fn validate(&self) -> Result<(), ReorderError> {
        if self.num_blocks == 0 || self.elems_per_block == 0 {
            return Err(ReorderError::EmptyProfile);
        }
        let elements = self.total_elements();
        if elements > u64::from(u32::MAX) {
            return Err(ReorderError::ProfileTooLarge { elements });
        }
        Ok(())
    }

    /// Allocate buffers and a shuffled layout.
    pub fn build(&self) -> Result<ReorderInputs, ReorderError> {
        self.validate()?;
        let len = self.total_elements() as usize;
        let mut layout = BlockLayout::uniform(self.num_blocks, self.elems_per_block);
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        layout.shuffle(&mut rng);
        Ok(ReorderInputs {
            src: (0..len).map(|i| i as f32).collect(),
            dst: vec![-1.0; len],
            layout,
        })
    }

    /// Block counts `1, 2, 4, ...` up to and including `max`.
    pub fn block_sweep(max: u32) -> impl Iterator<Item = u32> {
        std::iter::successors(Some(1u32), |&n| n.checked_mul(2)).take_while(move |&n| n <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_layout() {
        let a = ReorderProfile::new(16, 3).build().unwrap();
        let b = ReorderProfile::new(16, 3).build().unwrap();
        assert_eq!(a.layout, b.layout);
    }

    #[test]
    fn build_then_copy_moves_every_element() {
        let profile = ReorderProfile {
            num_blocks: 8,
            elems_per_block: 4,
            seed: 11,
        };
        let mut inputs = profile.build().unwrap();
        reorder_copy(&inputs.src, &mut inputs.dst, &inputs.layout).unwrap();
        assert!(inputs.dst.iter().all(|&v| v >= 0.0));

        let mut sorted = inputs.dst.clone();
        sorted.sort_by(f32::total_cmp);
        assert_eq!(sorted, inputs.src);
    }

    #[test]
    fn empty_profile_rejected() {
        let profile = ReorderProfile {
            num_blocks: 0,
            elems_per_block: 4,
            seed: 0,
        };
        assert_eq!(profile.validate(), Err(ReorderError::EmptyProfile));
    }

    #[test]
    fn oversized_profile_rejected() {
        let profile = ReorderProfile {
            num_blocks: u32::MAX,
            elems_per_block: 2,
            seed: 0,
        };
        assert!(matches!(
            profile.build(),
            Err(ReorderError::ProfileTooLarge { .. })
        ));
    }

    #[test]
    fn sweep_doubles_up_to_max() {
        let sweep: Vec<u32> = ReorderProfile::block_sweep(16).collect();
        assert_eq!(sweep, vec![1, 2, 4, 8, 16]);
        assert_eq!(ReorderProfile::block_sweep(ReorderProfile::MAX_NUM_BLOCKS).count(), 16);
    }
}
