//! Scratchpad: a fixed-capacity LIFO scratch buffer for plain-old-data values.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the scratchpad sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use scratchpad::prelude::*;
//!
//! let mut pad = ScratchPad::default();
//! let mut sums = Vec::new();
//! let report = run_session(
//!     &mut pad,
//!     CountdownBatches::new(3),
//!     RunningValues::new(),
//!     &mut |sum: f64| sums.push(sum),
//! )
//! .unwrap();
//!
//! // Batches [1,2,3], [4,5], [6] are decoded last-first.
//! assert_eq!(sums, vec![6.0, 9.0, 6.0]);
//! assert_eq!(report.leftover, 0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`pad`] | `scratchpad-core` | `ScratchPad`, `PadConfig`, error types |
//! | [`batch`] | `scratchpad-batch` | Producer/consumer protocol, sources and sinks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The scratch pad itself (`scratchpad-core`).
///
/// [`pad::ScratchPad`] plus its configuration and [`pad::PadError`].
pub use scratchpad_core as pad;

/// Batch producer/consumer protocol (`scratchpad-batch`).
///
/// [`batch::Producer`] and [`batch::Consumer`] state machines, the
/// [`batch::run_session`] driver, and the collaborator traits.
pub use scratchpad_batch as batch;

/// Common imports for typical scratchpad usage.
///
/// ```rust
/// use scratchpad::prelude::*;
/// ```
pub mod prelude {
    // Pad
    pub use scratchpad_core::{ConfigError, PadConfig, PadError, Pod, ScratchPad};

    // Protocol
    pub use scratchpad_batch::{
        consume, produce, run_session, Batch, BatchSink, BatchSizeSource, Consumer,
        CountdownBatches, Producer, RunningValues, SessionReport, ValueSource,
    };
}
