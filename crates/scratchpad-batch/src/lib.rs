//! Batch producer/consumer protocol over a [`ScratchPad`].
//!
//! A [`Producer`] encodes a sequence of variable-length batches onto a pad;
//! a [`Consumer`] decodes them afterwards. Because the pad is a stack, the
//! consumer sees the last batch first, and each batch's elements last-first.
//!
//! # Pad layout
//!
//! ```text
//! bottom                                                   top
//! ├ 0 ┼ e1 e2 e3 ┼ 3 ┼ e4 e5 ┼ 2 ┼ e6 ┼ 1 ┤
//!  i32    f64×3   i32   f64×2  i32  f64  i32
//! ```
//!
//! The terminal marker `0` is pushed when production starts, so it sits at
//! the bottom and is the last thing the consumer pops. Each batch is its
//! elements followed by its size marker.
//!
//! The producer must run to completion before the consumer starts. The two
//! are never interleaved on one pad.
//!
//! [`ScratchPad`]: scratchpad_core::ScratchPad

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod consumer;
pub mod producer;
pub mod session;
pub mod source;

pub use batch::{Batch, BatchMarker, Element, TERMINAL_MARKER};
pub use consumer::{consume, ConsumeReport, Consumer, ConsumerState};
pub use producer::{produce, ProduceReport, Producer, ProducerState};
pub use session::{run_session, SessionReport};
pub use source::{BatchSink, BatchSizeSource, CountdownBatches, RunningValues, ValueSource};
