//! Batch decoder.
//!
//! [`Consumer`] pops a size marker, then that many elements, until it pops
//! a non-positive marker. It must only run after the producer has finished.

use std::mem::size_of;

use scratchpad_core::{PadError, ScratchPad};
use tracing::{debug, trace};

use crate::batch::{Batch, BatchMarker, Element};
use crate::source::BatchSink;

/// Where a [`Consumer`] is in its session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsumerState {
    /// Decoding batches.
    Consuming,
    /// The terminal marker was popped, or a pop failed.
    Done,
}

/// Totals for one consumption session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConsumeReport {
    /// Batches decoded and published.
    pub batches: usize,
    /// Element values popped across all batches.
    pub elements: usize,
    /// Bytes popped, markers included.
    pub bytes: usize,
}

/// Decodes batches off a pad in stack order.
#[derive(Debug)]
pub struct Consumer {
    state: ConsumerState,
    report: ConsumeReport,
}

impl Consumer {
    /// Create a consumer ready to pop its first marker.
    pub fn new() -> Self {
        Self {
            state: ConsumerState::Consuming,
            report: ConsumeReport::default(),
        }
    }

    /// Current state.
    pub fn state(&self) -> ConsumerState {
        self.state
    }

    /// Totals so far.
    pub fn report(&self) -> &ConsumeReport {
        &self.report
    }

    /// Decode the next batch, or return `None` once the terminal marker is
    /// popped.
    ///
    /// A marker announcing more elements than the pad holds is reported as
    /// [`PadError::Underflow`] before any element is popped; the marker
    /// itself stays consumed and the consumer is then `Done`.
    pub fn next_batch(&mut self, pad: &mut ScratchPad) -> Result<Option<Batch>, PadError> {
        if self.state == ConsumerState::Done {
            return Ok(None);
        }
        let marker = match pad.try_pop::<BatchMarker>() {
            Ok(marker) => marker,
            Err(err) => {
                self.state = ConsumerState::Done;
                return Err(err);
            }
        };
        self.report.bytes += size_of::<BatchMarker>();
        if marker <= 0 {
            self.state = ConsumerState::Done;
            debug!(
                batches = self.report.batches,
                elements = self.report.elements,
                bytes = self.report.bytes,
                remaining_offset = pad.offset(),
                "consumption finished"
            );
            return Ok(None);
        }

        let len = marker as usize;
        let bytes = len.saturating_mul(size_of::<Element>());
        if bytes > pad.offset() {
            self.state = ConsumerState::Done;
            return Err(PadError::Underflow {
                requested: bytes,
                available: pad.offset(),
            });
        }
        let mut batch = Batch::with_capacity(len);
        for _ in 0..len {
            batch.push_popped(pad.try_pop::<Element>()?);
        }
        self.report.batches += 1;
        self.report.elements += len;
        self.report.bytes += bytes;
        trace!(size = marker, offset = pad.offset(), "batch popped");
        Ok(Some(batch))
    }

    /// Decode every batch and publish each batch's sum.
    pub fn run<S: BatchSink>(
        mut self,
        pad: &mut ScratchPad,
        sink: &mut S,
    ) -> Result<ConsumeReport, PadError> {
        while let Some(batch) = self.next_batch(pad)? {
            sink.publish(batch.sum());
        }
        Ok(self.report)
    }
}

impl Default for Consumer {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode every batch on `pad`, publishing each sum to `sink`.
pub fn consume<S: BatchSink>(pad: &mut ScratchPad, sink: &mut S) -> Result<ConsumeReport, PadError> {
    Consumer::new().run(pad, sink)
}
