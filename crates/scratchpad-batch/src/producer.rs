//! Batch encoder.
//!
//! [`Producer`] is a three-state machine:
//!
//! ```text
//! Idle ──start: push 0──▶ Producing ──size <= 0──▶ Done
//!                           │    ▲
//!                           └────┘ size > 0: push elements, push size
//! ```

use std::mem::size_of;

use scratchpad_core::{PadError, ScratchPad};
use tracing::{debug, trace};

use crate::batch::{BatchMarker, Element, TERMINAL_MARKER};
use crate::source::{BatchSizeSource, ValueSource};

/// Where a [`Producer`] is in its session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProducerState {
    /// Nothing pushed yet.
    Idle,
    /// Terminal marker pushed; batches are being encoded.
    Producing,
    /// The size source signalled the end, or a push failed.
    Done,
}

/// Totals for one production session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProduceReport {
    /// Batches encoded, not counting the terminal marker.
    pub batches: usize,
    /// Element values encoded across all batches.
    pub elements: usize,
    /// Bytes pushed, markers included.
    pub bytes: usize,
}

/// Encodes batches from a size source and a value source onto a pad.
#[derive(Debug)]
pub struct Producer<B, V> {
    sizes: B,
    values: V,
    state: ProducerState,
    report: ProduceReport,
}

impl<B: BatchSizeSource, V: ValueSource> Producer<B, V> {
    /// Create an idle producer.
    pub fn new(sizes: B, values: V) -> Self {
        Self {
            sizes,
            values,
            state: ProducerState::Idle,
            report: ProduceReport::default(),
        }
    }

    /// Current state.
    pub fn state(&self) -> ProducerState {
        self.state
    }

    /// Totals so far.
    pub fn report(&self) -> &ProduceReport {
        &self.report
    }

    /// Encode the next batch.
    ///
    /// The first call also pushes the terminal marker. Returns the size of
    /// the batch pushed, or `None` once the session is over. A batch that
    /// would not fit is rejected before any of its bytes are written and
    /// before any values are drawn; the producer is then `Done`.
    pub fn step(&mut self, pad: &mut ScratchPad) -> Result<Option<usize>, PadError> {
        if self.state == ProducerState::Idle {
            if let Err(err) = pad.try_push(TERMINAL_MARKER) {
                self.state = ProducerState::Done;
                return Err(err);
            }
            self.report.bytes += size_of::<BatchMarker>();
            self.state = ProducerState::Producing;
            debug!(capacity = pad.capacity(), "production started");
        }
        if self.state == ProducerState::Done {
            return Ok(None);
        }

        let size = self.sizes.next_batch_size();
        if size <= 0 {
            self.state = ProducerState::Done;
            debug!(
                batches = self.report.batches,
                elements = self.report.elements,
                bytes = self.report.bytes,
                "production finished"
            );
            return Ok(None);
        }

        let len = size as usize;
        match self.push_batch(pad, size, len) {
            Ok(bytes) => {
                self.report.batches += 1;
                self.report.elements += len;
                self.report.bytes += bytes;
                trace!(size, offset = pad.offset(), "batch pushed");
                Ok(Some(len))
            }
            Err(err) => {
                self.state = ProducerState::Done;
                Err(err)
            }
        }
    }

    /// Give back the sources, e.g. to inspect what was drawn.
    pub fn into_sources(self) -> (B, V) {
        (self.sizes, self.values)
    }

    /// Run to completion.
    pub fn run(mut self, pad: &mut ScratchPad) -> Result<ProduceReport, PadError> {
        while self.step(pad)?.is_some() {}
        Ok(self.report)
    }

    fn push_batch(
        &mut self,
        pad: &mut ScratchPad,
        size: BatchMarker,
        len: usize,
    ) -> Result<usize, PadError> {
        let bytes = len
            .saturating_mul(size_of::<Element>())
            .saturating_add(size_of::<BatchMarker>());
        if bytes > pad.remaining() {
            return Err(PadError::Overflow {
                requested: bytes,
                remaining: pad.remaining(),
                capacity: pad.capacity(),
            });
        }
        for _ in 0..len {
            pad.try_push(self.values.next_value())?;
        }
        pad.try_push(size)?;
        Ok(bytes)
    }
}

/// Encode every batch from `sizes` and `values` onto `pad`.
pub fn produce<B, V>(pad: &mut ScratchPad, sizes: B, values: V) -> Result<ProduceReport, PadError>
where
    B: BatchSizeSource,
    V: ValueSource,
{
    Producer::new(sizes, values).run(pad)
}
