//! Test utilities and scripted sources for scratchpad development.
//!
//! Provides fixed-script implementations of the batch protocol's
//! collaborator traits ([`BatchSizeSource`], [`ValueSource`],
//! [`BatchSink`]) so tests can describe a session as plain data.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::VecDeque;

use scratchpad_batch::{BatchMarker, BatchSink, BatchSizeSource, Element, ValueSource};

/// Yields a fixed list of batch sizes, then `0` forever.
#[derive(Clone, Debug, Default)]
pub struct ScriptedBatches {
    sizes: VecDeque<BatchMarker>,
    polled: usize,
}

impl ScriptedBatches {
    pub fn new(sizes: impl IntoIterator<Item = BatchMarker>) -> Self {
        Self {
            sizes: sizes.into_iter().collect(),
            polled: 0,
        }
    }

    /// How many times the producer asked for a size.
    pub fn polled(&self) -> usize {
        self.polled
    }
}

impl BatchSizeSource for ScriptedBatches {
    fn next_batch_size(&mut self) -> BatchMarker {
        self.polled += 1;
        self.sizes.pop_front().unwrap_or(0)
    }
}

/// Yields a fixed list of element values.
///
/// Panics when exhausted: a producer drawing more values than scripted is
/// a test bug.
#[derive(Clone, Debug, Default)]
pub struct ScriptedValues {
    values: VecDeque<Element>,
}

impl ScriptedValues {
    pub fn new(values: impl IntoIterator<Item = Element>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Values not yet drawn.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl ValueSource for ScriptedValues {
    fn next_value(&mut self) -> Element {
        self.values
            .pop_front()
            .expect("ScriptedValues exhausted: producer drew more values than scripted")
    }
}

/// Collects every published aggregate in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    published: Vec<Element>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregates in publish order.
    pub fn published(&self) -> &[Element] {
        &self.published
    }

    pub fn into_published(self) -> Vec<Element> {
        self.published
    }
}

impl BatchSink for RecordingSink {
    fn publish(&mut self, aggregate: Element) {
        self.published.push(aggregate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_batches_end_with_zero() {
        let mut sizes = ScriptedBatches::new([2, 1]);
        assert_eq!(sizes.next_batch_size(), 2);
        assert_eq!(sizes.next_batch_size(), 1);
        assert_eq!(sizes.next_batch_size(), 0);
        assert_eq!(sizes.next_batch_size(), 0);
        assert_eq!(sizes.polled(), 4);
    }

    #[test]
    #[should_panic(expected = "ScriptedValues exhausted")]
    fn scripted_values_panic_when_exhausted() {
        let mut values = ScriptedValues::new([1.0]);
        values.next_value();
        values.next_value();
    }

    #[test]
    fn recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        sink.publish(2.0);
        sink.publish(1.0);
        assert_eq!(sink.published(), &[2.0, 1.0]);
    }
}
