//! Collaborator interfaces for the batch protocol.
//!
//! The producer pulls batch sizes from a [`BatchSizeSource`] and element
//! values from a [`ValueSource`]; the consumer pushes one aggregate per
//! batch into a [`BatchSink`]. Closures implement all three.

use crate::batch::{BatchMarker, Element};

/// Supplies the size of each batch in turn.
///
/// A value `<= 0` ends the session.
pub trait BatchSizeSource {
    /// Size of the next batch, or a non-positive value to stop.
    fn next_batch_size(&mut self) -> BatchMarker;
}

/// Supplies successive element values.
pub trait ValueSource {
    /// The next element value.
    fn next_value(&mut self) -> Element;
}

/// Receives one aggregated result per decoded batch.
pub trait BatchSink {
    /// Accept the aggregate of one batch.
    fn publish(&mut self, aggregate: Element);
}

impl<F: FnMut() -> BatchMarker> BatchSizeSource for F {
    fn next_batch_size(&mut self) -> BatchMarker {
        self()
    }
}

impl<F: FnMut() -> Element> ValueSource for F {
    fn next_value(&mut self) -> Element {
        self()
    }
}

impl<F: FnMut(Element)> BatchSink for F {
    fn publish(&mut self, aggregate: Element) {
        self(aggregate)
    }
}

/// Batch sizes counting down from a start value: `start, start - 1, ..., 0`.
///
/// Keeps counting below zero if polled after reaching zero.
#[derive(Clone, Debug)]
pub struct CountdownBatches {
    next: BatchMarker,
}

impl CountdownBatches {
    /// Count down from `start`.
    pub fn new(start: BatchMarker) -> Self {
        Self { next: start }
    }
}

impl BatchSizeSource for CountdownBatches {
    fn next_batch_size(&mut self) -> BatchMarker {
        let size = self.next;
        self.next = self.next.saturating_sub(1);
        size
    }
}

/// Element values `1.0, 2.0, 3.0, ...`.
#[derive(Clone, Debug, Default)]
pub struct RunningValues {
    last: Element,
}

impl RunningValues {
    /// Start a fresh sequence at `1.0`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ValueSource for RunningValues {
    fn next_value(&mut self) -> Element {
        self.last += 1.0;
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_reaches_zero_then_goes_negative() {
        let mut sizes = CountdownBatches::new(2);
        let got: Vec<_> = (0..4).map(|_| sizes.next_batch_size()).collect();
        assert_eq!(got, vec![2, 1, 0, -1]);
    }

    #[test]
    fn running_values_start_at_one() {
        let mut values = RunningValues::new();
        let got: Vec<_> = (0..3).map(|_| values.next_value()).collect();
        assert_eq!(got, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn closures_are_sources_and_sinks() {
        let mut n: BatchMarker = 0;
        let mut sizes = || {
            n += 1;
            n
        };
        assert_eq!(sizes.next_batch_size(), 1);
        assert_eq!(sizes.next_batch_size(), 2);

        let mut out = Vec::new();
        let mut sink = |v: Element| out.push(v);
        sink.publish(4.0);
        sink.publish(5.0);
        assert_eq!(out, vec![4.0, 5.0]);
    }
}
