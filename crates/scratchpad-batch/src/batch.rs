//! Decoded batches and the on-pad value types.

use smallvec::SmallVec;

/// Batch size marker as stored on the pad.
pub type BatchMarker = i32;

/// Element value as stored on the pad.
pub type Element = f64;

/// Marker that ends a session.
pub const TERMINAL_MARKER: BatchMarker = 0;

/// Inline element count before a batch spills to the heap.
const INLINE_ELEMENTS: usize = 8;

/// One batch as decoded by the consumer.
///
/// Elements are stored in the order they came off the pad, which is the
/// reverse of production order. Use [`in_production_order`] when the
/// aggregation is order-sensitive.
///
/// [`in_production_order`]: Batch::in_production_order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Batch {
    popped: SmallVec<[Element; INLINE_ELEMENTS]>,
}

impl Batch {
    pub(crate) fn with_capacity(len: usize) -> Self {
        Self {
            popped: SmallVec::with_capacity(len),
        }
    }

    pub(crate) fn push_popped(&mut self, value: Element) {
        self.popped.push(value);
    }

    /// Number of elements in the batch.
    pub fn len(&self) -> usize {
        self.popped.len()
    }

    /// Whether the batch has no elements.
    pub fn is_empty(&self) -> bool {
        self.popped.is_empty()
    }

    /// Elements in pop order (last-produced first).
    pub fn popped(&self) -> &[Element] {
        &self.popped
    }

    /// Elements in the order the producer generated them.
    pub fn in_production_order(&self) -> impl DoubleEndedIterator<Item = Element> + '_ {
        self.popped.iter().rev().copied()
    }

    /// Sum of the elements, accumulated in pop order.
    pub fn sum(&self) -> Element {
        self.popped.iter().fold(0.0, |acc, &v| acc + v)
    }
}
