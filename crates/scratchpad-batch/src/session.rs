//! One full produce-then-consume pass over a pad.

use scratchpad_core::{PadError, ScratchPad};

use crate::consumer::{consume, ConsumeReport};
use crate::producer::{produce, ProduceReport};
use crate::source::{BatchSink, BatchSizeSource, ValueSource};

/// Totals for both halves of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionReport {
    /// What the producer pushed.
    pub produced: ProduceReport,
    /// What the consumer popped.
    pub consumed: ConsumeReport,
    /// Bytes still on the pad afterwards. Zero when the pad started empty.
    pub leftover: usize,
}

/// Produce to completion, then consume to completion.
///
/// The pad should be empty on entry; anything already on it sits below
/// the terminal marker and is left untouched.
pub fn run_session<B, V, S>(
    pad: &mut ScratchPad,
    sizes: B,
    values: V,
    sink: &mut S,
) -> Result<SessionReport, PadError>
where
    B: BatchSizeSource,
    V: ValueSource,
    S: BatchSink,
{
    let produced = produce(pad, sizes, values)?;
    let consumed = consume(pad, sink)?;
    Ok(SessionReport {
        produced,
        consumed,
        leftover: pad.offset(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::Element;
    use crate::source::{CountdownBatches, RunningValues};

    #[test]
    fn produced_and_consumed_totals_match() {
        let mut pad = ScratchPad::default();
        let mut out = Vec::new();
        let report = run_session(
            &mut pad,
            CountdownBatches::new(4),
            RunningValues::new(),
            &mut |v: Element| out.push(v),
        )
        .unwrap();
        assert_eq!(report.produced.batches, report.consumed.batches);
        assert_eq!(report.produced.elements, report.consumed.elements);
        assert_eq!(report.produced.bytes, report.consumed.bytes);
        assert_eq!(report.leftover, 0);
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn prior_contents_survive_session() {
        let mut pad = ScratchPad::new(128);
        pad.push(0xfeed_u32);
        let report = run_session(
            &mut pad,
            CountdownBatches::new(2),
            RunningValues::new(),
            &mut |_: Element| {},
        )
        .unwrap();
        assert_eq!(report.leftover, 4);
        assert_eq!(pad.pop::<u32>(), 0xfeed);
    }
}
