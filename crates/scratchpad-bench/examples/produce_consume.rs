//! Reference produce/consume session on a 1KB scratch pad.
//!
//! Batch sizes count down from 3 with element values 1, 2, 3, ...; the
//! consumer prints each batch sum as it decodes it. Run with
//! `RUST_LOG=scratchpad_batch=trace` to see per-batch events.

use scratchpad_batch::{run_session, CountdownBatches, Element, RunningValues};
use scratchpad_core::{PadConfig, ScratchPad};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Scratch pad produce/consume ===\n");

    let mut pad = match ScratchPad::with_config(&PadConfig::default()) {
        Ok(pad) => pad,
        Err(err) => {
            eprintln!("invalid pad config: {err}");
            std::process::exit(1);
        }
    };

    let mut publish = |sum: Element| println!("{sum}");
    match run_session(
        &mut pad,
        CountdownBatches::new(3),
        RunningValues::new(),
        &mut publish,
    ) {
        Ok(report) => {
            println!(
                "\n{} batches, {} elements, {} bytes through a {}-byte pad",
                report.consumed.batches,
                report.consumed.elements,
                report.consumed.bytes,
                pad.capacity()
            );
        }
        Err(err) => {
            eprintln!("session aborted: {err}");
            std::process::exit(1);
        }
    }
}
