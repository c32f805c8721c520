//! Fixed-capacity LIFO scratch buffer for plain-old-data values.
//!
//! This is the leaf crate of the workspace. It provides [`ScratchPad`], a
//! byte arena that packs fixed-size values onto a stack and unpacks them in
//! reverse order, together with its configuration and error types.
//!
//! # Layout
//!
//! ```text
//! ScratchPad
//! ├── storage: Box<[u8]>   (capacity bytes, allocated once)
//! └── offset:  usize       (high-water mark, 0..=capacity)
//!
//!  0                offset               capacity
//!  ├──v1──┼──v2──┼─v3─┤░░░░░░░░░░░░░░░░░░░░┤
//!                     ▲ push writes here, pop reads the span just below
//! ```
//!
//! # Value eligibility
//!
//! Only [`bytemuck::Pod`] types can be stored: a fixed static size, no
//! padding, no pointers, and every bit pattern a valid value. The pad stores
//! no type tags, so callers must pop exactly the types they pushed, in
//! reverse order.
//!
//! # Contract violations
//!
//! Pushing past capacity and popping more bytes than are held are
//! programmer errors. [`ScratchPad::push`] and [`ScratchPad::pop`] panic on
//! them in every build profile; [`ScratchPad::try_push`] and
//! [`ScratchPad::try_pop`] report them as [`PadError`] for callers that
//! propagate errors upward. Neither form ever mutates state on failure.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod pad;

pub use bytemuck::Pod;
pub use config::PadConfig;
pub use error::{ConfigError, PadError};
pub use pad::ScratchPad;
