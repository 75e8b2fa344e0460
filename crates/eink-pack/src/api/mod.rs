//! Public API for the eink-pack crate.
//!
//! [`convert`] runs one frame through the pipeline for a [`Target`];
//! [`RequestSequencer`] lets a host run conversions in the background and
//! keep only the newest result. [`DitherError`] is the single error type.

mod error;
mod params;
mod pipeline;
mod sequencer;
mod target;

pub use error::DitherError;
pub use params::{ConvertParams, DEFAULT_THRESHOLD};
pub use pipeline::convert;
pub use sequencer::{RequestSequencer, Ticket};
pub use target::Target;
