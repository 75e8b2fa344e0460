//! inkpack - images to packed e-paper buffers
//!
//! Host side of the converter: board definitions, PNG input and output, C
//! header output and background conversion. The conversion itself lives in
//! the `eink-pack` crate. This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod services;
