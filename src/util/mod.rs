//! Common utilities and data structures

pub mod cursor;
pub mod samplefmt;

pub use cursor::{ByteReader, ByteWriter};
pub use samplefmt::{Quantization, SampleFormat};
