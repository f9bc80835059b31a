//! PCM (Pulse Code Modulation) sample codec
//!
//! Converts between on-disk sample representations and normalized `f32`
//! samples. Each supported (sample format, quantization) pair has one
//! decode and one encode rule; dispatch is an explicit `match`, so the
//! supported set is closed and checked at compile time.
//!
//! The integer scaling rules are deliberately uneven: asymmetric paths
//! clamp the float before scaling and use distinct positive/negative
//! scale factors, symmetric paths scale first and clamp the resulting
//! integer. This matches the legacy container convention bit for bit.

pub mod decoder;
pub mod encoder;

pub use decoder::decode_sample;
pub use encoder::encode_sample;

use crate::error::{Error, Result};
use crate::util::{Quantization, SampleFormat};

/// A resolved sample codec entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmCodec {
    /// On-disk sample format
    pub format: SampleFormat,
    /// Integer quantization mode (ignored for float formats)
    pub quantization: Quantization,
}

impl PcmCodec {
    /// Resolve a decode-direction codec entry.
    ///
    /// Every format in the closed set decodes, including `F64`.
    pub fn for_decode(format: SampleFormat, quantization: Quantization) -> Self {
        PcmCodec {
            format,
            quantization,
        }
    }

    /// Resolve an encode-direction codec entry.
    ///
    /// `F64` is decode-only; there is no float64 write path.
    pub fn for_encode(format: SampleFormat, quantization: Quantization) -> Result<Self> {
        if format == SampleFormat::F64 {
            return Err(Error::unsupported("No 64-bit float encode path"));
        }
        Ok(PcmCodec {
            format,
            quantization,
        })
    }

    /// Bytes occupied by one encoded sample
    pub fn sample_size(&self) -> usize {
        self.format.sample_size()
    }
}
