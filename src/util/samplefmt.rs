//! Audio sample format definitions

use std::fmt;

use crate::error::{Error, Result};

/// On-disk audio sample format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    /// Unsigned 8-bit
    U8,
    /// Signed 16-bit
    I16,
    /// Signed 24-bit (3 bytes, two's complement)
    I24,
    /// Signed 32-bit
    I32,
    /// 32-bit IEEE float
    F32,
    /// 64-bit IEEE float (decode only)
    F64,
}

impl SampleFormat {
    /// Select a format from the fmt-chunk bit depth and float flag.
    ///
    /// The supported set is closed: {8, 16, 24, 32}-bit integer PCM and
    /// 32/64-bit IEEE float. Anything else has no codec entry.
    pub fn from_bits(bits_per_sample: u16, floating_point: bool) -> Result<Self> {
        match (bits_per_sample, floating_point) {
            (8, false) => Ok(SampleFormat::U8),
            (16, false) => Ok(SampleFormat::I16),
            (24, false) => Ok(SampleFormat::I24),
            (32, false) => Ok(SampleFormat::I32),
            (32, true) => Ok(SampleFormat::F32),
            (64, true) => Ok(SampleFormat::F64),
            (bits, _) => Err(Error::unsupported(format!(
                "Not supported bit depth: {}",
                bits
            ))),
        }
    }

    /// Get the size in bytes of one sample
    pub fn sample_size(&self) -> usize {
        match self {
            SampleFormat::U8 => 1,
            SampleFormat::I16 => 2,
            SampleFormat::I24 => 3,
            SampleFormat::I32 | SampleFormat::F32 => 4,
            SampleFormat::F64 => 8,
        }
    }

    /// Get the bit depth of one sample
    pub fn bits_per_sample(&self) -> u16 {
        (self.sample_size() * 8) as u16
    }

    /// Check if this is a floating point format
    pub fn is_float(&self) -> bool {
        matches!(self, SampleFormat::F32 | SampleFormat::F64)
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SampleFormat::U8 => "u8",
            SampleFormat::I16 => "s16",
            SampleFormat::I24 => "s24",
            SampleFormat::I32 => "s32",
            SampleFormat::F32 => "f32",
            SampleFormat::F64 => "f64",
        };
        write!(f, "{}", name)
    }
}

/// Integer quantization scale selection.
///
/// Asymmetric uses the full integer range with distinct positive and
/// negative scale factors (the canonical WAV convention); symmetric uses
/// one scale factor on both sides of zero. Float formats ignore this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Quantization {
    /// Distinct positive/negative scale factors
    #[default]
    Asymmetric,
    /// Single scale factor around zero
    Symmetric,
}

impl Quantization {
    /// Map the caller-facing `symmetric` flag to a quantization mode
    pub fn from_symmetric(symmetric: bool) -> Self {
        if symmetric {
            Quantization::Symmetric
        } else {
            Quantization::Asymmetric
        }
    }
}
