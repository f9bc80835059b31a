//! PCM sample decoding (on-disk bytes -> normalized f32)

use super::PcmCodec;
use crate::error::Result;
use crate::util::{ByteReader, Quantization, SampleFormat};

/// Decode one sample from the reader using the given codec entry.
///
/// Intermediate arithmetic is f64; the result narrows to f32 at the end.
pub fn decode_sample(reader: &mut ByteReader<'_>, codec: PcmCodec) -> Result<f32> {
    let sample = match (codec.format, codec.quantization) {
        (SampleFormat::U8, Quantization::Asymmetric) => u8_asymmetric(reader.read_u8()?),
        (SampleFormat::U8, Quantization::Symmetric) => u8_symmetric(reader.read_u8()?),
        (SampleFormat::I16, Quantization::Asymmetric) => i16_asymmetric(reader.read_i16()?),
        (SampleFormat::I16, Quantization::Symmetric) => i16_symmetric(reader.read_i16()?),
        (SampleFormat::I24, Quantization::Asymmetric) => i24_asymmetric(reader.read_bytes3()?),
        (SampleFormat::I24, Quantization::Symmetric) => i24_symmetric(reader.read_bytes3()?),
        (SampleFormat::I32, Quantization::Asymmetric) => i32_asymmetric(reader.read_i32()?),
        (SampleFormat::I32, Quantization::Symmetric) => i32_symmetric(reader.read_i32()?),
        // Floats are stored normalized already; quantization does not apply
        (SampleFormat::F32, _) => reader.read_f32()?,
        (SampleFormat::F64, _) => reader.read_f64()? as f32,
    };
    Ok(sample)
}

fn u8_asymmetric(byte: u8) -> f32 {
    let value = byte as f64 - 128.0;
    let scaled = if value < 0.0 {
        value / 128.0
    } else {
        value / 127.0
    };
    scaled as f32
}

fn u8_symmetric(byte: u8) -> f32 {
    ((byte as f64 - 127.5) / 127.5) as f32
}

fn i16_asymmetric(value: i16) -> f32 {
    let value = value as f64;
    let scaled = if value < 0.0 {
        value / 32768.0
    } else {
        value / 32767.0
    };
    scaled as f32
}

fn i16_symmetric(value: i16) -> f32 {
    (value as f64 / 32768.0) as f32
}

/// Assemble a 24-bit two's-complement value from 3 little-endian bytes
fn i24_from_bytes(bytes: [u8; 3]) -> i32 {
    let unsigned =
        bytes[0] as u32 | ((bytes[1] as u32) << 8) | ((bytes[2] as u32) << 16);
    // Strict >, so exactly 0x800000 stays positive
    if unsigned > 0x80_0000 {
        unsigned as i32 - 0x100_0000
    } else {
        unsigned as i32
    }
}

fn i24_asymmetric(bytes: [u8; 3]) -> f32 {
    let value = i24_from_bytes(bytes) as f64;
    let scaled = if value < 0.0 {
        value / 8_388_608.0
    } else {
        value / 8_388_607.0
    };
    scaled as f32
}

fn i24_symmetric(bytes: [u8; 3]) -> f32 {
    (i24_from_bytes(bytes) as f64 / 8_388_608.0) as f32
}

fn i32_asymmetric(value: i32) -> f32 {
    let value = value as f64;
    let scaled = if value < 0.0 {
        value / 2_147_483_648.0
    } else {
        value / 2_147_483_647.0
    };
    scaled as f32
}

fn i32_symmetric(value: i32) -> f32 {
    (value as f64 / 2_147_483_648.0) as f32
}
