//! PCM sample encoding (normalized f32 -> on-disk bytes)

use super::PcmCodec;
use crate::error::{Error, Result};
use crate::util::{ByteWriter, Quantization, SampleFormat};

/// Encode one sample into the writer using the given codec entry.
///
/// Rounding is half-away-from-zero (`f64::round`) throughout. Asymmetric
/// integer paths clamp the input float before scaling; symmetric paths
/// clamp the scaled integer instead. Floats are stored raw with no clamp.
pub fn encode_sample(writer: &mut ByteWriter, codec: PcmCodec, value: f32) -> Result<()> {
    match (codec.format, codec.quantization) {
        (SampleFormat::U8, Quantization::Asymmetric) => writer.put_u8(u8_asymmetric(value)),
        (SampleFormat::U8, Quantization::Symmetric) => writer.put_u8(u8_symmetric(value)),
        (SampleFormat::I16, Quantization::Asymmetric) => writer.put_i16(i16_asymmetric(value)),
        (SampleFormat::I16, Quantization::Symmetric) => writer.put_i16(i16_symmetric(value)),
        (SampleFormat::I24, Quantization::Asymmetric) => writer.put_bytes3(i24_asymmetric(value)),
        (SampleFormat::I24, Quantization::Symmetric) => writer.put_bytes3(i24_symmetric(value)),
        (SampleFormat::I32, Quantization::Asymmetric) => writer.put_i32(i32_asymmetric(value)),
        (SampleFormat::I32, Quantization::Symmetric) => writer.put_i32(i32_symmetric(value)),
        (SampleFormat::F32, _) => writer.put_f32(value),
        (SampleFormat::F64, _) => {
            // PcmCodec::for_encode rejects F64 before we get here
            return Err(Error::unsupported("No 64-bit float encode path"));
        }
    }
    Ok(())
}

fn clamp_unit(value: f32) -> f64 {
    (value as f64).clamp(-1.0, 1.0)
}

fn u8_asymmetric(value: f32) -> u8 {
    let scaled = (clamp_unit(value) * 0.5 + 0.5) * 255.0;
    scaled.round() as u8
}

fn u8_symmetric(value: f32) -> u8 {
    let scaled = (value as f64 * 128.0).round() + 128.0;
    scaled.clamp(0.0, 255.0) as u8
}

fn i16_asymmetric(value: f32) -> i16 {
    let value = clamp_unit(value);
    let scaled = if value < 0.0 {
        value * 32768.0
    } else {
        value * 32767.0
    };
    scaled.round() as i16
}

fn i16_symmetric(value: f32) -> i16 {
    let scaled = (value as f64 * 32768.0).round();
    scaled.clamp(-32768.0, 32767.0) as i16
}

/// Split a 24-bit value into 3 little-endian bytes
fn i24_to_bytes(value: u32) -> [u8; 3] {
    [
        (value & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        ((value >> 16) & 0xFF) as u8,
    ]
}

fn i24_asymmetric(value: f32) -> [u8; 3] {
    let value = clamp_unit(value);
    // Negative values are stored biased by 2^24 rather than sign-extended
    let scaled = if value < 0.0 {
        16_777_216.0 + value * 8_388_608.0
    } else {
        value * 8_388_607.0
    };
    i24_to_bytes(scaled.round() as u32)
}

fn i24_symmetric(value: f32) -> [u8; 3] {
    let scaled = (value as f64 * 8_388_608.0).round();
    let clamped = scaled.clamp(-8_388_608.0, 8_388_607.0) as i32;
    i24_to_bytes(clamped as u32)
}

fn i32_asymmetric(value: f32) -> i32 {
    let value = clamp_unit(value);
    let scaled = if value < 0.0 {
        value * 2_147_483_648.0
    } else {
        value * 2_147_483_647.0
    };
    scaled.round() as i32
}

fn i32_symmetric(value: f32) -> i32 {
    let scaled = (value as f64 * 2_147_483_648.0).round();
    scaled.clamp(-2_147_483_648.0, 2_147_483_647.0) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_asymmetric_range() {
        assert_eq!(u8_asymmetric(-1.0), 0);
        assert_eq!(u8_asymmetric(1.0), 255);
        // 0.0 -> 0.5 * 255 = 127.5, rounds away from zero to 128
        assert_eq!(u8_asymmetric(0.0), 128);
        // Out-of-range input clamps before scaling
        assert_eq!(u8_asymmetric(2.0), 255);
        assert_eq!(u8_asymmetric(-2.0), 0);
    }

    #[test]
    fn test_u8_symmetric_range() {
        assert_eq!(u8_symmetric(0.0), 128);
        assert_eq!(u8_symmetric(-1.0), 0);
        // +1.0 scales to 256 and clamps post-scale
        assert_eq!(u8_symmetric(1.0), 255);
    }

    #[test]
    fn test_i16_boundaries_do_not_overflow() {
        assert_eq!(i16_asymmetric(1.0), 32767);
        assert_eq!(i16_asymmetric(-1.0), -32768);
        assert_eq!(i16_symmetric(1.0), 32767);
        assert_eq!(i16_symmetric(-1.0), -32768);
    }

    #[test]
    fn test_i16_half_sample_rounding() {
        // 0.5 * 32767 = 16383.5 rounds away from zero to 16384
        assert_eq!(i16_asymmetric(0.5), 16384);
        assert_eq!(i16_asymmetric(-0.5), -16384);
    }

    #[test]
    fn test_i24_bias_encoding() {
        assert_eq!(i24_asymmetric(0.0), [0x00, 0x00, 0x00]);
        assert_eq!(i24_asymmetric(1.0), [0xFF, 0xFF, 0x7F]);
        // -1.0 -> 2^24 - 2^23 = 0x800000
        assert_eq!(i24_asymmetric(-1.0), [0x00, 0x00, 0x80]);

        assert_eq!(i24_symmetric(1.0), [0xFF, 0xFF, 0x7F]);
        assert_eq!(i24_symmetric(-1.0), [0x00, 0x00, 0x80]);
    }

    #[test]
    fn test_i32_boundaries() {
        assert_eq!(i32_asymmetric(1.0), i32::MAX);
        assert_eq!(i32_asymmetric(-1.0), i32::MIN);
        assert_eq!(i32_symmetric(1.0), i32::MAX);
        assert_eq!(i32_symmetric(-1.0), i32::MIN);
    }

    #[test]
    fn test_f32_no_clamp() {
        let mut writer = ByteWriter::default();
        let codec = PcmCodec::for_encode(SampleFormat::F32, Quantization::Asymmetric).unwrap();
        encode_sample(&mut writer, codec, 1.5).unwrap();
        assert_eq!(writer.freeze().as_ref(), &1.5f32.to_le_bytes());
    }
}
