//! WAV encoding: planar audio -> RIFF byte stream

use bytes::Bytes;
use tracing::debug;

use super::header::WavFormat;
use super::{ChunkHeader, DATA_CHUNK, FMT_CHUNK, HEADER_SIZE, RIFF_MAGIC, WAVE_MAGIC};
use crate::codec::pcm::{encode_sample, PcmCodec};
use crate::codec::AudioBuffer;
use crate::error::{Error, Result};
use crate::util::{ByteWriter, Quantization, SampleFormat};

/// Encode-side configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    /// Write 32-bit IEEE float PCM; overrides `bit_depth` and `symmetric`
    pub floating_point: bool,
    /// Integer PCM bit depth, one of {8, 16, 24, 32}; defaults to 16
    pub bit_depth: Option<u16>,
    /// Encode integer PCM on the symmetric quantization scale
    pub symmetric: bool,
}

impl EncodeOptions {
    /// Resolve the codec entry these options select
    fn codec(&self) -> Result<PcmCodec> {
        let format = if self.floating_point {
            SampleFormat::F32
        } else {
            SampleFormat::from_bits(self.bit_depth.unwrap_or(16), false)?
        };
        PcmCodec::for_encode(format, Quantization::from_symmetric(self.symmetric))
    }
}

/// Encode planar audio into a complete WAV file.
///
/// Single deterministic pass: the output is exactly 44 header bytes plus
/// `frames * channels * bytes_per_sample` payload bytes, interleaved
/// frame-major.
pub fn encode(audio: &AudioBuffer, options: &EncodeOptions) -> Result<Bytes> {
    audio.validate()?;

    let channels = audio.num_channels();
    if channels > u16::MAX as usize {
        return Err(Error::invalid_input(format!(
            "Too many channels: {}",
            channels
        )));
    }

    let codec = options.codec()?;
    let frames = audio.num_frames();

    // Payload plus the 44-byte preamble must fit the u32 size fields
    let data_size = frames
        .checked_mul(channels)
        .and_then(|n| n.checked_mul(codec.sample_size()))
        .filter(|&n| n <= u32::MAX as usize - HEADER_SIZE)
        .ok_or_else(|| Error::invalid_input("Audio data too large for a WAV file"))?;

    let format = WavFormat::for_encode(codec.format, channels as u16, audio.sample_rate)?;
    debug!(
        channels,
        frames,
        sample_rate = audio.sample_rate,
        format = %codec.format,
        "encoding WAV"
    );

    let mut writer = ByteWriter::with_capacity(HEADER_SIZE + data_size);

    writer.put_tag(RIFF_MAGIC);
    writer.put_u32((HEADER_SIZE + data_size - 8) as u32);
    writer.put_tag(WAVE_MAGIC);

    ChunkHeader {
        tag: *FMT_CHUNK,
        size: 16,
    }
    .write(&mut writer);
    format.write(&mut writer);

    ChunkHeader {
        tag: *DATA_CHUNK,
        size: data_size as u32,
    }
    .write(&mut writer);

    for frame in 0..frames {
        for channel in &audio.channel_data {
            encode_sample(&mut writer, codec, channel[frame])?;
        }
    }

    debug_assert_eq!(writer.len(), HEADER_SIZE + data_size);
    Ok(writer.freeze())
}
