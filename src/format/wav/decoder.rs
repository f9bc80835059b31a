//! WAV decoding: RIFF byte stream -> planar audio

use tracing::{debug, trace};

use super::header::WavFormat;
use super::{ChunkHeader, RIFF_MAGIC, WAVE_MAGIC};
use crate::codec::pcm::{decode_sample, PcmCodec};
use crate::codec::AudioBuffer;
use crate::error::{Error, Result};
use crate::util::{ByteReader, Quantization, SampleFormat};

/// Decode-side configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOptions {
    /// Decode integer PCM on the symmetric quantization scale
    pub symmetric: bool,
}

/// Decode a complete in-memory WAV file.
///
/// Scans the chunk list in order: `fmt ` must precede `data`, unknown
/// chunks are skipped at their declared length, and scanning stops at the
/// first `data` chunk. A `data` length that overstates the bytes actually
/// present is tolerated by decoding only what remains.
pub fn decode(data: &[u8], options: &DecodeOptions) -> Result<AudioBuffer> {
    let mut reader = ByteReader::new(data);

    if &reader.read_tag()? != RIFF_MAGIC {
        return Err(Error::format("Not a valid RIFF file"));
    }

    // Declared file length, unused
    reader.skip(4)?;

    if &reader.read_tag()? != WAVE_MAGIC {
        return Err(Error::format("Not a valid WAVE file"));
    }

    let quantization = Quantization::from_symmetric(options.symmetric);
    let mut format: Option<WavFormat> = None;

    loop {
        let header = ChunkHeader::read(&mut reader)?;
        let chunk_size = header.size as usize;

        match &header.tag {
            b"fmt " => {
                let parsed = WavFormat::read(&mut reader)?;
                debug!(
                    channels = parsed.channels,
                    sample_rate = parsed.sample_rate,
                    bits_per_sample = parsed.bits_per_sample,
                    floating_point = parsed.floating_point(),
                    "parsed fmt chunk"
                );
                // Extension bytes beyond the 16 fixed fields carry nothing we use
                reader.skip(chunk_size.saturating_sub(16))?;
                format = Some(parsed);
            }
            b"data" => {
                let format = format
                    .as_ref()
                    .ok_or_else(|| Error::format("data chunk encountered before fmt chunk"))?;
                return decode_data(&mut reader, chunk_size, format, quantization);
            }
            other => {
                trace!(
                    tag = %String::from_utf8_lossy(other),
                    size = chunk_size,
                    "skipping chunk"
                );
                reader.skip(chunk_size)?;
            }
        }
    }
}

/// Decode the data chunk payload into per-channel sample buffers
fn decode_data(
    reader: &mut ByteReader<'_>,
    declared_size: usize,
    format: &WavFormat,
    quantization: Quantization,
) -> Result<AudioBuffer> {
    if format.block_align == 0 {
        return Err(Error::format("Invalid block align: 0"));
    }

    let sample_format = SampleFormat::from_bits(format.bits_per_sample, format.floating_point())?;
    let codec = PcmCodec::for_decode(sample_format, quantization);

    // Tolerate a chunk length declaration that exceeds the actual payload
    let payload = declared_size.min(reader.remaining());
    let frames = payload / format.block_align as usize;
    let channels = format.channels as usize;

    let mut channel_data = vec![vec![0.0f32; frames]; channels];

    for frame in 0..frames {
        for channel in channel_data.iter_mut() {
            channel[frame] = decode_sample(reader, codec)?;
        }
    }

    Ok(AudioBuffer::new(format.sample_rate, channel_data))
}
