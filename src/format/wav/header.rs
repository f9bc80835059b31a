//! WAV format chunk structures and parsing

use crate::error::{Error, Result};
use crate::util::{ByteReader, ByteWriter, SampleFormat};

/// WAV format tag identifying the sample encoding.
///
/// Only the two linear-PCM codes are recognized; any other tag fails
/// decoding (compressed encodings are out of scope).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum FormatTag {
    /// Integer PCM (uncompressed)
    Pcm = 0x0001,
    /// IEEE float PCM
    IeeeFloat = 0x0003,
}

impl TryFrom<u16> for FormatTag {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        match value {
            0x0001 => Ok(FormatTag::Pcm),
            0x0003 => Ok(FormatTag::IeeeFloat),
            other => Err(Error::format(format!(
                "Unsupported format tag in WAV file: {:#06x}",
                other
            ))),
        }
    }
}

impl From<FormatTag> for u16 {
    fn from(tag: FormatTag) -> Self {
        tag as u16
    }
}

/// WAV format chunk data
#[derive(Debug, Clone)]
pub struct WavFormat {
    /// Format tag (sample encoding)
    pub format_tag: FormatTag,
    /// Number of channels (1 = mono, 2 = stereo)
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Average bytes per second; stored as read, never validated
    pub byte_rate: u32,
    /// Bytes per multi-channel sample frame
    pub block_align: u16,
    /// Bits per sample
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Parse the 16 fixed fmt-chunk bytes from the reader.
    ///
    /// Any declared chunk length beyond 16 is the caller's to skip.
    pub fn read(reader: &mut ByteReader<'_>) -> Result<Self> {
        let format_tag = FormatTag::try_from(reader.read_u16()?)?;

        Ok(WavFormat {
            format_tag,
            channels: reader.read_u16()?,
            sample_rate: reader.read_u32()?,
            byte_rate: reader.read_u32()?,
            block_align: reader.read_u16()?,
            bits_per_sample: reader.read_u16()?,
        })
    }

    /// Write the 16 fixed fmt-chunk bytes
    pub fn write(&self, writer: &mut ByteWriter) {
        writer.put_u16(self.format_tag.into());
        writer.put_u16(self.channels);
        writer.put_u32(self.sample_rate);
        writer.put_u32(self.byte_rate);
        writer.put_u16(self.block_align);
        writer.put_u16(self.bits_per_sample);
    }

    /// Build an encode-side descriptor with derived fields computed.
    ///
    /// The block align and byte rate are stored in 16- and 32-bit header
    /// fields; shapes whose derived values do not fit are rejected rather
    /// than written wrapped.
    pub fn for_encode(format: SampleFormat, channels: u16, sample_rate: u32) -> Result<Self> {
        let format_tag = if format.is_float() {
            FormatTag::IeeeFloat
        } else {
            FormatTag::Pcm
        };

        let block_align = channels as u32 * format.sample_size() as u32;
        if block_align > u16::MAX as u32 {
            return Err(Error::invalid_input(format!(
                "Block align {} does not fit the 16-bit header field",
                block_align
            )));
        }

        let byte_rate = sample_rate as u64 * block_align as u64;
        if byte_rate > u32::MAX as u64 {
            return Err(Error::invalid_input(format!(
                "Byte rate {} does not fit the 32-bit header field",
                byte_rate
            )));
        }

        Ok(WavFormat {
            format_tag,
            channels,
            sample_rate,
            byte_rate: byte_rate as u32,
            block_align: block_align as u16,
            bits_per_sample: format.bits_per_sample(),
        })
    }

    /// Whether samples are IEEE floats
    pub fn floating_point(&self) -> bool {
        self.format_tag == FormatTag::IeeeFloat
    }
}
