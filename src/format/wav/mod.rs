//! RIFF/WAVE container support
//!
//! A WAV file is a RIFF container: a 12-byte `RIFF`/`WAVE` preamble
//! followed by chunks, each a 4-byte ASCII tag plus a little-endian u32
//! length plus that many payload bytes. Only `fmt ` and `data` are
//! interpreted; every other chunk is skipped wholesale.

pub mod decoder;
pub mod encoder;
pub mod header;

pub use decoder::{decode, DecodeOptions};
pub use encoder::{encode, EncodeOptions};
pub use header::{FormatTag, WavFormat};

use crate::error::Result;
use crate::util::{ByteReader, ByteWriter};

/// WAV format magic numbers
pub const RIFF_MAGIC: &[u8; 4] = b"RIFF";
pub const WAVE_MAGIC: &[u8; 4] = b"WAVE";
pub const FMT_CHUNK: &[u8; 4] = b"fmt ";
pub const DATA_CHUNK: &[u8; 4] = b"data";

/// Size of the fixed encode-side preamble:
/// 12-byte RIFF/WAVE header + 24-byte fmt chunk + 8-byte data chunk header
pub const HEADER_SIZE: usize = 44;

/// Chunk header (4 byte tag + 4 byte size)
#[derive(Debug, Clone, Copy)]
pub struct ChunkHeader {
    pub tag: [u8; 4],
    pub size: u32,
}

impl ChunkHeader {
    /// Read a chunk header from the stream
    pub fn read(reader: &mut ByteReader<'_>) -> Result<Self> {
        Ok(ChunkHeader {
            tag: reader.read_tag()?,
            size: reader.read_u32()?,
        })
    }

    /// Write a chunk header to the stream
    pub fn write(&self, writer: &mut ByteWriter) {
        writer.put_tag(&self.tag);
        writer.put_u32(self.size);
    }
}
