//! Byte cursors over in-memory buffers
//!
//! All RIFF/WAVE fields are little-endian. `ByteReader` walks a borrowed
//! slice with an explicit offset and bounds-checks every access, so a
//! truncated file surfaces as `Error::TruncatedData` instead of a panic.
//! `ByteWriter` is the mirror image over a growable `BytesMut`.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{Error, Result};

/// Bounds-checked little-endian reader over a byte slice
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Create a reader positioned at the start of `data`
    pub fn new(data: &'a [u8]) -> Self {
        ByteReader { data, pos: 0 }
    }

    /// Current offset from the start of the buffer
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the current offset and the end of the buffer
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Advance the offset by `n` bytes
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n)?;
        Ok(())
    }

    /// Take the next `n` bytes, advancing the offset
    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(Error::TruncatedData {
                need: n,
                have: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Read a 4-byte chunk tag
    pub fn read_tag(&mut self) -> Result<[u8; 4]> {
        let bytes = self.take(4)?;
        let mut tag = [0u8; 4];
        tag.copy_from_slice(bytes);
        Ok(tag)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        let b = self.take(2)?;
        Ok(i16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let b = self.take(4)?;
        Ok(i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        let b = self.take(4)?;
        Ok(f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        let b = self.take(8)?;
        Ok(f64::from_le_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    /// Read the next 3 bytes as a little-endian triple
    pub fn read_bytes3(&mut self) -> Result<[u8; 3]> {
        let b = self.take(3)?;
        Ok([b[0], b[1], b[2]])
    }
}

/// Little-endian writer that accumulates into a `BytesMut`
#[derive(Debug, Default)]
pub struct ByteWriter {
    buf: BytesMut,
}

impl ByteWriter {
    /// Create a writer with a pre-reserved capacity
    pub fn with_capacity(capacity: usize) -> Self {
        ByteWriter {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Bytes written so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check whether nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Write a 4-byte chunk tag
    pub fn put_tag(&mut self, tag: &[u8; 4]) {
        self.buf.put_slice(tag);
    }

    pub fn put_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    pub fn put_u16(&mut self, value: u16) {
        self.buf.put_u16_le(value);
    }

    pub fn put_i16(&mut self, value: i16) {
        self.buf.put_i16_le(value);
    }

    pub fn put_u32(&mut self, value: u32) {
        self.buf.put_u32_le(value);
    }

    pub fn put_i32(&mut self, value: i32) {
        self.buf.put_i32_le(value);
    }

    pub fn put_f32(&mut self, value: f32) {
        self.buf.put_f32_le(value);
    }

    /// Write 3 raw bytes (24-bit samples)
    pub fn put_bytes3(&mut self, bytes: [u8; 3]) {
        self.buf.put_slice(&bytes);
    }

    /// Freeze the accumulated bytes into an immutable buffer
    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }
}
