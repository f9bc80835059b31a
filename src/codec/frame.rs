//! Buffer representation for uncompressed audio

use crate::error::{Error, Result};

/// Planar, normalized audio: one `f32` buffer per channel.
///
/// Samples are nominally in [-1.0, +1.0]; the encoder clamps, the decoder
/// reconstructs whatever the file holds.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// One buffer per channel, all the same length
    pub channel_data: Vec<Vec<f32>>,
}

impl AudioBuffer {
    /// Create an audio buffer from per-channel sample data
    pub fn new(sample_rate: u32, channel_data: Vec<Vec<f32>>) -> Self {
        AudioBuffer {
            sample_rate,
            channel_data,
        }
    }

    /// Create a silent buffer with the given shape
    pub fn silent(sample_rate: u32, channels: usize, frames: usize) -> Self {
        AudioBuffer {
            sample_rate,
            channel_data: vec![vec![0.0; frames]; channels],
        }
    }

    /// Number of channels
    pub fn num_channels(&self) -> usize {
        self.channel_data.len()
    }

    /// Number of sample frames (samples per channel)
    pub fn num_frames(&self) -> usize {
        self.channel_data.first().map_or(0, Vec::len)
    }

    /// Get one channel's samples by index
    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channel_data.get(index).map(Vec::as_slice)
    }

    /// Duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames() as f64 / self.sample_rate as f64
    }

    /// Check the shape invariants required for encoding
    pub fn validate(&self) -> Result<()> {
        if self.channel_data.is_empty() {
            return Err(Error::invalid_input("No channel data"));
        }

        let frames = self.channel_data[0].len();
        for (ch, data) in self.channel_data.iter().enumerate() {
            if data.len() != frames {
                return Err(Error::invalid_input(format!(
                    "Channel {} length mismatch: expected {}, got {}",
                    ch,
                    frames,
                    data.len()
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_buffer_shape() {
        let buffer = AudioBuffer::silent(44100, 2, 441);
        assert_eq!(buffer.num_channels(), 2);
        assert_eq!(buffer.num_frames(), 441);
        assert!((buffer.duration_seconds() - 0.01).abs() < 1e-9);
        assert!(buffer.validate().is_ok());
    }

    #[test]
    fn test_validate_empty() {
        let buffer = AudioBuffer::new(44100, vec![]);
        assert!(buffer.validate().is_err());
    }

    #[test]
    fn test_validate_mismatched_channels() {
        let buffer = AudioBuffer::new(8000, vec![vec![0.0; 4], vec![0.0; 3]]);
        let err = buffer.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_channel_access() {
        let buffer = AudioBuffer::new(8000, vec![vec![0.25, -0.25]]);
        assert_eq!(buffer.channel(0).unwrap(), &[0.25, -0.25]);
        assert!(buffer.channel(1).is_none());
    }
}
