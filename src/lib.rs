//! riffwave - RIFF/WAVE container codec in pure Rust
//!
//! Decodes a complete in-memory RIFF/WAVE byte stream into per-channel
//! `f32` sample buffers plus format metadata, and encodes per-channel
//! `f32` sample buffers back into a valid RIFF/WAVE byte stream. Linear
//! PCM ({8, 16, 24, 32}-bit integer) and IEEE-float PCM (32-bit, plus
//! 64-bit decode) are supported; compressed encodings are not.
//!
//! # Architecture
//!
//! - `format`: RIFF/WAVE container parsing and writing
//! - `codec`: PCM sample conversion and the planar audio buffer
//! - `util`: byte cursors and sample format definitions
//!
//! Both operations are synchronous pure functions over their input
//! buffers; concurrency across files is the caller's concern.
//!
//! # Example
//!
//! ```
//! use riffwave::{decode, encode, AudioBuffer, DecodeOptions, EncodeOptions};
//!
//! let audio = AudioBuffer::new(8000, vec![vec![0.5, -0.5]]);
//! let bytes = encode(&audio, &EncodeOptions::default())?;
//! let decoded = decode(&bytes, &DecodeOptions::default())?;
//! assert_eq!(decoded.num_frames(), 2);
//! # Ok::<(), riffwave::Error>(())
//! ```

pub mod codec;
pub mod error;
pub mod format;
pub mod util;

pub use codec::AudioBuffer;
pub use error::{Error, Result};
pub use format::wav::{decode, encode, DecodeOptions, EncodeOptions};

/// riffwave version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const VERSION_MAJOR: u32 = 0;
pub const VERSION_MINOR: u32 = 1;
pub const VERSION_PATCH: u32 = 0;
