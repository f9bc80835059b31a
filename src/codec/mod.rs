//! Codec implementations

pub mod frame;
pub mod pcm;

pub use frame::AudioBuffer;
pub use pcm::{decode_sample, encode_sample, PcmCodec};
