//! Container format handling

pub mod wav;

pub use wav::{decode, encode, DecodeOptions, EncodeOptions, FormatTag, WavFormat};
