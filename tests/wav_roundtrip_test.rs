//! Round-trip and byte-layout integration tests
//!
//! Covers the codec's observable guarantees: quantization error bounds
//! for integer round trips, exact float round trips, and the fixed
//! 44-byte header layout.

use approx::assert_abs_diff_eq;
use riffwave::{decode, encode, AudioBuffer, DecodeOptions, EncodeOptions};

/// Deterministic pseudo-audio: a couple of mixed sine partials
fn test_signal(frames: usize, phase: f32) -> Vec<f32> {
    (0..frames)
        .map(|i| {
            let t = i as f32 / 100.0 + phase;
            0.6 * (t * 2.0).sin() + 0.3 * (t * 7.0).sin()
        })
        .collect()
}

fn stereo_buffer(frames: usize) -> AudioBuffer {
    AudioBuffer::new(
        44100,
        vec![test_signal(frames, 0.0), test_signal(frames, 0.5)],
    )
}

#[test]
fn test_pcm16_round_trip_within_quantization_error() {
    let original = stereo_buffer(500);
    let bytes = encode(&original, &EncodeOptions::default()).unwrap();
    let decoded = decode(&bytes, &DecodeOptions::default()).unwrap();

    assert_eq!(decoded.num_channels(), 2);
    assert_eq!(decoded.num_frames(), 500);
    assert_eq!(decoded.sample_rate, 44100);

    let tolerance = 1.0 / 32767.0;
    for ch in 0..2 {
        for (a, b) in original.channel_data[ch]
            .iter()
            .zip(&decoded.channel_data[ch])
        {
            assert_abs_diff_eq!(*a, *b, epsilon = tolerance);
        }
    }
}

#[test]
fn test_float32_round_trip_is_exact() {
    let original = stereo_buffer(300);
    let options = EncodeOptions {
        floating_point: true,
        ..Default::default()
    };
    let bytes = encode(&original, &options).unwrap();
    let decoded = decode(&bytes, &DecodeOptions::default()).unwrap();

    assert_eq!(original, decoded);
}

#[test]
fn test_round_trip_all_integer_depths() {
    let original = AudioBuffer::new(22050, vec![test_signal(64, 0.25)]);

    for (bits, tolerance) in [
        (8u16, 1.5f32 / 127.0),
        (16, 1.0 / 32767.0),
        // Below 16 bits of headroom the f32 representation error dominates
        (24, 2.0e-7),
        (32, 1.0e-7),
    ] {
        let options = EncodeOptions {
            bit_depth: Some(bits),
            ..Default::default()
        };
        let bytes = encode(&original, &options).unwrap();
        let decoded = decode(&bytes, &DecodeOptions::default()).unwrap();

        for (a, b) in original.channel_data[0]
            .iter()
            .zip(&decoded.channel_data[0])
        {
            assert_abs_diff_eq!(*a, *b, epsilon = tolerance);
        }
    }
}

#[test]
fn test_symmetric_round_trip() {
    let original = AudioBuffer::new(8000, vec![test_signal(64, 0.1)]);
    let options = EncodeOptions {
        bit_depth: Some(16),
        symmetric: true,
        ..Default::default()
    };
    let bytes = encode(&original, &options).unwrap();
    let decoded = decode(&bytes, &DecodeOptions { symmetric: true }).unwrap();

    // Symmetric scale factor is 32768 on both sides
    for (a, b) in original.channel_data[0]
        .iter()
        .zip(&decoded.channel_data[0])
    {
        assert_abs_diff_eq!(*a, *b, epsilon = 1.0 / 32768.0);
    }
}

#[test]
fn test_8_bit_zero_encodings() {
    let zero = AudioBuffer::new(8000, vec![vec![0.0]]);

    // Asymmetric: 0.0 -> (0.5 * 255).round() = 128 on disk
    let bytes = encode(
        &zero,
        &EncodeOptions {
            bit_depth: Some(8),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(bytes[44], 128);

    // Symmetric: 0.0 -> 128 on disk, decodes back within 1/127.5 of zero
    let options = EncodeOptions {
        bit_depth: Some(8),
        symmetric: true,
        ..Default::default()
    };
    let bytes = encode(&zero, &options).unwrap();
    assert!(bytes[44] == 127 || bytes[44] == 128);

    let decoded = decode(&bytes, &DecodeOptions { symmetric: true }).unwrap();
    assert!(decoded.channel_data[0][0].abs() <= 1.0 / 127.5);
}

#[test]
fn test_full_scale_does_not_overflow() {
    let extremes = AudioBuffer::new(8000, vec![vec![1.0, -1.0]]);
    let bytes = encode(&extremes, &EncodeOptions::default()).unwrap();

    assert_eq!(i16::from_le_bytes([bytes[44], bytes[45]]), 32767);
    assert_eq!(i16::from_le_bytes([bytes[46], bytes[47]]), -32768);
}

#[test]
fn test_out_of_range_samples_clamp_on_encode() {
    let hot = AudioBuffer::new(8000, vec![vec![1.5, -1.5]]);
    let bytes = encode(&hot, &EncodeOptions::default()).unwrap();

    assert_eq!(i16::from_le_bytes([bytes[44], bytes[45]]), 32767);
    assert_eq!(i16::from_le_bytes([bytes[46], bytes[47]]), -32768);
}

#[test]
fn test_header_layout_fixed_offsets() {
    let audio = AudioBuffer::new(48000, vec![test_signal(10, 0.0), test_signal(10, 1.0)]);
    let bytes = encode(&audio, &EncodeOptions::default()).unwrap();

    // 44-byte preamble + 10 frames * 2 channels * 2 bytes
    assert_eq!(bytes.len(), 84);
    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(
        u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]) as usize,
        bytes.len() - 8
    );
    assert_eq!(&bytes[8..12], b"WAVE");
    assert_eq!(&bytes[12..16], b"fmt ");
    assert_eq!(&bytes[36..40], b"data");
    assert_eq!(
        u32::from_le_bytes([bytes[40], bytes[41], bytes[42], bytes[43]]),
        40
    );

    // byte rate = 48000 * 2 channels * 2 bytes
    assert_eq!(
        u32::from_le_bytes([bytes[28], bytes[29], bytes[30], bytes[31]]),
        192000
    );
}

#[test]
fn test_mono_and_many_channel_round_trip() {
    for channels in [1usize, 2, 6] {
        let original = AudioBuffer::new(
            16000,
            (0..channels)
                .map(|c| test_signal(40, c as f32))
                .collect(),
        );
        let bytes = encode(&original, &EncodeOptions::default()).unwrap();
        let decoded = decode(&bytes, &DecodeOptions::default()).unwrap();
        assert_eq!(decoded.num_channels(), channels);
        assert_eq!(decoded.num_frames(), 40);
    }
}
