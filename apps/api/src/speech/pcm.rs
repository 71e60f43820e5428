//! Decoding for the speech-synthesis payload: base64 text wrapping raw
//! 16-bit little-endian PCM at a fixed 24 kHz mono rate.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use thiserror::Error;

/// Sample rate of all synthesized speech payloads.
pub const SAMPLE_RATE_HZ: u32 = 24_000;
/// Synthesized speech is mono.
pub const CHANNELS: u16 = 1;

const BITS_PER_SAMPLE: u16 = 16;

#[derive(Debug, Error)]
pub enum AudioDecodeError {
    #[error("invalid base64 audio payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("audio payload is empty")]
    Empty,

    #[error("audio payload has an odd byte length ({0})")]
    Truncated(usize),
}

/// A decoded, playable audio buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    samples: Vec<i16>,
    pub sample_rate: u32,
    pub channels: u16,
}

impl AudioClip {
    /// Decodes an inline base64 payload into a 24 kHz mono clip.
    pub fn from_base64_pcm(payload: &str) -> Result<Self, AudioDecodeError> {
        let bytes = BASE64.decode(payload.trim())?;
        if bytes.is_empty() {
            return Err(AudioDecodeError::Empty);
        }
        if bytes.len() % 2 != 0 {
            return Err(AudioDecodeError::Truncated(bytes.len()));
        }

        let samples = bytes
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        Ok(Self {
            samples,
            sample_rate: SAMPLE_RATE_HZ,
            channels: CHANNELS,
        })
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / (self.sample_rate as f32 * self.channels as f32)
    }

    /// Frames the clip as a RIFF/WAVE byte stream for delivery.
    pub fn to_wav(&self) -> Vec<u8> {
        let data_len = (self.samples.len() * 2) as u32;
        let byte_rate = self.sample_rate * self.channels as u32 * 2;
        let block_align = self.channels * 2;

        let mut wav = Vec::with_capacity(44 + data_len as usize);
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&(36 + data_len).to_le_bytes());
        wav.extend_from_slice(b"WAVE");

        wav.extend_from_slice(b"fmt ");
        wav.extend_from_slice(&16u32.to_le_bytes()); // PCM fmt chunk size
        wav.extend_from_slice(&1u16.to_le_bytes()); // PCM, uncompressed
        wav.extend_from_slice(&self.channels.to_le_bytes());
        wav.extend_from_slice(&self.sample_rate.to_le_bytes());
        wav.extend_from_slice(&byte_rate.to_le_bytes());
        wav.extend_from_slice(&block_align.to_le_bytes());
        wav.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

        wav.extend_from_slice(b"data");
        wav.extend_from_slice(&data_len.to_le_bytes());
        for sample in &self.samples {
            wav.extend_from_slice(&sample.to_le_bytes());
        }

        wav
    }
}
