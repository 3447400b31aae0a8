//! Canonical 16-bit PCM WAV container.
//!
//! Layout (all integers little-endian):
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0  | 4 | `"RIFF"` |
//! | 4  | 4 | `36 + data_len` |
//! | 8  | 4 | `"WAVE"` |
//! | 12 | 4 | `"fmt "` |
//! | 16 | 4 | `16` (fmt chunk size) |
//! | 20 | 2 | `1` (PCM) |
//! | 22 | 2 | channels |
//! | 24 | 4 | sample rate |
//! | 28 | 4 | byte rate = rate * channels * 2 |
//! | 32 | 2 | block align = channels * 2 |
//! | 34 | 2 | `16` (bits per sample) |
//! | 36 | 4 | `"data"` |
//! | 40 | 4 | data_len |
//!
//! followed by frame-interleaved `i16` samples.

use std::io::Write;

use tracing::debug;

use super::sample_buffer::SampleBuffer;
use crate::error::{FrameFxError, Result};

pub const WAV_HEADER_LEN: usize = 44;

const PCM_FORMAT: u16 = 1;
const FMT_CHUNK_LEN: u32 = 16;
const BITS_PER_SAMPLE: u16 = 16;

/// Largest channel count whose block align fits the 16-bit header field.
pub const MAX_CHANNELS: u16 = u16::MAX / (BITS_PER_SAMPLE / 8);

/// The fixed 44-byte header of a 16-bit PCM WAV stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    pub channels: u16,
    pub sample_rate: u32,
    pub data_len: u32,
}

impl WavHeader {
    /// Header describing the encoded form of `buffer`.
    pub fn for_buffer(buffer: &SampleBuffer) -> Self {
        // SampleBuffer::new bounds channels and data length to these widths.
        WavHeader {
            channels: buffer.number_of_channels() as u16,
            sample_rate: buffer.sample_rate(),
            data_len: buffer.data_len() as u32,
        }
    }

    /// Bytes per sample frame, or `None` if it overflows the 16-bit field.
    pub fn block_align(&self) -> Option<u16> {
        self.channels.checked_mul(BITS_PER_SAMPLE / 8)
    }

    /// Bytes per second, or `None` if it overflows the 32-bit field.
    pub fn byte_rate(&self) -> Option<u32> {
        self.block_align()
            .and_then(|align| self.sample_rate.checked_mul(align as u32))
    }

    /// Number of sample frames the data chunk holds.
    pub fn frame_count(&self) -> usize {
        match self.block_align() {
            Some(align) if align > 0 => self.data_len as usize / align as usize,
            _ => 0,
        }
    }

    /// Serialize the header. Rate fields that overflow are written as 0.
    pub fn to_bytes(&self) -> [u8; WAV_HEADER_LEN] {
        let mut out = [0u8; WAV_HEADER_LEN];
        out[0..4].copy_from_slice(b"RIFF");
        out[4..8].copy_from_slice(&self.data_len.wrapping_add(36).to_le_bytes());
        out[8..12].copy_from_slice(b"WAVE");
        out[12..16].copy_from_slice(b"fmt ");
        out[16..20].copy_from_slice(&FMT_CHUNK_LEN.to_le_bytes());
        out[20..22].copy_from_slice(&PCM_FORMAT.to_le_bytes());
        out[22..24].copy_from_slice(&self.channels.to_le_bytes());
        out[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        out[28..32].copy_from_slice(&self.byte_rate().unwrap_or(0).to_le_bytes());
        out[32..34].copy_from_slice(&self.block_align().unwrap_or(0).to_le_bytes());
        out[34..36].copy_from_slice(&BITS_PER_SAMPLE.to_le_bytes());
        out[36..40].copy_from_slice(b"data");
        out[40..44].copy_from_slice(&self.data_len.to_le_bytes());
        out
    }

    /// Parse the header written by `to_bytes`.
    ///
    /// Only the canonical layout is accepted: `fmt ` directly followed by
    /// `data`, 16-bit PCM, consistent size fields.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < WAV_HEADER_LEN {
            return Err(FrameFxError::InvalidHeader(format!(
                "need {WAV_HEADER_LEN} bytes, got {}",
                bytes.len()
            )));
        }

        let tag = |at: usize| [bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]];
        let u16_at = |at: usize| u16::from_le_bytes([bytes[at], bytes[at + 1]]);
        let u32_at =
            |at: usize| u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]);

        if tag(0) != *b"RIFF" || tag(8) != *b"WAVE" {
            return Err(FrameFxError::InvalidHeader("not a RIFF/WAVE stream".into()));
        }
        if tag(12) != *b"fmt " || u32_at(16) != FMT_CHUNK_LEN {
            return Err(FrameFxError::InvalidHeader("missing 16-byte fmt chunk".into()));
        }
        if u16_at(20) != PCM_FORMAT || u16_at(34) != BITS_PER_SAMPLE {
            return Err(FrameFxError::InvalidHeader(format!(
                "unsupported format {} with {} bits per sample",
                u16_at(20),
                u16_at(34)
            )));
        }
        if tag(36) != *b"data" {
            return Err(FrameFxError::InvalidHeader("data chunk does not follow fmt".into()));
        }

        let header = WavHeader {
            channels: u16_at(22),
            sample_rate: u32_at(24),
            data_len: u32_at(40),
        };

        if header.channels == 0 {
            return Err(FrameFxError::InvalidHeader("zero channels".into()));
        }
        if header.channels > MAX_CHANNELS {
            return Err(FrameFxError::InvalidHeader(format!(
                "{} channels exceeds the limit of {MAX_CHANNELS}",
                header.channels
            )));
        }
        if u32_at(4) != header.data_len.wrapping_add(36)
            || Some(u32_at(28)) != header.byte_rate()
            || Some(u16_at(32)) != header.block_align()
        {
            return Err(FrameFxError::InvalidHeader("inconsistent size fields".into()));
        }

        Ok(header)
    }
}

/// Quantize a float sample to signed 16-bit.
///
/// The sample is clamped to `[-1, 1]`, then negative values scale by 32768
/// and non-negative values by 32767, rounded to nearest. `-1.0` maps to
/// `-32768`, `1.0` to `32767`; NaN maps to 0.
#[inline]
pub fn quantize_sample(s: f32) -> i16 {
    if s.is_nan() {
        return 0;
    }
    let s = s.clamp(-1.0, 1.0);
    let scaled = if s < 0.0 { s * 32768.0 } else { s * 32767.0 };
    scaled.round() as i16
}

/// Stream `buffer` as a WAV container into `writer`.
pub fn write_wav<W: Write>(buffer: &SampleBuffer, mut writer: W) -> Result<()> {
    let header = WavHeader::for_buffer(buffer);
    writer.write_all(&header.to_bytes())?;

    let channels = buffer.channels();
    let mut frame = Vec::with_capacity(buffer.number_of_channels() * 2);

    for i in 0..buffer.frame_count() {
        frame.clear();
        for channel in channels {
            frame.extend_from_slice(&quantize_sample(channel[i]).to_le_bytes());
        }
        writer.write_all(&frame)?;
    }

    writer.flush()?;
    Ok(())
}

/// Encode `buffer` into an in-memory WAV byte vector.
///
/// The result is exactly `44 + frame_count * channels * 2` bytes.
pub fn encode_wav(buffer: &SampleBuffer) -> Result<Vec<u8>> {
    debug!(
        channels = buffer.number_of_channels(),
        sample_rate = buffer.sample_rate(),
        frames = buffer.frame_count(),
        "encoding wav"
    );

    let mut out = Vec::with_capacity(buffer.encoded_len());
    write_wav(buffer, &mut out)?;

    if out.len() != buffer.encoded_len() {
        return Err(FrameFxError::DimensionMismatch {
            expected: buffer.encoded_len(),
            actual: out.len(),
        });
    }
    Ok(out)
}
