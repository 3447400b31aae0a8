//! Planar float sample buffer.

use crate::error::{FrameFxError, Result};

/// Bytes per encoded 16-bit sample.
const BYTES_PER_SAMPLE: u64 = 2;

/// Block align (`channels * 2`) is a 16-bit header field.
const MAX_CHANNELS: usize = super::wav::MAX_CHANNELS as usize;

/// Decoded audio: one `Vec<f32>` per channel, all the same length.
///
/// Samples are nominally in `[-1, 1]`; anything outside is clamped when
/// encoded. Construction validates the shape, so an existing `SampleBuffer`
/// can always be encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
}

impl SampleBuffer {
    /// Build from planar channel data.
    ///
    /// Fails with `InvalidSampleBuffer` when there are no channels, channel
    /// lengths differ, the sample rate is zero, or the encoded stream would
    /// not fit the container's 32-bit size fields.
    pub fn new(sample_rate: u32, channels: Vec<Vec<f32>>) -> Result<Self> {
        if channels.is_empty() {
            return Err(FrameFxError::InvalidSampleBuffer(
                "at least one channel is required".into(),
            ));
        }
        if sample_rate == 0 {
            return Err(FrameFxError::InvalidSampleBuffer(
                "sample rate must be positive".into(),
            ));
        }
        if channels.len() > MAX_CHANNELS {
            return Err(FrameFxError::InvalidSampleBuffer(format!(
                "{} channels exceeds the container limit of {MAX_CHANNELS}",
                channels.len()
            )));
        }

        let frame_count = channels[0].len();
        if let Some((idx, ch)) = channels
            .iter()
            .enumerate()
            .find(|(_, ch)| ch.len() != frame_count)
        {
            return Err(FrameFxError::InvalidSampleBuffer(format!(
                "channel {idx} has {} samples, channel 0 has {frame_count}",
                ch.len()
            )));
        }

        let num_channels = channels.len() as u64;
        let data_len = frame_count as u64 * num_channels * BYTES_PER_SAMPLE;
        if data_len + 36 > u32::MAX as u64 {
            return Err(FrameFxError::InvalidSampleBuffer(format!(
                "{data_len} bytes of sample data exceeds the 4 GiB container limit"
            )));
        }
        if sample_rate as u64 * num_channels * BYTES_PER_SAMPLE > u32::MAX as u64 {
            return Err(FrameFxError::InvalidSampleBuffer(format!(
                "byte rate for {sample_rate} Hz x {num_channels} channels overflows"
            )));
        }

        Ok(SampleBuffer {
            sample_rate,
            channels,
        })
    }

    /// Build from a signed sample rate, as hosts without unsigned ints pass it.
    pub fn with_signed_rate(sample_rate: i64, channels: Vec<Vec<f32>>) -> Result<Self> {
        let rate = u32::try_from(sample_rate).map_err(|_| {
            FrameFxError::InvalidSampleBuffer(format!("sample rate {sample_rate} out of range"))
        })?;
        SampleBuffer::new(rate, channels)
    }

    /// Build from channel-major data: all of channel 0, then channel 1, ...
    pub fn from_planar(sample_rate: u32, number_of_channels: usize, data: &[f32]) -> Result<Self> {
        if number_of_channels == 0 {
            return Err(FrameFxError::InvalidSampleBuffer(
                "at least one channel is required".into(),
            ));
        }
        if data.len() % number_of_channels != 0 {
            return Err(FrameFxError::InvalidSampleBuffer(format!(
                "{} samples do not divide into {number_of_channels} equal channels",
                data.len()
            )));
        }
        let frame_count = data.len() / number_of_channels;
        let channels = if frame_count == 0 {
            vec![Vec::new(); number_of_channels]
        } else {
            data.chunks(frame_count).map(<[f32]>::to_vec).collect()
        };
        SampleBuffer::new(sample_rate, channels)
    }

    /// Build from frame-interleaved data: `L R L R ...`.
    pub fn from_interleaved(
        sample_rate: u32,
        number_of_channels: usize,
        data: &[f32],
    ) -> Result<Self> {
        if number_of_channels == 0 {
            return Err(FrameFxError::InvalidSampleBuffer(
                "at least one channel is required".into(),
            ));
        }
        if data.len() % number_of_channels != 0 {
            return Err(FrameFxError::InvalidSampleBuffer(format!(
                "{} samples are not a whole number of {number_of_channels}-channel frames",
                data.len()
            )));
        }
        let channels = (0..number_of_channels)
            .map(|c| data.iter().skip(c).step_by(number_of_channels).copied().collect())
            .collect();
        SampleBuffer::new(sample_rate, channels)
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn number_of_channels(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel.
    pub fn frame_count(&self) -> usize {
        self.channels[0].len()
    }

    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    /// Length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.frame_count() as f64 / self.sample_rate as f64
    }

    /// Size of the PCM payload in bytes.
    pub fn data_len(&self) -> usize {
        self.frame_count() * self.number_of_channels() * BYTES_PER_SAMPLE as usize
    }

    /// Total size of the encoded container: 44-byte header plus payload.
    pub fn encoded_len(&self) -> usize {
        super::wav::WAV_HEADER_LEN + self.data_len()
    }
}
