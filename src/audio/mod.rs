//! PCM audio packaging.
//!
//! Decoded float samples go in, a 16-bit PCM WAV byte stream comes out.
//! Capture, decoding and playback belong to the caller.

pub mod sample_buffer;
pub mod wav;

pub use sample_buffer::SampleBuffer;
pub use wav::{encode_wav, quantize_sample, write_wav, WavHeader, WAV_HEADER_LEN};
