//! Error type shared by the filter engine and the audio encoder.

use thiserror::Error;

/// Errors surfaced by FrameFX operations.
///
/// Both the filter engine and the encoder are pure computations, so the
/// taxonomy is narrow: unknown filter selectors, malformed sample buffers,
/// unreadable container headers, and raster buffers whose length disagrees
/// with their dimensions.
#[derive(Debug, Error)]
pub enum FrameFxError {
    #[error("unsupported filter kind: {0}")]
    UnsupportedFilterKind(String),
    #[error("invalid sample buffer: {0}")]
    InvalidSampleBuffer(String),
    #[error("invalid container header: {0}")]
    InvalidHeader(String),
    #[error("pixel buffer length {actual} does not match dimensions (expected {expected})")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FrameFxError>;
