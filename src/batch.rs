//! Parallel filtering of independent frames.
//!
//! Filters share no state, so a clip's frames can be processed on the rayon
//! pool. Each frame is still filtered by a single synchronous call; callers
//! that need cancellation split their clip into smaller batches.

use rayon::prelude::*;
use tracing::debug;

use crate::error::{FrameFxError, Result};
use crate::filters::{apply_filter, FilterRequest};
use crate::frame::Frame;

/// Apply one request to every frame in parallel.
///
/// Output order matches input order. If any frame fails, an error from one
/// of the failing frames is returned.
pub fn apply_filter_batch(frames: &[Frame], request: &FilterRequest) -> Result<Vec<Frame>> {
    debug!(kind = %request.kind, frames = frames.len(), "applying filter batch");

    frames
        .par_iter()
        .map(|frame| apply_filter(frame, request))
        .collect()
}

/// Apply a different request to each frame, pairing them by index.
///
/// Fails with `DimensionMismatch` when the slices differ in length.
pub fn apply_filters_zipped(frames: &[Frame], requests: &[FilterRequest]) -> Result<Vec<Frame>> {
    if frames.len() != requests.len() {
        return Err(FrameFxError::DimensionMismatch {
            expected: frames.len(),
            actual: requests.len(),
        });
    }

    debug!(
        frames = frames.len(),
        requests = requests.len(),
        "applying per-frame filters"
    );

    frames
        .par_iter()
        .zip(requests.par_iter())
        .map(|(frame, request)| apply_filter(frame, request))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterKind;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn frames(n: usize) -> Vec<Frame> {
        (0..n)
            .map(|i| {
                let v = (i * 20) as u8;
                Frame::filled(6, 4, [v, 255 - v, v / 2, 255])
            })
            .collect()
    }

    #[test]
    fn test_batch_matches_sequential() {
        init_tracing();
        let input = frames(12);
        let request = FilterRequest::new(FilterKind::Vintage, 0.8);

        let batch = apply_filter_batch(&input, &request).unwrap();
        let sequential: Vec<Frame> = input
            .iter()
            .map(|f| apply_filter(f, &request).unwrap())
            .collect();

        assert_eq!(batch, sequential);
    }

    #[test]
    fn test_zipped_uses_each_request() {
        init_tracing();
        let input = frames(2);
        let requests = [
            FilterRequest::new(FilterKind::BlackWhite, 1.0),
            FilterRequest::new(FilterKind::WarmTone, 0.0),
        ];

        let out = apply_filters_zipped(&input, &requests).unwrap();
        assert_eq!(out.len(), 2);
        let p = out[0].pixel(0, 0).unwrap();
        assert_eq!(p[0], p[1]);
        assert_eq!(out[1], input[1]);
    }

    #[test]
    fn test_zipped_rejects_length_mismatch() {
        let input = frames(3);
        let requests = [FilterRequest::new(FilterKind::Sharpen, 1.0); 2];

        let err = apply_filters_zipped(&input, &requests).unwrap_err();
        assert!(matches!(
            err,
            FrameFxError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        ));
        assert!(apply_filters_zipped(&input[..2], &requests).is_ok());
    }

    #[test]
    fn test_empty_batch() {
        let out = apply_filter_batch(&[], &FilterRequest::new(FilterKind::Hdr, 1.0)).unwrap();
        assert!(out.is_empty());
    }
}
