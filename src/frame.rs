//! RGBA8 raster frame.
//!
//! A `Frame` owns an interleaved `R,G,B,A` byte buffer in row-major order.
//! Filters read it through an `(height, width, 4)` ndarray view and return
//! a freshly allocated frame of the same dimensions.

use ndarray::{Array3, ArrayView3};

use crate::error::{FrameFxError, Result};

/// Bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Frame {
    /// Wrap a decoded RGBA8 buffer.
    ///
    /// Fails with `DimensionMismatch` unless `data.len() == width * height * 4`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|px| px.checked_mul(CHANNELS))
            .ok_or(FrameFxError::DimensionMismatch {
                expected: usize::MAX,
                actual: data.len(),
            })?;
        if data.len() != expected {
            return Err(FrameFxError::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Frame {
            width,
            height,
            data,
        })
    }

    /// Frame filled with a single RGBA color.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Self {
        let data = rgba.repeat(width * height);
        Frame {
            width,
            height,
            data,
        }
    }

    /// Take ownership of an `(height, width, 4)` array.
    pub fn from_array(array: Array3<u8>) -> Result<Self> {
        let (height, width, channels) = array.dim();
        if channels != CHANNELS {
            return Err(FrameFxError::DimensionMismatch {
                expected: height * width * CHANNELS,
                actual: height * width * channels,
            });
        }
        let data = if array.is_standard_layout() {
            array.into_raw_vec_and_offset().0
        } else {
            array.iter().copied().collect()
        };
        Frame::new(width, height, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Read-only `(height, width, 4)` view over the pixel buffer.
    pub fn view(&self) -> ArrayView3<'_, u8> {
        // Length is validated on construction, so the shape always fits.
        ArrayView3::from_shape((self.height, self.width, CHANNELS), &self.data)
            .unwrap_or_else(|_| unreachable!("frame buffer length checked in Frame::new"))
    }

    /// RGBA value at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * CHANNELS;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_wrong_length() {
        let err = Frame::new(2, 2, vec![0; 15]).unwrap_err();
        match err {
            FrameFxError::DimensionMismatch { expected, actual } => {
                assert_eq!(expected, 16);
                assert_eq!(actual, 15);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_view_matches_pixel_layout() {
        let mut data = vec![0u8; 3 * 2 * 4];
        // pixel (x=2, y=1)
        let i = (3 + 2) * 4;
        data[i..i + 4].copy_from_slice(&[10, 20, 30, 40]);
        let frame = Frame::new(3, 2, data).unwrap();

        let view = frame.view();
        assert_eq!(view.dim(), (2, 3, 4));
        assert_eq!(view[[1, 2, 0]], 10);
        assert_eq!(view[[1, 2, 3]], 40);
        assert_eq!(frame.pixel(2, 1), Some([10, 20, 30, 40]));
        assert_eq!(frame.pixel(3, 0), None);
        assert_eq!(frame.pixel(0, 2), None);
    }

    #[test]
    fn test_from_array_roundtrips_bytes() {
        let mut img = Array3::<u8>::zeros((2, 2, 4));
        img[[0, 1, 2]] = 77;
        let frame = Frame::from_array(img).unwrap();
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.pixel(1, 0).map(|p| p[2]), Some(77));
    }

    #[test]
    fn test_from_array_rejects_rgb() {
        let img = Array3::<u8>::zeros((2, 2, 3));
        assert!(Frame::from_array(img).is_err());
    }

    #[test]
    fn test_empty_frame_is_valid() {
        let frame = Frame::new(0, 5, Vec::new()).unwrap();
        assert_eq!(frame.view().dim(), (5, 0, 4));
    }
}
