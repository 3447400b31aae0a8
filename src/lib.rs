//! FrameFX Rust Extensions
//!
//! Client-side media effects for a social video app: a pixel filter engine
//! for decoded RGBA frames and a 16-bit PCM WAV encoder for decoded audio.
//! Both are pure, synchronous functions with no shared state.
//!
//! ## Image Format
//! Frames are interleaved RGBA8, row-major, `width * height * 4` bytes.
//! Filters never change dimensions and always preserve alpha.
//!
//! ## Audio Format
//! Input is planar `f32` PCM nominally in `[-1, 1]`; output is a canonical
//! 44-byte-header WAV stream with little-endian `i16` samples.
//!
//! ## Bindings
//! - `python` feature: PyO3/numpy functions over `(H, W, 4)` u8 arrays
//! - `wasm` feature: wasm-bindgen functions over flat byte/float slices
//!
//! ## Logging
//! Entry points emit `tracing` events at debug level. The crate never
//! installs a subscriber.

pub mod audio;
pub mod batch;
pub mod error;
pub mod filters;
pub mod frame;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use audio::{encode_wav, SampleBuffer};
pub use batch::apply_filter_batch;
pub use error::{FrameFxError, Result};
pub use filters::{apply_filter, apply_filter_named, FilterKind, FilterRequest, Rgb};
pub use frame::Frame;

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;
    use pyo3::types::PyBytes;

    use crate::audio::{encode_wav as encode_wav_impl, SampleBuffer};
    use crate::error::FrameFxError;
    use crate::filters::{apply_to_view, FilterKind, FilterRequest, Rgb};

    fn to_py_err(err: FrameFxError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    // ========================================================================
    // Filters
    // ========================================================================

    /// Apply a named filter to an RGBA u8 image.
    ///
    /// # Arguments
    /// * `image` - RGBA image (height, width, 4) as u8
    /// * `kind` - Filter name, e.g. "vintage", "edge-detection"
    /// * `intensity` - 0.0-1.0, clamped
    /// * `aux_color` - (r, g, b) reference color for "color-pop"
    #[pyfunction]
    #[pyo3(signature = (image, kind, intensity=1.0, aux_color=None))]
    pub fn apply_filter<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        kind: &str,
        intensity: f32,
        aux_color: Option<(u8, u8, u8)>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = image.as_array();
        let (height, width, channels) = input.dim();
        if channels != 4 {
            return Err(to_py_err(FrameFxError::DimensionMismatch {
                expected: height * width * 4,
                actual: height * width * channels,
            }));
        }

        let kind: FilterKind = kind.parse().map_err(to_py_err)?;
        let mut request = FilterRequest::new(kind, intensity);
        if let Some((r, g, b)) = aux_color {
            request = request.with_aux_color(Rgb::new(r, g, b));
        }

        let result = apply_to_view(
            input,
            request.kind,
            request.clamped_intensity(),
            request.aux_color,
        );
        Ok(result.into_pyarray(py))
    }

    /// Names of all supported filters.
    #[pyfunction]
    pub fn filter_kinds() -> Vec<&'static str> {
        FilterKind::ALL.iter().map(|k| k.name()).collect()
    }

    // ========================================================================
    // Audio
    // ========================================================================

    /// Encode planar float PCM (one list per channel) as 16-bit WAV bytes.
    #[pyfunction]
    pub fn encode_wav<'py>(
        py: Python<'py>,
        channels: Vec<Vec<f32>>,
        sample_rate: i64,
    ) -> PyResult<Bound<'py, PyBytes>> {
        let buffer = SampleBuffer::with_signed_rate(sample_rate, channels).map_err(to_py_err)?;
        let bytes = encode_wav_impl(&buffer).map_err(to_py_err)?;
        Ok(PyBytes::new(py, &bytes))
    }

    /// FrameFX Rust extension module
    #[pymodule]
    pub fn framefx_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(apply_filter, m)?)?;
        m.add_function(wrap_pyfunction!(filter_kinds, m)?)?;
        m.add_function(wrap_pyfunction!(encode_wav, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::framefx_rust;
