//! WebAssembly exports for FrameFX.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Frames are
//! passed as flat RGBA byte arrays (e.g. `ImageData.data`) and audio as flat
//! channel-major float arrays (each `AudioBuffer.getChannelData(c)` appended
//! in channel order).

use wasm_bindgen::prelude::*;

use crate::audio::{encode_wav, SampleBuffer};
use crate::error::FrameFxError;
use crate::filters::{apply_filter, FilterKind, FilterRequest, Rgb};
use crate::frame::Frame;

fn to_js_err(err: FrameFxError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ============================================================================
// Filters
// ============================================================================

/// Apply a named filter to an RGBA u8 frame.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Frame width in pixels
/// * `height` - Frame height in pixels
/// * `kind` - Filter name, e.g. "vintage", "edge-detection"
/// * `intensity` - 0.0-1.0, clamped
///
/// # Returns
/// Flat array of filtered RGBA bytes, same length as `data`
#[wasm_bindgen]
pub fn apply_filter_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    kind: &str,
    intensity: f32,
) -> Result<Vec<u8>, JsValue> {
    let frame = Frame::new(width, height, data.to_vec()).map_err(to_js_err)?;
    let kind: FilterKind = kind.parse().map_err(to_js_err)?;
    let result = apply_filter(&frame, &FilterRequest::new(kind, intensity)).map_err(to_js_err)?;
    Ok(result.into_bytes())
}

/// Color pop: keep colors near `(r, g, b)`, desaturate the rest.
#[wasm_bindgen]
pub fn color_pop_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    intensity: f32,
    r: u8,
    g: u8,
    b: u8,
) -> Result<Vec<u8>, JsValue> {
    let frame = Frame::new(width, height, data.to_vec()).map_err(to_js_err)?;
    let request =
        FilterRequest::new(FilterKind::ColorPop, intensity).with_aux_color(Rgb::new(r, g, b));
    let result = apply_filter(&frame, &request).map_err(to_js_err)?;
    Ok(result.into_bytes())
}

/// Names of all supported filters.
#[wasm_bindgen]
pub fn filter_kinds_wasm() -> Vec<String> {
    FilterKind::ALL.iter().map(|k| k.name().to_string()).collect()
}

// ============================================================================
// Audio
// ============================================================================

/// Encode channel-major float PCM as a 16-bit WAV file.
///
/// # Arguments
/// * `samples` - All of channel 0, then channel 1, ... (values -1.0-1.0)
/// * `number_of_channels` - Channel count (>= 1)
/// * `sample_rate` - Samples per second (> 0)
///
/// # Returns
/// WAV bytes, `44 + samples.len() * 2` long
#[wasm_bindgen]
pub fn encode_wav_wasm(
    samples: &[f32],
    number_of_channels: usize,
    sample_rate: i32,
) -> Result<Vec<u8>, JsValue> {
    let rate = u32::try_from(sample_rate)
        .map_err(|_| {
            FrameFxError::InvalidSampleBuffer(format!("sample rate {sample_rate} out of range"))
        })
        .map_err(to_js_err)?;
    let buffer = SampleBuffer::from_planar(rate, number_of_channels, samples).map_err(to_js_err)?;
    encode_wav(&buffer).map_err(to_js_err)
}
