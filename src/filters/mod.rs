//! Pixel filter engine for RGBA8 frames.
//!
//! ## Format
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | RGBA8 | (H, W, 4) | u8 | Red, green, blue, alpha, 0-255 |
//!
//! ## Architecture
//!
//! All filters follow these principles:
//! - **Pure** - input views are never written; each call allocates its output
//! - **Shape preserving** - width and height never change
//! - **Alpha preservation** - alpha is copied from the input pixel
//! - **Neighborhood safe** - convolution-style filters read only the
//!   untouched input, never partially filtered output
//!
//! ## Filter Categories
//!
//! - **Color adjust**: vintage, black_white, warm_tone, cool_tone, dramatic, hdr
//! - **Color science**: color_pop, portrait_enhance, landscape_enhance
//! - **Stylize**: cyberpunk, oil_painting
//! - **Edge**: edge_detection (Sobel)
//! - **Sharpen**: sharpen
//! - **Blur**: soft_focus, face_blur, background_blur (the last two are
//!   heuristic placeholders, not detectors)
//! - **Noise**: noise_reduction (vector median)

pub mod core;
pub mod kind;
pub mod skin;

pub mod blur;
pub mod color_adjust;
pub mod color_science;
pub mod edge;
pub mod noise;
pub mod sharpen;
pub mod stylize;

use ndarray::{Array3, ArrayView3};
use tracing::debug;

use crate::error::{FrameFxError, Result};
use crate::frame::Frame;

pub use kind::{FilterKind, FilterRequest, Rgb};

/// Apply the filter described by `request` to `frame`.
///
/// The input frame is left untouched; the returned frame has the same width
/// and height. Intensity is clamped to `[0, 1]` (NaN becomes 0) before use.
pub fn apply_filter(frame: &Frame, request: &FilterRequest) -> Result<Frame> {
    let intensity = request.clamped_intensity();
    debug!(
        kind = %request.kind,
        intensity,
        neighborhood = request.kind.is_neighborhood(),
        width = frame.width(),
        height = frame.height(),
        "applying filter"
    );

    let output = apply_to_view(frame.view(), request.kind, intensity, request.aux_color);

    let expected = frame.as_bytes().len();
    if output.len() != expected {
        return Err(FrameFxError::DimensionMismatch {
            expected,
            actual: output.len(),
        });
    }
    Frame::from_array(output)
}

/// Parse `name` as a filter kind and apply it.
pub fn apply_filter_named(frame: &Frame, name: &str, intensity: f32) -> Result<Frame> {
    let kind: FilterKind = name.parse()?;
    apply_filter(frame, &FilterRequest::new(kind, intensity))
}

/// Dispatch on an `(H, W, 4)` view with an already-clamped intensity.
pub fn apply_to_view(
    input: ArrayView3<u8>,
    kind: FilterKind,
    intensity: f32,
    aux_color: Option<Rgb>,
) -> Array3<u8> {
    match kind {
        FilterKind::Vintage => color_adjust::vintage(input, intensity),
        FilterKind::BlackWhite => color_adjust::black_white(input, intensity),
        FilterKind::WarmTone => color_adjust::warm_tone(input, intensity),
        FilterKind::CoolTone => color_adjust::cool_tone(input, intensity),
        FilterKind::Dramatic => color_adjust::dramatic(input, intensity),
        FilterKind::Hdr => color_adjust::hdr(input, intensity),
        FilterKind::ColorPop => {
            color_science::color_pop(input, aux_color.unwrap_or(Rgb::RED), intensity)
        }
        FilterKind::PortraitEnhance => color_science::portrait_enhance(input, intensity),
        FilterKind::LandscapeEnhance => color_science::landscape_enhance(input, intensity),
        FilterKind::Cyberpunk => stylize::cyberpunk(input, intensity),
        FilterKind::OilPainting => {
            stylize::oil_painting(input, stylize::oil_painting_radius(intensity))
        }
        FilterKind::EdgeDetection => edge::edge_detection(input, intensity),
        FilterKind::Sharpen => sharpen::sharpen(input, intensity),
        FilterKind::SoftFocus => blur::soft_focus(input, intensity),
        FilterKind::FaceBlur => blur::face_blur(input, intensity),
        FilterKind::BackgroundBlur => blur::background_blur(input, intensity),
        FilterKind::NoiseReduction => {
            noise::noise_reduction(input, noise::noise_reduction_radius(intensity), intensity)
        }
    }
}
