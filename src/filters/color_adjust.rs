//! Color adjustment filters: Vintage, Black & White, Warm/Cool Tone,
//! Dramatic, HDR.
//!
//! These are pixel-wise operations that don't require spatial context.
//! All take `intensity` in 0.0-1.0 (already clamped by the dispatcher);
//! alpha is always preserved unchanged.

use ndarray::{Array3, ArrayView3};

use super::core::{contrast, lerp, luma, map_pixels, saturate};

// ============================================================================
// Vintage (sepia)
// ============================================================================

/// Sepia tone, blended from the original by `intensity`.
///
/// Each sepia channel is capped at 255 before blending, so `intensity = 1`
/// is the full sepia matrix and `intensity = 0` leaves the image unchanged.
pub fn vintage(input: ArrayView3<u8>, intensity: f32) -> Array3<u8> {
    map_pixels(input, |r, g, b| {
        let sr = (0.393 * r + 0.769 * g + 0.189 * b).min(255.0);
        let sg = (0.349 * r + 0.686 * g + 0.168 * b).min(255.0);
        let sb = (0.272 * r + 0.534 * g + 0.131 * b).min(255.0);
        [
            lerp(r, sr, intensity),
            lerp(g, sg, intensity),
            lerp(b, sb, intensity),
        ]
    })
}

// ============================================================================
// Black & White
// ============================================================================

/// Blend toward BT.601 luma gray by `intensity`.
pub fn black_white(input: ArrayView3<u8>, intensity: f32) -> Array3<u8> {
    map_pixels(input, |r, g, b| {
        let y = luma(r, g, b);
        [lerp(r, y, intensity), lerp(g, y, intensity), lerp(b, y, intensity)]
    })
}

// ============================================================================
// Warm / Cool Tone
// ============================================================================

/// Shift toward red/yellow: `+20 R, +10 G, -15 B` at full intensity.
pub fn warm_tone(input: ArrayView3<u8>, intensity: f32) -> Array3<u8> {
    map_pixels(input, |r, g, b| {
        [
            r + 20.0 * intensity,
            g + 10.0 * intensity,
            b - 15.0 * intensity,
        ]
    })
}

/// Shift toward blue: `-15 R, +5 G, +25 B` at full intensity.
pub fn cool_tone(input: ArrayView3<u8>, intensity: f32) -> Array3<u8> {
    map_pixels(input, |r, g, b| {
        [
            r - 15.0 * intensity,
            g + 5.0 * intensity,
            b + 25.0 * intensity,
        ]
    })
}

// ============================================================================
// Dramatic
// ============================================================================

/// Strong contrast followed by a slight desaturation.
///
/// Contrast factor is `1 + 1.5 * intensity` around 128 (clamped per channel),
/// then each channel is pulled toward luma by `1 - 0.2 * intensity`.
pub fn dramatic(input: ArrayView3<u8>, intensity: f32) -> Array3<u8> {
    let contrast_factor = 1.0 + 1.5 * intensity;
    let saturation_factor = 1.0 - 0.2 * intensity;

    map_pixels(input, |r, g, b| {
        let r = contrast(r, contrast_factor).clamp(0.0, 255.0);
        let g = contrast(g, contrast_factor).clamp(0.0, 255.0);
        let b = contrast(b, contrast_factor).clamp(0.0, 255.0);
        let gray = luma(r, g, b);
        [
            saturate(r, gray, saturation_factor),
            saturate(g, gray, saturation_factor),
            saturate(b, gray, saturation_factor),
        ]
    })
}

// ============================================================================
// HDR
// ============================================================================

/// Two-pass pseudo-HDR: Reinhard-style tone map, then contrast expansion.
///
/// Pass 1: `v' = (v/255) / (1 + (v/255) * i) * 255 * (1 + 0.5 i)`.
/// Pass 2: contrast factor `1 + 0.6 i` around 128.
pub fn hdr(input: ArrayView3<u8>, intensity: f32) -> Array3<u8> {
    let scale = 255.0 * (1.0 + 0.5 * intensity);
    let contrast_factor = 1.0 + 0.6 * intensity;

    let tone_map = |v: f32| {
        let n = v / 255.0;
        (n / (1.0 + n * intensity) * scale).clamp(0.0, 255.0)
    };

    map_pixels(input, |r, g, b| {
        [
            contrast(tone_map(r), contrast_factor),
            contrast(tone_map(g), contrast_factor),
            contrast(tone_map(b), contrast_factor),
        ]
    })
}
