//! Color-aware filters: Color Pop, Portrait Enhance, Landscape Enhance.
//!
//! These look at the relationship between channels (distance to a
//! reference color, skin likelihood, dominant channel) rather than
//! treating R, G, B independently. Alpha is preserved.

use ndarray::{Array3, ArrayView3};

use super::core::{contrast, lerp, luma, map_pixels, saturate};
use super::kind::Rgb;
use super::skin::skin_score;

// ============================================================================
// Color Pop
// ============================================================================

/// Keep colors near `target`, desaturate everything else.
///
/// A pixel is "far" when its Euclidean RGB distance to `target` is strictly
/// greater than `100 * (1 - intensity)`. Far pixels are moved toward their
/// BT.601 luma by `intensity` (full gray at 1.0). Near pixels are untouched.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `target` - Color to isolate
/// * `intensity` - 0.0-1.0
pub fn color_pop(input: ArrayView3<u8>, target: Rgb, intensity: f32) -> Array3<u8> {
    let threshold = 100.0 * (1.0 - intensity);
    let (tr, tg, tb) = (target.r as f32, target.g as f32, target.b as f32);

    map_pixels(input, |r, g, b| {
        let dist = ((r - tr).powi(2) + (g - tg).powi(2) + (b - tb).powi(2)).sqrt();
        if dist > threshold {
            let gray = luma(r, g, b);
            [
                lerp(r, gray, intensity),
                lerp(g, gray, intensity),
                lerp(b, gray, intensity),
            ]
        } else {
            [r, g, b]
        }
    })
}

// ============================================================================
// Portrait Enhance
// ============================================================================

/// Warm up skin-like pixels, then add a mild global contrast boost.
///
/// Skin pixels gain `(+15, +10, +5) * score * intensity`; every pixel then
/// gets contrast factor `1 + 0.2 * intensity`.
pub fn portrait_enhance(input: ArrayView3<u8>, intensity: f32) -> Array3<u8> {
    let contrast_factor = 1.0 + 0.2 * intensity;

    map_pixels(input, |r, g, b| {
        let boost = skin_score(r as u8, g as u8, b as u8) * intensity;
        let r = (r + 15.0 * boost).min(255.0);
        let g = (g + 10.0 * boost).min(255.0);
        let b = (b + 5.0 * boost).min(255.0);
        [
            contrast(r, contrast_factor),
            contrast(g, contrast_factor),
            contrast(b, contrast_factor),
        ]
    })
}

// ============================================================================
// Landscape Enhance
// ============================================================================

/// Green boost for foliage-dominant pixels.
const GREEN_BOOST: f32 = 0.2;
/// Blue boost for sky/water-dominant pixels.
const BLUE_BOOST: f32 = 0.15;

/// Emphasize foliage and sky, then increase saturation.
///
/// A pixel whose green strictly exceeds red and blue has green scaled by
/// `1 + 0.2 * intensity`; blue-dominant pixels get blue scaled by
/// `1 + 0.15 * intensity`. Saturation around luma is then scaled by
/// `1 + 0.4 * intensity`.
pub fn landscape_enhance(input: ArrayView3<u8>, intensity: f32) -> Array3<u8> {
    let saturation_factor = 1.0 + 0.4 * intensity;

    map_pixels(input, |r, g, b| {
        let mut g = g;
        let mut b = b;
        if g > r && g > b {
            g = (g * (1.0 + GREEN_BOOST * intensity)).min(255.0);
        } else if b > r && b > g {
            b = (b * (1.0 + BLUE_BOOST * intensity)).min(255.0);
        }

        let gray = luma(r, g, b);
        [
            saturate(r, gray, saturation_factor),
            saturate(g, gray, saturation_factor),
            saturate(b, gray, saturation_factor),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pixels: &[[u8; 4]]) -> Array3<u8> {
        let mut img = Array3::<u8>::zeros((1, pixels.len(), 4));
        for (x, p) in pixels.iter().enumerate() {
            for c in 0..4 {
                img[[0, x, c]] = p[c];
            }
        }
        img
    }

    #[test]
    fn test_color_pop_keeps_target_and_grays_others() {
        let img = row(&[[255, 0, 0, 255], [0, 0, 255, 255]]);
        let result = color_pop(img.view(), Rgb::RED, 1.0);

        // Pure red is at distance 0, which is not > 0
        assert_eq!(result[[0, 0, 0]], 255);
        assert_eq!(result[[0, 0, 1]], 0);
        assert_eq!(result[[0, 0, 2]], 0);

        // Pure blue: 0.114 * 255 = 29.07
        assert_eq!(result[[0, 1, 0]], 29);
        assert_eq!(result[[0, 1, 1]], 29);
        assert_eq!(result[[0, 1, 2]], 29);
        assert_eq!(result[[0, 1, 3]], 255);
    }

    #[test]
    fn test_color_pop_threshold_is_strict() {
        // Distance exactly 50 with threshold 100 * (1 - 0.5) = 50 stays "near"
        let img = row(&[[205, 0, 0, 255], [204, 0, 0, 255]]);
        let result = color_pop(img.view(), Rgb::RED, 0.5);
        assert_eq!(result[[0, 0, 0]], 205);
        // Distance 51 > 50: half-way toward luma (61.0) -> 132.5
        assert!(result[[0, 1, 0]] < 204);
    }

    #[test]
    fn test_color_pop_zero_intensity_noop() {
        let img = row(&[[10, 200, 30, 255], [0, 0, 255, 128]]);
        let result = color_pop(img.view(), Rgb::RED, 0.0);
        assert_eq!(result, img);
    }

    #[test]
    fn test_portrait_boosts_skin_only() {
        // skin (score 1.0) and a blue non-skin pixel
        let img = row(&[[200, 150, 120, 255], [30, 60, 200, 255]]);
        let no_contrast = portrait_enhance(img.view(), 0.0);
        assert_eq!(no_contrast, img);

        let result = portrait_enhance(img.view(), 1.0);
        // (200 + 15 - 128) * 1.2 + 128 = 232.4
        assert_eq!(result[[0, 0, 0]], 232);
        // (150 + 10 - 128) * 1.2 + 128 = 166.4
        assert_eq!(result[[0, 0, 1]], 166);
        // non-skin only gets contrast: (30 - 128) * 1.2 + 128 = 10.4
        assert_eq!(result[[0, 1, 0]], 10);
    }

    #[test]
    fn test_landscape_boosts_dominant_channel() {
        let img = row(&[[50, 150, 50, 255], [40, 60, 150, 255]]);
        let result = landscape_enhance(img.view(), 1.0);
        assert!(result[[0, 0, 1]] > 150);
        assert!(result[[0, 1, 2]] > 150);
        // non-dominant channels are pushed away from luma (down)
        assert!(result[[0, 0, 0]] < 50);
    }

    #[test]
    fn test_landscape_exact_values() {
        let img = row(&[[50, 150, 50, 255], [40, 60, 150, 255]]);
        let result = landscape_enhance(img.view(), 1.0);

        // Green 150 * 1.2 = 180, luma 126.31, saturation 1.4
        assert_eq!(result[[0, 0, 0]], 19);
        assert_eq!(result[[0, 0, 1]], 201);
        assert_eq!(result[[0, 0, 2]], 19);

        // Blue 150 * 1.15 = 172.5, luma 66.845, saturation 1.4
        assert_eq!(result[[0, 1, 0]], 29);
        assert_eq!(result[[0, 1, 1]], 57);
        assert_eq!(result[[0, 1, 2]], 215);
        assert_eq!(result[[0, 1, 3]], 255);
    }

    #[test]
    fn test_landscape_gray_unchanged() {
        let img = row(&[[90, 90, 90, 255]]);
        let result = landscape_enhance(img.view(), 1.0);
        assert_eq!(result, img);
    }
}
