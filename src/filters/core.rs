//! Core utilities shared by the filter families.
//!
//! This module provides:
//! - Luma and channel conversion helpers
//! - Linear blending and contrast expansion
//! - Gaussian kernel generation
//! - A per-pixel map over RGBA frames

use ndarray::{Array3, ArrayView3};

/// ITU-R BT.601 luma coefficients.
pub const LUMA_R: f32 = 0.299;
pub const LUMA_G: f32 = 0.587;
pub const LUMA_B: f32 = 0.114;

/// Luma of an RGB triple (0-255 scale).
#[inline]
pub fn luma(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

/// Round to nearest and clamp into the u8 range.
#[inline]
pub fn to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Linear blend from `a` (t = 0) to `b` (t = 1).
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Contrast expansion around mid-gray 128.
#[inline]
pub fn contrast(v: f32, factor: f32) -> f32 {
    (v - 128.0) * factor + 128.0
}

/// Move `v` away from (factor > 1) or toward (factor < 1) the pixel's luma.
#[inline]
pub fn saturate(v: f32, gray: f32, factor: f32) -> f32 {
    gray + (v - gray) * factor
}

/// Clamp a signed sample coordinate into `[0, len)`.
#[inline]
pub fn clamp_coord(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}

/// Generate a normalized 1D Gaussian kernel of `2 * radius + 1` taps.
///
/// Sigma is `radius / 3`, so the kernel spans three standard deviations
/// on each side. Radius 0 yields the identity kernel.
pub fn gaussian_kernel_1d(radius: usize) -> Vec<f32> {
    if radius == 0 {
        return vec![1.0];
    }

    let sigma = radius as f32 / 3.0;
    let mut kernel: Vec<f32> = (0..=radius * 2)
        .map(|i| {
            let x = i as f32 - radius as f32;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();

    // Normalize
    let sum: f32 = kernel.iter().sum();
    for v in kernel.iter_mut() {
        *v /= sum;
    }

    kernel
}

/// Apply `f` to every pixel's RGB (as f32), preserving alpha.
///
/// Results are rounded and clamped to 0-255.
pub fn map_pixels<F>(input: ArrayView3<u8>, f: F) -> Array3<u8>
where
    F: Fn(f32, f32, f32) -> [f32; 3],
{
    let (height, width, channels) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, channels));

    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]] as f32;
            let g = input[[y, x, 1]] as f32;
            let b = input[[y, x, 2]] as f32;

            let [nr, ng, nb] = f(r, g, b);

            output[[y, x, 0]] = to_u8(nr);
            output[[y, x, 1]] = to_u8(ng);
            output[[y, x, 2]] = to_u8(nb);
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaussian_kernel_normalized() {
        for radius in [1, 2, 5, 10] {
            let k = gaussian_kernel_1d(radius);
            assert_eq!(k.len(), radius * 2 + 1);
            let sum: f32 = k.iter().sum();
            assert!((sum - 1.0).abs() < 1e-5);
            // Symmetric, peak in the middle
            assert!((k[0] - k[k.len() - 1]).abs() < 1e-6);
            assert!(k[radius] >= k[0]);
        }
    }

    #[test]
    fn test_gaussian_kernel_zero_radius() {
        assert_eq!(gaussian_kernel_1d(0), vec![1.0]);
    }

    #[test]
    fn test_to_u8_rounds_and_clamps() {
        assert_eq!(to_u8(-3.0), 0);
        assert_eq!(to_u8(300.0), 255);
        assert_eq!(to_u8(10.4), 10);
        assert_eq!(to_u8(10.6), 11);
    }

    #[test]
    fn test_map_pixels_preserves_alpha() {
        let mut img = Array3::<u8>::zeros((1, 2, 4));
        img[[0, 0, 3]] = 17;
        img[[0, 1, 3]] = 200;

        let result = map_pixels(img.view(), |r, g, b| [r + 10.0, g, b]);

        assert_eq!(result[[0, 0, 0]], 10);
        assert_eq!(result[[0, 0, 3]], 17);
        assert_eq!(result[[0, 1, 3]], 200);
    }

    #[test]
    fn test_clamp_coord() {
        assert_eq!(clamp_coord(-4, 10), 0);
        assert_eq!(clamp_coord(12, 10), 9);
        assert_eq!(clamp_coord(3, 10), 3);
    }
}
