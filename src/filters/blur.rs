//! Blur filters for RGBA frames: Gaussian (horizontal), Soft Focus,
//! Face Blur and Background Blur.
//!
//! Face blur and background blur are heuristic placeholders. Neither runs any
//! face detection or segmentation: face blur softens the whole frame, and
//! background blur smooths low-detail regions, which only loosely correlates
//! with "background".
//!
//! Alpha is preserved by every filter here.

use ndarray::{Array3, ArrayView3};

use super::core::{clamp_coord, gaussian_kernel_1d, lerp, to_u8};

// ============================================================================
// Gaussian
// ============================================================================

/// Apply a single-axis (horizontal) Gaussian blur.
///
/// Kernel has `2 * radius + 1` taps with `sigma = radius / 3`. Samples past
/// the left/right edge are clamped to the edge column. There is no vertical
/// pass.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `radius` - Blur radius in pixels, 0 = copy
pub fn gaussian_blur_horizontal(input: ArrayView3<u8>, radius: usize) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = input.to_owned();

    if radius == 0 || width == 0 {
        return output;
    }

    let kernel = gaussian_kernel_1d(radius);
    let half = radius as isize;

    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                let mut sum = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let sx = clamp_coord(x as isize + ki as isize - half, width);
                    sum += input[[y, sx, c]] as f32 * kv;
                }
                output[[y, x, c]] = to_u8(sum);
            }
        }
    }

    output
}

// ============================================================================
// Soft Focus
// ============================================================================

/// Soft-focus blur radius for an intensity: `round(8i + 2)`, 2-10.
pub fn soft_focus_radius(intensity: f32) -> usize {
    (intensity * 8.0 + 2.0).round() as usize
}

/// Dreamy glow: mix a Gaussian-blurred copy over the original.
///
/// `out = original * (1 - 0.7i) + blurred * 0.7i`
pub fn soft_focus(input: ArrayView3<u8>, intensity: f32) -> Array3<u8> {
    let blurred = gaussian_blur_horizontal(input, soft_focus_radius(intensity));
    let mix = 0.7 * intensity;

    let (height, width, _) = input.dim();
    let mut output = blurred;

    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                let original = input[[y, x, c]] as f32;
                let soft = output[[y, x, c]] as f32;
                output[[y, x, c]] = to_u8(lerp(original, soft, mix));
            }
        }
    }

    output
}

// ============================================================================
// Face Blur (placeholder)
// ============================================================================

/// Face-blur radius for an intensity: `round(10i)`.
pub fn face_blur_radius(intensity: f32) -> usize {
    (intensity * 10.0).round() as usize
}

/// Privacy blur placeholder.
///
/// No faces are located; the whole frame gets the horizontal Gaussian blur.
pub fn face_blur(input: ArrayView3<u8>, intensity: f32) -> Array3<u8> {
    gaussian_blur_horizontal(input, face_blur_radius(intensity))
}

// ============================================================================
// Background Blur (placeholder)
// ============================================================================

/// Pixels with edge strength below this are treated as background.
pub const BACKGROUND_EDGE_THRESHOLD: f32 = 0.3;

/// Crude per-pixel edge strength in `[0, 1]`.
///
/// Mean absolute RGB difference to the right neighbor and to the bottom
/// neighbor, each normalized by 255, averaged. Pixels on the last column or
/// row compare against themselves on that axis.
pub fn edge_strength_map(input: ArrayView3<u8>) -> Vec<f32> {
    let (height, width, _) = input.dim();
    let mut strength = vec![0.0f32; height * width];

    let diff = |y0: usize, x0: usize, y1: usize, x1: usize| -> f32 {
        let mut total = 0.0f32;
        for c in 0..3 {
            total += (input[[y0, x0, c]] as f32 - input[[y1, x1, c]] as f32).abs();
        }
        total / (3.0 * 255.0)
    };

    for y in 0..height {
        for x in 0..width {
            let right = diff(y, x, y, (x + 1).min(width - 1));
            let bottom = diff(y, x, (y + 1).min(height - 1), x);
            strength[y * width + x] = (right + bottom) / 2.0;
        }
    }

    strength
}

/// Background-blur local average radius for an intensity: `round(3i)`.
pub fn background_blur_radius(intensity: f32) -> usize {
    (intensity * 3.0).round() as usize
}

/// Portrait-mode placeholder: box-average only the low-detail pixels.
///
/// Pixels whose edge strength is below `BACKGROUND_EDGE_THRESHOLD` are
/// replaced with the mean of their in-bounds `(2r+1)²` neighborhood from the
/// original frame; detailed pixels are kept.
pub fn background_blur(input: ArrayView3<u8>, intensity: f32) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = input.to_owned();

    let radius = background_blur_radius(intensity);
    if radius == 0 {
        return output;
    }

    let strength = edge_strength_map(input);
    let r = radius as isize;

    for y in 0..height {
        for x in 0..width {
            if strength[y * width + x] >= BACKGROUND_EDGE_THRESHOLD {
                continue;
            }

            let mut sum = [0u32; 3];
            let mut count = 0u32;

            for dy in -r..=r {
                let sy = y as isize + dy;
                if sy < 0 || sy >= height as isize {
                    continue;
                }

                for dx in -r..=r {
                    let sx = x as isize + dx;
                    if sx < 0 || sx >= width as isize {
                        continue;
                    }

                    for c in 0..3 {
                        sum[c] += input[[sy as usize, sx as usize, c]] as u32;
                    }
                    count += 1;
                }
            }

            for c in 0..3 {
                output[[y, x, c]] = to_u8(sum[c] as f32 / count as f32);
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stripes(h: usize, w: usize) -> Array3<u8> {
        // Alternating columns of 0 and 200
        let mut img = Array3::<u8>::zeros((h, w, 4));
        for y in 0..h {
            for x in 0..w {
                let v = if x % 2 == 0 { 0 } else { 200 };
                img[[y, x, 0]] = v;
                img[[y, x, 1]] = v;
                img[[y, x, 2]] = v;
                img[[y, x, 3]] = 255;
            }
        }
        img
    }

    #[test]
    fn test_gaussian_zero_radius_identity() {
        let img = stripes(2, 5);
        assert_eq!(gaussian_blur_horizontal(img.view(), 0), img);
    }

    #[test]
    fn test_gaussian_is_horizontal_only() {
        // Single bright row: vertical neighbors must stay black
        let mut img = Array3::<u8>::zeros((3, 5, 4));
        for x in 0..5 {
            img[[1, x, 0]] = 255;
        }
        let result = gaussian_blur_horizontal(img.view(), 2);
        for x in 0..5 {
            assert_eq!(result[[0, x, 0]], 0);
            assert_eq!(result[[2, x, 0]], 0);
            // Clamped sampling keeps a constant row constant
            assert_eq!(result[[1, x, 0]], 255);
        }
    }

    #[test]
    fn test_gaussian_smooths_stripes() {
        let img = stripes(1, 9);
        let result = gaussian_blur_horizontal(img.view(), 3);
        let center = result[[0, 4, 0]];
        assert!(center > 30 && center < 170, "center = {center}");
        assert_eq!(result[[0, 4, 3]], 255);
    }

    #[test]
    fn test_soft_focus_radius() {
        assert_eq!(soft_focus_radius(0.0), 2);
        assert_eq!(soft_focus_radius(1.0), 10);
    }

    #[test]
    fn test_soft_focus_zero_intensity_identity() {
        let img = stripes(3, 6);
        assert_eq!(soft_focus(img.view(), 0.0), img);
    }

    #[test]
    fn test_soft_focus_mixes_toward_blur() {
        let img = stripes(1, 12);
        let blurred = gaussian_blur_horizontal(img.view(), soft_focus_radius(1.0));
        let result = soft_focus(img.view(), 1.0);
        // 30% original + 70% blurred at full intensity
        let expected = to_u8(0.3 * img[[0, 5, 0]] as f32 + 0.7 * blurred[[0, 5, 0]] as f32);
        assert!((result[[0, 5, 0]] as i32 - expected as i32).abs() <= 1);
    }

    #[test]
    fn test_face_blur_zero_identity() {
        let img = stripes(2, 4);
        assert_eq!(face_blur(img.view(), 0.0), img);
        assert_ne!(face_blur(img.view(), 1.0), img);
    }

    #[test]
    fn test_edge_strength_map() {
        let img = stripes(2, 3);
        let map = edge_strength_map(img.view());
        // x=0: right diff 200/255, bottom 0
        assert!((map[0] - (200.0 / 255.0) / 2.0).abs() < 1e-6);
        // last column compares to itself horizontally
        assert_eq!(map[2], 0.0);
    }

    #[test]
    fn test_background_blur_smooths_flat_keeps_edges() {
        // Flat gray with a single noisy pixel of low contrast, and a hard edge column
        let mut img = Array3::<u8>::zeros((5, 6, 4));
        for y in 0..5 {
            for x in 0..6 {
                let v = if x == 5 { 255 } else { 100 };
                img[[y, x, 0]] = v;
                img[[y, x, 1]] = v;
                img[[y, x, 2]] = v;
                img[[y, x, 3]] = 255;
            }
        }
        img[[2, 1, 0]] = 120;

        let result = background_blur(img.view(), 1.0);

        // Low-detail neighborhood is averaged
        assert!(result[[2, 1, 0]] < 120);
        // x=4 touches the hard edge (strength ≈ 0.304) and is kept
        assert_eq!(result[[2, 4, 0]], 100);
        assert_eq!(result[[2, 4, 3]], 255);
    }

    #[test]
    fn test_background_blur_zero_identity() {
        let img = stripes(3, 3);
        assert_eq!(background_blur(img.view(), 0.0), img);
    }
}
