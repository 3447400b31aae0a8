//! Edge detection filter (Sobel).
//!
//! Luma is computed per pixel, the 3x3 Sobel operators are applied to the
//! unmodified input, and the gradient magnitude is written to all three
//! color channels. Alpha is preserved; the one-pixel border is left as-is.

use ndarray::{Array3, ArrayView3};

use super::core::{luma, to_u8};

/// Sobel kernels
const KERNEL_X: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const KERNEL_Y: [[f32; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Apply Sobel edge detection.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `intensity` - Magnitude scale, 0.0-1.0
///
/// # Returns
/// Image whose interior RGB is `min(255, sqrt(gx² + gy²) * intensity)`
pub fn edge_detection(input: ArrayView3<u8>, intensity: f32) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = input.to_owned();

    // Precompute luma so each pixel is converted once
    let mut gray = vec![0.0f32; height * width];
    for y in 0..height {
        for x in 0..width {
            gray[y * width + x] = luma(
                input[[y, x, 0]] as f32,
                input[[y, x, 1]] as f32,
                input[[y, x, 2]] as f32,
            );
        }
    }

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let mut gx = 0.0f32;
            let mut gy = 0.0f32;

            for ky in 0..3 {
                for kx in 0..3 {
                    let lum = gray[(y + ky - 1) * width + (x + kx - 1)];
                    gx += lum * KERNEL_X[ky][kx];
                    gy += lum * KERNEL_Y[ky][kx];
                }
            }

            let edge_value = to_u8((gx * gx + gy * gy).sqrt() * intensity);
            for c in 0..3 {
                output[[y, x, c]] = edge_value;
            }
        }
    }

    output
}
