//! Noise reduction filter (vector median).
//!
//! Each interior pixel is compared with its square neighborhood in the
//! unmodified input. Neighbors are ranked by summed RGB and the middle one
//! is taken as the median pixel, which keeps channels of a single real
//! pixel together instead of mixing per-channel medians.

use ndarray::{Array3, ArrayView3};

use super::core::{lerp, to_u8};

/// Noise-reduction radius for an intensity: `round(3i + 1)`, 1-4.
pub fn noise_reduction_radius(intensity: f32) -> usize {
    (intensity * 3.0 + 1.0).round() as usize
}

/// Apply median noise reduction, blended with the original by `intensity`.
///
/// Only pixels at least `radius` away from every border are processed; the
/// rest are copied unchanged. Ties in summed RGB keep scan order.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `radius` - Neighborhood radius
/// * `intensity` - Blend from original (0.0) to median (1.0)
pub fn noise_reduction(input: ArrayView3<u8>, radius: usize, intensity: f32) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = input.to_owned();

    if radius == 0 || height <= radius * 2 || width <= radius * 2 {
        return output;
    }

    let window_size = (radius * 2 + 1) * (radius * 2 + 1);
    let mut values: Vec<[u8; 3]> = Vec::with_capacity(window_size);

    for y in radius..height - radius {
        for x in radius..width - radius {
            values.clear();

            for sy in y - radius..=y + radius {
                for sx in x - radius..=x + radius {
                    values.push([input[[sy, sx, 0]], input[[sy, sx, 1]], input[[sy, sx, 2]]]);
                }
            }

            values.sort_by_key(|p| p[0] as u32 + p[1] as u32 + p[2] as u32);
            let median = values[values.len() / 2];

            for c in 0..3 {
                let original = input[[y, x, c]] as f32;
                output[[y, x, c]] = to_u8(lerp(original, median[c] as f32, intensity));
            }
        }
    }

    output
}
