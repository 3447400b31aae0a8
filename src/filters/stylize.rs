//! Stylize filters: Cyberpunk, Oil Painting.
//!
//! These are artistic effect filters. Cyberpunk is pixel-wise; oil painting
//! samples a square neighborhood from the unmodified input.

use ndarray::{Array3, ArrayView3};

use super::core::{map_pixels, to_u8};

// ============================================================================
// Cyberpunk
// ============================================================================

/// Neon color grade.
///
/// Channels are scaled by `(1 + 0.3i, 1 + 0.5i, 1 + 0.8i)`. If the mean of
/// the scaled channels is above 128 the pixel gets a neon boost of
/// `(+50i, +30i, +70i)`; otherwise it is dampened by `(0.7, 0.8, 1.0)`.
pub fn cyberpunk(input: ArrayView3<u8>, intensity: f32) -> Array3<u8> {
    map_pixels(input, |r, g, b| {
        let r = r * (1.0 + 0.3 * intensity);
        let g = g * (1.0 + 0.5 * intensity);
        let b = b * (1.0 + 0.8 * intensity);

        let brightness = (r + g + b) / 3.0;
        if brightness > 128.0 {
            [
                r + 50.0 * intensity,
                g + 30.0 * intensity,
                b + 70.0 * intensity,
            ]
        } else {
            [r * 0.7, g * 0.8, b]
        }
    })
}

// ============================================================================
// Oil Painting
// ============================================================================

/// Oil-painting radius for an intensity: `round(5i + 1)`, 1-6.
pub fn oil_painting_radius(intensity: f32) -> usize {
    (intensity * 5.0 + 1.0).round() as usize
}

/// Quantization step for the color buckets.
const OIL_BUCKET: u8 = 32;

struct Bucket {
    key: [u8; 3],
    count: u32,
    sum: [u32; 3],
}

/// Apply oil-painting effect.
///
/// For each pixel at least `radius` away from every border, neighbors in the
/// `(2r+1)²` window are grouped by their channels floored to a multiple of 32.
/// The most populated group wins (first-seen group on ties, scanning rows top
/// to bottom), and the pixel becomes the unquantized mean of that group.
/// Border pixels are copied unchanged.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `radius` - Neighborhood radius
pub fn oil_painting(input: ArrayView3<u8>, radius: usize) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = input.to_owned();

    if radius == 0 || height <= radius * 2 || width <= radius * 2 {
        return output;
    }

    let mut buckets: Vec<Bucket> = Vec::with_capacity((radius * 2 + 1).pow(2));

    for y in radius..height - radius {
        for x in radius..width - radius {
            buckets.clear();

            for sy in y - radius..=y + radius {
                for sx in x - radius..=x + radius {
                    let px = [input[[sy, sx, 0]], input[[sy, sx, 1]], input[[sy, sx, 2]]];
                    let key = px.map(|v| v - v % OIL_BUCKET);

                    match buckets.iter_mut().find(|b| b.key == key) {
                        Some(bucket) => {
                            bucket.count += 1;
                            for c in 0..3 {
                                bucket.sum[c] += px[c] as u32;
                            }
                        }
                        None => buckets.push(Bucket {
                            key,
                            count: 1,
                            sum: px.map(u32::from),
                        }),
                    }
                }
            }

            let mut best = &buckets[0];
            for bucket in &buckets[1..] {
                if bucket.count > best.count {
                    best = bucket;
                }
            }

            for c in 0..3 {
                output[[y, x, c]] = to_u8(best.sum[c] as f32 / best.count as f32);
            }
        }
    }

    output
}
