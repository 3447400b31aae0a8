//! Sharpen filter.
//!
//! 3x3 Laplacian-style sharpening over the unmodified input. The one-pixel
//! border is copied through and alpha is preserved.

use ndarray::{Array3, ArrayView3};

use super::core::to_u8;

/// Apply sharpening filter.
///
/// Kernel, where `a = amount`:
/// ```text
///  0  -a   0
/// -a 1+4a -a
///  0  -a   0
/// ```
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `amount` - Sharpening strength, 0.0 = no change
pub fn sharpen(input: ArrayView3<u8>, amount: f32) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = input.to_owned();

    let center_weight = 1.0 + 4.0 * amount;
    let edge_weight = -amount;

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            for c in 0..3 {
                let neighbors = input[[y - 1, x, c]] as f32
                    + input[[y + 1, x, c]] as f32
                    + input[[y, x - 1, c]] as f32
                    + input[[y, x + 1, c]] as f32;
                let v = input[[y, x, c]] as f32 * center_weight + neighbors * edge_weight;
                output[[y, x, c]] = to_u8(v);
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(h: usize, w: usize, v: u8) -> Array3<u8> {
        let mut img = Array3::<u8>::zeros((h, w, 4));
        for y in 0..h {
            for x in 0..w {
                img[[y, x, 0]] = v;
                img[[y, x, 1]] = v;
                img[[y, x, 2]] = v;
                img[[y, x, 3]] = 255;
            }
        }
        img
    }

    #[test]
    fn test_sharpen_flat_region_unchanged() {
        let img = gray(4, 4, 120);
        let result = sharpen(img.view(), 1.0);
        assert_eq!(result, img);
    }

    #[test]
    fn test_sharpen_amplifies_peak() {
        let mut img = gray(3, 3, 100);
        img[[1, 1, 0]] = 120;

        let result = sharpen(img.view(), 1.0);
        // 120 * 5 - 4 * 100 = 200
        assert_eq!(result[[1, 1, 0]], 200);
        // Other channels are flat
        assert_eq!(result[[1, 1, 1]], 100);
    }

    #[test]
    fn test_sharpen_clamps() {
        let mut img = gray(3, 3, 0);
        img[[1, 1, 0]] = 200;
        let result = sharpen(img.view(), 1.0);
        assert_eq!(result[[1, 1, 0]], 255);

        let mut img = gray(3, 3, 255);
        img[[1, 1, 0]] = 50;
        let result = sharpen(img.view(), 1.0);
        assert_eq!(result[[1, 1, 0]], 0);
    }

    #[test]
    fn test_sharpen_zero_amount_identity() {
        let mut img = gray(3, 3, 10);
        img[[1, 1, 2]] = 250;
        let result = sharpen(img.view(), 0.0);
        assert_eq!(result, img);
    }
}
