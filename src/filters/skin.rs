//! Heuristic skin-tone classifier.
//!
//! Rule-based RGB thresholds, not a learned model. It is deliberately
//! permissive; the thresholds are fixed so results stay comparable across
//! releases.

/// Skin likelihood of an RGB pixel in `[0, 1]`.
///
/// A pixel qualifies when `r > 95`, `g > 40`, `b > 20`,
/// `max - min > 15`, `|r - g| > 15`, `r > g` and `r > b`.
/// Qualifying pixels score `min(1, (r - max(g, b)) / 50)`; all others score 0.
pub fn skin_score(r: u8, g: u8, b: u8) -> f32 {
    let (r, g, b) = (r as i32, g as i32, b as i32);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let qualifies = r > 95
        && g > 40
        && b > 20
        && max - min > 15
        && (r - g).abs() > 15
        && r > g
        && r > b;

    if !qualifies {
        return 0.0;
    }

    ((r - g.max(b)) as f32 / 50.0).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_skin() {
        // r - max(g, b) = 220 - 170 = 50
        assert_eq!(skin_score(220, 170, 140), 1.0);
        // 180 - 150 = 30
        assert!((skin_score(180, 150, 120) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_dark_and_blue() {
        assert_eq!(skin_score(90, 50, 30), 0.0); // r too low
        assert_eq!(skin_score(120, 40, 30), 0.0); // g not > 40
        assert_eq!(skin_score(120, 60, 20), 0.0); // b not > 20
        assert_eq!(skin_score(100, 120, 200), 0.0); // r not dominant
    }

    #[test]
    fn test_rejects_low_red_green_gap() {
        // |r - g| = 15 is not > 15
        assert_eq!(skin_score(150, 135, 60), 0.0);
        assert!(skin_score(150, 134, 60) > 0.0);
    }

    #[test]
    fn test_score_capped() {
        assert_eq!(skin_score(255, 60, 30), 1.0);
    }
}
