//! Filter selectors and request parameters.
//!
//! `FilterKind` is a closed set. Hosts that select filters by name or by
//! numeric code go through `FromStr` / `TryFrom<u8>`, which is where an
//! unknown selector is rejected with `UnsupportedFilterKind`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::FrameFxError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    EdgeDetection,
    ColorPop,
    Vintage,
    Cyberpunk,
    OilPainting,
    FaceBlur,
    BackgroundBlur,
    PortraitEnhance,
    LandscapeEnhance,
    Hdr,
    BlackWhite,
    WarmTone,
    CoolTone,
    Dramatic,
    SoftFocus,
    Sharpen,
    NoiseReduction,
}

impl FilterKind {
    /// Every kind, in numeric-code order.
    pub const ALL: [FilterKind; 17] = [
        FilterKind::EdgeDetection,
        FilterKind::ColorPop,
        FilterKind::Vintage,
        FilterKind::Cyberpunk,
        FilterKind::OilPainting,
        FilterKind::FaceBlur,
        FilterKind::BackgroundBlur,
        FilterKind::PortraitEnhance,
        FilterKind::LandscapeEnhance,
        FilterKind::Hdr,
        FilterKind::BlackWhite,
        FilterKind::WarmTone,
        FilterKind::CoolTone,
        FilterKind::Dramatic,
        FilterKind::SoftFocus,
        FilterKind::Sharpen,
        FilterKind::NoiseReduction,
    ];

    /// Kebab-case name, identical to the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::EdgeDetection => "edge-detection",
            FilterKind::ColorPop => "color-pop",
            FilterKind::Vintage => "vintage",
            FilterKind::Cyberpunk => "cyberpunk",
            FilterKind::OilPainting => "oil-painting",
            FilterKind::FaceBlur => "face-blur",
            FilterKind::BackgroundBlur => "background-blur",
            FilterKind::PortraitEnhance => "portrait-enhance",
            FilterKind::LandscapeEnhance => "landscape-enhance",
            FilterKind::Hdr => "hdr",
            FilterKind::BlackWhite => "black-white",
            FilterKind::WarmTone => "warm-tone",
            FilterKind::CoolTone => "cool-tone",
            FilterKind::Dramatic => "dramatic",
            FilterKind::SoftFocus => "soft-focus",
            FilterKind::Sharpen => "sharpen",
            FilterKind::NoiseReduction => "noise-reduction",
        }
    }

    /// True for kinds that sample a pixel neighborhood.
    pub fn is_neighborhood(self) -> bool {
        matches!(
            self,
            FilterKind::EdgeDetection
                | FilterKind::OilPainting
                | FilterKind::FaceBlur
                | FilterKind::BackgroundBlur
                | FilterKind::SoftFocus
                | FilterKind::Sharpen
                | FilterKind::NoiseReduction
        )
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = FrameFxError;

    /// Accepts kebab-case or snake_case names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        FilterKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| FrameFxError::UnsupportedFilterKind(s.to_string()))
    }
}

impl TryFrom<u8> for FilterKind {
    type Error = FrameFxError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        FilterKind::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| FrameFxError::UnsupportedFilterKind(format!("code {code}")))
    }
}

/// 8-bit RGB color, used as the reference color for color-pop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

fn default_intensity() -> f32 {
    1.0
}

/// A filter selection plus its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequest {
    pub kind: FilterKind,
    #[serde(default = "default_intensity")]
    pub intensity: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aux_color: Option<Rgb>,
}

impl FilterRequest {
    pub fn new(kind: FilterKind, intensity: f32) -> Self {
        FilterRequest {
            kind,
            intensity,
            aux_color: None,
        }
    }

    pub fn with_aux_color(mut self, color: Rgb) -> Self {
        self.aux_color = Some(color);
        self
    }

    /// Intensity clamped to `[0, 1]`; NaN is treated as 0.
    pub fn clamped_intensity(&self) -> f32 {
        if self.intensity.is_nan() {
            warn!(kind = %self.kind, "NaN filter intensity, using 0");
            return 0.0;
        }
        self.intensity.clamp(0.0, 1.0)
    }
}
