// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter};

/// The literal syntaxes that can be recognized and converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ColorSpace {
    Named,
    Hex,
    Rgb,
    Hsl,
    Hwb,
    Lab,
    Lch,
}

/// The numbers pulled out of a color literal, before any color math is done.
///
/// | Space   | `channels`                                    |
/// | :------ | :-------------------------------------------- |
/// | `Named` | red, green, blue in `0..=255`                 |
/// | `Hex`   | red, green, blue in `0..=255`                 |
/// | `Rgb`   | red, green, blue, not range checked (`0..=999`) |
/// | `Hsl`   | hue (degrees), saturation %, lightness %      |
/// | `Hwb`   | hue (degrees), whiteness %, blackness %       |
/// | `Lab`   | lightness, a, b (CIE, D50)                    |
/// | `Lch`   | lightness, chroma, hue (degrees, CIE, D50)    |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedColor {
    pub space: ColorSpace,
    pub channels: [f64; 3],
    /// Always in `0.0..=1.0`.
    pub alpha: f64,
}

impl ParsedColor {
    /// A missing alpha is fully opaque. Alpha outside of `0.0..=1.0` is clamped.
    #[must_use]
    pub fn new(space: ColorSpace, channels: [f64; 3], alpha: Option<f64>) -> Self {
        let alpha = alpha.unwrap_or(1.0).clamp(0.0, 1.0);
        Self {
            space,
            channels,
            alpha,
        }
    }
}

/// Gamma encoded sRGB, nominally in `0.0..=1.0` per channel. Values outside of that
/// range are kept, they are not clipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SrgbColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

/// Linear light sRGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgbColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

/// CIE L\*a\*b\* with a D50 white point. `lightness` is in `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CieLabColor {
    pub lightness: f64,
    pub a: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLabColor {
    pub lightness: f64,
    pub a: f64,
    pub b: f64,
}

/// Polar form of [`OkLabColor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OklchColor {
    pub lightness: f64,
    pub chroma: f64,
    /// Degrees in `0.0..360.0`. [None] for achromatic colors, it prints as `0`.
    pub hue: Option<f64>,
}

impl OklchColor {
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.lightness.is_finite()
            && self.chroma.is_finite()
            && self.hue.is_none_or(f64::is_finite)
    }
}
