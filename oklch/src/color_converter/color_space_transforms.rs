// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The color math that takes a [`ParsedColor`] to an [`OklchColor`].
//!
//! ```text
//! named, hex, rgb ──────────────┐
//! hsl ──▶ sRGB ─────────────────┼──▶ linear sRGB ──▶ OKLab ──▶ OKLCH
//! hwb ──▶ sRGB ─────────────────┤
//! lch ──▶ lab (D50) ──▶ XYZ ────┘
//! ```
//!
//! Nothing is clipped to the sRGB gamut along the way. Out of range input (eg:
//! `rgb(999, 0, 0)`) produces out of range output, and non-finite input produces
//! non-finite output which [`crate::convert_literal`] reports as a failure.

use crate::{CieLabColor, ColorSpace, LinearRgbColor, OkLabColor, OklchColor,
            ParsedColor, SrgbColor};

/// Below this OKLCH chroma a color is treated as achromatic, and its hue is dropped.
pub const ACHROMATIC_CHROMA_EPSILON: f64 = 1e-4;

pub trait TransformColor {
    /// Returns a [`LinearRgbColor`] representation of the `self` color.
    fn as_linear_rgb(&self) -> LinearRgbColor;

    fn as_oklab(&self) -> OkLabColor { linear_srgb_to_oklab(self.as_linear_rgb()) }

    fn as_oklch(&self) -> OklchColor { oklab_to_oklch(self.as_oklab()) }
}

mod parsed_color_impl {
    use super::*;

    impl TransformColor for ParsedColor {
        fn as_linear_rgb(&self) -> LinearRgbColor {
            let [first, second, third] = self.channels;
            match self.space {
                ColorSpace::Named | ColorSpace::Hex | ColorSpace::Rgb => SrgbColor {
                    red: first / 255.0,
                    green: second / 255.0,
                    blue: third / 255.0,
                }
                .as_linear_rgb(),
                ColorSpace::Hsl => {
                    hsl_to_srgb(first, second / 100.0, third / 100.0).as_linear_rgb()
                }
                ColorSpace::Hwb => {
                    hwb_to_srgb(first, second / 100.0, third / 100.0).as_linear_rgb()
                }
                ColorSpace::Lab => CieLabColor {
                    lightness: first,
                    a: second,
                    b: third,
                }
                .as_linear_rgb(),
                ColorSpace::Lch => lch_to_lab(first, second, third).as_linear_rgb(),
            }
        }
    }
}

mod srgb_color_impl {
    use super::*;

    impl TransformColor for SrgbColor {
        fn as_linear_rgb(&self) -> LinearRgbColor {
            LinearRgbColor {
                red: srgb_to_linear(self.red),
                green: srgb_to_linear(self.green),
                blue: srgb_to_linear(self.blue),
            }
        }
    }
}

mod cie_lab_color_impl {
    use super::*;

    impl TransformColor for CieLabColor {
        fn as_linear_rgb(&self) -> LinearRgbColor { lab_d50_to_linear_srgb(*self) }
    }
}

/// Undo the sRGB transfer function for one channel. The sign is kept so that values
/// below zero mirror values above zero.
#[must_use]
pub fn srgb_to_linear(channel: f64) -> f64 {
    let abs = channel.abs();
    if abs <= 0.040_45 {
        channel / 12.92
    } else {
        ((abs + 0.055) / 1.055).powf(2.4).copysign(channel)
    }
}

/// `hue` is in degrees (any value, it wraps), `saturation` and `lightness` are
/// fractions.
#[must_use]
pub fn hsl_to_srgb(hue: f64, saturation: f64, lightness: f64) -> SrgbColor {
    let hue = hue.rem_euclid(360.0);
    let amount = saturation * lightness.min(1.0 - lightness);
    let channel = |n: f64| {
        let k = (n + hue / 30.0).rem_euclid(12.0);
        lightness - amount * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
    };
    SrgbColor {
        red: channel(0.0),
        green: channel(8.0),
        blue: channel(4.0),
    }
}

/// `hue` is in degrees, `whiteness` and `blackness` are fractions. When they add up to
/// 1 or more the result is a gray.
#[must_use]
pub fn hwb_to_srgb(hue: f64, whiteness: f64, blackness: f64) -> SrgbColor {
    if whiteness + blackness >= 1.0 {
        let gray = whiteness / (whiteness + blackness);
        return SrgbColor {
            red: gray,
            green: gray,
            blue: gray,
        };
    }

    let pure_hue = hsl_to_srgb(hue, 1.0, 0.5);
    let scale = |channel: f64| channel * (1.0 - whiteness - blackness) + whiteness;
    SrgbColor {
        red: scale(pure_hue.red),
        green: scale(pure_hue.green),
        blue: scale(pure_hue.blue),
    }
}

/// `hue` is in degrees.
#[must_use]
pub fn lch_to_lab(lightness: f64, chroma: f64, hue: f64) -> CieLabColor {
    let hue = hue.to_radians();
    CieLabColor {
        lightness,
        a: chroma * hue.cos(),
        b: chroma * hue.sin(),
    }
}

#[must_use]
pub fn lab_d50_to_linear_srgb(lab: CieLabColor) -> LinearRgbColor {
    let fy = (lab.lightness + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    let x = helper_fns::lab_f_inverse(fx) * helper_fns::D50_WHITE[0];
    let y = helper_fns::lab_f_inverse(fy) * helper_fns::D50_WHITE[1];
    let z = helper_fns::lab_f_inverse(fz) * helper_fns::D50_WHITE[2];

    LinearRgbColor {
        red: 3.134_135_956_995_870_7 * x - 1.617_386_332_161_253_8 * y
            - 0.490_661_949_008_353_2 * z,
        green: -0.978_795_502_912_089 * x + 1.916_254_567_259_524 * y
            + 0.033_442_731_161_319_49 * z,
        blue: 0.071_955_379_884_116_77 * x - 0.228_976_826_415_832_2 * y
            + 1.405_386_058_324_125 * z,
    }
}

#[must_use]
pub fn linear_srgb_to_oklab(rgb: LinearRgbColor) -> OkLabColor {
    let l = 0.412_221_470_8 * rgb.red + 0.536_332_536_3 * rgb.green
        + 0.051_445_992_9 * rgb.blue;
    let m = 0.211_903_498_2 * rgb.red + 0.680_699_545_1 * rgb.green
        + 0.107_396_956_6 * rgb.blue;
    let s = 0.088_302_461_9 * rgb.red + 0.281_718_837_6 * rgb.green
        + 0.629_978_700_5 * rgb.blue;

    let l = l.cbrt();
    let m = m.cbrt();
    let s = s.cbrt();

    OkLabColor {
        lightness: 0.210_454_255_3 * l + 0.793_617_785_0 * m - 0.004_072_046_8 * s,
        a: 1.977_998_495_1 * l - 2.428_592_205_0 * m + 0.450_593_709_9 * s,
        b: 0.025_904_037_1 * l + 0.782_771_766_2 * m - 0.808_675_766_0 * s,
    }
}

#[must_use]
pub fn oklab_to_oklch(lab: OkLabColor) -> OklchColor {
    let chroma = lab.a.hypot(lab.b);
    let hue = if chroma < ACHROMATIC_CHROMA_EPSILON {
        None
    } else {
        Some(lab.b.atan2(lab.a).to_degrees().rem_euclid(360.0))
    };
    OklchColor {
        lightness: lab.lightness,
        chroma,
        hue,
    }
}

mod helper_fns {
    /// CIE `κ`.
    const KAPPA: f64 = 24_389.0 / 27.0;
    /// CIE `ε`.
    const EPSILON: f64 = 216.0 / 24_389.0;

    /// D50 reference white in XYZ.
    pub const D50_WHITE: [f64; 3] = [
        0.3457 / 0.3585,
        1.0,
        (1.0 - 0.3457 - 0.3585) / 0.3585,
    ];

    pub fn lab_f_inverse(t: f64) -> f64 {
        let cubed = t * t * t;
        if cubed > EPSILON {
            cubed
        } else {
            (116.0 * t - 16.0) / KAPPA
        }
    }
}
