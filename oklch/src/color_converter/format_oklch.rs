// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turn an [`OklchColor`] into CSS text, eg: `oklch(0.63 0.26 29.23 / 0.50)`.

use std::fmt::{Display, Formatter, Result};

use crate::{ConvertOptions, OklchColor};

/// Number of decimals that every number in the output is rounded to.
pub const DECIMAL_PLACES: usize = 2;
const DECIMAL_SCALE: f64 = 100.0;

/// Round to [`DECIMAL_PLACES`], ties away from zero (`0.125` becomes `0.13`).
#[must_use]
pub fn round_to_decimal_places(value: f64) -> f64 {
    (value * DECIMAL_SCALE).round() / DECIMAL_SCALE
}

/// Round to 2 decimals (see [`round_to_decimal_places`]). A trailing `.00` is dropped
/// and a negative zero prints as `0`, other trailing zeros are kept.
///
/// | Input    | Output |
/// | :------- | :----- |
/// | `0.6279` | `0.63` |
/// | `0.125`  | `0.13` |
/// | `0.5`    | `0.50` |
/// | `1.0`    | `1`    |
/// | `-0.001` | `0`    |
#[must_use]
pub fn format_channel(value: f64) -> String {
    let rounded = format!(
        "{:.precision$}",
        round_to_decimal_places(value),
        precision = DECIMAL_PLACES
    );
    match rounded.strip_suffix(".00") {
        Some("-0") => "0".to_string(),
        Some(whole) => whole.to_string(),
        None => rounded,
    }
}

/// Like [`format_channel`], but a hue that rounds up to `360` wraps to `0`, and a
/// missing hue prints as `0`.
#[must_use]
pub fn format_hue(hue: Option<f64>) -> String {
    let Some(hue) = hue else {
        return format_channel(0.0);
    };
    let mut rounded = round_to_decimal_places(hue);
    if rounded >= 360.0 {
        rounded -= 360.0;
    }
    format_channel(rounded)
}

/// `oklch(L C H)` or `oklch(L C H / A)`. The alpha segment is there when
/// [`ConvertOptions::always_show_alpha`] is set, or when the color is not fully opaque.
#[must_use]
pub fn format_oklch(color: &OklchColor, alpha: f64, options: &ConvertOptions) -> String {
    OklchLiteral {
        color,
        alpha,
        show_alpha: options.always_show_alpha || alpha < 1.0,
    }
    .to_string()
}

struct OklchLiteral<'a> {
    color: &'a OklchColor,
    alpha: f64,
    show_alpha: bool,
}

impl Display for OklchLiteral<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "oklch({} {} {}",
            format_channel(self.color.lightness),
            format_channel(self.color.chroma),
            format_hue(self.color.hue)
        )?;
        if self.show_alpha {
            write!(f, " / {}", format_channel(self.alpha))?;
        }
        write!(f, ")")
    }
}
