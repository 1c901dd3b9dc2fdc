// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ColorSpace;

/// Why a single color literal could not be converted. Neither variant stops the rest
/// of the text from being converted, see [`crate::convert`].
///
/// | Variant                     | Cause                                               |
/// | :-------------------------- | :-------------------------------------------------- |
/// | [`UnconvertibleLiteral`]    | No syntax accepts the literal                       |
/// | [`MalformedNumericLiteral`] | The literal parses, but its numbers overflow to NaN |
///
/// [`UnconvertibleLiteral`]: Self::UnconvertibleLiteral
/// [`MalformedNumericLiteral`]: Self::MalformedNumericLiteral
#[derive(Debug, Clone, PartialEq, thiserror::Error, miette::Diagnostic)]
pub enum ConvertError {
    #[error("Unsupported color literal: '{literal}'")]
    #[diagnostic(
        code(r3bl_oklch::convert::unconvertible_literal),
        help("Supported syntaxes are named, hex, rgb(a), hsl(a), hwb, lab, and lch")
    )]
    UnconvertibleLiteral { literal: String },

    #[error("Color literal '{literal}' ({space}) does not produce finite numbers")]
    #[diagnostic(
        code(r3bl_oklch::convert::malformed_numeric_literal),
        help("Check the literal for channel values that are too large")
    )]
    MalformedNumericLiteral { literal: String, space: ColorSpace },
}

impl ConvertError {
    /// The literal text that failed, as it appeared in the input.
    #[must_use]
    pub fn literal(&self) -> &str {
        match self {
            Self::UnconvertibleLiteral { literal }
            | Self::MalformedNumericLiteral { literal, .. } => literal,
        }
    }
}
