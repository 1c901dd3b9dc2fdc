// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ConvertError, ConvertOptions, ParsedColor, TransformColor, format_oklch,
            try_parse_color_literal};

/// A literal and the OKLCH literal that replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedColor {
    pub original: String,
    pub converted: String,
}

/// Convert one color literal (eg: `#ff0000`, `hsl(210, 50%, 40%)`) into an `oklch()`
/// literal. Surrounding whitespace is ignored. Any other extra text is an error.
///
/// # Errors
///
/// - [`ConvertError::UnconvertibleLiteral`] if no supported syntax accepts the literal.
/// - [`ConvertError::MalformedNumericLiteral`] if the numbers overflow, eg: a `lab()`
///   channel with hundreds of digits.
pub fn convert_literal(
    literal: &str,
    options: &ConvertOptions,
) -> Result<ConvertedColor, ConvertError> {
    let Some(parsed_color) = try_parse_color_literal(literal.trim()) else {
        return Err(ConvertError::UnconvertibleLiteral {
            literal: literal.to_string(),
        });
    };

    convert_parsed_color(literal, parsed_color, options)
}

/// Second half of [`convert_literal`], for a literal that has already been parsed (eg:
/// by [`crate::ColorTokens`]).
///
/// # Errors
///
/// [`ConvertError::MalformedNumericLiteral`] if the numbers overflow.
pub fn convert_parsed_color(
    literal: &str,
    parsed_color: ParsedColor,
    options: &ConvertOptions,
) -> Result<ConvertedColor, ConvertError> {
    let malformed = || ConvertError::MalformedNumericLiteral {
        literal: literal.to_string(),
        space: parsed_color.space,
    };

    if !parsed_color.channels.iter().all(|it| it.is_finite()) {
        return Err(malformed());
    }

    let oklch_color = parsed_color.as_oklch();
    if !oklch_color.is_finite() {
        return Err(malformed());
    }

    let converted = format_oklch(&oklch_color, parsed_color.alpha, options);

    tracing::debug!(
        message = "convert_parsed_color",
        literal = ?literal,
        space = %parsed_color.space,
        converted = ?converted
    );

    Ok(ConvertedColor {
        original: literal.to_string(),
        converted,
    })
}
