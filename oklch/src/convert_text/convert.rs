// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{ColorTokens, FailureReport, convert_parsed_color};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Emit ` / 1` for fully opaque colors too. When `false` the alpha segment only
    /// shows up for colors with alpha below 1.
    #[serde(alias = "useOpacity")]
    pub always_show_alpha: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            always_show_alpha: true,
        }
    }
}

/// The outcome of [`convert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    /// The input with every converted literal replaced. Everything else is verbatim.
    pub rewritten: String,
    pub failures: FailureReport,
    /// Number of literals that were found, converted or not.
    pub matched_token_count: usize,
}

impl ConvertReport {
    /// Nothing in the text looked like a color literal. This is not an error, there is
    /// just nothing to do.
    #[must_use]
    pub fn is_no_match(&self) -> bool { self.matched_token_count == 0 }
}

/// Replace every color literal in `text` with its `oklch()` equivalent.
///
/// - Custom property prefixes (eg: `--accent: `) and the `;` after the literal stay
///   where they are, only the literal itself is replaced.
/// - A literal that can't be converted is left as is and added to
///   [`ConvertReport::failures`]. It never stops the other literals from being
///   converted.
///
/// ```
/// use r3bl_oklch::{ConvertOptions, convert};
///
/// let options = ConvertOptions { always_show_alpha: false };
/// let report = convert("--accent: #ff0000;", &options);
/// assert_eq!(report.rewritten, "--accent: oklch(0.63 0.26 29.23);");
/// assert!(report.failures.is_empty());
/// ```
#[must_use]
pub fn convert(text: &str, options: &ConvertOptions) -> ConvertReport {
    let mut rewritten = String::with_capacity(text.len());
    let mut failures = FailureReport::default();
    let mut matched_token_count = 0;
    let mut copied_up_to = 0;

    for token in ColorTokens::new(text) {
        matched_token_count += 1;
        match convert_parsed_color(token.literal, token.parsed_color, options) {
            Ok(converted_color) => {
                let literal_range = token.literal_byte_range();
                rewritten.push_str(&text[copied_up_to..literal_range.start]);
                rewritten.push_str(&converted_color.converted);
                copied_up_to = literal_range.end;
            }
            Err(error) => {
                tracing::warn!(
                    message = "Could not convert color literal",
                    literal = ?error.literal(),
                    error = %error
                );
                failures.push(error.literal());
            }
        }
    }

    rewritten.push_str(&text[copied_up_to..]);

    tracing::debug!(
        message = "convert",
        matched_token_count = matched_token_count,
        failure_count = failures.len()
    );

    ConvertReport {
        rewritten,
        failures,
        matched_token_count,
    }
}
