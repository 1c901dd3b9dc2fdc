// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Scan arbitrary text for color literals. See [`ColorTokens`].

use std::ops::Range;

use nom::{IResult, Parser, sequence::terminated};

use crate::{COLOR_LITERAL_PARSERS, ParsedColor, parse_custom_property_prefix,
            statement_end, token_matcher::constants::UNDERSCORE_CHAR};

/// A color literal found in the input text, with the custom property declaration in
/// front of it (if any). Borrows from the scanned text.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorToken<'a> {
    /// Everything that was matched, eg: `--accent: #ff0000`.
    pub matched_text: &'a str,
    /// Eg: `--accent: `. This is never handed to the converter.
    pub custom_property_prefix: Option<&'a str>,
    /// Eg: `#ff0000`. This is what the converter gets.
    pub literal: &'a str,
    /// What the literal parsed into. Its `space` is the syntax that matched, so the
    /// converter doesn't have to parse the literal again.
    pub parsed_color: ParsedColor,
    /// Byte range of [`Self::matched_text`] in the scanned text.
    pub byte_range: Range<usize>,
}

impl ColorToken<'_> {
    /// Byte range of [`Self::literal`] in the scanned text.
    #[must_use]
    pub fn literal_byte_range(&self) -> Range<usize> {
        let prefix_len = self.custom_property_prefix.map_or(0, str::len);
        self.byte_range.start + prefix_len..self.byte_range.end
    }
}

/// Lazy iterator over the [`ColorToken`]s in some text, in document order.
///
/// Rules:
/// 1. A match can't be preceded by a word character (`[A-Za-z0-9_]`), so `navy` is not
///    found inside `skynavy`, and a hex run is not found inside a longer word.
/// 2. A match must be followed by a statement end: optional spaces or tabs, then `;`, a
///    line break, or the end of the text. `navy` is not found inside `navyblue`.
/// 3. The alternatives in [`COLOR_LITERAL_PARSERS`] are tried in order, the first one
///    that satisfies rule 2 wins.
/// 4. Matches never overlap. Scanning resumes right after the literal, the statement end
///    is not consumed.
///
/// An empty iterator means there is nothing to do, it is not an error.
///
/// ```
/// use r3bl_oklch::ColorTokens;
///
/// let text = "--accent: #ff0000;\ncolor: navy;";
/// let literals: Vec<_> = ColorTokens::new(text).map(|it| it.literal).collect();
/// assert_eq!(literals, vec!["#ff0000", "navy"]);
/// ```
#[derive(Debug, Clone)]
pub struct ColorTokens<'a> {
    text: &'a str,
    cursor: usize,
}

impl<'a> ColorTokens<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self { Self { text, cursor: 0 } }
}

impl<'a> Iterator for ColorTokens<'a> {
    type Item = ColorToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_char) = self.text[self.cursor..].chars().next() {
            let start = self.cursor;

            if !is_preceded_by_word_char(self.text, start)
                && let Ok((remainder, (prefix, literal, parsed_color))) =
                    parse_color_token(&self.text[start..])
            {
                let end = self.text.len() - remainder.len();
                self.cursor = end;
                return Some(ColorToken {
                    matched_text: &self.text[start..end],
                    custom_property_prefix: prefix,
                    literal,
                    parsed_color,
                    byte_range: start..end,
                });
            }

            self.cursor += current_char.len_utf8();
        }

        None
    }
}

impl std::iter::FusedIterator for ColorTokens<'_> {}

/// Shorthand for `ColorTokens::new(text)`.
#[must_use]
pub fn find_color_tokens(text: &str) -> ColorTokens<'_> { ColorTokens::new(text) }

/// Parse an optional custom property prefix, then a color literal that is followed by a
/// statement end. Returns `(prefix, literal, parsed_color)`.
///
/// # Errors
///
/// Returns a nom error if there is no color literal at the start of the input.
pub fn parse_color_token(
    input: &str,
) -> IResult<&str, (Option<&str>, &str, ParsedColor)> {
    if let Ok((remainder, (prefix, (literal, parsed_color)))) =
        (parse_custom_property_prefix, parse_literal_before_statement_end).parse(input)
    {
        return Ok((remainder, (Some(prefix), literal, parsed_color)));
    }

    let (remainder, (literal, parsed_color)) = parse_literal_before_statement_end(input)?;
    Ok((remainder, (None, literal, parsed_color)))
}

/// Try each alternative in [`COLOR_LITERAL_PARSERS`] in order. This gives the same
/// result as a backtracking regex alternation with a trailing lookahead: `blue` is
/// rejected for `blueviolet;` and the scan moves on to the next alternative.
fn parse_literal_before_statement_end(input: &str) -> IResult<&str, (&str, ParsedColor)> {
    for (_, parser) in COLOR_LITERAL_PARSERS {
        if let Ok((remainder, parsed_color)) =
            terminated(parser, statement_end).parse(input)
        {
            let literal = &input[..input.len() - remainder.len()];
            return Ok((remainder, (literal, parsed_color)));
        }
    }

    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Alt,
    )))
}

fn is_preceded_by_word_char(text: &str, byte_index: usize) -> bool {
    text[..byte_index]
        .chars()
        .next_back()
        .is_some_and(|it| it.is_ascii_alphanumeric() || it == UNDERSCORE_CHAR)
}
