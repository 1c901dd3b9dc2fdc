// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One [nom] parser per supported color literal syntax, and the dispatch table
//! ([`COLOR_LITERAL_PARSERS`]) that ties them together.
//!
//! Each parser consumes exactly one literal and produces a [`ParsedColor`]. The same
//! parsers drive both the scanner in [`crate::ColorTokens`] (which also requires a
//! statement end after the literal) and [`crate::convert_literal`] (which requires the
//! literal to consume all of its input).
//!
//! | Syntax  | Sample                     |
//! | :------ | :------------------------- |
//! | named   | `navy`, `transparent`      |
//! | hex     | `#abc`, `#ff000080`        |
//! | rgb     | `rgba(0, 128, 255, 0.5)`   |
//! | hsl     | `hsl(210, 50%, 40%)`       |
//! | hwb     | `hwb(240, 20%, 30%)`       |
//! | lab     | `lab(50, -20.5, 30)`       |
//! | lch     | `lch(50, 30, 120deg)`      |

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::{tag, tag_no_case, take_while_m_n, take_while1},
          character::complete::{char, digit1, satisfy, space0},
          combinator::{all_consuming, eof, map_opt, map_res, opt, peek, recognize, value,
                       verify},
          sequence::{delimited, preceded, terminated}};

use crate::{ColorSpace, ParsedColor, lookup_named_color,
            token_matcher::constants::{CARRIAGE_RETURN, COLON_CHAR, COMMA_CHAR,
                                       CUSTOM_PROPERTY_DASHES, DEG, HASH, HSL, HSLA,
                                       HWB, LAB, LCH, LEFT_PARENTHESIS,
                                       MAX_INTEGER_CHANNEL_DIGITS, MINUS_CHAR,
                                       NEW_LINE, PERCENT_CHAR, PERIOD_CHAR, RGB, RGBA,
                                       RIGHT_PARENTHESIS, SEMICOLON, UNDERSCORE_CHAR}};

/// Signature shared by every entry in [`COLOR_LITERAL_PARSERS`].
pub type ColorLiteralParser = fn(&str) -> IResult<&str, ParsedColor>;

/// The order matters to the scanner: the first alternative that is followed by a
/// statement end wins.
pub const COLOR_LITERAL_PARSERS: [(ColorSpace, ColorLiteralParser); 7] = [
    (ColorSpace::Named, parse_named_color),
    (ColorSpace::Hex, parse_hex_color),
    (ColorSpace::Rgb, parse_rgb_fn),
    (ColorSpace::Hsl, parse_hsl_fn),
    (ColorSpace::Hwb, parse_hwb_fn),
    (ColorSpace::Lab, parse_lab_fn),
    (ColorSpace::Lch, parse_lch_fn),
];

/// Parse input that must be exactly one color literal (no leading or trailing text).
/// Returns [None] if no syntax in [`COLOR_LITERAL_PARSERS`] accepts the whole input.
#[must_use]
pub fn try_parse_color_literal(input: &str) -> Option<ParsedColor> {
    COLOR_LITERAL_PARSERS.iter().find_map(|(_, parser)| {
        all_consuming(*parser)
            .parse(input)
            .ok()
            .map(|(_, parsed_color)| parsed_color)
    })
}

/// Sample input: `navy`, `RebeccaPurple`, `transparent`.
///
/// # Errors
///
/// Returns a nom error if the run of letters is not a CSS named color.
pub fn parse_named_color(input: &str) -> IResult<&str, ParsedColor> {
    map_opt(take_while1(|it: char| it.is_ascii_alphabetic()), |name: &str| {
        let ([red, green, blue], alpha) = lookup_named_color(name)?;
        Some(ParsedColor::new(
            ColorSpace::Named,
            [f64::from(red), f64::from(green), f64::from(blue)],
            Some(alpha),
        ))
    })
    .parse(input)
}

/// Sample input: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
///
/// # Errors
///
/// Returns a nom error if the digit run after `#` is not 3, 4, 6, or 8 hex digits long.
pub fn parse_hex_color(input: &str) -> IResult<&str, ParsedColor> {
    let (remainder, digits) = preceded(
        tag(HASH),
        verify(take_while1(|it: char| it.is_ascii_hexdigit()), |it: &str| {
            matches!(it.len(), 3 | 4 | 6 | 8)
        }),
    )
    .parse(input)?;

    let bytes = helper_fns::decode_hex_digits(digits);
    let alpha = bytes.get(3).map(|it| f64::from(*it) / 255.0);
    let parsed_color = ParsedColor::new(
        ColorSpace::Hex,
        [f64::from(bytes[0]), f64::from(bytes[1]), f64::from(bytes[2])],
        alpha,
    );

    Ok((remainder, parsed_color))
}

/// Sample input: `rgb(255, 0, 0)`, `rgba(0,128,255,0.5)`. Channels are integers with up
/// to 3 digits, they are not range checked.
///
/// # Errors
///
/// Returns a nom error if the input is not a comma separated `rgb()` / `rgba()` call.
pub fn parse_rgb_fn(input: &str) -> IResult<&str, ParsedColor> {
    let (remainder, (red, green, blue, alpha)) = delimited(
        (alt((tag_no_case(RGBA), tag_no_case(RGB))), open_parenthesis),
        (
            integer_channel,
            preceded(comma, integer_channel),
            preceded(comma, integer_channel),
            opt(preceded(comma, alpha_value)),
        ),
        close_parenthesis,
    )
    .parse(input)?;

    Ok((
        remainder,
        ParsedColor::new(ColorSpace::Rgb, [red, green, blue], alpha),
    ))
}

/// Sample input: `hsl(210, 50%, 40%)`, `hsla(0,100%,50%,0.25)`. The `%` on saturation
/// and lightness is optional, the values are percentages either way.
///
/// # Errors
///
/// Returns a nom error if the input is not a comma separated `hsl()` / `hsla()` call.
pub fn parse_hsl_fn(input: &str) -> IResult<&str, ParsedColor> {
    let (remainder, (hue, saturation, lightness, alpha)) = delimited(
        (alt((tag_no_case(HSLA), tag_no_case(HSL))), open_parenthesis),
        (
            integer_channel,
            preceded(comma, terminated(integer_channel, opt(char(PERCENT_CHAR)))),
            preceded(comma, terminated(integer_channel, opt(char(PERCENT_CHAR)))),
            opt(preceded(comma, alpha_value)),
        ),
        close_parenthesis,
    )
    .parse(input)?;

    Ok((
        remainder,
        ParsedColor::new(ColorSpace::Hsl, [hue, saturation, lightness], alpha),
    ))
}

/// Sample input: `hwb(240, 20%, 30%)`. Whiteness and blackness must carry a `%`.
///
/// # Errors
///
/// Returns a nom error if the input is not a comma separated `hwb()` call.
pub fn parse_hwb_fn(input: &str) -> IResult<&str, ParsedColor> {
    let (remainder, (hue, whiteness, blackness)) = delimited(
        (tag_no_case(HWB), open_parenthesis),
        (
            integer_channel,
            preceded(comma, terminated(integer_channel, char(PERCENT_CHAR))),
            preceded(comma, terminated(integer_channel, char(PERCENT_CHAR))),
        ),
        close_parenthesis,
    )
    .parse(input)?;

    Ok((
        remainder,
        ParsedColor::new(ColorSpace::Hwb, [hue, whiteness, blackness], None),
    ))
}

/// Sample input: `lab(50, -20.5, 30)`. CIE L\*a\*b\* with a D50 white point.
///
/// # Errors
///
/// Returns a nom error if the input is not a comma separated `lab()` call.
pub fn parse_lab_fn(input: &str) -> IResult<&str, ParsedColor> {
    let (remainder, (lightness, a, b)) = delimited(
        (tag_no_case(LAB), open_parenthesis),
        (
            signed_decimal,
            preceded(comma, signed_decimal),
            preceded(comma, signed_decimal),
        ),
        close_parenthesis,
    )
    .parse(input)?;

    Ok((
        remainder,
        ParsedColor::new(ColorSpace::Lab, [lightness, a, b], None),
    ))
}

/// Sample input: `lch(50, 30, 120deg)`. CIE LCh with a D50 white point, the hue must
/// carry a `deg` unit.
///
/// # Errors
///
/// Returns a nom error if the input is not a comma separated `lch()` call.
pub fn parse_lch_fn(input: &str) -> IResult<&str, ParsedColor> {
    let (remainder, (lightness, chroma, hue)) = delimited(
        (tag_no_case(LCH), open_parenthesis),
        (
            signed_decimal,
            preceded(comma, signed_decimal),
            preceded(comma, terminated(signed_decimal, (space0, tag_no_case(DEG)))),
        ),
        close_parenthesis,
    )
    .parse(input)?;

    Ok((
        remainder,
        ParsedColor::new(ColorSpace::Lch, [lightness, chroma, hue], None),
    ))
}

/// Sample input: `--accent: `. Matches a custom property declaration that comes before a
/// color literal, including the whitespace after the `:`.
///
/// # Errors
///
/// Returns a nom error if the input doesn't start with `--name:`.
pub fn parse_custom_property_prefix(input: &str) -> IResult<&str, &str> {
    recognize((
        tag(CUSTOM_PROPERTY_DASHES),
        take_while1(|it: char| {
            it.is_ascii_alphanumeric() || it == UNDERSCORE_CHAR || it == MINUS_CHAR
        }),
        char(COLON_CHAR),
        space0,
    ))
    .parse(input)
}

/// Lookahead that succeeds when the input is at the end of a statement: optional
/// horizontal whitespace, then `;`, a line break, or the end of input. Nothing is
/// consumed.
///
/// # Errors
///
/// Returns a nom error if anything else follows.
pub fn statement_end(input: &str) -> IResult<&str, ()> {
    value(
        (),
        peek((
            space0,
            alt((tag(SEMICOLON), tag(NEW_LINE), tag(CARRIAGE_RETURN), eof)),
        )),
    )
    .parse(input)
}

fn open_parenthesis(input: &str) -> IResult<&str, &str> {
    terminated(tag(LEFT_PARENTHESIS), space0).parse(input)
}

fn close_parenthesis(input: &str) -> IResult<&str, &str> {
    preceded(space0, tag(RIGHT_PARENTHESIS)).parse(input)
}

fn comma(input: &str) -> IResult<&str, char> {
    delimited(space0, char(COMMA_CHAR), space0).parse(input)
}

/// `\d{1,3}`.
fn integer_channel(input: &str) -> IResult<&str, f64> {
    map_res(
        take_while_m_n(1, MAX_INTEGER_CHANNEL_DIGITS, |it: char| it.is_ascii_digit()),
        str::parse::<f64>,
    )
    .parse(input)
}

/// `-?\d+(\.\d+)?`.
fn signed_decimal(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize((
            opt(char(MINUS_CHAR)),
            digit1,
            opt((char(PERIOD_CHAR), digit1)),
        )),
        str::parse::<f64>,
    )
    .parse(input)
}

/// `\d?\.?\d+`, eg: `0.5`, `.5`, `1`.
fn alpha_value(input: &str) -> IResult<&str, f64> {
    map_res(
        alt((
            recognize((
                opt(satisfy(|it: char| it.is_ascii_digit())),
                char(PERIOD_CHAR),
                digit1,
            )),
            digit1,
        )),
        str::parse::<f64>,
    )
    .parse(input)
}

/// Helper functions that are not [Parser] implementations.
mod helper_fns {
    /// Expand `RGB` / `RGBA` shorthand and decode into bytes. The caller guarantees the
    /// length (3, 4, 6, or 8) and that every char is a hex digit.
    pub fn decode_hex_digits(digits: &str) -> Vec<u8> {
        let nibbles: Vec<u8> = digits
            .chars()
            .filter_map(|it| it.to_digit(16))
            .filter_map(|it| u8::try_from(it).ok())
            .collect();

        match nibbles.len() {
            3 | 4 => nibbles.iter().map(|it| it * 17).collect(),
            _ => nibbles.chunks(2).map(|pair| (pair[0] << 4) | pair[1]).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn parsed(space: ColorSpace, channels: [f64; 3], alpha: f64) -> ParsedColor {
        ParsedColor::new(space, channels, Some(alpha))
    }

    #[test_case("navy", [0.0, 0.0, 128.0], 1.0)]
    #[test_case("RED", [255.0, 0.0, 0.0], 1.0)]
    #[test_case("transparent", [0.0, 0.0, 0.0], 0.0)]
    fn test_parse_named_color(input: &str, channels: [f64; 3], alpha: f64) {
        let (remainder, color) = parse_named_color(input).unwrap();
        assert_eq!(remainder, "");
        assert_eq!(color, parsed(ColorSpace::Named, channels, alpha));
    }

    #[test]
    fn test_parse_named_color_rejects_partial_words() {
        assert!(parse_named_color("navyblue").is_err());
        assert!(parse_named_color("skynavy").is_err());
    }

    #[test_case("#abc", [170.0, 187.0, 204.0], 1.0)]
    #[test_case("#FF0000", [255.0, 0.0, 0.0], 1.0)]
    #[test_case("#ff000080", [255.0, 0.0, 0.0], 128.0 / 255.0)]
    #[test_case("#f00a", [255.0, 0.0, 0.0], 170.0 / 255.0)]
    fn test_parse_hex_color(input: &str, channels: [f64; 3], alpha: f64) {
        let (remainder, color) = parse_hex_color(input).unwrap();
        assert_eq!(remainder, "");
        assert_eq!(color, parsed(ColorSpace::Hex, channels, alpha));
    }

    #[test_case("#ff"; "two digits")]
    #[test_case("#ff000"; "five digits")]
    #[test_case("#ff00001"; "seven digits")]
    #[test_case("ff0000"; "no hash")]
    fn test_parse_hex_color_invalid(input: &str) {
        assert!(all_consuming(parse_hex_color).parse(input).is_err());
    }

    #[test_case("rgb(255,0,0)", [255.0, 0.0, 0.0], 1.0)]
    #[test_case("rgb( 255 , 0 , 0 )", [255.0, 0.0, 0.0], 1.0)]
    #[test_case("RGBA(0, 128, 255, 0.5)", [0.0, 128.0, 255.0], 0.5)]
    #[test_case("rgba(0,128,255,.25)", [0.0, 128.0, 255.0], 0.25)]
    #[test_case("rgb(999, 0, 0)", [999.0, 0.0, 0.0], 1.0)]
    fn test_parse_rgb_fn(input: &str, channels: [f64; 3], alpha: f64) {
        let (remainder, color) = parse_rgb_fn(input).unwrap();
        assert_eq!(remainder, "");
        assert_eq!(color, parsed(ColorSpace::Rgb, channels, alpha));
    }

    #[test_case("rgb(1000, 0, 0)"; "four digit channel")]
    #[test_case("rgb(255 0 0)"; "space separated")]
    #[test_case("rgb(255, 0)"; "missing channel")]
    #[test_case("rgb(-1, 0, 0)"; "negative channel")]
    fn test_parse_rgb_fn_invalid(input: &str) {
        assert!(all_consuming(parse_rgb_fn).parse(input).is_err());
    }

    #[test_case("hsl(210, 50%, 40%)", [210.0, 50.0, 40.0], 1.0)]
    #[test_case("hsl(120,100,50)", [120.0, 100.0, 50.0], 1.0)]
    #[test_case("hsla(0, 100%, 50%, 0.25)", [0.0, 100.0, 50.0], 0.25)]
    fn test_parse_hsl_fn(input: &str, channels: [f64; 3], alpha: f64) {
        let (remainder, color) = parse_hsl_fn(input).unwrap();
        assert_eq!(remainder, "");
        assert_eq!(color, parsed(ColorSpace::Hsl, channels, alpha));
    }

    #[test]
    fn test_parse_hwb_fn() {
        let (remainder, color) = parse_hwb_fn("hwb(240, 20%, 30%)").unwrap();
        assert_eq!(remainder, "");
        assert_eq!(color, parsed(ColorSpace::Hwb, [240.0, 20.0, 30.0], 1.0));
        assert!(parse_hwb_fn("hwb(240, 20, 30)").is_err());
    }

    #[test_case("lab(50, 20, 30)", [50.0, 20.0, 30.0])]
    #[test_case("lab(54.29, -80.8, 69.89)", [54.29, -80.8, 69.89])]
    #[test_case("LAB(0,0,0)", [0.0, 0.0, 0.0])]
    fn test_parse_lab_fn(input: &str, channels: [f64; 3]) {
        let (remainder, color) = parse_lab_fn(input).unwrap();
        assert_eq!(remainder, "");
        assert_eq!(color, parsed(ColorSpace::Lab, channels, 1.0));
    }

    #[test_case("lch(50, 30, 120deg)", [50.0, 30.0, 120.0])]
    #[test_case("lch(50, 30, 120 deg)", [50.0, 30.0, 120.0])]
    #[test_case("lch(62.5, 40.25, -30DEG)", [62.5, 40.25, -30.0])]
    fn test_parse_lch_fn(input: &str, channels: [f64; 3]) {
        let (remainder, color) = parse_lch_fn(input).unwrap();
        assert_eq!(remainder, "");
        assert_eq!(color, parsed(ColorSpace::Lch, channels, 1.0));
    }

    #[test]
    fn test_parse_lch_fn_needs_deg() {
        assert!(parse_lch_fn("lch(50, 30, 120)").is_err());
    }

    #[test_case("--accent: red", "--accent: ", "red")]
    #[test_case("--brand-primary:#fff", "--brand-primary:", "#fff")]
    fn test_parse_custom_property_prefix(input: &str, prefix: &str, rest: &str) {
        let (remainder, output) = parse_custom_property_prefix(input).unwrap();
        assert_eq!(output, prefix);
        assert_eq!(remainder, rest);
    }

    #[test_case(";")]
    #[test_case("  ;")]
    #[test_case("\n")]
    #[test_case(" \r\n")]
    #[test_case("")]
    #[test_case("   ")]
    fn test_statement_end(input: &str) {
        let (remainder, ()) = statement_end(input).unwrap();
        assert_eq!(remainder, input);
    }

    #[test_case("blue")]
    #[test_case(" }")]
    #[test_case(")")]
    fn test_not_statement_end(input: &str) {
        assert!(statement_end(input).is_err());
    }

    #[test]
    fn test_try_parse_color_literal_dispatch() {
        assert_eq!(
            try_parse_color_literal("tan").map(|it| it.space),
            Some(ColorSpace::Named)
        );
        assert_eq!(
            try_parse_color_literal("lch(1, 2, 3deg)").map(|it| it.space),
            Some(ColorSpace::Lch)
        );
        assert_eq!(try_parse_color_literal("tan(45deg)"), None);
        assert_eq!(try_parse_color_literal("oklch(0.5 0.1 20)"), None);
        assert_eq!(try_parse_color_literal("red;"), None);
    }
}
