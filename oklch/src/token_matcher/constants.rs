// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// All the CSS literals that are used to perform color token matching.
pub const HASH: &str = "#";
pub const LEFT_PARENTHESIS: &str = "(";
pub const RIGHT_PARENTHESIS: &str = ")";
pub const COMMA_CHAR: char = ',';
pub const PERCENT_CHAR: char = '%';
pub const PERIOD_CHAR: char = '.';
pub const MINUS_CHAR: char = '-';
pub const COLON_CHAR: char = ':';
pub const UNDERSCORE_CHAR: char = '_';
pub const DEG: &str = "deg";
pub const CUSTOM_PROPERTY_DASHES: &str = "--";

/// Statement terminators that may follow a color literal.
pub const SEMICOLON: &str = ";";
pub const NEW_LINE: &str = "\n";
pub const CARRIAGE_RETURN: &str = "\r";

/// Function names. Matched case-insensitively.
pub const RGB: &str = "rgb";
pub const RGBA: &str = "rgba";
pub const HSL: &str = "hsl";
pub const HSLA: &str = "hsla";
pub const HWB: &str = "hwb";
pub const LAB: &str = "lab";
pub const LCH: &str = "lch";

/// Max number of digits in an integer channel, eg: `255` in `rgb(255, 0, 0)`.
pub const MAX_INTEGER_CHANNEL_DIGITS: usize = 3;
