// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

//! # R3BL OKLCH
//!
//! Find CSS color literals in text and rewrite them as `oklch()` literals.
//!
//! ```
//! use r3bl_oklch::{ConvertOptions, convert};
//!
//! let text = "--accent: #ff0000;\ncolor: hsl(210, 50%, 40%);";
//! let report = convert(text, &ConvertOptions { always_show_alpha: false });
//! assert_eq!(
//!     report.rewritten,
//!     "--accent: oklch(0.63 0.26 29.23);\ncolor: oklch(0.50 0.10 250.43);"
//! );
//! ```
//!
//! ## Supported literals
//!
//! | Syntax  | Sample                                   |
//! | :------ | :--------------------------------------- |
//! | named   | `navy`, `RebeccaPurple`, `transparent`   |
//! | hex     | `#abc`, `#f00a`, `#336699`, `#ff000080`  |
//! | rgb     | `rgb(255, 0, 0)`, `rgba(0,128,255,0.5)`  |
//! | hsl     | `hsl(210, 50%, 40%)`, `hsla(0,100%,50%,.25)` |
//! | hwb     | `hwb(240, 20%, 30%)`                     |
//! | lab     | `lab(50, -20.5, 30)`                     |
//! | lch     | `lch(50, 30, 120deg)`                    |
//!
//! A literal is only picked up when it stands on its own: it can't be preceded by a
//! word character, and it must be followed by a `;`, a line break, or the end of the
//! text (spaces and tabs in between are fine). So `navy` is not found in `navyblue`. A
//! custom property declaration in front of the literal (eg: `--accent: `) is kept as
//! is.
//!
//! Literals that can't be converted are left untouched and listed in
//! [`ConvertReport::failures`]. One bad literal never stops the rest of the text from
//! being converted.
//!
//! ## oklch-convert
//!
//! ```bash
//! # stdin to stdout.
//! echo "color: navy;" | oklch-convert --hide-opaque-alpha
//! # Rewrite a file, and save the literals that couldn't be converted.
//! oklch-convert styles.css --in-place --failures-file failures.txt
//! ```
//!
//! Settings are read from `--config <FILE>`, or from `r3bl-oklch/settings.json` in the
//! user's config folder. See [`oklch_convert::Settings`].
//!
//! **Module structure:**
//! - `src/token_matcher/` - Grammar ([nom] parsers) and the scanner that finds literals
//! - `src/color_converter/` - Color math and `oklch()` formatting for one literal
//! - `src/convert_text/` - Convert every literal in a text, collect the failures
//! - `src/oklch_convert/` - CLI arguments, settings file, and I/O for the binary
//! - `src/common/` - Result type and logging setup

// Attach all modules.
pub mod color_converter;
pub mod common;
pub mod convert_text;
pub mod oklch_convert;
pub mod token_matcher;

// Re-export commonly used items.
pub use color_converter::*;
pub use common::*;
pub use convert_text::*;
pub use token_matcher::*;
