// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Find color literals in text. The grammar lives in [`parse_color_literal`] and the
//! scanner that walks the text lives in [`color_tokens`].

// Attach.
pub mod color_tokens;
pub mod constants;
pub mod named_colors;
pub mod parse_color_literal;

// Re-export.
pub use color_tokens::*;
pub use named_colors::*;
pub use parse_color_literal::*;
