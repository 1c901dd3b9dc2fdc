// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! User-facing strings and messages.

use std::path::Path;

use crate::MAX_FAILURES_TO_SHOW;

pub const NO_COLOR_DEFINITIONS_FOUND: &str =
    "No color definitions found in the selected text.";
pub const STDIN_DISPLAY_NAME: &str = "<stdin>";

/// Shown after the failure summary when it doesn't list every failure.
#[must_use]
pub fn format_truncation_hint(total: usize) -> String {
    format!(
        "Showing the first {MAX_FAILURES_TO_SHOW} of {total} failures. \
         Use --failures-file <FILE> to see all of them."
    )
}

#[must_use]
pub fn format_failures_file_written(path: &Path, total: usize) -> String {
    format!("Wrote {total} failure(s) to {}", path.display())
}

#[must_use]
pub fn format_in_place_summary(path: &Path, converted: usize, matched: usize) -> String {
    format!("Converted {converted} of {matched} color(s) in {}", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_truncation_hint() {
        let msg = format_truncation_hint(250);
        assert!(msg.contains("first 100 of 250"));
        assert!(msg.contains("--failures-file"));
    }

    #[test]
    fn test_format_in_place_summary() {
        assert_eq!(
            format_in_place_summary(Path::new("a.css"), 2, 3),
            "Converted 2 of 3 color(s) in a.css"
        );
    }
}
