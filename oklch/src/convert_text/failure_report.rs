// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Only this many failures make it into [`FailureReport::summary_message`]. The rest
/// are available from [`FailureReport::full_listing`].
pub const MAX_FAILURES_TO_SHOW: usize = 100;

/// The literals that could not be converted, in the order they appear in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureReport {
    failures: Vec<String>,
}

impl FailureReport {
    pub fn push(&mut self, literal: impl Into<String>) { self.failures.push(literal.into()); }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.failures.is_empty() }

    #[must_use]
    pub fn len(&self) -> usize { self.failures.len() }

    #[must_use]
    pub fn as_slice(&self) -> &[String] { &self.failures }

    /// `true` when [`Self::summary_message`] doesn't list every failure.
    #[must_use]
    pub fn is_truncated(&self) -> bool { self.failures.len() > MAX_FAILURES_TO_SHOW }

    /// Eg: `Cannot convert colors: lab(1e999, 0, 0), #12.`. Lists the first
    /// [`MAX_FAILURES_TO_SHOW`] failures. [None] when there are no failures.
    #[must_use]
    pub fn summary_message(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let shown = self.failures.iter().take(MAX_FAILURES_TO_SHOW);
        let joined = shown.map(String::as_str).collect::<Vec<_>>().join(", ");
        Some(format!("Cannot convert colors: {joined}."))
    }

    /// Every failure on its own line.
    #[must_use]
    pub fn full_listing(&self) -> String { self.failures.join("\n") }
}

impl<S: Into<String>> FromIterator<S> for FailureReport {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            failures: iter.into_iter().map(Into::into).collect(),
        }
    }
}
