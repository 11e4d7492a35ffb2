use std::fmt;

use serde::Serialize;

use super::limit::Limit;
use super::text::cut;
use crate::error::Result;
use crate::repr::{self, ReprStyle};

/// Result of truncating one representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruncateOutcome {
    pub text: String,
    /// Length of the full representation in chars
    pub original_len: usize,
    pub truncated: bool,
    pub limit: Limit,
}

/// Renders values and bounds the length of the result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Truncator {
    limit: Limit,
    style: ReprStyle,
}

impl Truncator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: impl Into<Limit>) -> Self {
        self.limit = limit.into();
        self
    }

    /// Style used by [`Truncator::value`]
    pub fn with_style(mut self, style: ReprStyle) -> Self {
        self.style = style;
        self
    }

    pub fn limit(&self) -> Limit {
        self.limit
    }

    pub fn style(&self) -> ReprStyle {
        self.style
    }

    pub fn threshold(&self) -> usize {
        self.limit.threshold()
    }

    pub fn half_width(&self) -> usize {
        self.limit.half_width()
    }

    /// Truncate text that has already been rendered
    pub fn text(&self, full: &str) -> String {
        self.outcome(full).text
    }

    pub fn outcome(&self, full: &str) -> TruncateOutcome {
        let (text, original_len) = cut(full, self.limit);
        let truncated = original_len >= self.limit.threshold();

        tracing::trace!(
            original_len,
            limit = self.limit.get(),
            truncated,
            "bounded representation"
        );
        if truncated {
            tracing::debug!(
                original_len,
                kept = text.chars().count(),
                "truncated representation"
            );
        }

        TruncateOutcome {
            text,
            original_len,
            truncated,
            limit: self.limit,
        }
    }

    /// Truncate the `Debug` representation of a value
    pub fn debug<T: fmt::Debug + ?Sized>(&self, value: &T) -> Result<String> {
        Ok(self.text(&repr::describe_debug(value)?))
    }

    pub fn pretty<T: fmt::Debug + ?Sized>(&self, value: &T) -> Result<String> {
        Ok(self.text(&repr::describe_pretty(value)?))
    }

    pub fn display<T: fmt::Display + ?Sized>(&self, value: &T) -> Result<String> {
        Ok(self.text(&repr::describe_display(value)?))
    }

    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        Ok(self.text(&repr::describe_json(value)?))
    }

    /// Truncate a value rendered in the configured style
    pub fn value<T: fmt::Debug + fmt::Display + ?Sized>(&self, value: &T) -> Result<String> {
        Ok(self.text(&repr::describe(value, self.style)?))
    }
}
