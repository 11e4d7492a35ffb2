//! Textual representations of arbitrary values
//!
//! Rendering goes through `fmt::Write` rather than `format!`, so a value
//! whose formatting impl fails yields an error instead of a panic.

use std::fmt::{self, Write};

use serde::Serialize;

use crate::error::Result;

/// How a formatting-trait value is turned into text before truncation
///
/// JSON needs `Serialize` rather than a formatting trait, so it is not a
/// style here; see [`describe_json`] and `Truncator::json`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReprStyle {
    /// `{:?}`
    #[default]
    Debug,
    /// `{:#?}`
    Pretty,
    /// `{}`
    Display,
}

impl fmt::Display for ReprStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReprStyle::Debug => write!(f, "debug"),
            ReprStyle::Pretty => write!(f, "pretty"),
            ReprStyle::Display => write!(f, "display"),
        }
    }
}

pub fn describe_debug<T: fmt::Debug + ?Sized>(value: &T) -> Result<String> {
    let mut out = String::new();
    write!(out, "{:?}", value)?;
    Ok(out)
}

pub fn describe_pretty<T: fmt::Debug + ?Sized>(value: &T) -> Result<String> {
    let mut out = String::new();
    write!(out, "{:#?}", value)?;
    Ok(out)
}

pub fn describe_display<T: fmt::Display + ?Sized>(value: &T) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", value)?;
    Ok(out)
}

pub fn describe_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Render a value in the given style
pub fn describe<T: fmt::Debug + fmt::Display + ?Sized>(value: &T, style: ReprStyle) -> Result<String> {
    match style {
        ReprStyle::Debug => describe_debug(value),
        ReprStyle::Pretty => describe_pretty(value),
        ReprStyle::Display => describe_display(value),
    }
}
