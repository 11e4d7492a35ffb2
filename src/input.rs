//! Where the CLI gets its values from

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{Error, Result};
use crate::repr;

/// Source of raw input values, one value per line for files and stdin
#[derive(Debug, Clone)]
pub enum Source {
    Args(Vec<String>),
    File(PathBuf),
    Stdin,
}

impl Source {
    /// Pick the source from CLI arguments: positional values win, then a file
    pub fn from_args(values: &[String], file: Option<&str>) -> Self {
        if !values.is_empty() {
            Source::Args(values.to_vec())
        } else if let Some(path) = file {
            Source::File(expand_path(path))
        } else {
            Source::Stdin
        }
    }

    pub fn read(&self) -> Result<Vec<String>> {
        match self {
            Source::Args(values) => Ok(values.clone()),
            Source::File(path) => {
                let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
                    path: path.clone(),
                    source,
                })?;
                Ok(split_lines(&content))
            }
            Source::Stdin => {
                let stdin = io::stdin();
                let lines = stdin.lock().lines().collect::<io::Result<Vec<_>>>()?;
                tracing::debug!(count = lines.len(), "read values from stdin");
                Ok(lines)
            }
        }
    }
}

/// How a raw input string is represented before truncation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InputStyle {
    /// Debug-quoted string, with escapes
    #[default]
    Quoted,
    /// The text as given
    Raw,
    /// Parse as JSON and re-render compactly
    Json,
    /// Parse as JSON and re-render with indentation
    JsonPretty,
}

/// Produce the full representation of one input value
///
/// `line` is 1-indexed and only used for error messages.
pub fn represent(value: &str, style: InputStyle, line: usize) -> Result<String> {
    match style {
        InputStyle::Quoted => repr::describe_debug(value),
        InputStyle::Raw => Ok(value.to_string()),
        InputStyle::Json | InputStyle::JsonPretty => {
            let parsed: serde_json::Value = serde_json::from_str(value)
                .map_err(|source| Error::InvalidJson { line, source })?;
            if style == InputStyle::Json {
                repr::describe_json(&parsed)
            } else {
                Ok(serde_json::to_string_pretty(&parsed)?)
            }
        }
    }
}

/// Expand a leading `~` in a user-supplied path
fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}
