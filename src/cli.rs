use clap::{Parser, ValueEnum};

use crate::input::InputStyle;
use crate::truncate::{DEFAULT_LIMIT, Limit};

#[derive(Parser, Debug)]
#[command(name = "reprtrunc")]
#[command(
    author,
    version,
    about = "Print length-bounded representations of values"
)]
#[command(
    long_about = "Renders each value and, when the result is 20 or more characters \
    past the limit, keeps only the first and last limit/2 characters with \"...\" \
    in between. Values are read from arguments, a file, or stdin (one per line)."
)]
pub struct Args {
    /// Values to represent (reads stdin if none and no --file)
    #[arg(value_name = "VALUE")]
    pub values: Vec<String>,

    /// Length budget before truncation [default: 160]
    #[arg(short, long, allow_hyphen_values = true)]
    pub limit: Option<String>,

    /// Read values from a file, one per line
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,

    /// How each value is represented
    #[arg(short, long, default_value = "quoted")]
    pub style: InputStyle,

    /// Compare values at several limits (comma-separated); prints a table,
    /// so it cannot be combined with --limit or --format json
    #[arg(short = 'C', long, value_delimiter = ',', allow_hyphen_values = true)]
    pub compare: Option<Vec<String>>,

    /// Show a summary and debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        if self.file.is_some() && !self.values.is_empty() {
            return Err("--file cannot be combined with positional values".to_string());
        }

        self.limit().map_err(|e| e.to_string())?;

        if let Some(ref limits) = self.compare {
            if limits.iter().all(|l| l.trim().is_empty()) {
                return Err("--compare requires at least one limit".to_string());
            }
            self.compare_limits().map_err(|e| e.to_string())?;

            if self.limit.is_some() {
                return Err("--compare cannot be used with --limit".to_string());
            }
            if matches!(self.format, OutputFormat::Json) {
                return Err("--compare cannot be used with --format json".to_string());
            }
        }

        Ok(())
    }

    pub fn limit(&self) -> crate::Result<Limit> {
        match self.limit {
            Some(ref limit) => limit.parse(),
            None => Ok(Limit::new(DEFAULT_LIMIT)),
        }
    }

    /// Limits given to --compare, empty entries skipped
    pub fn compare_limits(&self) -> crate::Result<Vec<Limit>> {
        self.compare
            .iter()
            .flatten()
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.parse())
            .collect()
    }
}
