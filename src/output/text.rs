//! Plain and JSON output for truncated values

use owo_colors::OwoColorize;

use crate::truncate::TruncateOutcome;

/// One truncated representation per line
pub fn format_text(outcomes: &[TruncateOutcome]) -> String {
    let mut output = String::new();
    for outcome in outcomes {
        output.push_str(&outcome.text);
        output.push('\n');
    }
    output
}

pub fn format_json(outcomes: &[TruncateOutcome]) -> String {
    serde_json::to_string_pretty(outcomes).unwrap_or_else(|_| "[]".to_string())
}

/// Short summary of how many values were cut, for verbose mode
pub fn format_summary(outcomes: &[TruncateOutcome]) -> String {
    let truncated = outcomes.iter().filter(|o| o.truncated).count();
    let removed: usize = outcomes
        .iter()
        .filter(|o| o.truncated)
        .map(|o| o.original_len - o.text.chars().count())
        .sum();

    if truncated == 0 {
        format!(
            "{} {} value(s), none truncated",
            "OK".green(),
            outcomes.len()
        )
    } else {
        format!(
            "{} {} of {} value(s) truncated ({} chars removed)",
            "!".yellow(),
            truncated,
            outcomes.len(),
            removed
        )
    }
}
