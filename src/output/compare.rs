//! Comparison table showing values at several limits

use tabled::{Table, Tabled};

use crate::truncate::{Limit, Truncator};

#[derive(Tabled)]
struct LimitRow {
    #[tabled(rename = "Limit")]
    limit: Limit,
    #[tabled(rename = "Threshold")]
    threshold: usize,
    #[tabled(rename = "Length")]
    length: String,
    #[tabled(rename = "Result")]
    result: String,
}

/// Show each representation truncated at each of the given limits
pub fn compare_limits(reprs: &[String], limits: &[Limit]) -> String {
    if limits.is_empty() {
        return "No limits specified.".to_string();
    }

    let mut sections = Vec::new();

    for (i, full) in reprs.iter().enumerate() {
        let rows: Vec<LimitRow> = limits
            .iter()
            .map(|&limit| {
                let outcome = Truncator::new().with_limit(limit).outcome(full);
                let kept = outcome.text.chars().count();
                LimitRow {
                    limit,
                    threshold: limit.threshold(),
                    length: if outcome.truncated {
                        format!("{} -> {}", outcome.original_len, kept)
                    } else {
                        kept.to_string()
                    },
                    result: outcome.text,
                }
            })
            .collect();

        let table = Table::new(rows).to_string();
        sections.push(format!("Comparing value {} across limits:\n\n{}", i + 1, table));
    }

    let mut output = sections.join("\n\n");
    output.push('\n');
    output
}
