mod compare;
mod text;

pub use compare::compare_limits;
pub use text::{format_json, format_summary, format_text};
