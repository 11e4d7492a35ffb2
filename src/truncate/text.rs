use super::limit::Limit;

/// Marker inserted in place of the removed middle
pub const ELLIPSIS: &str = "...";

/// Cut the middle out of an already-rendered representation
///
/// Lengths are counted in `char`s. If `full` is shorter than
/// `limit + GRACE_MARGIN` it is returned as-is; otherwise the result is the
/// first and last `limit / 2` characters joined by [`ELLIPSIS`].
pub fn truncate_text(full: &str, limit: usize) -> String {
    cut(full, Limit::new(limit)).0
}

/// Returns the (possibly shortened) text and the original length in chars
pub(crate) fn cut(full: &str, limit: Limit) -> (String, usize) {
    let len = full.chars().count();

    if len < limit.threshold() {
        return (full.to_string(), len);
    }

    let half = limit.half_width();
    let head_end = byte_offset(full, half);
    let tail_start = byte_offset(full, len - half);

    let mut out = String::with_capacity(head_end + ELLIPSIS.len() + full.len() - tail_start);
    out.push_str(&full[..head_end]);
    out.push_str(ELLIPSIS);
    out.push_str(&full[tail_start..]);
    (out, len)
}

/// Byte offset of the char at index `n`, or the end of the string
fn byte_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_unchanged() {
        assert_eq!(truncate_text("'hello'", 160), "'hello'");
        assert_eq!(truncate_text("", 0), "");
    }

    #[test]
    fn test_grace_margin_boundary() {
        // limit 10: threshold is 30
        let under = "a".repeat(29);
        assert_eq!(truncate_text(&under, 10), under);

        let at = "a".repeat(30);
        let out = truncate_text(&at, 10);
        assert_eq!(out, "aaaaa...aaaaa");
        assert_eq!(out.len(), 13);
    }

    #[test]
    fn test_keeps_head_and_tail() {
        let full: String = ('a'..='z').cycle().take(50).collect();
        let out = truncate_text(&full, 10);
        assert_eq!(out, format!("{}...{}", &full[..5], &full[45..]));
    }

    #[test]
    fn test_odd_limit() {
        let full = "0123456789".repeat(5);
        let out = truncate_text(&full, 11);
        assert_eq!(out, "01234...56789");
    }

    #[test]
    fn test_zero_limit() {
        assert_eq!(truncate_text(&"x".repeat(19), 0), "x".repeat(19));
        assert_eq!(truncate_text(&"x".repeat(20), 0), "...");
    }

    #[test]
    fn test_multibyte_chars() {
        let full = "é".repeat(40);
        let out = truncate_text(&full, 10);
        assert_eq!(out, format!("{}...{}", "é".repeat(5), "é".repeat(5)));
        assert_eq!(out.chars().count(), 13);
    }

    #[test]
    fn test_mixed_width_boundary() {
        // 29 chars but many more bytes: still under the threshold
        let full = format!("{}{}", "日本".repeat(10), "x".repeat(9));
        assert_eq!(full.chars().count(), 29);
        assert_eq!(truncate_text(&full, 10), full);
    }

    #[test]
    fn test_cut_reports_original_length() {
        let (out, len) = cut(&"z".repeat(200), Limit::default());
        assert_eq!(len, 200);
        assert_eq!(out.chars().count(), 163);
    }
}
