

/// Char-boundary-safe truncation with a trailing ellipsis when shortened.
#[inline]
pub fn safe_truncate_ellipsis(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}

/// Renders a [0, 1] confidence as a whole percentage, e.g. `0.874` as "87%".
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.0}%", (confidence.clamp(0.0, 1.0) * 100.0).round())
}
