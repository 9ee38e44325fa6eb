//! Shared utility functions.

/// Truncate a string to at most `max_chars` characters.
///
/// Returns a sub-slice of the original string, so it never splits a
/// UTF-8 character.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Round to `decimals` decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
