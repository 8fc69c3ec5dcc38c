//! Small byte-range and text utilities shared by the classifier and walker.

/// Returns the byte range `[lo, hi)` of `src` as a string slice, or `""` when `hi <= lo`.
pub fn slice(src: &str, lo: usize, hi: usize) -> &str {
    if hi <= lo || hi > src.len() {
        return "";
    }
    &src[lo..hi]
}

/// Strips ASCII whitespace from both ends. Unlike `str::trim`, this only considers ASCII
/// whitespace — no locale sensitivity.
pub fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_ascii_whitespace())
}

/// Parses a leading decimal integer, skipping leading ASCII whitespace, and returns it iff it
/// is strictly positive and the parse consumes the entire (trimmed) remainder of the string.
pub fn parse_positive_int(s: &str) -> Option<i64> {
    let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let digits_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if digits_end == 0 {
        return None;
    }
    let digits = &s[..digits_end];
    let value: i64 = digits.parse().ok()?;
    if value > 0 { Some(value) } else { None }
}
