/// Trim surrounding whitespace and lower-case.
///
/// Every categorical column goes through this before it is compared or rewritten.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// `1` when `raw` normalizes to `expected`, `0` for anything else (blank included).
pub fn flag(raw: &str, expected: &str) -> u8 {
    u8::from(normalize(raw) == expected)
}

/// Positional-index columns left behind by whatever wrote the CSV:
/// a blank header or a pandas-style `Unnamed: <n>`.
pub fn is_index_artifact(header: &str) -> bool {
    let header = header.trim();
    header.is_empty() || header.starts_with("Unnamed")
}
