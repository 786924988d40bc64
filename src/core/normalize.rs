// src/core/normalize.rs
//
// Best-effort numeric parsing for display text. Nothing in here fails:
// unreadable text becomes 0 (or -1 for a skill level) and the caller moves on.

/// Characters dropped before parsing: thousands separators, decimal points, percent signs.
const STRIP: [char; 3] = [',', '.', '%'];

/// Parse display text like `"12,345"`, `"85.00%"` or `"450"` into an integer.
///
/// Decimal points are removed rather than honoured, so `"85.00%"` reads as `8500`;
/// callers that want the decimal value divide by the scale the site uses.
/// Returns 0 for empty or non-numeric input.
pub fn normalize_int(text: &str) -> i64 {
    let digits: String = text.trim().chars().filter(|c| !STRIP.contains(c)).collect();
    digits.parse().unwrap_or(0)
}

/// Read the level out of a `"Level X of Y"` descriptor.
/// Fewer than two tokens means there is no level to read: -1.
pub fn skill_level(descriptor: &str) -> i64 {
    match descriptor.split_whitespace().nth(1) {
        Some(token) => normalize_int(token),
        None => -1,
    }
}

/// Growth stats are shown with one implied decimal.
pub fn per_ten(raw: i64) -> f64 {
    raw as f64 / 10.0
}

/// Potency/Tenacity are shown as percentages with two decimals.
pub fn per_hundred(raw: i64) -> f64 {
    raw as f64 / 100.0
}
