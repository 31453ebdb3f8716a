// Rust guideline compliant 2026-02-06

//! Canonical form for documentation labels.
//!
//! Category and document names on the remote carry ordering prefixes and
//! mixed separators (`04_reference`, `11-terragrunt-cache`). Normalizing
//! both sides lets `reference` and `04_reference` compare equal.

/// Normalizes a raw label into its comparison form.
///
/// Steps, in order:
///
/// 1. Lowercase.
/// 2. Trim surrounding whitespace.
/// 3. Strip one leading numeric prefix (`04_`, `10-`).
/// 4. Replace each run of `_` or `-` with a single space.
/// 5. Collapse whitespace runs into a single space.
/// 6. Trim again.
///
/// The function is total and idempotent: `normalize(&normalize(s)) == normalize(s)`.
///
/// # Examples
///
/// ```
/// use ghdocs_core::normalize;
///
/// assert_eq!(normalize("01_getting-started"), "getting started");
/// assert_eq!(normalize("  11-terraGRUNT-cache  "), "terragrunt cache");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let trimmed = lowered.trim();
    let unprefixed = strip_numeric_prefix(trimmed);

    let mut output = String::with_capacity(unprefixed.len());
    let mut pending_space = false;
    for ch in unprefixed.chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !output.is_empty() {
            output.push(' ');
        }
        pending_space = false;
        output.push(ch);
    }

    output
}

/// Strips a leading `\s*\d+[_-]` prefix, if present.
///
/// Leaves the input untouched when the digits are not followed by a separator,
/// so `2024` and `3d models` keep their numbers.
fn strip_numeric_prefix(text: &str) -> &str {
    let rest = text.trim_start();
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return text;
    }

    match rest[digits..].chars().next() {
        Some('_') | Some('-') => &rest[digits + 1..],
        _ => text,
    }
}
