// Rust guideline compliant 2026-02-06

//! Levenshtein edit distance.

/// Computes the edit distance between two strings.
///
/// Counts the minimum number of single-character insertions, deletions and
/// substitutions that turn `a` into `b`. Characters are Unicode scalar
/// values, so `"café"` and `"cafe"` are one edit apart.
///
/// Runs in `O(len(a) * len(b))` time with a single rolling row of
/// `len(b) + 1` cells.
///
/// # Examples
///
/// ```
/// use ghdocs_core::distance;
///
/// assert_eq!(distance("kitten", "sitting"), 3);
/// assert_eq!(distance("", "abc"), 3);
/// ```
#[must_use]
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // row[j] holds the distance between the current prefix of `a` and b[..j].
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, a_ch) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, b_ch) in b.iter().enumerate() {
            let cost = usize::from(a_ch != b_ch);
            let substitute = diagonal + cost;
            let delete = row[j + 1] + 1;
            let insert = row[j] + 1;
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(delete).min(insert);
        }
    }

    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        assert_eq!(distance("reference", "reference"), 0);
    }

    #[test]
    fn test_empty_sides() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("", "abc"), 3);
        assert_eq!(distance("abc", ""), 3);
    }

    #[test]
    fn test_single_edits() {
        assert_eq!(distance("cat", "car"), 1);
        assert_eq!(distance("cat", "cats"), 1);
        assert_eq!(distance("cats", "cat"), 1);
    }

    #[test]
    fn test_transposition_costs_two() {
        assert_eq!(distance("refernece", "reference"), 2);
    }

    #[test]
    fn test_multiple_edits() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("flaw", "lawn"), 2);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(distance("café", "cafe"), 1);
        assert_eq!(distance("日本", "日本語"), 1);
    }
}
