//! Pluralization utilities.

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "file")` -> `"0 files"`
/// - `plural_count(1, "file")` -> `"1 file"`
/// - `plural_count(2, "entry")` -> `"2 entries"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    if count == 1 {
        return format!("{count} {noun}");
    }
    match noun.strip_suffix('y') {
        Some(stem) if !stem.ends_with(['a', 'e', 'i', 'o', 'u']) => {
            format!("{count} {stem}ies")
        }
        _ => format!("{count} {noun}s"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_nouns() {
        assert_eq!(plural_count(0, "file"), "0 files");
        assert_eq!(plural_count(1, "file"), "1 file");
        assert_eq!(plural_count(5, "directive"), "5 directives");
    }

    #[test]
    fn test_y_nouns() {
        assert_eq!(plural_count(2, "entry"), "2 entries");
        assert_eq!(plural_count(1, "entry"), "1 entry");
        assert_eq!(plural_count(2, "day"), "2 days");
    }
}
