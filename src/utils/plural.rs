//! Pluralization utilities.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 files)
/// - `plural_s(1)` -> `""` (1 file)
/// - `plural_s(5)` -> `"s"` (5 files)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// The noun may carry a qualifier (`"CSS file"`); only the last word is
/// pluralized.
///
/// # Examples
///
/// - `plural_count(0, "CSS file")` -> `"0 CSS files"`
/// - `plural_count(1, "CSS file")` -> `"1 CSS file"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "file"), "0 files");
        assert_eq!(plural_count(1, "JavaScript file"), "1 JavaScript file");
        assert_eq!(plural_count(3, "CSS file"), "3 CSS files");
    }
}
