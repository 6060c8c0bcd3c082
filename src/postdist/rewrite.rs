//! Literal text substitutions applied to the generated HTML.
//!
//! Replacements are plain global substring replacements. They are not
//! attribute-aware: `styles.css` inside a comment, or as the tail of
//! `mystyles.css`, is rewritten too.

/// Asset references rewritten to their minified names, in order.
pub const REFERENCE_RULES: &[(&str, &str)] = &[
    ("styles.css", "styles.min.css"),
    ("main.js", "main.min.js"),
];

/// Placeholder replaced by the package version.
pub const VERSION_PLACEHOLDER: &str = "{{VERSION}}";

/// Placeholder replaced by the build timestamp.
pub const BUILD_TIME_PLACEHOLDER: &str = "{{BUILD_TIME}}";

/// Point asset references at their minified counterparts.
pub fn rewrite_references(html: &str) -> String {
    REFERENCE_RULES
        .iter()
        .fold(html.to_owned(), |acc, (from, to)| acc.replace(from, to))
}

/// Replace every `{{VERSION}}`.
pub fn inject_version(html: &str, version: &str) -> String {
    html.replace(VERSION_PLACEHOLDER, version)
}

/// Replace every `{{BUILD_TIME}}`.
pub fn inject_build_time(html: &str, timestamp: &str) -> String {
    html.replace(BUILD_TIME_PLACEHOLDER, timestamp)
}
