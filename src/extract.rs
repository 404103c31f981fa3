//! Extraction of the embedded version from a server version banner
//!
//! Bukkit-style servers report something like
//! `"git-Paper-550 (MC: 1.16.5)"`; only the `1.16.5` part matters for
//! resolution. Extraction is best-effort: a banner without the `(MC: ...)`
//! marker yields `None` and resolution falls back to `0.0.0`.

use std::sync::LazyLock;

use regex::Regex;

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*MC.\s*([a-zA-Z0-9.-]+)").unwrap());

/// Pull the embedded version substring out of a full server banner
///
/// The substring is returned as-is; it may still fail numeric parsing later
/// (e.g. a pre-release tag like `1.20.4-pre1`).
pub fn version_substring(banner: &str) -> Option<&str> {
    VERSION_PATTERN
        .captures(banner)
        .and_then(|captures| captures.get(1))
        .map(|matched| matched.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("git-Paper-550 (MC: 1.16.5)", Some("1.16.5"))]
    #[case("3096a-Spigot-1234 (MC: 1.19.4)", Some("1.19.4"))]
    #[case("git-Purpur-2062 (MC: 1.20.4-pre1)", Some("1.20.4-pre1"))]
    #[case("1.8.8-R0.1-SNAPSHOT (MC: 1.8.8)", Some("1.8.8"))]
    #[case("some custom build", None)]
    #[case("(no version here)", None)]
    #[case("", None)]
    fn finds_the_mc_version_marker(#[case] banner: &str, #[case] expected: Option<&str>) {
        assert_eq!(version_substring(banner), expected);
    }
}
