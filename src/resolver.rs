//! Maps a parsed server version onto the generation table
//!
//! Resolution runs exactly once during plugin initialization; the server
//! version cannot change for the lifetime of the process, so the result is
//! immutable shared state from then on.

use tracing::warn;

use crate::generation::{GENERATIONS, Generation};
use crate::version::{ParseError, Version};

/// The once-computed outcome of matching the server version against the
/// generation table
///
/// `strict` is the generation whose declared range fully contains the
/// version; `possible` is the best-effort guess, which stays meaningful even
/// when the version is newer than anything in the table.
#[derive(Debug)]
pub struct Resolution {
    version: Version,
    strict: Option<&'static Generation>,
    possible: &'static Generation,
    parse_error: Option<ParseError>,
}

impl Resolution {
    /// Resolve an extracted version substring against the generation table
    ///
    /// Pass `None` when extraction failed upstream. Malformed text degrades
    /// to the `0.0.0` fallback instead of failing; the parse error is logged
    /// and retained for inspection.
    ///
    /// Quirk kept for compatibility: when the version is absent, malformed,
    /// or below the oldest known generation, `possible` still reports the
    /// *newest* generation rather than nothing.
    pub fn resolve(raw: Option<&str>) -> Self {
        let (version, parse_error) = match raw {
            Some(text) => match Version::parse(text) {
                Ok(version) => (version, None),
                Err(err) => {
                    warn!("Cannot parse server version '{}': {}", text, err);
                    (Version::zero(), Some(err))
                }
            },
            None => (Version::zero(), None),
        };

        let mut possible = GENERATIONS.newest();
        let mut strict = None;

        // Walk from the newest generation down; the first lower bound at or
        // below the version is the tightest applicable one.
        for generation in GENERATIONS.entries().iter().rev() {
            if version.is_at_least(&generation.from) {
                possible = generation;
                if version.is_lower_or_equal(&generation.candidate) {
                    strict = Some(generation);
                }
                break;
            }
        }

        Self {
            version,
            strict,
            possible,
            parse_error,
        }
    }

    /// The parsed server version (`0.0.0` when absent or malformed)
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// The generation whose range fully contains the version, if any
    pub fn strict(&self) -> Option<&'static Generation> {
        self.strict
    }

    /// The best-effort generation guess
    pub fn possible(&self) -> &'static Generation {
        self.possible
    }

    /// The parse failure that forced the `0.0.0` fallback, if any
    pub fn parse_error(&self) -> Option<&ParseError> {
        self.parse_error.as_ref()
    }

    /// Whether the server version is at or past a generation's lower bound
    pub fn is_at_least(&self, generation: &Generation) -> bool {
        self.version.is_at_least(&generation.from)
    }

    /// Whether the server version is at or past an arbitrary version
    pub fn is_at_least_version(&self, version: &Version) -> bool {
        self.version.is_at_least(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn version_inside_a_known_range_matches_strictly() {
        let resolution = Resolution::resolve(Some("1.16.5"));

        assert_eq!(resolution.version().name(), "1.16.5");
        assert_eq!(resolution.strict().unwrap().name, "v1_16_R3");
        assert_eq!(resolution.possible().name, "v1_16_R3");
        assert!(resolution.parse_error().is_none());
    }

    #[test]
    fn version_past_a_candidate_is_only_a_possible_match() {
        // 1.16.3.1 clears v1_16_R2's lower bound but exceeds its candidate
        // 1.16.3, and stays below v1_16_R3's lower bound 1.16.4.
        let resolution = Resolution::resolve(Some("1.16.3.1"));

        assert!(resolution.strict().is_none());
        assert_eq!(resolution.possible().name, "v1_16_R2");
    }

    #[rstest]
    #[case(None)]
    #[case(Some("abc"))]
    fn absent_or_malformed_falls_back_to_zero(#[case] raw: Option<&str>) {
        let resolution = Resolution::resolve(raw);

        assert_eq!(resolution.version().name(), "0.0.0");
        assert!(resolution.strict().is_none());
        assert_eq!(resolution.possible().name, GENERATIONS.newest().name);
        assert_eq!(resolution.parse_error().is_some(), raw.is_some());
    }

    #[test]
    fn version_newer_than_every_range_guesses_the_newest_generation() {
        let resolution = Resolution::resolve(Some("9.9.9"));

        assert!(resolution.strict().is_none());
        assert_eq!(resolution.possible().name, GENERATIONS.newest().name);
    }

    #[test]
    fn version_below_the_oldest_generation_keeps_the_defaults() {
        let resolution = Resolution::resolve(Some("1.7.10"));

        assert!(resolution.strict().is_none());
        assert_eq!(resolution.possible().name, GENERATIONS.newest().name);
    }

    #[rstest]
    #[case("1.13.0", true)]
    #[case("1.14.4", true)]
    #[case("1.12.2", false)]
    fn modern_item_format_gate(#[case] raw: &str, #[case] expected: bool) {
        let resolution = Resolution::resolve(Some(raw));
        assert_eq!(
            resolution.is_at_least(GENERATIONS.modern_item_format()),
            expected
        );
    }

    #[rstest]
    #[case("1.20.5", true)]
    #[case("1.21.0", true)]
    #[case("1.20.4", false)]
    fn compound_item_format_gate(#[case] raw: &str, #[case] expected: bool) {
        let resolution = Resolution::resolve(Some(raw));
        assert_eq!(
            resolution.is_at_least(GENERATIONS.compound_item_format()),
            expected
        );
    }

    #[test]
    fn is_at_least_version_compares_directly() {
        let resolution = Resolution::resolve(Some("1.16.5"));

        assert!(resolution.is_at_least_version(&Version::from_components(&[1, 16, 4])));
        assert!(!resolution.is_at_least_version(&Version::from_components(&[1, 17])));
    }

    #[rstest]
    #[case("1.8.9")]
    #[case("1.13.0")]
    #[case("1.16.3.1")]
    #[case("1.20.6")]
    #[case("9.9.9")]
    fn reverse_scan_picks_largest_from_not_exceeding(#[case] raw: &str) {
        let version = Version::parse(raw).unwrap();
        let expected = GENERATIONS
            .entries()
            .iter()
            .filter(|generation| version.is_at_least(&generation.from))
            .next_back()
            .unwrap();

        let resolution = Resolution::resolve(Some(raw));
        assert_eq!(resolution.possible().name, expected.name);
    }
}
