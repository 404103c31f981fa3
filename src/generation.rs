//! The static table of NMS generations and their protocol metadata
//!
//! Protocol and data version numbers follow
//! <https://minecraft.fandom.com/wiki/Protocol_version>. The table is
//! hand-maintained: a new CraftBukkit revision means a new row, and a new
//! release inside an existing revision bumps that row's candidate version.

use std::fmt;
use std::sync::LazyLock;

use crate::version::Version;

/// Data versions below this are placeholder sentinels; the first real data
/// version shipped in snapshot 15w32a.
const MIN_DATA_VERSION: i32 = 100;

/// A named range of server versions sharing the same NMS internals
#[derive(Debug)]
pub struct Generation {
    /// CraftBukkit revision tag, e.g. `v1_16_R3`
    pub name: &'static str,
    /// First version released for this revision (inclusive)
    pub from: Version,
    /// Last version ever observed for this revision (inclusive)
    pub candidate: Version,
    /// Wire protocol number, -1 when unknown
    pub protocol_version: i32,
    /// Persisted data format number, -1 when unknown
    pub data_version: i32,
}

impl Generation {
    fn new(
        name: &'static str,
        from: &[u32],
        candidate: &[u32],
        protocol_version: i32,
        data_version: i32,
    ) -> Self {
        Self {
            name,
            from: Version::from_components(from),
            candidate: Version::from_components(candidate),
            protocol_version,
            data_version,
        }
    }

    /// Whether this generation carries a real data format number
    pub fn has_data_version(&self) -> bool {
        self.data_version >= MIN_DATA_VERSION
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The read-only, ascending-ordered table of known generations
#[derive(Debug)]
pub struct GenerationTable {
    entries: Vec<Generation>,
}

// Indexes of the feature-gate markers; pinned by tests below.
const MODERN_ITEM_FORMAT: usize = 8; // v1_13_R1, flattened item format
const COMPOUND_ITEM_FORMAT: usize = 24; // v1_20_R4, item components

impl GenerationTable {
    fn new() -> Self {
        let entries = vec![
            Generation::new("v1_8_R1", &[1, 8, 0], &[1, 8, 2], 47, -1),
            Generation::new("v1_8_R2", &[1, 8, 3], &[1, 8, 3], 47, -1),
            Generation::new("v1_8_R3", &[1, 8, 4], &[1, 8, 9], 47, -1),
            Generation::new("v1_9_R1", &[1, 9, 0], &[1, 9, 2], 109, 176),
            Generation::new("v1_9_R2", &[1, 9, 3], &[1, 9, 4], 110, 184),
            Generation::new("v1_10_R1", &[1, 10, 0], &[1, 10, 2], 210, 512),
            Generation::new("v1_11_R1", &[1, 11, 0], &[1, 11, 2], 316, 922),
            Generation::new("v1_12_R1", &[1, 12, 0], &[1, 12, 2], 340, 1343),
            Generation::new("v1_13_R1", &[1, 13, 0], &[1, 13, 0], 393, 1519),
            Generation::new("v1_13_R2", &[1, 13, 1], &[1, 13, 2], 404, 1631),
            Generation::new("v1_14_R1", &[1, 14, 0], &[1, 14, 4], 498, 1976),
            Generation::new("v1_15_R1", &[1, 15, 0], &[1, 15, 2], 578, 2230),
            Generation::new("v1_16_R1", &[1, 16, 0], &[1, 16, 1], 736, 2567),
            Generation::new("v1_16_R2", &[1, 16, 2], &[1, 16, 3], 753, 2580),
            Generation::new("v1_16_R3", &[1, 16, 4], &[1, 16, 5], 754, 2586),
            Generation::new("v1_17_R1", &[1, 17, 0], &[1, 17, 1], 756, 2730),
            Generation::new("v1_18_R1", &[1, 18, 0], &[1, 18, 1], 757, 2865),
            Generation::new("v1_18_R2", &[1, 18, 2], &[1, 18, 2], 758, 2975),
            Generation::new("v1_19_R1", &[1, 19, 0], &[1, 19, 2], 760, 3120),
            Generation::new("v1_19_R2", &[1, 19, 3], &[1, 19, 3], 761, 3218),
            Generation::new("v1_19_R3", &[1, 19, 4], &[1, 19, 4], 762, 3337),
            Generation::new("v1_20_R1", &[1, 20, 0], &[1, 20, 1], 763, 3465),
            Generation::new("v1_20_R2", &[1, 20, 2], &[1, 20, 2], 764, 3578),
            Generation::new("v1_20_R3", &[1, 20, 3], &[1, 20, 4], 765, 3700),
            Generation::new("v1_20_R4", &[1, 20, 5], &[1, 20, 6], 766, 3837),
            Generation::new("v1_21_R1", &[1, 21, 0], &[1, 21, 0], 767, 3953),
        ];

        debug_assert!(
            entries
                .windows(2)
                .all(|pair| pair[0].from.is_lower_than(&pair[1].from)),
            "generation table must be strictly ascending by `from`"
        );

        Self { entries }
    }

    /// All generations, oldest first
    pub fn entries(&self) -> &[Generation] {
        &self.entries
    }

    /// The newest known generation
    pub fn newest(&self) -> &Generation {
        &self.entries[self.entries.len() - 1]
    }

    /// Look up a generation by its CraftBukkit revision tag
    pub fn by_name(&self, name: &str) -> Option<&Generation> {
        self.entries.iter().find(|generation| generation.name == name)
    }

    /// First generation with the flattened item format (1.13)
    pub fn modern_item_format(&self) -> &Generation {
        &self.entries[MODERN_ITEM_FORMAT]
    }

    /// First generation with component-based items (1.20.5)
    pub fn compound_item_format(&self) -> &Generation {
        &self.entries[COMPOUND_ITEM_FORMAT]
    }
}

/// The process-wide generation table, built on first use and never mutated
pub static GENERATIONS: LazyLock<GenerationTable> = LazyLock::new(GenerationTable::new);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn from_versions_strictly_increase() {
        let entries = GENERATIONS.entries();
        assert!(!entries.is_empty());

        for pair in entries.windows(2) {
            assert!(
                pair[0].from.is_lower_than(&pair[1].from),
                "{} must start below {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn candidate_never_precedes_from() {
        for generation in GENERATIONS.entries() {
            assert!(
                generation.candidate.is_at_least(&generation.from),
                "{} has candidate below from",
                generation
            );
        }
    }

    #[test]
    fn markers_point_at_expected_revisions() {
        assert_eq!(GENERATIONS.modern_item_format().name, "v1_13_R1");
        assert_eq!(GENERATIONS.compound_item_format().name, "v1_20_R4");
    }

    #[test]
    fn newest_is_the_last_table_entry() {
        assert_eq!(GENERATIONS.newest().name, "v1_21_R1");
        assert_eq!(GENERATIONS.newest().protocol_version, 767);
    }

    #[test]
    fn by_name_finds_known_revisions() {
        let generation = GENERATIONS.by_name("v1_16_R3").unwrap();
        assert_eq!(generation.protocol_version, 754);
        assert_eq!(generation.data_version, 2586);

        assert!(GENERATIONS.by_name("v0_0_R0").is_none());
    }

    #[rstest]
    #[case("v1_8_R1", false)] // -1 placeholder
    #[case("v1_8_R3", false)]
    #[case("v1_9_R1", true)] // 176
    #[case("v1_21_R1", true)]
    fn has_data_version_guards_placeholders(#[case] name: &str, #[case] expected: bool) {
        let generation = GENERATIONS.by_name(name).unwrap();
        assert_eq!(generation.has_data_version(), expected);
    }
}
