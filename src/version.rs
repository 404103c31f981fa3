//! Dotted-integer version values and their comparison rules

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use thiserror::Error;

/// Error returned when version text is not dotted non-negative integers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid version component {component:?} in {input:?}")]
pub struct ParseError {
    /// The full text that was being parsed
    pub input: String,
    /// The dotted component that failed to parse (may be empty)
    pub component: String,
}

/// An immutable dotted-integer version such as `1.16.5`
///
/// Comparison walks the components most-significant first, padding the
/// shorter operand with zeros, but terminates as **equal** as soon as both
/// operands carry the same zero component: `1.0.5` and `1.0.0` compare equal,
/// while `1.2.5` and `1.2.0` do not. The generation table ranges were
/// authored against this rule, so it is a behavioral contract rather than a
/// bug to fix.
#[derive(Debug, Clone)]
pub struct Version {
    components: Vec<u32>,
    name: String,
}

impl Version {
    /// Parse dotted text like `"1.16.5"`, keeping the original text for display
    ///
    /// Every component must be a base-10 non-negative integer; empty
    /// components (and therefore the empty string) are rejected.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let components = input
            .split('.')
            .map(|component| {
                component.parse::<u32>().map_err(|_| ParseError {
                    input: input.to_string(),
                    component: component.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            components,
            name: input.to_string(),
        })
    }

    /// Build a version directly from components; display joins them with `.`
    pub fn from_components(components: &[u32]) -> Self {
        let name = components
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".");

        Self {
            components: components.to_vec(),
            name,
        }
    }

    /// The `0.0.0` fallback used when no server version could be determined
    pub fn zero() -> Self {
        Self::from_components(&[0, 0, 0])
    }

    /// The original text this version was constructed from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parsed components, most significant first
    pub fn components(&self) -> &[u32] {
        &self.components
    }

    /// Component-wise comparison with zero padding and zero termination
    ///
    /// Missing components are treated as 0. A shared zero component ends the
    /// walk immediately: everything past it is irrelevant to the table
    /// ranges, so `1.0.5` compares equal to `1.0.0`.
    pub fn compare(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        for index in 0..len {
            let ours = self.components.get(index).copied().unwrap_or(0);
            let theirs = other.components.get(index).copied().unwrap_or(0);
            match ours.cmp(&theirs) {
                Ordering::Equal if ours == 0 => return Ordering::Equal,
                Ordering::Equal => {}
                decided => return decided,
            }
        }
        Ordering::Equal
    }

    pub fn is_lower_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    pub fn is_higher_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    pub fn is_lower_or_equal(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Greater
    }

    pub fn is_at_least(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Less
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Only the components before the first zero take part in equality,
        // so only they may take part in the hash.
        for &component in &self.components {
            if component == 0 {
                break;
            }
            component.hash(state);
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
