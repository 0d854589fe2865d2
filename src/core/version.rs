//! core::version
//!
//! Numeric ordering of dot-separated version strings.
//!
//! # Ordering Rules
//!
//! - The empty version orders strictly before every non-empty version,
//!   including `"0"`. Empty vs empty is equal.
//! - Non-empty versions compare component-by-component as integers, with
//!   the shorter sequence padded with zero-valued trailing components:
//!   `1.0` equals `1.0.0`, and `2.0` orders after `1.9.9`.
//! - Components are parsed as integers, so leading zeros are insignificant:
//!   `1.01` equals `1.1`.
//! - A component that is not a non-negative integer is a parse error, never
//!   a fallback to lexicographic comparison.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//! use appmanifest::core::version::{compare, Version};
//!
//! assert_eq!(compare("2.0", "1.9.9").unwrap(), Ordering::Greater);
//! assert_eq!(compare("1.0", "1.0.0").unwrap(), Ordering::Equal);
//!
//! let v = Version::new("1.2.3").unwrap();
//! assert_eq!(v.components(), &[1, 2, 3]);
//!
//! assert!(Version::new("1.2.beta").is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from version parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("invalid component '{component}' in version '{version}': expected a non-negative integer")]
    InvalidComponent {
        /// The full version string being parsed.
        version: String,
        /// The offending component.
        component: String,
    },
}

/// A validated dot-separated numeric version string.
///
/// A version is either empty or a sequence of non-negative integer
/// components separated by `.`. The original string is retained, so
/// `Display` and serde round-trip the input exactly, while equality and
/// ordering are numeric (`1.0 == 1.0.0`, `1.01 == 1.1`).
///
/// # Example
///
/// ```
/// use appmanifest::core::version::Version;
///
/// let a = Version::new("1.0").unwrap();
/// let b = Version::new("1.0.0").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "1.0");
///
/// // Invalid constructions fail at creation time
/// assert!(Version::new("1..2").is_err());
/// assert!(Version::new("-1.0").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    raw: String,
    components: Vec<u64>,
}

impl Version {
    /// Parse a validated version.
    ///
    /// The empty string is valid and denotes the distinguished empty
    /// version, which orders before every non-empty version.
    ///
    /// # Errors
    ///
    /// Returns `VersionError::InvalidComponent` if any dot-separated
    /// component is not a non-negative integer.
    pub fn new(version: impl Into<String>) -> Result<Self, VersionError> {
        let raw = version.into();
        let components = Self::parse_components(&raw)?;
        Ok(Self { raw, components })
    }

    fn parse_components(raw: &str) -> Result<Vec<u64>, VersionError> {
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        raw.split('.')
            .map(|component| {
                component
                    .parse::<u64>()
                    .map_err(|_| VersionError::InvalidComponent {
                        version: raw.to_string(),
                        component: component.to_string(),
                    })
            })
            .collect()
    }

    /// The version string as originally written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed numeric components. Empty for the empty version.
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Whether this is the empty version.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Components with zero-valued trailing components stripped.
    ///
    /// This is the canonical form used for hashing, so that `1.0` and
    /// `1.0.0` coincide.
    fn canonical(&self) -> &[u64] {
        let mut components = self.components.as_slice();
        while let [rest @ .., 0] = components {
            components = rest;
        }
        components
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        // The empty version is not the same as "0": it orders before
        // everything, so it must be resolved before zero-padding.
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => {
                let len = self.components.len().max(other.components.len());
                for i in 0..len {
                    let lhs = self.components.get(i).copied().unwrap_or(0);
                    let rhs = other.components.get(i).copied().unwrap_or(0);
                    match lhs.cmp(&rhs) {
                        Ordering::Equal => continue,
                        unequal => return unequal,
                    }
                }
                Ordering::Equal
            }
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with Eq: hash the canonical components plus the
        // empty/non-empty distinction ("" and "0" are unequal).
        self.is_empty().hash(state);
        self.canonical().hash(state);
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.raw
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Compare two version strings numerically.
///
/// # Errors
///
/// Returns `VersionError::InvalidComponent` if either string contains a
/// component that is not a non-negative integer.
pub fn compare(lhs: &str, rhs: &str) -> Result<Ordering, VersionError> {
    Ok(Version::new(lhs)?.cmp(&Version::new(rhs)?))
}

/// Whether `lhs` equals `rhs` under numeric ordering.
pub fn equal_to(lhs: &str, rhs: &str) -> Result<bool, VersionError> {
    Ok(compare(lhs, rhs)? == Ordering::Equal)
}

/// Whether `lhs` orders after `rhs`.
pub fn greater_than(lhs: &str, rhs: &str) -> Result<bool, VersionError> {
    Ok(compare(lhs, rhs)? == Ordering::Greater)
}

/// Whether `lhs` orders before `rhs`.
pub fn less_than(lhs: &str, rhs: &str) -> Result<bool, VersionError> {
    Ok(compare(lhs, rhs)? == Ordering::Less)
}

/// Whether `lhs` orders after or equal to `rhs`.
pub fn greater_than_or_equal_to(lhs: &str, rhs: &str) -> Result<bool, VersionError> {
    Ok(compare(lhs, rhs)? != Ordering::Less)
}

/// Whether `lhs` orders before or equal to `rhs`.
pub fn less_than_or_equal_to(lhs: &str, rhs: &str) -> Result<bool, VersionError> {
    Ok(compare(lhs, rhs)? != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_versions_are_equal() {
        assert_eq!(compare("", "").unwrap(), Ordering::Equal);
    }

    #[test]
    fn empty_orders_before_non_empty() {
        assert_eq!(compare("", "1.0").unwrap(), Ordering::Less);
        assert_eq!(compare("1.0", "").unwrap(), Ordering::Greater);
        // Even "0" is greater than the empty version.
        assert_eq!(compare("", "0").unwrap(), Ordering::Less);
    }

    #[test]
    fn trailing_zeros_are_insignificant() {
        assert_eq!(compare("1.0", "1.0.0").unwrap(), Ordering::Equal);
        assert_eq!(compare("1", "1.0.0.0").unwrap(), Ordering::Equal);
    }

    #[test]
    fn comparison_is_numeric_not_lexicographic() {
        assert_eq!(compare("2.0", "1.9.9").unwrap(), Ordering::Greater);
        assert_eq!(compare("1.9.9", "2.0").unwrap(), Ordering::Less);
        assert_eq!(compare("10.0", "9.0").unwrap(), Ordering::Greater);
    }

    #[test]
    fn identical_versions_are_equal() {
        assert_eq!(compare("1.2.3", "1.2.3").unwrap(), Ordering::Equal);
    }

    #[test]
    fn leading_zeros_are_insignificant() {
        // Deliberate choice: components parse as integers, so "1.01" and
        // "1.1" denote the same version.
        assert_eq!(compare("1.01", "1.1").unwrap(), Ordering::Equal);
        assert_eq!(compare("1.010", "1.10").unwrap(), Ordering::Equal);
    }

    #[test]
    fn non_numeric_components_are_rejected() {
        assert_eq!(
            compare("1.beta", "1.0"),
            Err(VersionError::InvalidComponent {
                version: "1.beta".to_string(),
                component: "beta".to_string(),
            })
        );
        assert!(Version::new("1..2").is_err());
        assert!(Version::new("1.0-rc1").is_err());
        assert!(Version::new(".").is_err());
        assert!(Version::new("-1").is_err());
    }

    #[test]
    fn predicates_wrap_three_way_result() {
        assert!(equal_to("1.0", "1.0.0").unwrap());
        assert!(greater_than("2.0", "1.9.9").unwrap());
        assert!(less_than("1.9.9", "2.0").unwrap());
        assert!(greater_than_or_equal_to("1.0", "1.0").unwrap());
        assert!(greater_than_or_equal_to("1.1", "1.0").unwrap());
        assert!(less_than_or_equal_to("1.0", "1.0").unwrap());
        assert!(less_than_or_equal_to("1.0", "1.1").unwrap());
        assert!(!greater_than("1.0", "1.0").unwrap());
        assert!(!less_than("1.0", "1.0").unwrap());
    }

    #[test]
    fn display_preserves_input() {
        let v = Version::new("1.00.0").unwrap();
        assert_eq!(v.to_string(), "1.00.0");
        assert_eq!(v.as_str(), "1.00.0");
    }

    #[test]
    fn serde_round_trip() {
        let v = Version::new("1.2.3").unwrap();
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"1.2.3\"");
        let parsed: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(v, parsed);
    }

    #[test]
    fn serde_rejects_malformed() {
        let result: Result<Version, _> = serde_json::from_str("\"1.x.3\"");
        assert!(result.is_err());
    }

    #[test]
    fn ordering_agrees_with_equality() {
        let a = Version::new("1.0").unwrap();
        let b = Version::new("1.0.0").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);

        let empty = Version::new("").unwrap();
        let zero = Version::new("0").unwrap();
        assert_ne!(empty, zero);
        assert!(empty < zero);
    }
}
