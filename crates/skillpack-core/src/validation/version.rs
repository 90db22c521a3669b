//! Dotted numeric version strings (`1`, `1.2`, `1.2.3`, ...).

use std::fmt;
use std::str::FromStr;

use crate::PackageError;
use crate::Result;

/// Parses a dotted version into its integer components.
///
/// The string must be one or more ASCII digit groups separated by single
/// dots, with nothing else anywhere. Leading zeros are accepted (`"01"`
/// parses as `1`).
///
/// # Errors
///
/// Returns `PackageError::InvalidVersion` naming the raw string for empty
/// input, non-digit characters, doubled dots, leading or trailing dots, or
/// a group too large for `u64`.
///
/// # Examples
///
/// ```
/// use skillpack_core::parse_version;
///
/// assert_eq!(parse_version("1.2.3").unwrap(), vec![1, 2, 3]);
/// assert!(parse_version("v1.0").is_err());
/// ```
pub fn parse_version(raw: &str) -> Result<Vec<u64>> {
    let invalid = || PackageError::InvalidVersion {
        raw: raw.to_string(),
    };

    raw.split('.')
        .map(|group| {
            if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            group.parse::<u64>().map_err(|_| invalid())
        })
        .collect()
}

/// A parsed skill version, ordered component-wise.
///
/// Missing trailing components compare as smaller (`1.2 < 1.2.0`), matching
/// plain sequence ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SkillVersion(Vec<u64>);

impl SkillVersion {
    /// Returns the numeric components.
    #[must_use]
    pub fn components(&self) -> &[u64] {
        &self.0
    }
}

impl FromStr for SkillVersion {
    type Err = PackageError;

    fn from_str(s: &str) -> Result<Self> {
        parse_version(s).map(Self)
    }
}

impl fmt::Display for SkillVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for component in &self.0 {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
            first = false;
        }
        Ok(())
    }
}
