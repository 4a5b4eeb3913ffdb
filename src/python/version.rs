//! Python version numbers.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static RE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").unwrap());

/// A `major.minor.patch` interpreter version.
///
/// Ordering is lexicographic over the three components. Parsing accepts
/// `major.minor` (patch defaults to 0) and tolerates surrounding text such
/// as `Python 3.11.4` or `3.13.0rc1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl PythonVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Whether both major and minor are at least the minimum's.
    ///
    /// Components are compared independently, not as a tuple: against a
    /// `3.9` minimum, `4.0` fails. Patch is ignored.
    pub fn satisfies(&self, minimum: &PythonVersion) -> bool {
        self.major >= minimum.major && self.minor >= minimum.minor
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for PythonVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = RE_VERSION
            .captures(s)
            .ok_or_else(|| format!("not a version: {:?}", s))?;

        let component = |idx: usize| -> Result<u32, String> {
            caps.get(idx)
                .map(|m| m.as_str().parse::<u32>())
                .transpose()
                .map(|v| v.unwrap_or(0))
                .map_err(|e| format!("bad version component in {:?}: {}", s, e))
        };

        Ok(Self {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
        })
    }
}

impl TryFrom<String> for PythonVersion {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PythonVersion> for String {
    fn from(version: PythonVersion) -> Self {
        format!("{}.{}", version.major, version.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_version() {
        assert_eq!("3.11.4".parse::<PythonVersion>(), Ok(PythonVersion::new(3, 11, 4)));
    }

    #[test]
    fn parses_major_minor_only() {
        assert_eq!("3.9".parse::<PythonVersion>(), Ok(PythonVersion::new(3, 9, 0)));
    }

    #[test]
    fn parses_with_surrounding_text() {
        assert_eq!("Python 3.12.1".parse::<PythonVersion>(), Ok(PythonVersion::new(3, 12, 1)));
        assert_eq!("3.13.0rc1".parse::<PythonVersion>(), Ok(PythonVersion::new(3, 13, 0)));
    }

    #[test]
    fn rejects_garbage() {
        assert!("three point nine".parse::<PythonVersion>().is_err());
        assert!("".parse::<PythonVersion>().is_err());
    }

    #[test]
    fn supported_versions_satisfy_minimum() {
        let minimum = PythonVersion::new(3, 9, 0);
        for minor in 9..=14 {
            let version = PythonVersion::new(3, minor, 0);
            assert!(version.satisfies(&minimum), "3.{} should pass", minor);
        }
    }

    #[test]
    fn older_minor_versions_fail_minimum() {
        let minimum = PythonVersion::new(3, 9, 0);
        for minor in 0..9 {
            let version = PythonVersion::new(3, minor, 18);
            assert!(!version.satisfies(&minimum), "3.{} should fail", minor);
        }
    }

    #[test]
    fn patch_is_ignored_when_comparing() {
        let minimum = PythonVersion::new(3, 9, 7);
        assert!(PythonVersion::new(3, 9, 0).satisfies(&minimum));
    }

    #[test]
    fn major_and_minor_are_checked_independently() {
        let minimum = PythonVersion::new(3, 9, 0);
        assert!(!PythonVersion::new(4, 0, 0).satisfies(&minimum));
        assert!(!PythonVersion::new(4, 8, 1).satisfies(&minimum));
        assert!(PythonVersion::new(4, 9, 0).satisfies(&minimum));
        assert!(!PythonVersion::new(2, 7, 18).satisfies(&minimum));
        assert!(!PythonVersion::new(2, 12, 0).satisfies(&minimum));
    }

    #[test]
    fn display_includes_patch() {
        assert_eq!(PythonVersion::new(3, 13, 2).to_string(), "3.13.2");
    }

    #[test]
    fn deserializes_from_yaml_string() {
        let version: PythonVersion = serde_yaml::from_str("\"3.10\"").unwrap();
        assert_eq!(version, PythonVersion::new(3, 10, 0));
    }

    #[test]
    fn serializes_as_major_minor() {
        let yaml = serde_yaml::to_string(&PythonVersion::new(3, 9, 0)).unwrap();
        assert!(yaml.contains("3.9"));
    }
}
