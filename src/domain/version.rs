use crate::error::{DocsError, Result};
use std::cmp::Ordering;
use std::fmt;

/// Minor version alias of a release, e.g. `v1.0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinorVersion {
    pub major: u64,
    pub minor: u64,
}

impl MinorVersion {
    /// Create a new minor version
    pub fn new(major: u64, minor: u64) -> Self {
        MinorVersion { major, minor }
    }

    /// Parse a `vMAJOR.MINOR` token
    pub fn parse(token: &str) -> Result<Self> {
        let invalid = || DocsError::InvalidBranchFormat(token.to_string());
        let clean = token.strip_prefix('v').ok_or_else(invalid)?;
        let (major, minor) = clean.split_once('.').ok_or_else(invalid)?;
        let major = major.parse::<u64>().map_err(|_| invalid())?;
        let minor = minor.parse::<u64>().map_err(|_| invalid())?;
        Ok(MinorVersion { major, minor })
    }

    /// Whether a patch version was published under this minor version
    pub fn contains(&self, patch: &PatchVersion) -> bool {
        patch.semver().major == self.major && patch.semver().minor == self.minor
    }
}

impl fmt::Display for MinorVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}", self.major, self.minor)
    }
}

/// Patch version carried by a release tag, e.g. `v1.0.10`
///
/// Ordering follows semantic versioning, never string comparison:
/// `v1.0.10` sorts above `v1.0.2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchVersion {
    version: semver::Version,
}

impl PatchVersion {
    /// Parse a `vMAJOR.MINOR.PATCH` token
    pub fn parse(token: &str) -> Option<Self> {
        let clean = token.strip_prefix('v')?;
        let version = semver::Version::parse(clean).ok()?;
        if !version.pre.is_empty() || !version.build.is_empty() {
            return None;
        }
        Some(PatchVersion { version })
    }

    pub fn semver(&self) -> &semver::Version {
        &self.version
    }

    /// The minor version alias this patch belongs to
    pub fn minor(&self) -> MinorVersion {
        MinorVersion::new(self.version.major, self.version.minor)
    }
}

impl PartialOrd for PatchVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PatchVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version.cmp(&other.version)
    }
}

impl fmt::Display for PatchVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_version_parse() {
        let v = MinorVersion::parse("v1.2").unwrap();
        assert_eq!(v, MinorVersion::new(1, 2));
        assert_eq!(v.to_string(), "v1.2");
    }

    #[test]
    fn test_minor_version_parse_invalid() {
        assert!(MinorVersion::parse("1.2").is_err());
        assert!(MinorVersion::parse("v1").is_err());
        assert!(MinorVersion::parse("v1.2.3").is_err());
        assert!(MinorVersion::parse("vx.y").is_err());
    }

    #[test]
    fn test_patch_version_parse() {
        let v = PatchVersion::parse("v1.0.10").unwrap();
        assert_eq!(v.to_string(), "v1.0.10");
        assert_eq!(v.minor(), MinorVersion::new(1, 0));
    }

    #[test]
    fn test_patch_version_parse_invalid() {
        assert!(PatchVersion::parse("1.0.1").is_none());
        assert!(PatchVersion::parse("v1.0").is_none());
        assert!(PatchVersion::parse("v1.01.0").is_none());
        assert!(PatchVersion::parse("v1.0.1-rc.1").is_none());
    }

    #[test]
    fn test_patch_version_orders_semantically() {
        let two = PatchVersion::parse("v1.0.2").unwrap();
        let ten = PatchVersion::parse("v1.0.10").unwrap();
        assert!(ten > two);
        assert!("v1.0.10" < "v1.0.2");
    }

    #[test]
    fn test_minor_contains_patch() {
        let minor = MinorVersion::new(1, 0);
        assert!(minor.contains(&PatchVersion::parse("v1.0.7").unwrap()));
        assert!(!minor.contains(&PatchVersion::parse("v1.1.0").unwrap()));
        assert!(!minor.contains(&PatchVersion::parse("v2.0.0").unwrap()));
    }
}
