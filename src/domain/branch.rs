use crate::domain::MinorVersion;
use crate::error::{DocsError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Pattern of release branches, e.g. `origin/apply-setters/v1.0`
fn release_branch_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?:.*/)?([-\w]+)/(v\d+\.\d+)$").expect("release branch pattern is valid")
    })
}

/// A release branch naming one function and one minor version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseBranch {
    pub name: String,
    pub function_name: String,
    pub minor_version: MinorVersion,
}

impl ReleaseBranch {
    /// Parse `<prefix-segments>/<function-name>/v<major>.<minor>`
    pub fn parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let captures = release_branch_pattern()
            .captures(&name)
            .ok_or_else(|| DocsError::InvalidBranchFormat(name.clone()))?;

        let function_name = captures[1].to_string();
        let minor_version = MinorVersion::parse(&captures[2])
            .map_err(|_| DocsError::InvalidBranchFormat(name.clone()))?;

        Ok(ReleaseBranch {
            name,
            function_name,
            minor_version,
        })
    }

    /// The `<function-name>/<minor-version>` fragment release tags must contain
    pub fn tag_fragment(&self) -> String {
        format!("{}/{}", self.function_name, self.minor_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_remote_prefix() {
        let branch = ReleaseBranch::parse("origin/apply-setters/v0.2").unwrap();
        assert_eq!(branch.function_name, "apply-setters");
        assert_eq!(branch.minor_version, MinorVersion::new(0, 2));
        assert_eq!(branch.name, "origin/apply-setters/v0.2");
    }

    #[test]
    fn test_parse_with_deep_prefix() {
        let branch = ReleaseBranch::parse("a/b/c/set-namespace/v1.12").unwrap();
        assert_eq!(branch.function_name, "set-namespace");
        assert_eq!(branch.minor_version.to_string(), "v1.12");
    }

    #[test]
    fn test_parse_without_prefix() {
        let branch = ReleaseBranch::parse("apply-setters/v1.0").unwrap();
        assert_eq!(branch.function_name, "apply-setters");
    }

    #[test]
    fn test_parse_rejects_missing_minor_suffix() {
        for name in [
            "main",
            "origin/apply-setters",
            "origin/apply-setters/v1",
            "origin/apply-setters/v1.0.1",
            "origin/apply-setters/1.0",
            "v1.0",
            "/v1.0",
        ] {
            assert!(
                matches!(
                    ReleaseBranch::parse(name),
                    Err(DocsError::InvalidBranchFormat(_))
                ),
                "expected '{}' to be rejected",
                name
            );
        }
    }

    #[test]
    fn test_tag_fragment() {
        let branch = ReleaseBranch::parse("origin/apply-setters/v1.0").unwrap();
        assert_eq!(branch.tag_fragment(), "apply-setters/v1.0");
    }
}
