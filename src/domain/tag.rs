use crate::domain::PatchVersion;
use regex::Regex;

/// Represents a release tag, e.g. `functions/go/apply-setters/v1.0.1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag {
    pub name: String,
    pub language: String,
    pub function_name: String,
    pub version: String,
}

impl ReleaseTag {
    /// Parsed patch version, if the version token is valid semver
    pub fn patch_version(&self) -> Option<PatchVersion> {
        PatchVersion::parse(&self.version)
    }
}

/// Release tag shape restricted to a fixed set of language identifiers
#[derive(Debug, Clone)]
pub struct TagPattern {
    regex: Regex,
}

impl TagPattern {
    /// Build the pattern `<prefix>/<language>/<function>/v<major>.<minor>.<patch>`
    pub fn new<S: AsRef<str>>(languages: &[S]) -> Result<Self, regex::Error> {
        let language_group = languages
            .iter()
            .map(|lang| regex::escape(lang.as_ref()))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&format!(
            r"(?:^|/)({})/([-\w]+)/(v\d+\.\d+\.\d+)$",
            language_group
        ))?;
        Ok(TagPattern { regex })
    }

    /// Parse a tag, returning `None` when it does not have the release shape
    pub fn parse(&self, tag: &str) -> Option<ReleaseTag> {
        let captures = self.regex.captures(tag.trim())?;
        Some(ReleaseTag {
            name: tag.trim().to_string(),
            language: captures[1].to_string(),
            function_name: captures[2].to_string(),
            version: captures[3].to_string(),
        })
    }
}
