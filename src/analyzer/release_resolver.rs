use crate::boundary::BoundaryWarning;
use crate::catalog;
use crate::domain::{FunctionRelease, PatchVersion, ReleaseBranch, ReleaseTag, TagPattern};
use crate::error::{DocsError, Result};
use crate::git::Repository;

/// The highest published patch of a release, and the tag it came from
#[derive(Debug, Clone, PartialEq)]
pub struct LatestPatch {
    pub tag: ReleaseTag,
    pub version: PatchVersion,
    pub warnings: Vec<BoundaryWarning>,
}

/// A resolved release plus anything worth telling the operator about
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub release: FunctionRelease,
    pub warnings: Vec<BoundaryWarning>,
}

/// Resolves release branches to fully described function releases
pub struct ReleaseResolver {
    languages: Vec<String>,
    pattern: TagPattern,
}

impl ReleaseResolver {
    /// Create a resolver recognising tags published under `languages`
    pub fn new(languages: &[String]) -> Result<Self> {
        let pattern = TagPattern::new(languages)
            .map_err(|e| DocsError::config(format!("invalid language identifiers: {}", e)))?;
        Ok(ReleaseResolver {
            languages: languages.to_vec(),
            pattern,
        })
    }

    /// Select the highest patch version published for the branch's release
    ///
    /// Ties keep the first tag seen. Language and version always come from
    /// the same winning tag.
    pub fn latest_patch<I, S>(&self, branch: &ReleaseBranch, tags: I) -> Result<LatestPatch>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if branch.function_name.is_empty() {
            return Err(DocsError::MissingIdentifier);
        }

        let fragment = branch.tag_fragment();
        let mut warnings = Vec::new();
        let mut best: Option<(ReleaseTag, PatchVersion)> = None;

        for tag in tags {
            let tag = tag.as_ref().trim();
            if tag.is_empty() || !tag.contains(&fragment) {
                continue;
            }

            let Some(release_tag) = self.pattern.parse(tag) else {
                warnings.push(BoundaryWarning::TagMismatchPattern {
                    tag: tag.to_string(),
                    languages: self.languages.clone(),
                });
                continue;
            };

            let Some(version) = release_tag.patch_version() else {
                warnings.push(BoundaryWarning::UnparsableTag {
                    tag: tag.to_string(),
                    reason: format!("'{}' is not a semantic version", release_tag.version),
                });
                continue;
            };

            if release_tag.function_name != branch.function_name
                || !branch.minor_version.contains(&version)
            {
                tracing::debug!(tag, "tag belongs to another release, skipped");
                continue;
            }

            let is_newer = match &best {
                Some((_, current)) => version > *current,
                None => true,
            };
            if is_newer {
                tracing::debug!(tag, %version, "new latest patch candidate");
                best = Some((release_tag, version));
            }
        }

        let (tag, version) = best.ok_or_else(|| DocsError::NoMatchingRelease {
            function: branch.function_name.clone(),
            minor: branch.minor_version.to_string(),
        })?;

        Ok(LatestPatch {
            tag,
            version,
            warnings,
        })
    }

    /// Resolve an already parsed release branch against the repository
    pub fn resolve_branch<R: Repository>(
        &self,
        repo: &R,
        branch: &ReleaseBranch,
    ) -> Result<Resolution> {
        let tags = repo.list_tags()?;
        let latest = self.latest_patch(branch, &tags)?;

        let root = repo.workdir()?;
        let location = catalog::discover(&root, &latest.tag.language, &branch.function_name)?;

        let release = FunctionRelease::new(
            branch.function_name.clone(),
            branch.minor_version,
            latest.tag.language.clone(),
            latest.version,
            location.function_path,
            location.layout.is_contrib(),
            location.examples,
        );

        Ok(Resolution {
            release,
            warnings: latest.warnings,
        })
    }

    /// Resolve a release branch name to a function release
    pub fn resolve<R: Repository>(&self, repo: &R, branch_name: &str) -> Result<Resolution> {
        let branch = ReleaseBranch::parse(branch_name)?;
        self.resolve_branch(repo, &branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;

    fn resolver() -> ReleaseResolver {
        ReleaseResolver::new(&["go".to_string(), "ts".to_string()]).unwrap()
    }

    fn branch(name: &str) -> ReleaseBranch {
        ReleaseBranch::parse(name).unwrap()
    }

    #[test]
    fn test_latest_patch_is_semantic_maximum() {
        let tags = [
            "functions/go/fn/v1.0.1",
            "functions/go/fn/v1.0.10",
            "functions/go/fn/v1.0.2",
        ];
        let latest = resolver()
            .latest_patch(&branch("origin/fn/v1.0"), tags)
            .unwrap();
        assert_eq!(latest.version.to_string(), "v1.0.10");
        assert_eq!(latest.tag.language, "go");
    }

    #[test]
    fn test_language_comes_from_winning_tag() {
        let tags = ["functions/go/fn/v1.0.1", "functions/ts/fn/v1.0.3"];
        let latest = resolver()
            .latest_patch(&branch("origin/fn/v1.0"), tags)
            .unwrap();
        assert_eq!(latest.tag.language, "ts");
        assert_eq!(latest.version.to_string(), "v1.0.3");
    }

    #[test]
    fn test_tie_keeps_first_seen() {
        let tags = ["functions/ts/fn/v1.0.4", "functions/go/fn/v1.0.4"];
        let latest = resolver()
            .latest_patch(&branch("origin/fn/v1.0"), tags)
            .unwrap();
        assert_eq!(latest.tag.language, "ts");
    }

    #[test]
    fn test_other_minor_and_similar_names_are_ignored() {
        let tags = [
            "functions/go/fn/v1.0.1",
            "functions/go/fn/v1.1.9",
            "functions/go/my-fn/v1.0.7",
            "functions/go/fn/v1.01.5",
        ];
        let latest = resolver()
            .latest_patch(&branch("origin/fn/v1.0"), tags)
            .unwrap();
        assert_eq!(latest.version.to_string(), "v1.0.1");
    }

    #[test]
    fn test_no_match_is_an_error() {
        let tags = ["functions/go/fn/v1.0.1", "functions/go/fn/v1.0.2"];
        let err = resolver()
            .latest_patch(&branch("origin/fn/v2.0"), tags)
            .unwrap_err();
        assert!(matches!(err, DocsError::NoMatchingRelease { .. }));
    }

    #[test]
    fn test_mismatched_shapes_are_reported() {
        let tags = [
            "fn/v1.0.1",
            "functions/python/fn/v1.0.2",
            "functions/go/fn/v1.0.3",
        ];
        let latest = resolver()
            .latest_patch(&branch("origin/fn/v1.0"), tags)
            .unwrap();
        assert_eq!(latest.version.to_string(), "v1.0.3");
        assert_eq!(latest.warnings.len(), 2);
        assert!(latest
            .warnings
            .iter()
            .all(|w| matches!(w, BoundaryWarning::TagMismatchPattern { .. })));
    }

    #[test]
    fn test_resolve_rejects_malformed_branch_before_listing_tags() {
        let mut repo = MockRepository::new("/repo");
        repo.add_tag("functions/go/fn/v1.0.1");

        let err = resolver().resolve(&repo, "origin/fn").unwrap_err();

        assert!(matches!(err, DocsError::InvalidBranchFormat(_)));
        assert!(repo.calls().is_empty());
    }

    #[test]
    fn test_resolve_describes_release_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let function_path = dir.path().join("functions/ts/fn");
        std::fs::create_dir_all(&function_path).unwrap();
        std::fs::write(
            function_path.join("metadata.yaml"),
            "examplePackageURLs:\n  - https://example.com/examples/fn-simple\n",
        )
        .unwrap();
        std::fs::create_dir_all(dir.path().join("examples/fn-simple")).unwrap();

        let mut repo = MockRepository::new(dir.path());
        repo.add_tag("functions/go/fn/v1.0.1");
        repo.add_tag("functions/ts/fn/v1.0.2");

        let resolution = resolver().resolve(&repo, "origin/fn/v1.0").unwrap();
        let release = resolution.release;

        assert_eq!(release.qualified_name(), "ts/fn/v1.0.2");
        assert_eq!(release.function_path(), &function_path);
        assert!(!release.is_contrib());
        assert_eq!(release.example_names(), vec!["fn-simple"]);
        assert_eq!(repo.calls(), vec!["tag"]);
    }

    #[test]
    fn test_missing_identifier() {
        let empty = ReleaseBranch {
            name: "x".to_string(),
            function_name: String::new(),
            minor_version: crate::domain::MinorVersion::new(1, 0),
        };
        let err = resolver()
            .latest_patch(&empty, ["functions/go/fn/v1.0.1"])
            .unwrap_err();
        assert!(matches!(err, DocsError::MissingIdentifier));
    }
}
