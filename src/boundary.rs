use std::fmt;
use std::path::PathBuf;

/// Non-fatal findings reported to the operator while resolving and rewriting.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag mentions the release but does not have the release tag shape
    TagMismatchPattern { tag: String, languages: Vec<String> },
    /// Tag has the release shape but its version is not valid semver
    UnparsableTag { tag: String, reason: String },
    /// A documentation file needed no changes
    DocUnchanged { path: PathBuf },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::TagMismatchPattern { tag, languages } => {
                write!(
                    f,
                    "Tag '{}' does not match <prefix>/<{}>/<function>/vX.Y.Z, skipped",
                    tag,
                    languages.join("|")
                )
            }
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Cannot parse tag '{}': {}", tag, reason)
            }
            BoundaryWarning::DocUnchanged { path } => {
                write!(f, "{} already up to date", path.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_mismatch_display() {
        let warning = BoundaryWarning::TagMismatchPattern {
            tag: "apply-setters/v1.0.1".to_string(),
            languages: vec!["go".to_string(), "ts".to_string()],
        };
        let msg = warning.to_string();
        assert!(msg.contains("apply-setters/v1.0.1"));
        assert!(msg.contains("<go|ts>"));
    }

    #[test]
    fn test_doc_unchanged_display() {
        let warning = BoundaryWarning::DocUnchanged {
            path: PathBuf::from("examples/x/README.md"),
        };
        assert_eq!(warning.to_string(), "examples/x/README.md already up to date");
    }
}
