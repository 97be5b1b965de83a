use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for update-function-docs operations
#[derive(Error, Debug)]
pub enum DocsError {
    #[error("Invalid branch format: '{0}' - expected <prefix>/<function>/v<major>.<minor>")]
    InvalidBranchFormat(String),

    #[error("Missing function name and/or minor version")]
    MissingIdentifier,

    #[error("Could not find matching tag for release {function}/{minor}")]
    NoMatchingRelease { function: String, minor: String },

    #[error("Function doc paths not found, tried: {}", format_paths(.tried))]
    FunctionPathNotFound { tried: Vec<PathBuf> },

    #[error("Example dir does not exist: {}", .0.display())]
    ExampleDirectoryMissing(PathBuf),

    #[error("Dirty repo: commit or stash local changes before updating docs")]
    DirtyWorkingTree,

    #[error("Docs up to date for {0}")]
    DocsUpToDate(String),

    #[error("Git {operation} failed: {message}")]
    Vcs { operation: String, message: String },

    #[error("Invalid metadata in {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results in update-function-docs
pub type Result<T> = std::result::Result<T, DocsError>;

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl DocsError {
    /// Wrap a failed version-control operation with its diagnostic text
    pub fn vcs(operation: impl Into<String>, message: impl std::fmt::Display) -> Self {
        DocsError::Vcs {
            operation: operation.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DocsError::Config(msg.into())
    }

    /// Attach the offending path to an I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DocsError::Io {
            path: path.into(),
            source,
        }
    }
}
