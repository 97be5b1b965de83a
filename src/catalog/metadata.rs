use crate::error::{DocsError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// File next to each function's README listing its example packages
pub const METADATA_FILE_NAME: &str = "metadata.yaml";

/// The part of a function's metadata the docs updater cares about
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct FunctionMetadata {
    #[serde(rename = "examplePackageURLs", default)]
    pub example_package_urls: Vec<String>,
}

impl FunctionMetadata {
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        // An empty document deserializes as null.
        if text.trim().is_empty() {
            return Ok(FunctionMetadata::default());
        }
        serde_yaml::from_str(text).map_err(|source| DocsError::Metadata {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read `metadata.yaml` from a function directory
    pub fn load(function_path: &Path) -> Result<Self> {
        let path = function_path.join(METADATA_FILE_NAME);
        let text = fs::read_to_string(&path).map_err(|e| DocsError::io(&path, e))?;
        Self::parse(&text, &path)
    }

    /// Example names: the last path segment of every package URL
    pub fn example_names(&self) -> Vec<String> {
        self.example_package_urls
            .iter()
            .map(|url| {
                url.trim_end_matches('/')
                    .rsplit('/')
                    .next()
                    .unwrap_or_default()
                    .to_string()
            })
            .collect()
    }
}
