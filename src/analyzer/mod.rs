//! Release resolution from release branches and tags

pub mod release_resolver;

pub use release_resolver::{LatestPatch, ReleaseResolver, Resolution};
