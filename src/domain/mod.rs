//! Domain logic - pure release rules independent of git operations

pub mod branch;
pub mod release;
pub mod tag;
pub mod version;

pub use branch::ReleaseBranch;
pub use release::{FunctionExample, FunctionRelease};
pub use tag::{ReleaseTag, TagPattern};
pub use version::{MinorVersion, PatchVersion};
