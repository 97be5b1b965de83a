//! Command-line workflow, independent of argument parsing

pub mod orchestration;

pub use orchestration::{run_update_workflow, UpdateWorkflowArgs, WorkflowResult};
