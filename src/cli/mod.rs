//! Workflow layer between argument parsing and the changelog engine

pub mod orchestration;

pub use orchestration::{
    default_output_path, run_changelog_workflow, ChangelogWorkflowArgs, WorkflowResult,
};
