/// Failure kinds of a patch run
///
/// Every kind is terminal for the run. `update_workflow` collapses them into a
/// logged `None`, `patch_workflow` hands them to the caller.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("Template file not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("Workflow file not found: {}", .0.display())]
    WorkflowNotFound(PathBuf),

    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid workflow JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid workflow: {0}")]
    InvalidWorkflow(String),

    #[error("Could not find \"{0}\" node in workflow")]
    NodeNotFound(String),
}

pub type Result<T> = std::result::Result<T, PatchError>;
