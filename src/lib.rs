/// n8n prompt patcher: inject a proposal template into an n8n workflow export
///
/// This library rewrites the request body of the AI proposal node in an n8n
/// workflow, building it from a markdown template and the configured model parameters.

// Model parameters, caller options and fixed defaults
pub mod config;

// Tagged failure kinds
pub mod error;

// Template preparation and request body synthesis
pub mod prompt;

// Workflow document model and file persistence
pub mod workflow;

// End-to-end patch pipeline
pub mod patcher;

// Re-export commonly used types for external consumers
pub use config::{PatchOptions, PromptConfig};
pub use error::PatchError;
pub use patcher::{patch_workflow, update_workflow, PatchReport, PatchRequest};
pub use workflow::{NodeSelector, WorkflowDocument};
