/// Workflow Document Layer
///
/// This module handles the n8n workflow export being patched:
/// - Ordered JSON document with node lookup and `jsonBody` assignment
/// - File persistence: read, timestamped backup, pretty-printed save

// Workflow document and node selector types
pub mod types;

// File read/backup/save operations
pub mod storage;

// Re-export commonly used types
pub use storage::{backup_path, WorkflowFile};
pub use types::{NodeSelector, WorkflowDocument, JSON_BODY_PARAM};
