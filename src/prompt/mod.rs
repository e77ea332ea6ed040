/// Prompt Assembly Layer
///
/// Turns a markdown proposal template into the request body expression stored on
/// the workflow's AI node:
/// - Front-matter stripping and placeholder normalization
/// - Template-literal escaping and `jsonBody` synthesis

// Template body extraction and placeholder rewrites
pub mod template;

// n8n request body expression builder
pub mod request;

pub use request::{build_json_body, escape_template_literal};
pub use template::{extract_body, normalize_placeholders, prepare_prompt};
