/// Workflow patching pipeline
///
/// Wires together template preparation, request body synthesis, node lookup and
/// file persistence into a single linear run.

use crate::{
    config::{PatchOptions, PromptConfig, DEFAULT_TEMPLATE_PATH, DEFAULT_WORKFLOW_PATH},
    error::{PatchError, Result},
    prompt::{build_json_body, prepare_prompt},
    workflow::{NodeSelector, WorkflowDocument, WorkflowFile},
};
use serde::Serialize;
use std::path::PathBuf;

/// Inputs of one patch run
#[derive(Debug, Clone)]
pub struct PatchRequest {
    /// Markdown proposal template
    pub template_path: PathBuf,
    /// n8n workflow export, rewritten in place
    pub workflow_path: PathBuf,
    /// Caller overrides for the model parameters
    pub options: PatchOptions,
    /// Node whose `jsonBody` is replaced
    pub selector: NodeSelector,
}

impl Default for PatchRequest {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            workflow_path: PathBuf::from(DEFAULT_WORKFLOW_PATH),
            options: PatchOptions::default(),
            selector: NodeSelector::default(),
        }
    }
}

impl PatchRequest {
    pub fn new(template_path: impl Into<PathBuf>, workflow_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
            workflow_path: workflow_path.into(),
            ..Default::default()
        }
    }

    pub fn with_options(mut self, options: PatchOptions) -> Self {
        self.options = options;
        self
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchReport {
    pub success: bool,
    /// Effective model parameters after merging caller options
    pub config: PromptConfig,
    /// Normalized prompt length in UTF-16 code units
    pub prompt_length: usize,
    pub backup_path: PathBuf,
    /// Name of the node that was patched
    pub node_name: String,
}

/// Run the pipeline, returning the failure kind on error
///
/// Nothing is written unless the template is readable, the workflow parses and the
/// target node is found.
pub fn patch_workflow(request: &PatchRequest) -> Result<PatchReport> {
    if !request.template_path.exists() {
        return Err(PatchError::TemplateNotFound(request.template_path.clone()));
    }
    let workflow_file = WorkflowFile::new(&request.workflow_path);
    if !workflow_file.path().exists() {
        return Err(PatchError::WorkflowNotFound(request.workflow_path.clone()));
    }

    let template = std::fs::read_to_string(&request.template_path).map_err(|source| PatchError::Io {
        action: "read template",
        path: request.template_path.clone(),
        source,
    })?;
    let prompt = prepare_prompt(&template);
    tracing::debug!("📄 Prepared prompt body from {}", request.template_path.display());

    let original = workflow_file.read()?;
    let mut document = WorkflowDocument::parse(&original)?;
    tracing::debug!("📋 Parsed workflow with {} nodes", document.nodes().len());

    let config = PromptConfig::from_options(&request.options);
    config.validate()?;
    let json_body = build_json_body(&prompt, &config);

    let node_name = document.set_json_body(&request.selector, json_body)?;
    tracing::info!("Found node: {}", node_name);

    let backup_path = workflow_file.write_backup(&original, chrono::Utc::now().timestamp_millis())?;
    tracing::info!("✅ Backup saved: {}", backup_path.display());

    workflow_file.save(&document)?;
    tracing::info!("✅ Updated workflow: {}", request.workflow_path.display());

    let prompt_length = prompt.encode_utf16().count();
    tracing::info!("📝 Model: {}", config.model);
    tracing::info!("🌡️ Temperature: {}", config.temperature);
    tracing::info!("🎯 Max tokens: {}", config.max_tokens);
    tracing::info!("📄 System prompt updated from: {}", request.template_path.display());
    tracing::info!("📏 Prompt length: {} characters", prompt_length);

    Ok(PatchReport {
        success: true,
        config,
        prompt_length,
        backup_path,
        node_name,
    })
}

/// Run the pipeline, collapsing every failure into a logged `None`
pub fn update_workflow(request: &PatchRequest) -> Option<PatchReport> {
    match patch_workflow(request) {
        Ok(report) => Some(report),
        Err(e) => {
            tracing::error!("❌ Error: {}", e);
            None
        }
    }
}
