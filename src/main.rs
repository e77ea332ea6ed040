/// n8n prompt patcher
///
/// Command-line entry point. Parses the template/workflow paths and model options,
/// initializes logging and runs a single patch.

use anyhow::Result;
use clap::Parser;
use n8n_prompt_patcher::{
    config::{DEFAULT_NODE_ID, DEFAULT_NODE_NAME, DEFAULT_TEMPLATE_PATH, DEFAULT_WORKFLOW_PATH},
    update_workflow, NodeSelector, PatchOptions, PatchRequest,
};
use std::{path::PathBuf, process::ExitCode};
use tracing_subscriber::fmt::writer::MakeWriterExt;

#[derive(Parser)]
#[command(name = "n8n-prompt-patcher")]
#[command(about = "Inject a proposal template into the AI node of an n8n workflow export")]
struct Cli {
    /// Markdown template providing the proposal body
    #[arg(default_value = DEFAULT_TEMPLATE_PATH)]
    template: PathBuf,

    /// n8n workflow export to patch in place
    #[arg(default_value = DEFAULT_WORKFLOW_PATH)]
    workflow: PathBuf,

    /// Chat completion model (default: gpt-5)
    #[arg(long, env = "PROMPT_PATCHER_MODEL")]
    model: Option<String>,

    /// Sampling temperature (default: 1)
    #[arg(long, env = "PROMPT_PATCHER_TEMPERATURE", value_parser = parse_temperature)]
    temperature: Option<f64>,

    /// Completion token limit (default: 400)
    #[arg(long, env = "PROMPT_PATCHER_MAX_TOKENS")]
    max_tokens: Option<u32>,

    /// Name of the node to patch
    #[arg(long, default_value = DEFAULT_NODE_NAME)]
    node_name: String,

    /// Id of the node to patch
    #[arg(long, default_value = DEFAULT_NODE_ID)]
    node_id: String,
}

/// Temperatures must be finite to be spliced into the request expression
fn parse_temperature(value: &str) -> Result<f64> {
    let temperature: f64 = value
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid temperature {:?}: {}", value, e))?;
    if !temperature.is_finite() {
        return Err(anyhow::anyhow!("Temperature must be a finite number, got {}", value));
    }
    Ok(temperature)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Progress goes to stdout, warnings and errors to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .without_time()
        .with_writer(std::io::stderr.with_max_level(tracing::Level::WARN).or_else(std::io::stdout))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::info!("Updating workflow with template: {}", cli.template.display());

    let request = PatchRequest {
        template_path: cli.template,
        workflow_path: cli.workflow,
        options: PatchOptions {
            model: cli.model,
            temperature: cli.temperature,
            max_tokens: cli.max_tokens,
        },
        selector: NodeSelector {
            name: cli.node_name,
            id: cli.node_id,
        },
    };

    match update_workflow(&request) {
        Some(report) => {
            tracing::debug!(
                "Patch report: {}",
                serde_json::to_string(&report).unwrap_or_else(|_| "invalid_json".to_string())
            );
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}
