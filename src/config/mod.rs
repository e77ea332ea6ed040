/// Configuration management for the prompt patcher
///
/// Holds the model parameters spliced into the generated request body, the
/// caller-supplied overrides, and the fixed defaults for paths and the target node.

use crate::error::{PatchError, Result};
use serde::Serialize;

/// Template read when no path is given on the command line
pub const DEFAULT_TEMPLATE_PATH: &str = "aws-expert.md";

/// Workflow export patched when no path is given on the command line
pub const DEFAULT_WORKFLOW_PATH: &str = "Upwork AI Fetching.json";

/// Name of the HTTP node that sends the proposal request
pub const DEFAULT_NODE_NAME: &str = "Generate AI Proposal (HTTP)";

/// Id of the HTTP node that sends the proposal request
pub const DEFAULT_NODE_ID: &str = "generate-ai-proposal";

/// Model parameters written into the node's request body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptConfig {
    /// Chat completion model (e.g., "gpt-5")
    pub model: String,
    /// Sampling temperature
    pub temperature: f64,
    /// Sent as `max_completion_tokens`
    pub max_tokens: u32,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            model: "gpt-5".to_string(),
            temperature: 1.0,
            max_tokens: 400,
        }
    }
}

/// Partial configuration supplied by the caller
///
/// Every field that is `Some` wins over the default, zero and empty values included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchOptions {
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
}

impl PromptConfig {
    /// Merge caller options over the defaults
    pub fn from_options(options: &PatchOptions) -> Self {
        let defaults = Self::default();
        Self {
            model: options.model.clone().unwrap_or(defaults.model),
            temperature: options.temperature.unwrap_or(defaults.temperature),
            max_tokens: options.max_tokens.unwrap_or(defaults.max_tokens),
        }
    }

    /// Values must render as JavaScript number literals in the request body
    pub fn validate(&self) -> Result<()> {
        if !self.temperature.is_finite() {
            return Err(PatchError::InvalidConfig(format!(
                "temperature must be a finite number, got {}",
                self.temperature
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_no_options() {
        let config = PromptConfig::from_options(&PatchOptions::default());
        assert_eq!(config.model, "gpt-5");
        assert_eq!(config.temperature, 1.0);
        assert_eq!(config.max_tokens, 400);
    }

    #[test]
    fn test_caller_options_win() {
        let options = PatchOptions {
            model: Some("gpt-4o".to_string()),
            temperature: Some(0.7),
            max_tokens: Some(800),
        };
        let config = PromptConfig::from_options(&options);
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_tokens, 800);
    }

    #[test]
    fn test_zero_values_are_not_replaced_by_defaults() {
        let options = PatchOptions {
            model: Some(String::new()),
            temperature: Some(0.0),
            max_tokens: Some(0),
        };
        let config = PromptConfig::from_options(&options);
        assert_eq!(config.model, "");
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.max_tokens, 0);
    }

    #[test]
    fn test_partial_options() {
        let options = PatchOptions {
            temperature: Some(0.2),
            ..Default::default()
        };
        let config = PromptConfig::from_options(&options);
        assert_eq!(config.model, "gpt-5");
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.max_tokens, 400);
    }

    #[test]
    fn test_non_finite_temperature_is_rejected() {
        for temperature in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let config = PromptConfig::from_options(&PatchOptions {
                temperature: Some(temperature),
                ..Default::default()
            });
            assert!(matches!(config.validate(), Err(PatchError::InvalidConfig(_))));
        }
        assert!(PromptConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_serializes_camel_case() {
        let value = serde_json::to_value(PromptConfig::default()).unwrap();
        assert_eq!(value["maxTokens"], 400);
        assert_eq!(value["model"], "gpt-5");
    }
}
