/// Request body synthesis for the proposal HTTP node
///
/// Builds the n8n expression stored in the node's `jsonBody` parameter. The expression
/// is evaluated by n8n for every job item: it interpolates the `$json` job fields into
/// a chat completion request whose user message wraps the proposal template.

use crate::config::PromptConfig;

/// Persona given to the model as the system message
const SYSTEM_MESSAGE: &str = "You are a professional Upwork proposal writer specializing in AWS and DevOps projects. Always use the exact template provided in the user message for every proposal, adapting it to match specific job requirements while maintaining the core message and personality. Keep all proposals EXACTLY under 2000 characters.";

/// Escape a string for embedding inside a JavaScript template literal
///
/// Backticks would close the literal and `$` could open an interpolation.
pub fn escape_template_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '`' || ch == '$' {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Build the `jsonBody` expression for the given prompt and model parameters
pub fn build_json_body(prompt: &str, config: &PromptConfig) -> String {
    format!(
        r#"={{{{ JSON.stringify({{
  model: '{model}',
  messages: [
    {{
      role: 'system',
      content: '{system}'
    }},
    {{
      role: 'user',
      content: `Generate a winning Upwork proposal using this EXACT template for the job:

TEMPLATE TO USE:
{template}

JOB DETAILS:
Job Title: ${{$json.jobTitle}}
Description: ${{$json.description}}
Required Skills: ${{$json.skills}}
Budget: ${{$json.budgetType}} - $${{$json.budget}}
Experience Level: ${{$json.experienceLevel}}
Proposals: ${{$json.proposals}} (competition level)
Client: ${{$json.company}} | Rating: ${{$json.clientRating}}/5 | ${{$json.totalHires}} hires | ${{$json.clientCountry}}

STRATEGY:
- If <5 proposals and posted <1hr ago: Emphasize immediate availability
- If high budget ($5000+ or $50+/hr): Focus on expertise and ROI
- If many proposals (20+): Differentiate with specific proof/portfolio
- If new client (0 hires): Offer trust-builders like free consultation
- If urgent/ASAP mentioned: Lead with speed of delivery

REQUIREMENTS:
- Use the template above as foundation for EVERY job
- Adapt template to match this specific job requirements
- Keep proposal EXACTLY under 2000 characters
- Do NOT include subject line or greeting prefixes
- Start directly with proposal content
- Maintain professional tone and personality from template

Generate the proposal now.`
    }}
  ],
  temperature: {temperature},
  max_completion_tokens: {max_tokens}
}}) }}}}"#,
        model = config.model,
        system = SYSTEM_MESSAGE,
        template = escape_template_literal(prompt),
        temperature = config.temperature,
        max_tokens = config.max_tokens,
    )
}
