/// Proposal template loading
///
/// Extracts the prompt body from a markdown template and rewrites the
/// handlebars-style placeholders that the n8n expression runtime cannot resolve.

/// Delimiter line of the front-matter block
const FRONT_MATTER_MARKER: &str = "---";

/// The closing marker is searched from this UTF-16 offset on, skipping the opening one
const FRONT_MATTER_SEARCH_START: usize = 4;

/// Literal rewrites applied to the body, in order
const PLACEHOLDER_REWRITES: &[(&str, &str)] = &[
    ("{{project_type}}", "challenge"),
    ("{{specific_tech}}", "solution"),
    ("{{#if urgent}}", ""),
    ("{{/if}}", ""),
    (
        "Ready to start immediately - I can have the initial setup running within 24 hours.",
        "Ready to start immediately - I can have the initial setup running within 24 hours if needed.",
    ),
];

/// Return the template body with any front-matter removed, trimmed
///
/// The body starts after the first `---` found at or after offset 4. Without one,
/// the whole content is the body.
pub fn extract_body(content: &str) -> &str {
    let start = utf16_offset_to_byte(content, FRONT_MATTER_SEARCH_START);
    match content[start..].find(FRONT_MATTER_MARKER) {
        Some(offset) => content[start + offset + FRONT_MATTER_MARKER.len()..].trim(),
        None => content.trim(),
    }
}

/// Byte index of the first char starting at or after `units` UTF-16 code units
fn utf16_offset_to_byte(content: &str, units: usize) -> usize {
    let mut seen = 0;
    for (idx, ch) in content.char_indices() {
        if seen >= units {
            return idx;
        }
        seen += ch.len_utf16();
    }
    content.len()
}

/// Replace every occurrence of each known placeholder
pub fn normalize_placeholders(body: &str) -> String {
    PLACEHOLDER_REWRITES
        .iter()
        .fold(body.to_string(), |acc, &(from, to)| acc.replace(from, to))
}

/// Front-matter stripping followed by placeholder normalization
pub fn prepare_prompt(content: &str) -> String {
    normalize_placeholders(extract_body(content))
}
