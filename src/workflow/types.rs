/// Workflow document types
///
/// An n8n export is handled as an ordered JSON tree rather than a fully typed
/// struct: only `nodes[].name`, `nodes[].id` and `nodes[].parameters.jsonBody` are
/// interpreted, everything else is carried through untouched and in key order.

use crate::error::{PatchError, Result};
use serde_json::Value;

/// Parameter of the HTTP node that holds the outbound request body
pub const JSON_BODY_PARAM: &str = "jsonBody";

/// Identifies the node to patch
///
/// A node matches when its `name` equals `name` OR its `id` equals `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSelector {
    /// Display name of the node (e.g., "Generate AI Proposal (HTTP)")
    pub name: String,
    /// Node id (e.g., "generate-ai-proposal")
    pub id: String,
}

impl Default for NodeSelector {
    fn default() -> Self {
        Self {
            name: crate::config::DEFAULT_NODE_NAME.to_string(),
            id: crate::config::DEFAULT_NODE_ID.to_string(),
        }
    }
}

impl NodeSelector {
    /// Exact string comparison on `name` or `id`; missing fields never match
    pub fn matches(&self, node: &Value) -> bool {
        node.get("name").and_then(Value::as_str) == Some(self.name.as_str())
            || node.get("id").and_then(Value::as_str) == Some(self.id.as_str())
    }
}

/// A parsed workflow export
#[derive(Debug, Clone)]
pub struct WorkflowDocument {
    root: Value,
}

impl WorkflowDocument {
    /// Parse workflow JSON; the root must be an object with a `nodes` array
    pub fn parse(content: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(content)?;

        match root.get("nodes") {
            Some(Value::Array(_)) => Ok(Self { root }),
            Some(_) => Err(PatchError::InvalidWorkflow("`nodes` is not an array".to_string())),
            None => Err(PatchError::InvalidWorkflow("missing `nodes` array".to_string())),
        }
    }

    /// Nodes in declaration order
    pub fn nodes(&self) -> &[Value] {
        self.root
            .get("nodes")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// First node in declaration order matched by the selector
    fn find_node_mut(&mut self, selector: &NodeSelector) -> Option<&mut Value> {
        self.root
            .get_mut("nodes")
            .and_then(Value::as_array_mut)?
            .iter_mut()
            .find(|node| selector.matches(node))
    }

    /// Overwrite `parameters.jsonBody` on the selected node
    ///
    /// Returns the matched node's name for reporting. The node must carry a
    /// `parameters` object; any previous `jsonBody` value is replaced.
    pub fn set_json_body(&mut self, selector: &NodeSelector, body: String) -> Result<String> {
        let node = self
            .find_node_mut(selector)
            .ok_or_else(|| PatchError::NodeNotFound(selector.name.clone()))?;

        let node_name = node
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let parameters = node
            .get_mut("parameters")
            .and_then(Value::as_object_mut)
            .ok_or_else(|| {
                PatchError::InvalidWorkflow(format!("node \"{}\" has no parameters object", node_name))
            })?;

        parameters.insert(JSON_BODY_PARAM.to_string(), Value::String(body));

        Ok(node_name)
    }

    /// Pretty-printed JSON with 2-space indentation
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }
}
