// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool trait and registry.
//!
//! The [`Tool`] trait is the contract every handler satisfies. The
//! [`ToolRegistry`] keeps tools in registration order, rejects duplicate names,
//! and validates call input against each tool's JSON Schema before the
//! handler sees it.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use folio_core::{FolioError, ToolOutcome};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Unified trait for all tools.
///
/// `invoke` never fails: parameter and execution problems come back as
/// [`ToolOutcome::Failure`].
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the tool's unique name (used for lookup and protocol serialization).
    fn name(&self) -> &str;

    /// Returns a human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// Returns the JSON Schema describing the tool's input parameters.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Invokes the tool with the given JSON input.
    async fn invoke(&self, input: serde_json::Value) -> ToolOutcome;
}

/// Deserialize tool input into a typed parameter struct.
///
/// A `null` input is read as an empty object, so tools without required
/// parameters accept a bare call.
pub fn parse_params<T: DeserializeOwned>(input: serde_json::Value) -> Result<T, FolioError> {
    let input = normalize_input(input);
    serde_json::from_value(input).map_err(|e| FolioError::validation(e.to_string()))
}

fn normalize_input(input: serde_json::Value) -> serde_json::Value {
    if input.is_null() {
        serde_json::Value::Object(serde_json::Map::new())
    } else {
        input
    }
}

struct Entry {
    tool: Arc<dyn Tool>,
    validator: jsonschema::Validator,
}

/// Ordered registry of available tools, indexed by name.
pub struct ToolRegistry {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Creates an empty tool registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Registers a tool under its `name()`.
    ///
    /// Fails if the name is taken or the tool's schema does not compile.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<(), FolioError> {
        let name = tool.name().to_string();
        if self.index.contains_key(&name) {
            return Err(FolioError::DuplicateTool { name });
        }

        let validator = jsonschema::validator_for(&tool.parameters_schema()).map_err(|e| {
            FolioError::Internal(format!("tool `{name}` has an invalid parameter schema: {e}"))
        })?;

        self.index.insert(name, self.entries.len());
        self.entries.push(Entry { tool, validator });
        Ok(())
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.index
            .get(name)
            .map(|&i| Arc::clone(&self.entries[i].tool))
    }

    /// Returns (name, description) pairs in registration order.
    pub fn list(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.tool.name(), e.tool.description()))
            .collect()
    }

    /// Returns every tool in registration order.
    pub fn tools(&self) -> impl Iterator<Item = &Arc<dyn Tool>> {
        self.entries.iter().map(|e| &e.tool)
    }

    /// Returns tool definitions in registration order.
    ///
    /// Each definition has the shape:
    /// ```json
    /// {
    ///   "name": "tool_name",
    ///   "description": "What the tool does",
    ///   "input_schema": { ... JSON Schema ... }
    /// }
    /// ```
    pub fn tool_definitions(&self) -> Vec<serde_json::Value> {
        self.entries
            .iter()
            .map(|e| {
                serde_json::json!({
                    "name": e.tool.name(),
                    "description": e.tool.description(),
                    "input_schema": e.tool.parameters_schema(),
                })
            })
            .collect()
    }

    /// Validates `input` against the tool's schema and invokes it.
    ///
    /// Unknown tools and schema violations are reported as failures without
    /// reaching the handler.
    pub async fn call(&self, name: &str, input: serde_json::Value) -> ToolOutcome {
        let Some(&i) = self.index.get(name) else {
            return FolioError::UnknownTool {
                name: name.to_string(),
            }
            .into();
        };
        let entry = &self.entries[i];
        let input = normalize_input(input);

        let violations: Vec<String> = entry
            .validator
            .iter_errors(&input)
            .map(|e| e.to_string())
            .collect();
        if !violations.is_empty() {
            debug!(tool = name, violations = ?violations, "rejected tool input");
            return FolioError::validation(violations.join("; ")).into();
        }

        debug!(tool = name, "invoking tool");
        entry.tool.invoke(input).await
    }

    /// Returns the number of registered tools.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
