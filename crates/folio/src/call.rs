// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `folio tools` and `folio call` command implementations.

use folio_core::{FolioError, ToolOutcome};
use folio_skill::ToolRegistry;

/// Invoke `tool` once with the raw `--params` JSON.
///
/// Unparseable params are reported as a failure, like any other bad input.
pub async fn run_call(registry: &ToolRegistry, tool: &str, params: Option<&str>) -> ToolOutcome {
    let input = match params {
        None => serde_json::Value::Null,
        Some(raw) => match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                return FolioError::validation(format!("--params is not valid JSON: {e}")).into();
            }
        },
    };
    registry.call(tool, input).await
}

/// Pretty `{status, output}` JSON.
pub fn render_outcome(outcome: &ToolOutcome) -> Result<String, FolioError> {
    serde_json::to_string_pretty(outcome)
        .map_err(|e| FolioError::Internal(format!("failed to serialize outcome: {e}")))
}

/// Pretty JSON array of tool definitions.
pub fn render_definitions(registry: &ToolRegistry) -> String {
    format!("{:#}", serde_json::Value::Array(registry.tool_definitions()))
}
