// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversions between registry types and MCP protocol types.

use std::sync::Arc;

use folio_core::ToolOutcome;
use folio_skill::Tool;
use rmcp::model::{CallToolResult, Content, JsonObject};

/// Describe a registered tool as an MCP tool definition.
pub fn to_mcp_tool(tool: &dyn Tool) -> rmcp::model::Tool {
    rmcp::model::Tool::new(
        tool.name().to_string(),
        tool.description().to_string(),
        Arc::new(schema_object(tool.parameters_schema())),
    )
}

/// MCP requires an object schema; anything else is replaced by an empty object schema.
fn schema_object(schema: serde_json::Value) -> JsonObject {
    match schema {
        serde_json::Value::Object(map) => map,
        _ => {
            let mut map = JsonObject::new();
            map.insert("type".into(), serde_json::Value::String("object".into()));
            map
        }
    }
}

/// Wrap a tool outcome as a single text content item.
pub fn to_call_result(outcome: ToolOutcome) -> CallToolResult {
    match outcome {
        ToolOutcome::Success { message } => CallToolResult::success(vec![Content::text(message)]),
        ToolOutcome::Failure { error } => CallToolResult::error(vec![Content::text(error)]),
    }
}

/// MCP arguments arrive as an optional object; a missing one becomes `null`.
pub fn arguments_to_value(arguments: Option<JsonObject>) -> serde_json::Value {
    arguments
        .map(serde_json::Value::Object)
        .unwrap_or(serde_json::Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|c| c.as_text().map(|t| t.text.clone()))
            .collect()
    }

    #[test]
    fn success_maps_to_non_error_result() {
        let result = to_call_result(ToolOutcome::success("Text appended"));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text_of(&result), "Text appended");
    }

    #[test]
    fn failure_maps_to_error_result() {
        let result = to_call_result(ToolOutcome::failure("unknown tool `x`"));
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "unknown tool `x`");
    }

    #[test]
    fn missing_arguments_become_null() {
        assert!(arguments_to_value(None).is_null());

        let mut args = JsonObject::new();
        args.insert("text".into(), serde_json::json!("hi"));
        assert_eq!(
            arguments_to_value(Some(args)),
            serde_json::json!({"text": "hi"})
        );
    }

    #[test]
    fn non_object_schema_is_replaced() {
        let map = schema_object(serde_json::json!(true));
        assert_eq!(map.get("type"), Some(&serde_json::json!("object")));
    }
}
