// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `insert_paragraph`: add a paragraph at the start, the end, or after paragraph N.

use async_trait::async_trait;
use folio_core::ToolOutcome;
use folio_script::{Literal, ParagraphPosition, Script, ScriptHost, Statement};
use serde::Deserialize;

use crate::tool::{parse_params, Tool};

pub const TOOL_NAME: &str = "insert_paragraph";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct InsertParagraphParams {
    text: String,
    position: String,
}

pub struct InsertParagraphTool {
    host: ScriptHost,
}

impl InsertParagraphTool {
    pub fn new(host: ScriptHost) -> Self {
        Self { host }
    }

    fn script(&self, text: &str, position: ParagraphPosition) -> Script {
        self.host
            .application()
            .then(Statement::EnsureDocument)
            .then(Statement::tell_document(
                1,
                vec![Statement::MakeParagraph {
                    position,
                    data: Literal::new(text),
                }],
            ))
    }
}

#[async_trait]
impl Tool for InsertParagraphTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Insert a new paragraph into the active Pages document"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "Paragraph text"
                },
                "position": {
                    "type": "string",
                    "description":
                        "\"beginning\", \"end\", or \"after <n>\" to insert after paragraph n"
                }
            },
            "required": ["text", "position"],
            "additionalProperties": false
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> ToolOutcome {
        let params: InsertParagraphParams = match parse_params(input) {
            Ok(params) => params,
            Err(err) => return err.into(),
        };
        let position: ParagraphPosition = match params.position.parse() {
            Ok(position) => position,
            Err(err) => return ToolOutcome::from(err),
        };

        self.host
            .run_with_message(&self.script(&params.text, position), "Paragraph inserted")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_test_utils::MockExecutor;

    fn tool() -> (InsertParagraphTool, MockExecutor) {
        let mock = MockExecutor::new();
        let host = mock.host();
        (InsertParagraphTool::new(host), mock)
    }

    #[tokio::test]
    async fn after_n_targets_that_paragraph() {
        let (tool, mock) = tool();
        let outcome = tool
            .invoke(serde_json::json!({"text": "Middle", "position": "after 3"}))
            .await;

        assert_eq!(outcome, ToolOutcome::success("Paragraph inserted"));
        assert_eq!(mock.call_count().await, 1);
        let script = mock.last_script().await.unwrap();
        assert!(script.contains(r#"make new paragraph after paragraph 3 with data "Middle""#));
    }

    #[tokio::test]
    async fn beginning_and_end() {
        let (tool, mock) = tool();
        tool.invoke(serde_json::json!({"text": "Top", "position": "beginning"}))
            .await;
        assert!(mock
            .last_script()
            .await
            .unwrap()
            .contains(r#"make new paragraph at beginning with data "Top""#));

        tool.invoke(serde_json::json!({"text": "Bottom", "position": "end"}))
            .await;
        assert!(mock
            .last_script()
            .await
            .unwrap()
            .contains(r#"make new paragraph at end with data "Bottom""#));
    }

    #[tokio::test]
    async fn creates_document_when_none_open() {
        let (tool, mock) = tool();
        tool.invoke(serde_json::json!({"text": "x", "position": "end"}))
            .await;
        assert!(mock
            .last_script()
            .await
            .unwrap()
            .contains("if not (exists document 1) then make new document"));
    }

    #[tokio::test]
    async fn bad_positions_fail_without_executing() {
        let (tool, mock) = tool();
        for position in ["after abc", "after 0", "after", "middle", "End", "after -2"] {
            let outcome = tool
                .invoke(serde_json::json!({"text": "x", "position": position}))
                .await;
            assert!(!outcome.is_success(), "position {position:?} should fail");
            assert!(outcome.output().contains("invalid position"));
        }
        assert_eq!(mock.call_count().await, 0);
    }
}
