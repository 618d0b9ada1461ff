// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `insert_text`: replace the whole body of the frontmost document.

use async_trait::async_trait;
use folio_core::ToolOutcome;
use folio_script::{Literal, Script, ScriptHost, Statement};
use serde::Deserialize;

use crate::tool::{parse_params, Tool};

pub const TOOL_NAME: &str = "insert_text";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct InsertTextParams {
    text: String,
}

/// Replaces the body text of document 1, creating a document if none is open.
pub struct InsertTextTool {
    host: ScriptHost,
}

impl InsertTextTool {
    pub fn new(host: ScriptHost) -> Self {
        Self { host }
    }

    fn script(&self, params: &InsertTextParams) -> Script {
        self.host
            .application()
            .then(Statement::EnsureDocument)
            .then(Statement::tell_document(
                1,
                vec![Statement::SetBodyText(Literal::new(&params.text))],
            ))
    }
}

#[async_trait]
impl Tool for InsertTextTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Replace the entire text of the active Pages document"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description":
                        "Text that becomes the document body. An empty string clears the document."
                }
            },
            "required": ["text"],
            "additionalProperties": false
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> ToolOutcome {
        let params: InsertTextParams = match parse_params(input) {
            Ok(params) => params,
            Err(err) => return err.into(),
        };
        self.host
            .run_with_message(&self.script(&params), "Document text replaced")
            .await
    }
}
