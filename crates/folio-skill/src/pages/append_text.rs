// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `append_text`: add text to the end of the frontmost document.

use async_trait::async_trait;
use folio_core::ToolOutcome;
use folio_script::{Literal, Script, ScriptHost, Statement};
use serde::Deserialize;

use crate::tool::{parse_params, Tool};

pub const TOOL_NAME: &str = "append_text";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AppendTextParams {
    text: String,
}

/// Appends to the body text of document 1.
///
/// Pages has no append primitive, so the script reads the body and writes it
/// back with the new text concatenated.
pub struct AppendTextTool {
    host: ScriptHost,
}

impl AppendTextTool {
    pub fn new(host: ScriptHost) -> Self {
        Self { host }
    }

    fn script(&self, params: &AppendTextParams) -> Script {
        self.host
            .application()
            .then(Statement::EnsureDocument)
            .then(Statement::tell_document(
                1,
                vec![Statement::AppendBodyText(Literal::new(&params.text))],
            ))
    }
}

#[async_trait]
impl Tool for AppendTextTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Append text to the end of the active Pages document"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "Text to append"
                }
            },
            "required": ["text"],
            "additionalProperties": false
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> ToolOutcome {
        let params: AppendTextParams = match parse_params(input) {
            Ok(params) => params,
            Err(err) => return err.into(),
        };
        self.host
            .run_with_message(&self.script(&params), "Text appended")
            .await
    }
}
