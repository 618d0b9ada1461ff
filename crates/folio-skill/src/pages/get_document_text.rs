// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `get_document_text`: read the body of document 1.

use async_trait::async_trait;
use folio_core::ToolOutcome;
use folio_script::{Literal, Script, ScriptHost, Statement};
use serde::Deserialize;

use crate::tool::{parse_params, Tool};

pub const TOOL_NAME: &str = "get_document_text";

/// Returned as a success when Pages has no open document.
pub const NO_DOCUMENT: &str = "No document open";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GetDocumentTextParams {}

pub struct GetDocumentTextTool {
    host: ScriptHost,
}

impl GetDocumentTextTool {
    pub fn new(host: ScriptHost) -> Self {
        Self { host }
    }

    fn script(&self) -> Script {
        self.host
            .application()
            .then(Statement::ReturnIfNoDocument(Literal::new(NO_DOCUMENT)))
            .then(Statement::tell_document(1, vec![Statement::ReturnBodyText]))
    }
}

#[async_trait]
impl Tool for GetDocumentTextTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Get the full text of the active Pages document"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": [],
            "additionalProperties": false
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> ToolOutcome {
        if let Err(err) = parse_params::<GetDocumentTextParams>(input) {
            return err.into();
        }
        self.host.run(&self.script()).await
    }
}
