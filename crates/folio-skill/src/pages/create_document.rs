// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `create_document`: open a new document, optionally from a template and with initial text.

use async_trait::async_trait;
use folio_core::ToolOutcome;
use folio_script::{Literal, PropertyList, PropertyValue, Script, ScriptHost, Statement, Target};
use serde::Deserialize;

use crate::tool::{parse_params, Tool};

pub const TOOL_NAME: &str = "create_document";

/// Script variable bound to the new document.
const NEW_DOC: &str = "newDoc";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CreateDocumentParams {
    /// Initial body text. Empty text is treated as absent.
    #[serde(default)]
    text: Option<String>,
    /// Template name, passed verbatim as the `template` property. Empty is treated as absent.
    #[serde(default)]
    template: Option<String>,
}

impl CreateDocumentParams {
    fn template(&self) -> Option<&str> {
        self.template.as_deref().filter(|t| !t.is_empty())
    }
}

pub struct CreateDocumentTool {
    host: ScriptHost,
}

impl CreateDocumentTool {
    pub fn new(host: ScriptHost) -> Self {
        Self { host }
    }

    fn script(&self, params: &CreateDocumentParams) -> Script {
        let mut properties = PropertyList::new();
        if let Some(template) = params.template() {
            properties.push("template", PropertyValue::Text(Literal::new(template)));
        }

        let mut script = self.host.application().then(Statement::MakeDocument {
            var: NEW_DOC,
            properties,
        });

        if let Some(text) = params.text.as_deref().filter(|t| !t.is_empty()) {
            script = script.then(Statement::Tell {
                target: Target::Variable(NEW_DOC),
                body: vec![Statement::SetBodyText(Literal::new(text))],
            });
        }
        script
    }
}

#[async_trait]
impl Tool for CreateDocumentTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Create a new Pages document with optional initial text and template"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "Initial text for the document (optional)"
                },
                "template": {
                    "type": "string",
                    "description": "Name of the template to use, e.g. \"Blank\" (optional)"
                }
            },
            "required": [],
            "additionalProperties": false
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> ToolOutcome {
        let params: CreateDocumentParams = match parse_params(input) {
            Ok(params) => params,
            Err(err) => return err.into(),
        };
        let message = match params.template() {
            Some(template) => format!("Document created from template '{template}'"),
            None => "Document created".to_string(),
        };
        self.host
            .run_with_message(&self.script(&params), &message)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_test_utils::MockExecutor;

    fn tool() -> (CreateDocumentTool, MockExecutor) {
        let mock = MockExecutor::new();
        let host = mock.host();
        (CreateDocumentTool::new(host), mock)
    }

    #[tokio::test]
    async fn template_becomes_property_clause() {
        let (tool, mock) = tool();
        let outcome = tool
            .invoke(serde_json::json!({"template": "Blank"}))
            .await;

        assert_eq!(
            outcome,
            ToolOutcome::success("Document created from template 'Blank'")
        );
        let script = mock.last_script().await.unwrap();
        assert!(script.contains(
            r#"set newDoc to make new document with properties {template:"Blank"}"#
        ));
        assert!(!script.contains("tell newDoc"));
    }

    #[tokio::test]
    async fn no_template_omits_property_clause_entirely() {
        let (tool, mock) = tool();
        let outcome = tool.invoke(serde_json::json!({})).await;

        assert_eq!(outcome, ToolOutcome::success("Document created"));
        let script = mock.last_script().await.unwrap();
        assert!(script.contains("set newDoc to make new document\n"));
        assert!(!script.contains("with properties"));
        assert!(!script.contains("template"));
    }

    #[tokio::test]
    async fn empty_template_is_treated_as_absent() {
        let (tool, mock) = tool();
        let outcome = tool.invoke(serde_json::json!({"template": ""})).await;

        assert_eq!(outcome, ToolOutcome::success("Document created"));
        let script = mock.last_script().await.unwrap();
        assert!(script.contains("set newDoc to make new document\n"));
        assert!(!script.contains("with properties"));
    }

    #[tokio::test]
    async fn initial_text_is_set_on_the_new_document() {
        let (tool, mock) = tool();
        tool.invoke(serde_json::json!({"text": "Dear \"Sir\"", "template": "Letter"}))
            .await;

        let script = mock.last_script().await.unwrap();
        assert!(script.contains(r#"{template:"Letter"}"#));
        assert!(script.contains("tell newDoc"));
        assert!(script.contains(r#"set body text to "Dear \"Sir\"""#));
    }

    #[tokio::test]
    async fn empty_text_is_treated_as_absent() {
        let (tool, mock) = tool();
        tool.invoke(serde_json::json!({"text": ""})).await;

        let script = mock.last_script().await.unwrap();
        assert!(!script.contains("tell newDoc"));
        assert!(!script.contains("body text"));
    }

    #[tokio::test]
    async fn template_name_is_sanitized() {
        let (tool, mock) = tool();
        tool.invoke(serde_json::json!({"template": "a\"} & (do shell script \"x"}))
            .await;

        let script = mock.last_script().await.unwrap();
        assert!(script.contains(r#"{template:"a\"} & (do shell script \"x"}"#));
    }
}
