// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests for the config → registry → tool → script pipeline.
//!
//! Every test uses a `MockExecutor`, so no interpreter is spawned.

use std::io::Write;
use std::sync::Arc;

use folio_config::FolioConfig;
use folio_core::ToolOutcome;
use folio_mcp_server::FolioMcpHandler;
use folio_script::ScriptHost;
use folio_skill::{register_pages_tools, ToolRegistry};
use folio_test_utils::MockExecutor;

fn registry_for(config: &FolioConfig, mock: &MockExecutor) -> ToolRegistry {
    let host = ScriptHost::new(Arc::new(mock.clone()), &config.script);
    let mut registry = ToolRegistry::new();
    register_pages_tools(&mut registry, &host, &config.tools.disabled).unwrap();
    registry
}

fn defaults() -> FolioConfig {
    folio_config::load_and_validate_str("").unwrap()
}

// ---- Configured interpreter and application reach the executor ----

#[tokio::test]
async fn configured_script_settings_flow_into_invocation() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[script]\n\
         interpreter = \"/usr/local/bin/osascript\"\n\
         eval_flag = \"-e\"\n\
         application = \"Pages Beta\"\n"
    )
    .unwrap();
    let config = folio_config::load_and_validate_path(file.path()).unwrap();

    let mock = MockExecutor::new();
    let registry = registry_for(&config, &mock);
    let outcome = registry
        .call("insert_text", serde_json::json!({"text": "Hello"}))
        .await;
    assert!(outcome.is_success());

    let invocation = mock.invocations().await.pop().unwrap();
    assert_eq!(invocation.command, "/usr/local/bin/osascript");
    assert_eq!(invocation.args()[0], "-e");
    assert!(invocation.script.starts_with("tell application \"Pages Beta\"\n"));
    assert!(invocation.script.ends_with("end tell"));
}

// ---- Disabled tools are not callable ----

#[tokio::test]
async fn disabled_tool_is_unknown() {
    let config =
        folio_config::load_and_validate_str("[tools]\ndisabled = [\"insert_text\"]\n").unwrap();
    let mock = MockExecutor::new();
    let registry = registry_for(&config, &mock);

    let outcome = registry
        .call("insert_text", serde_json::json!({"text": "x"}))
        .await;
    assert_eq!(outcome, ToolOutcome::failure("unknown tool `insert_text`"));
    assert_eq!(mock.call_count().await, 0);
}

// ---- Schema gate runs before any handler ----

#[tokio::test]
async fn schema_violations_never_reach_the_executor() {
    let mock = MockExecutor::new();
    let registry = registry_for(&defaults(), &mock);

    for (tool, input) in [
        ("insert_text", serde_json::json!({})),
        ("append_text", serde_json::json!({"text": ["a"]})),
        ("create_document", serde_json::json!({"title": "x"})),
        ("format_paragraph", serde_json::json!({"paragraph": 0, "bold": true})),
        ("format_paragraph", serde_json::json!({"paragraph": 1, "alignment": "middle"})),
        ("insert_paragraph", serde_json::json!({"text": "x"})),
        ("get_document_text", serde_json::json!({"verbose": true})),
    ] {
        let outcome = registry.call(tool, input).await;
        assert!(!outcome.is_success(), "{tool} accepted bad input");
        assert!(outcome.output().starts_with("invalid parameters"));
    }
    assert_eq!(mock.call_count().await, 0);
}

// ---- A writing session through the registry ----

#[tokio::test]
async fn create_write_format_read_session() {
    let mock = MockExecutor::new();
    let registry = registry_for(&defaults(), &mock);

    let steps = [
        ("create_document", serde_json::json!({"template": "Blank"})),
        ("insert_text", serde_json::json!({"text": "Title"})),
        ("insert_paragraph", serde_json::json!({"text": "Body", "position": "end"})),
        ("format_paragraph", serde_json::json!({"paragraph": 1, "bold": true, "fontSize": 24})),
        ("append_text", serde_json::json!({"text": "\nThe end"})),
    ];
    for (tool, input) in steps {
        assert!(registry.call(tool, input).await.is_success(), "{tool} failed");
    }

    mock.push_stdout("Title\nBody\nThe end").await;
    let text = registry
        .call("get_document_text", serde_json::Value::Null)
        .await;
    assert_eq!(text, ToolOutcome::success("Title\nBody\nThe end"));

    let scripts: Vec<String> = mock
        .invocations()
        .await
        .into_iter()
        .map(|i| i.script)
        .collect();
    assert_eq!(scripts.len(), 6);
    assert!(scripts[0].contains("with properties {template:\"Blank\"}"));
    assert!(scripts[2].contains("make new paragraph at end with data \"Body\""));
    assert!(scripts[3].contains("{font size:24, bold:true}"));
    assert!(scripts[4].contains("body text & \"\\nThe end\""));
    assert!(scripts[5].contains("return body text"));
}

// ---- Runtime failures surface as error results over MCP ----

#[tokio::test]
async fn mcp_handler_reports_application_errors() {
    let mock = MockExecutor::new();
    mock.push_failure("Pages got an error: Can't get paragraph 9 of document 1.")
        .await;
    let handler = FolioMcpHandler::new(
        Arc::new(registry_for(&defaults(), &mock)),
        "folio",
        "test",
    );

    let result = handler
        .dispatch(
            "format_paragraph",
            serde_json::json!({"paragraph": 9, "italic": true}),
        )
        .await;
    assert_eq!(result.is_error, Some(true));
    assert_eq!(mock.call_count().await, 1);
}
