// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pages document tools.
//!
//! Every tool builds one script against the configured application and runs
//! it through the shared [`ScriptHost`].

pub mod append_text;
pub mod create_document;
pub mod format_paragraph;
pub mod get_document_text;
pub mod insert_paragraph;
pub mod insert_text;

pub use append_text::AppendTextTool;
pub use create_document::CreateDocumentTool;
pub use format_paragraph::FormatParagraphTool;
pub use get_document_text::{GetDocumentTextTool, NO_DOCUMENT};
pub use insert_paragraph::InsertParagraphTool;
pub use insert_text::InsertTextTool;

use std::sync::Arc;

use folio_core::FolioError;
use folio_script::ScriptHost;
use tracing::debug;

use crate::tool::{Tool, ToolRegistry};

/// Catalog names in registration order.
pub const TOOL_NAMES: [&str; 6] = [
    insert_text::TOOL_NAME,
    append_text::TOOL_NAME,
    create_document::TOOL_NAME,
    format_paragraph::TOOL_NAME,
    insert_paragraph::TOOL_NAME,
    get_document_text::TOOL_NAME,
];

/// Builds the full catalog, in [`TOOL_NAMES`] order, sharing one host.
pub fn pages_tools(host: &ScriptHost) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(InsertTextTool::new(host.clone())),
        Arc::new(AppendTextTool::new(host.clone())),
        Arc::new(CreateDocumentTool::new(host.clone())),
        Arc::new(FormatParagraphTool::new(host.clone())),
        Arc::new(InsertParagraphTool::new(host.clone())),
        Arc::new(GetDocumentTextTool::new(host.clone())),
    ]
}

/// Registers the Pages tools, skipping any name in `disabled`.
///
/// Returns how many tools were registered.
pub fn register_pages_tools(
    registry: &mut ToolRegistry,
    host: &ScriptHost,
    disabled: &[String],
) -> Result<usize, FolioError> {
    let mut registered = 0;
    for tool in pages_tools(host) {
        if disabled.iter().any(|name| name == tool.name()) {
            debug!(tool = tool.name(), "tool disabled by configuration");
            continue;
        }
        registry.register(tool)?;
        registered += 1;
    }
    Ok(registered)
}
