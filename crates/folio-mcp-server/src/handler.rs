// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! rmcp `ServerHandler` backed by the tool registry.

use std::sync::Arc;

use folio_core::FolioError;
use folio_skill::ToolRegistry;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler, ServiceExt};
use tracing::{debug, info};

use crate::bridge;

const INSTRUCTIONS: &str = "Tools for editing Apple Pages documents. \
Document-editing tools create a document when none is open; \
get_document_text reports \"No document open\" instead.";

/// Serves every tool in a [`ToolRegistry`] over MCP.
#[derive(Clone)]
pub struct FolioMcpHandler {
    registry: Arc<ToolRegistry>,
    name: String,
    version: String,
}

impl FolioMcpHandler {
    pub fn new(
        registry: Arc<ToolRegistry>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            name: name.into(),
            version: version.into(),
        }
    }

    /// MCP definitions for every registered tool, in registration order.
    pub fn mcp_tools(&self) -> Vec<rmcp::model::Tool> {
        self.registry
            .tools()
            .map(|tool| bridge::to_mcp_tool(tool.as_ref()))
            .collect()
    }

    /// Route one call through the registry.
    pub async fn dispatch(&self, name: &str, arguments: serde_json::Value) -> CallToolResult {
        let outcome = self.registry.call(name, arguments).await;
        debug!(tool = name, success = outcome.is_success(), "tool call finished");
        bridge::to_call_result(outcome)
    }
}

impl ServerHandler for FolioMcpHandler {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name.clone(),
                version: self.version.clone(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.mcp_tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = bridge::arguments_to_value(request.arguments);
        Ok(self.dispatch(&request.name, arguments).await)
    }
}

/// Run the handler on stdin/stdout until the client closes the connection.
pub async fn serve_stdio(handler: FolioMcpHandler) -> Result<(), FolioError> {
    info!(
        server = %handler.name,
        tools = handler.registry.len(),
        "MCP server listening on stdio"
    );
    let service = handler
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| FolioError::Internal(format!("MCP initialization failed: {e}")))?;
    let reason = service
        .waiting()
        .await
        .map_err(|e| FolioError::Internal(format!("MCP server task failed: {e}")))?;
    info!(reason = ?reason, "MCP server stopped");
    Ok(())
}
