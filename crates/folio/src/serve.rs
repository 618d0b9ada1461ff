// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `folio serve` command implementation.

use std::sync::Arc;

use folio_config::FolioConfig;
use folio_core::FolioError;
use folio_mcp_server::FolioMcpHandler;
use folio_skill::ToolRegistry;

/// Serve `registry` over MCP on stdio until the client disconnects.
pub async fn run_serve(config: &FolioConfig, registry: ToolRegistry) -> Result<(), FolioError> {
    let handler = FolioMcpHandler::new(
        Arc::new(registry),
        config.server.name.clone(),
        env!("CARGO_PKG_VERSION"),
    );
    folio_mcp_server::serve_stdio(handler).await
}
