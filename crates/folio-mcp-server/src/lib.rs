// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! MCP server for Folio.
//!
//! [`FolioMcpHandler`] implements rmcp's `ServerHandler` over a shared
//! [`ToolRegistry`](folio_skill::ToolRegistry). [`serve_stdio`] runs it on
//! stdin/stdout until the client disconnects.

pub mod bridge;
pub mod handler;

pub use handler::{serve_stdio, FolioMcpHandler};
