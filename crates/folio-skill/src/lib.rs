// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool trait, registry, and the Pages tool catalog.

pub mod pages;
pub mod tool;

pub use pages::{register_pages_tools, TOOL_NAMES};
pub use tool::{parse_params, Tool, ToolRegistry};
