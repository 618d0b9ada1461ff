// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! AppleScript generation and execution for the Folio tool server.
//!
//! - [`sanitize()`] and [`Literal`] escape text for string literals
//! - [`Script`] and [`Statement`] compose scripts from fixed templates
//! - [`ScriptExecutor`] and [`ProcessExecutor`] run them through `osascript`
//! - [`ScriptHost`] ties the three together for tool handlers

pub mod executor;
pub mod host;
pub mod sanitize;
pub mod script;

pub use executor::{ProcessExecutor, ScriptExecutor, ScriptInvocation};
pub use host::ScriptHost;
pub use sanitize::{sanitize, Literal};
pub use script::{ParagraphPosition, PropertyList, PropertyValue, Script, Statement, Target};
