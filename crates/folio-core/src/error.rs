// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Folio tool server.

use thiserror::Error;

/// The primary error type used across script construction, execution and the tool registry.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Tool parameters were malformed or insufficient. Raised before any script runs.
    #[error("invalid parameters: {message}")]
    Validation { message: String },

    /// The script interpreter could not be started.
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// The interpreter ran but exited unsuccessfully.
    ///
    /// AppleScript runtime errors (application not running, permission denied,
    /// missing paragraph) all land here with the interpreter's stderr as the message.
    #[error("script execution failed: {message}")]
    Execution {
        message: String,
        exit_code: Option<i32>,
    },

    /// A tool with the same name is already registered.
    #[error("tool `{name}` is already registered")]
    DuplicateTool { name: String },

    /// No tool with this name is registered.
    #[error("unknown tool `{name}`")]
    UnknownTool { name: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl FolioError {
    /// Shorthand for a [`FolioError::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
