// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The uniform result every tool handler returns.
//!
//! On the wire an outcome is `{"status": "success" | "error", "output": "..."}`.

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Outcome of a single tool invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum ToolOutcome {
    /// The tool ran and the script succeeded.
    #[serde(rename = "success")]
    Success {
        #[serde(rename = "output")]
        message: String,
    },
    /// The tool rejected its parameters or the script failed.
    #[serde(rename = "error")]
    Failure {
        #[serde(rename = "output")]
        error: String,
    },
}

impl ToolOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The text carried by either variant.
    pub fn output(&self) -> &str {
        match self {
            Self::Success { message } => message,
            Self::Failure { error } => error,
        }
    }
}

impl From<FolioError> for ToolOutcome {
    fn from(err: FolioError) -> Self {
        Self::failure(err.to_string())
    }
}
