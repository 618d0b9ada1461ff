// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Folio tool server.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup.

use serde::{Deserialize, Serialize};

/// Top-level Folio configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment variable overrides.
/// Every section is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FolioConfig {
    /// MCP server identity and logging.
    #[serde(default)]
    pub server: ServerConfig,

    /// Script interpreter and target application.
    #[serde(default)]
    pub script: ScriptConfig,

    /// Tool exposure settings.
    #[serde(default)]
    pub tools: ToolsConfig,
}

/// Server identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Name reported to MCP clients during initialization.
    #[serde(default = "default_server_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_server_name() -> String {
    "folio".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// How generated scripts are executed.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptConfig {
    /// Interpreter binary, resolved through `PATH`.
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    /// Flag that makes the interpreter evaluate the next argument as a script.
    #[serde(default = "default_eval_flag")]
    pub eval_flag: String,

    /// Application every script is addressed to.
    #[serde(default = "default_application")]
    pub application: String,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            eval_flag: default_eval_flag(),
            application: default_application(),
        }
    }
}

fn default_interpreter() -> String {
    "osascript".to_string()
}

fn default_eval_flag() -> String {
    "-e".to_string()
}

fn default_application() -> String {
    "Pages".to_string()
}

/// Tool exposure configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsConfig {
    /// Tool names that are not registered at startup.
    #[serde(default)]
    pub disabled: Vec<String>,
}
