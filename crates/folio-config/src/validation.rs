// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::FolioConfig;

/// Log levels accepted by `server.log_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every error instead of stopping at the first one.
pub fn validate_config(config: &FolioConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.server.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "server.log_level `{}` is not one of {}",
                config.server.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.server.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.name must not be empty".to_string(),
        });
    }

    for (key, value) in [
        ("script.interpreter", &config.script.interpreter),
        ("script.eval_flag", &config.script.eval_flag),
        ("script.application", &config.script.application),
    ] {
        if value.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("{key} must not be empty"),
            });
        }
    }

    let mut seen = HashSet::new();
    for name in &config.tools.disabled {
        if !seen.insert(name.as_str()) {
            errors.push(ConfigError::Validation {
                message: format!("duplicate tool name `{name}` in tools.disabled"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
