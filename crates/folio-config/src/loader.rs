// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./folio.toml` > `~/.config/folio/folio.toml` >
//! `/etc/folio/folio.toml`, with environment variable overrides via the `FOLIO_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::FolioConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/folio/folio.toml";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "folio.toml";

/// Path of the per-user config file, if a config directory exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("folio").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/folio/folio.toml`
/// 3. `~/.config/folio/folio.toml`
/// 4. `./folio.toml`
/// 5. `FOLIO_*` environment variables
pub fn load_config() -> Result<FolioConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<FolioConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FolioConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<FolioConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FolioConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for the XDG hierarchy, before extraction.
pub fn build_figment() -> Figment {
    let mut figment = Figment::new()
        .merge(Serialized::defaults(FolioConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH));
    if let Some(user) = user_config_path() {
        figment = figment.merge(Toml::file(user));
    }
    figment
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Environment provider with explicit section mapping.
///
/// `FOLIO_SCRIPT_EVAL_FLAG` must become `script.eval_flag`, so only the
/// underscore after the section name is turned into a dot. Keys reach `map`
/// in their original case.
fn env_provider() -> Env {
    Env::prefixed("FOLIO_").map(|key| env_key_to_path(key.as_str()).into())
}

fn env_key_to_path(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    for section in ["server", "script", "tools"] {
        if let Some(field) = key.strip_prefix(section).and_then(|rest| rest.strip_prefix('_')) {
            return format!("{section}.{field}");
        }
    }
    key
}
