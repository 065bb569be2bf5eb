// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./innkeep.toml` > `~/.config/innkeep/innkeep.toml`
//! > `/etc/innkeep/innkeep.toml` with environment variable overrides via the
//! `INNKEEP_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::InnkeepConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/innkeep/innkeep.toml` (system-wide)
/// 3. `~/.config/innkeep/innkeep.toml` (user XDG config)
/// 4. `./innkeep.toml` (local directory)
/// 5. `INNKEEP_*` environment variables
pub fn load_config() -> Result<InnkeepConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(InnkeepConfig::default()))
        .merge(Toml::file("/etc/innkeep/innkeep.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("innkeep/innkeep.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("innkeep.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<InnkeepConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(InnkeepConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<InnkeepConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(InnkeepConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `INNKEEP_STORAGE_DATABASE_PATH` must
/// map to `storage.database_path`, not `storage.database.path`.
fn env_provider() -> Env {
    Env::prefixed("INNKEEP_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("storage_", "storage.", 1)
            .replacen("mail_", "mail.", 1)
            .replacen("session_", "session.", 1)
            .replacen("booking_", "booking.", 1);
        mapped.into()
    })
}
