// SPDX-FileCopyrightText: 2026 Notewell Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./notewell.toml` > `~/.config/notewell/notewell.toml`
//! > `/etc/notewell/notewell.toml` with environment variable overrides via
//! the `NOTEWELL_` prefix. `NOTEWELL_STORAGE_DATABASE_PATH` overrides the
//! database location without touching any config file.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::NotewellConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/notewell/notewell.toml` (system-wide)
/// 3. `~/.config/notewell/notewell.toml` (user XDG config)
/// 4. `./notewell.toml` (local directory)
/// 5. `NOTEWELL_*` environment variables
pub fn load_config() -> Result<NotewellConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NotewellConfig::default()))
        .merge(Toml::file("/etc/notewell/notewell.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("notewell/notewell.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("notewell.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<NotewellConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NotewellConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<NotewellConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NotewellConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `NOTEWELL_STORAGE_DATABASE_PATH` must
/// map to `storage.database_path`, not `storage.database.path`.
fn env_provider() -> Env {
    Env::prefixed("NOTEWELL_").map(|key| {
        // `key` arrives in its original (typically upper) case with the
        // prefix stripped; lowercase it before the section mapping.
        // Example: NOTEWELL_STORAGE_DATABASE_PATH -> "storage.database_path"
        let mapped = key
            .as_str()
            .to_ascii_lowercase()
            .replacen("app_", "app.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}
