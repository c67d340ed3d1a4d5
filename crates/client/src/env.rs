// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the client crate.

use std::path::PathBuf;
use std::str::FromStr;

use crate::ConfigError;

fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn parsed<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match var(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::Invalid { name, reason: format!("{raw:?}: {e}") }),
    }
}

/// FAHClient host (`FAH_HOST`).
pub fn host() -> Option<String> {
    var("FAH_HOST")
}

/// FAHClient command port (`FAH_PORT`).
pub fn port() -> Result<Option<u16>, ConfigError> {
    parsed("FAH_PORT")
}

/// Command port password (`FAH_PASSWORD`).
pub fn password() -> Option<String> {
    var("FAH_PASSWORD")
}

/// Consecutive failed connects before giving up (`FAH_RECONNECT_ATTEMPTS`).
pub fn reconnect_attempts() -> Result<Option<u32>, ConfigError> {
    parsed("FAH_RECONNECT_ATTEMPTS")
}

/// First reconnect delay in milliseconds (`FAH_RECONNECT_INITIAL_MS`).
pub fn reconnect_initial_ms() -> Result<Option<u64>, ConfigError> {
    parsed("FAH_RECONNECT_INITIAL_MS")
}

/// Reconnect delay cap in milliseconds (`FAH_RECONNECT_MAX_MS`).
pub fn reconnect_max_ms() -> Result<Option<u64>, ConfigError> {
    parsed("FAH_RECONNECT_MAX_MS")
}

/// Resolve the config file: FAH_CONFIG > <config dir>/fah/client.toml
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = var("FAH_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("fah").join("client.toml"))
}
