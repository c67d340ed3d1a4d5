// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration: defaults, TOML file, then environment overrides.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{env, ConfigError};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 36330;

/// Bounded retries with exponential backoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconnectPolicy {
    /// Consecutive failed connects before giving up. Zero retries forever.
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self { max_attempts: 5, initial_delay_ms: 1_000, max_delay_ms: 30_000 }
    }
}

impl ReconnectPolicy {
    fah_core::setters! {
        set { max_attempts: u32, initial_delay_ms: u64, max_delay_ms: u64 }
    }

    /// Delay before retry number `attempt` (1-based): doubles from the
    /// initial delay up to the cap.
    pub fn delay(&self, attempt: u32) -> Duration {
        let shift = attempt.saturating_sub(1).min(32);
        let ms = self.initial_delay_ms.saturating_mul(1u64 << shift).min(self.max_delay_ms);
        Duration::from_millis(ms)
    }

    /// Whether `failures` consecutive failures exhaust the policy.
    pub fn exhausted(&self, failures: u32) -> bool {
        self.max_attempts != 0 && failures >= self.max_attempts
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
    pub reconnect: ReconnectPolicy,
    /// Size of each socket read.
    pub read_buffer_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            password: None,
            reconnect: ReconnectPolicy::default(),
            read_buffer_size: 8 * 1024,
        }
    }
}

impl ClientConfig {
    fah_core::setters! {
        into { host: String }
        set { port: u16, reconnect: ReconnectPolicy, read_buffer_size: usize }
        option { password: String }
    }

    /// Load from `path` (or the resolved default path when `None`) and
    /// apply environment overrides. A missing file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = path.map(Path::to_path_buf).or_else(env::config_path);
        let mut config = match resolved {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
            None => Self::default(),
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Override fields from `FAH_*` environment variables.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Some(host) = env::host() {
            self.host = host;
        }
        if let Some(port) = env::port()? {
            self.port = port;
        }
        if let Some(password) = env::password() {
            self.password = Some(password);
        }
        if let Some(attempts) = env::reconnect_attempts()? {
            self.reconnect.max_attempts = attempts;
        }
        if let Some(ms) = env::reconnect_initial_ms()? {
            self.reconnect.initial_delay_ms = ms;
        }
        if let Some(ms) = env::reconnect_max_ms()? {
            self.reconnect.max_delay_ms = ms;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid { name: "host", reason: "empty".into() });
        }
        if self.port == 0 {
            return Err(ConfigError::Invalid { name: "port", reason: "must be non-zero".into() });
        }
        if self.read_buffer_size == 0 {
            return Err(ConfigError::Invalid {
                name: "read_buffer_size",
                reason: "must be non-zero".into(),
            });
        }
        if self.reconnect.initial_delay_ms > self.reconnect.max_delay_ms {
            return Err(ConfigError::Invalid {
                name: "reconnect",
                reason: format!(
                    "initial delay {}ms exceeds max delay {}ms",
                    self.reconnect.initial_delay_ms, self.reconnect.max_delay_ms
                ),
            });
        }
        Ok(())
    }

    /// `host:port`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
