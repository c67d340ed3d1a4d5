// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the connection manager.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not connected (state: {0})")]
    NotConnected(crate::ConnectionState),

    #[error("connection closed")]
    Closed,

    #[error("gave up after {attempts} failed connection attempts to {address}")]
    RetriesExhausted { address: String, attempts: u32 },
}

/// Errors while loading client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
