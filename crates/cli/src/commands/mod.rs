// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod decode;
pub mod query;
pub mod watch;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use fah_client::{ClientConfig, Connection, ConnectionError};

use crate::exit_error::{codes, ExitError};

/// Connection overrides shared by every live command.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// FAHClient host
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// FAHClient command port
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Command port password
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Config file (defaults to FAH_CONFIG or the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl ConnectionArgs {
    /// File and environment settings, then command-line overrides.
    pub fn resolve(&self) -> Result<ClientConfig> {
        let mut config = ClientConfig::load(self.config.as_deref())?;
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(password) = &self.password {
            config.password = Some(password.clone());
        }
        config.validate()?;
        Ok(config)
    }
}

/// Map connection failures onto the unreachable exit code.
pub(crate) fn unreachable(err: ConnectionError) -> anyhow::Error {
    ExitError::new(codes::UNREACHABLE, err.to_string()).into()
}

/// Wait for the first connect, failing with the unreachable exit code.
pub(crate) async fn established(connection: &Connection) -> Result<()> {
    connection.wait_connected().await.map_err(unreachable)
}
