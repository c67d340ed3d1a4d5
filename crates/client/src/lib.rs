// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fah-client: connection to a FAHClient command port
//!
//! [`Connection`] owns the socket in a supervisor task that reconnects
//! with exponential backoff, frames the incoming stream, maps each
//! message, and broadcasts [`Delivery`] values to subscribers.

mod command;
mod config;
mod connection;
pub mod env;
mod error;

pub use command::Command;
pub use config::{ClientConfig, ReconnectPolicy, DEFAULT_HOST, DEFAULT_PORT};
pub use connection::{Connection, ConnectionState};
pub use error::{ConfigError, ConnectionError};
pub use fah_core::{Delivery, FahMessage};
