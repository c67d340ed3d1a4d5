// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fahc query`: send one command and print the first matching reply.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Subcommand;
use fah_client::{Command, Connection, Delivery};
use fah_core::MessageKind;
use tokio::sync::broadcast::{self, error::RecvError};

use super::{established, unreachable, ConnectionArgs};
use crate::exit_error::{codes, ExitError};
use crate::output::{self, OutputFormat};

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Client, build and system details
    Info,
    /// Client options, including defaults
    Options,
    /// Configured slots
    Slots,
    /// Options of one slot
    SlotOptions { slot: u32 },
    /// Work unit queue
    Units,
    /// Simulation progress of one slot
    Simulation { slot: u32 },
}

impl Query {
    pub fn command(self) -> Command {
        match self {
            Self::Info => Command::Info,
            Self::Options => Command::Options { all: true },
            Self::Slots => Command::SlotInfo,
            Self::SlotOptions { slot } => Command::SlotOptions { slot },
            Self::Units => Command::QueueInfo,
            Self::Simulation { slot } => Command::SimulationInfo { slot },
        }
    }

    /// Kind of message FAHClient answers with.
    pub fn reply_kind(self) -> MessageKind {
        match self {
            Self::Info => MessageKind::Info,
            Self::Options => MessageKind::Options,
            Self::Slots => MessageKind::Slots,
            Self::SlotOptions { .. } => MessageKind::SlotOptions,
            Self::Units => MessageKind::Units,
            Self::Simulation { .. } => MessageKind::SimulationInfo,
        }
    }
}

async fn first_of_kind(
    deliveries: &mut broadcast::Receiver<Arc<Delivery>>,
    kind: MessageKind,
) -> Option<Arc<Delivery>> {
    loop {
        match deliveries.recv().await {
            Ok(delivery) if delivery.message.kind() == kind => return Some(delivery),
            Ok(_) => {}
            Err(RecvError::Lagged(skipped)) => tracing::debug!(skipped, "reply receiver lagged"),
            Err(RecvError::Closed) => return None,
        }
    }
}

pub async fn handle(
    args: &ConnectionArgs,
    query: Query,
    timeout: Duration,
    format: OutputFormat,
) -> Result<()> {
    let connection = Connection::spawn(args.resolve()?, Vec::new());
    let mut deliveries = connection.subscribe();
    established(&connection).await?;

    let command = query.command();
    connection.send(&command).await.map_err(unreachable)?;
    let reply = tokio::time::timeout(timeout, first_of_kind(&mut deliveries, query.reply_kind())).await;
    connection.disconnect().await;

    match reply {
        Ok(Some(delivery)) => output::print_delivery(&delivery, format),
        _ => Err(ExitError::new(
            codes::NO_REPLY,
            format!("no {} reply to '{command}' within {}s", query.reply_kind(), timeout.as_secs()),
        )
        .into()),
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
