// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fahc watch`: print live updates until interrupted.

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use fah_client::{Command, Connection, ConnectionState};
use tokio::sync::broadcast::error::RecvError;

use super::{established, ConnectionArgs};
use crate::output::{self, OutputFormat};

#[derive(Args, Debug, Clone, Default)]
pub struct WatchArgs {
    /// Slot status updates
    #[arg(long)]
    pub slots: bool,

    /// Work unit queue updates
    #[arg(long)]
    pub units: bool,

    /// Client option updates
    #[arg(long)]
    pub options: bool,

    /// Simulation progress of one slot
    #[arg(long, value_name = "SLOT")]
    pub simulation: Option<u32>,

    /// Stream the client log
    #[arg(long)]
    pub log: bool,

    /// Seconds between updates
    #[arg(long, default_value_t = 5)]
    pub interval: u64,
}

impl WatchArgs {
    /// Commands sent after every (re)connect. Slots and units when nothing is selected.
    pub fn subscriptions(&self) -> Vec<Command> {
        let interval = Duration::from_secs(self.interval);
        let nothing_selected =
            !self.slots && !self.units && !self.options && self.simulation.is_none() && !self.log;

        let mut commands = vec![Command::UpdatesClear];
        if self.slots || nothing_selected {
            commands.push(Command::updates_add(0, interval, Command::SlotInfo));
        }
        if self.units || nothing_selected {
            commands.push(Command::updates_add(1, interval, Command::QueueInfo));
        }
        if self.options {
            commands.push(Command::updates_add(2, interval, Command::Options { all: true }));
        }
        if let Some(slot) = self.simulation {
            commands.push(Command::updates_add(3, interval, Command::SimulationInfo { slot }));
        }
        if self.log {
            commands.push(Command::LogUpdatesStart);
        }
        commands
    }
}

pub async fn handle(args: &ConnectionArgs, watch: &WatchArgs, format: OutputFormat) -> Result<()> {
    let connection = Connection::spawn(args.resolve()?, watch.subscriptions());
    let mut deliveries = connection.subscribe();
    let mut state = connection.watch_state();
    established(&connection).await?;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            received = deliveries.recv() => match received {
                Ok(delivery) => output::print_delivery(&delivery, format)?,
                Err(RecvError::Lagged(skipped)) => tracing::warn!(skipped, "output fell behind"),
                Err(RecvError::Closed) => break,
            },
            changed = state.changed() => {
                if changed.is_err() || *state.borrow_and_update() == ConnectionState::Closed {
                    // Surfaces why the supervisor stopped.
                    established(&connection).await?;
                    break;
                }
            }
            _ = &mut ctrl_c => break,
        }
    }

    connection.disconnect().await;
    Ok(())
}

#[cfg(test)]
#[path = "watch_tests.rs"]
mod tests;
