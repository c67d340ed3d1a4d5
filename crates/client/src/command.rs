// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! FAHClient command-port commands.

use std::fmt;
use std::time::Duration;

/// A command line understood by the FAHClient command port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Auth(String),
    Info,
    /// `options`, with `-a` to include defaulted values.
    Options { all: bool },
    SlotInfo,
    SlotOptions { slot: u32 },
    SimulationInfo { slot: u32 },
    QueueInfo,
    /// Re-run `command` every `interval`, tagged with update `id`.
    UpdatesAdd { id: u32, interval: Duration, command: Box<Command> },
    UpdatesClear,
    LogUpdatesStart,
    Pause { slot: Option<u32> },
    Unpause { slot: Option<u32> },
    Finish { slot: Option<u32> },
    Heartbeat,
    Exit,
    /// Anything else, sent verbatim.
    Raw(String),
}

impl Command {
    /// Periodic update of `command`. The interval is sent in whole seconds, at least one.
    pub fn updates_add(id: u32, interval: Duration, command: Command) -> Self {
        Self::UpdatesAdd { id, interval, command: Box::new(command) }
    }

    /// The full line written to the socket, newline terminated.
    pub fn to_line(&self) -> String {
        format!("{self}\n")
    }
}

fn slot_suffix(f: &mut fmt::Formatter<'_>, verb: &str, slot: Option<u32>) -> fmt::Result {
    match slot {
        Some(slot) => write!(f, "{verb} {slot:02}"),
        None => f.write_str(verb),
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auth(password) => write!(f, "auth {password}"),
            Self::Info => f.write_str("info"),
            Self::Options { all: true } => f.write_str("options -a"),
            Self::Options { all: false } => f.write_str("options"),
            Self::SlotInfo => f.write_str("slot-info"),
            Self::SlotOptions { slot } => write!(f, "slot-options {slot:02} -a"),
            Self::SimulationInfo { slot } => write!(f, "simulation-info {slot:02}"),
            Self::QueueInfo => f.write_str("queue-info"),
            Self::UpdatesAdd { id, interval, command } => {
                let secs = interval.as_secs().max(1);
                write!(f, "updates add {id} {secs} ${command}")
            }
            Self::UpdatesClear => f.write_str("updates clear"),
            Self::LogUpdatesStart => f.write_str("log-updates start"),
            Self::Pause { slot } => slot_suffix(f, "pause", *slot),
            Self::Unpause { slot } => slot_suffix(f, "unpause", *slot),
            Self::Finish { slot } => slot_suffix(f, "finish", *slot),
            Self::Heartbeat => f.write_str("heartbeat"),
            Self::Exit => f.write_str("exit"),
            Self::Raw(text) => f.write_str(text.trim_end_matches(['\r', '\n'])),
        }
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
