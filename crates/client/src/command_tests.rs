// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    auth        = { Command::Auth("pw".into()),              "auth pw" },
    info        = { Command::Info,                            "info" },
    options_all = { Command::Options { all: true },           "options -a" },
    options     = { Command::Options { all: false },          "options" },
    slot_info   = { Command::SlotInfo,                        "slot-info" },
    slot_opts   = { Command::SlotOptions { slot: 1 },         "slot-options 01 -a" },
    simulation  = { Command::SimulationInfo { slot: 0 },      "simulation-info 00" },
    queue       = { Command::QueueInfo,                       "queue-info" },
    clear       = { Command::UpdatesClear,                    "updates clear" },
    logs        = { Command::LogUpdatesStart,                 "log-updates start" },
    pause_all   = { Command::Pause { slot: None },            "pause" },
    pause_one   = { Command::Pause { slot: Some(2) },         "pause 02" },
    unpause     = { Command::Unpause { slot: None },          "unpause" },
    finish      = { Command::Finish { slot: Some(12) },       "finish 12" },
    heartbeat   = { Command::Heartbeat,                       "heartbeat" },
    exit        = { Command::Exit,                            "exit" },
    raw         = { Command::Raw("ppd\r\n".into()),           "ppd" },
)]
fn command_text(command: Command, expected: &str) {
    assert_eq!(command.to_string(), expected);
    assert_eq!(command.to_line(), format!("{expected}\n"));
}

#[test]
fn updates_add_wraps_inner_command() {
    let command = Command::updates_add(1, Duration::from_secs(5), Command::SlotInfo);
    assert_eq!(command.to_string(), "updates add 1 5 $slot-info");
}

#[test]
fn updates_interval_has_one_second_floor() {
    let command = Command::updates_add(0, Duration::from_millis(200), Command::QueueInfo);
    assert_eq!(command.to_string(), "updates add 0 1 $queue-info");
}
