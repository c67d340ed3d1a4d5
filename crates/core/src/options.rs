// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `options` message: the client's flat configuration record.
//!
//! Every field is optional. Releases add and drop keys freely, so a key
//! missing from the body leaves its field unset.

use std::sync::LazyLock;

use serde::Serialize;

use crate::mapping::convert;
use crate::{
    ClientSubType, ClientType, ConversionError, CorePriority, Mapped, MaxPacketSize, PropertyTable,
};

#[derive(Debug, Clone, Default, Serialize)]
pub struct Options {
    // Remote access
    pub allow: Option<String>,
    pub deny: Option<String>,
    pub command_allow_no_pass: Option<String>,
    pub command_deny_no_pass: Option<String>,
    pub command_address: Option<String>,
    pub command_port: Option<i32>,
    pub password: Option<String>,
    pub web_allow: Option<String>,
    pub web_deny: Option<String>,
    pub web_enable: Option<bool>,

    // Identity
    pub user: Option<String>,
    pub team: Option<i32>,
    pub passkey: Option<String>,
    pub machine_id: Option<i32>,
    pub cause: Option<String>,
    pub fold_anon: Option<bool>,

    // Work assignment
    pub client_type: ClientType,
    pub client_subtype: ClientSubType,
    pub max_packet_size: MaxPacketSize,
    pub core_priority: CorePriority,
    pub project_key: Option<i32>,
    pub assignment_servers: Option<String>,
    pub gpu_assignment_servers: Option<String>,
    pub max_units: Option<i32>,
    pub next_unit_percentage: Option<i32>,
    pub max_queue: Option<i32>,
    pub dump_after_deadline: Option<bool>,

    // Resources
    pub power: Option<String>,
    pub cpu_usage: Option<i32>,
    pub gpu_usage: Option<i32>,
    pub cpus: Option<i32>,
    pub cpu_affinity: Option<bool>,
    pub cpu_type: Option<String>,
    pub cpu_species: Option<String>,
    pub os_type: Option<String>,
    pub os_species: Option<String>,
    pub memory: Option<String>,
    pub gpu: Option<bool>,
    pub smp: Option<bool>,
    pub checkpoint: Option<i32>,
    pub core_dir: Option<String>,
    pub core_server: Option<String>,
    pub extra_core_args: Option<String>,

    // Pausing
    pub idle: Option<bool>,
    pub paused: Option<bool>,
    pub pause_on_battery: Option<bool>,
    pub pause_on_start: Option<bool>,
    pub disable_sleep_when_active: Option<bool>,
    pub exit_when_done: Option<bool>,

    // Errors and timeouts
    pub max_slot_errors: Option<i32>,
    pub max_unit_errors: Option<i32>,
    pub max_shutdown_wait: Option<i32>,
    pub stall_detection_enabled: Option<bool>,
    pub stall_percent: Option<i32>,
    pub stall_timeout: Option<i32>,
    pub connection_timeout: Option<i32>,

    // Proxy
    pub proxy: Option<String>,
    pub proxy_enable: Option<bool>,
    pub proxy_user: Option<String>,
    pub proxy_pass: Option<String>,

    // Logging
    pub log: Option<String>,
    pub log_color: Option<bool>,
    pub log_crlf: Option<bool>,
    pub log_date: Option<bool>,
    pub log_rotate: Option<bool>,
    pub log_rotate_max: Option<i32>,
    pub log_to_screen: Option<bool>,
    pub log_truncate: Option<bool>,
    pub verbosity: Option<i32>,

    // Service
    pub service: Option<bool>,
    pub daemon: Option<bool>,
    pub respawn: Option<bool>,
    pub run_as: Option<String>,
    pub data_directory: Option<String>,

    pub errors: Vec<ConversionError>,
}

crate::message_object!(Options);

static OPTIONS_TABLE: LazyLock<PropertyTable<Options>> = LazyLock::new(|| {
    PropertyTable::<Options>::builder()
        .field("Allow", "allow", convert::text, |o, v| o.allow = Some(v))
        .field("Deny", "deny", convert::text, |o, v| o.deny = Some(v))
        .field("CommandAllowNoPass", "command-allow-no-pass", convert::text, |o, v| {
            o.command_allow_no_pass = Some(v)
        })
        .field("CommandDenyNoPass", "command-deny-no-pass", convert::text, |o, v| {
            o.command_deny_no_pass = Some(v)
        })
        .field("CommandAddress", "command-address", convert::text, |o, v| {
            o.command_address = Some(v)
        })
        .field("CommandPort", "command-port", convert::int32, |o, v| o.command_port = Some(v))
        .field("Password", "password", convert::text, |o, v| o.password = Some(v))
        .field("WebAllow", "web-allow", convert::text, |o, v| o.web_allow = Some(v))
        .field("WebDeny", "web-deny", convert::text, |o, v| o.web_deny = Some(v))
        .field("WebEnable", "web-enable", convert::boolean, |o, v| o.web_enable = Some(v))
        .field("User", "user", convert::text, |o, v| o.user = Some(v))
        .field("Team", "team", convert::int32, |o, v| o.team = Some(v))
        .field("Passkey", "passkey", convert::text, |o, v| o.passkey = Some(v))
        .field("MachineId", "machine-id", convert::int32, |o, v| o.machine_id = Some(v))
        .field("Cause", "cause", convert::text, |o, v| o.cause = Some(v))
        .field("FoldAnon", "fold-anon", convert::boolean, |o, v| o.fold_anon = Some(v))
        .field("ClientType", "client-type", convert::token::<ClientType>, |o, v| {
            o.client_type = v
        })
        .field("ClientSubType", "client-subtype", convert::token::<ClientSubType>, |o, v| {
            o.client_subtype = v
        })
        .field("MaxPacketSize", "max-packet-size", convert::token::<MaxPacketSize>, |o, v| {
            o.max_packet_size = v
        })
        .field("CorePriority", "core-priority", convert::token::<CorePriority>, |o, v| {
            o.core_priority = v
        })
        .field("ProjectKey", "project-key", convert::int32, |o, v| o.project_key = Some(v))
        .field("AssignmentServers", "assignment-servers", convert::text, |o, v| {
            o.assignment_servers = Some(v)
        })
        .field("GpuAssignmentServers", "gpu-assignment-servers", convert::text, |o, v| {
            o.gpu_assignment_servers = Some(v)
        })
        .field("MaxUnits", "max-units", convert::int32, |o, v| o.max_units = Some(v))
        .field("NextUnitPercentage", "next-unit-percentage", convert::int32, |o, v| {
            o.next_unit_percentage = Some(v)
        })
        .field("MaxQueue", "max-queue", convert::int32, |o, v| o.max_queue = Some(v))
        .field("DumpAfterDeadline", "dump-after-deadline", convert::boolean, |o, v| {
            o.dump_after_deadline = Some(v)
        })
        .field("Power", "power", convert::text, |o, v| o.power = Some(v))
        .field("CpuUsage", "cpu-usage", convert::int32, |o, v| o.cpu_usage = Some(v))
        .field("GpuUsage", "gpu-usage", convert::int32, |o, v| o.gpu_usage = Some(v))
        .field("Cpus", "cpus", convert::int32, |o, v| o.cpus = Some(v))
        .field("CpuAffinity", "cpu-affinity", convert::boolean, |o, v| o.cpu_affinity = Some(v))
        .field("CpuType", "cpu-type", convert::text, |o, v| o.cpu_type = Some(v))
        .field("CpuSpecies", "cpu-species", convert::text, |o, v| o.cpu_species = Some(v))
        .field("OsType", "os-type", convert::text, |o, v| o.os_type = Some(v))
        .field("OsSpecies", "os-species", convert::text, |o, v| o.os_species = Some(v))
        .field("Memory", "memory", convert::text, |o, v| o.memory = Some(v))
        .field("Gpu", "gpu", convert::boolean, |o, v| o.gpu = Some(v))
        .field("Smp", "smp", convert::boolean, |o, v| o.smp = Some(v))
        .field("Checkpoint", "checkpoint", convert::int32, |o, v| o.checkpoint = Some(v))
        .field("CoreDir", "core-dir", convert::text, |o, v| o.core_dir = Some(v))
        .field("CoreServer", "core-server", convert::text, |o, v| o.core_server = Some(v))
        .field("ExtraCoreArgs", "extra-core-args", convert::text, |o, v| {
            o.extra_core_args = Some(v)
        })
        .field("Idle", "idle", convert::boolean, |o, v| o.idle = Some(v))
        .field("Paused", "paused", convert::boolean, |o, v| o.paused = Some(v))
        .field("PauseOnBattery", "pause-on-battery", convert::boolean, |o, v| {
            o.pause_on_battery = Some(v)
        })
        .field("PauseOnStart", "pause-on-start", convert::boolean, |o, v| {
            o.pause_on_start = Some(v)
        })
        .field("DisableSleepWhenActive", "disable-sleep-when-active", convert::boolean, |o, v| {
            o.disable_sleep_when_active = Some(v)
        })
        .field("ExitWhenDone", "exit-when-done", convert::boolean, |o, v| {
            o.exit_when_done = Some(v)
        })
        .field("MaxSlotErrors", "max-slot-errors", convert::int32, |o, v| {
            o.max_slot_errors = Some(v)
        })
        .field("MaxUnitErrors", "max-unit-errors", convert::int32, |o, v| {
            o.max_unit_errors = Some(v)
        })
        .field("MaxShutdownWait", "max-shutdown-wait", convert::int32, |o, v| {
            o.max_shutdown_wait = Some(v)
        })
        .field("StallDetectionEnabled", "stall-detection-enabled", convert::boolean, |o, v| {
            o.stall_detection_enabled = Some(v)
        })
        .field("StallPercent", "stall-percent", convert::int32, |o, v| o.stall_percent = Some(v))
        .field("StallTimeout", "stall-timeout", convert::int32, |o, v| o.stall_timeout = Some(v))
        .field("ConnectionTimeout", "connection-timeout", convert::int32, |o, v| {
            o.connection_timeout = Some(v)
        })
        .field("Proxy", "proxy", convert::text, |o, v| o.proxy = Some(v))
        .field("ProxyEnable", "proxy-enable", convert::boolean, |o, v| o.proxy_enable = Some(v))
        .field("ProxyUser", "proxy-user", convert::text, |o, v| o.proxy_user = Some(v))
        .field("ProxyPass", "proxy-pass", convert::text, |o, v| o.proxy_pass = Some(v))
        .field("Log", "log", convert::text, |o, v| o.log = Some(v))
        .field("LogColor", "log-color", convert::boolean, |o, v| o.log_color = Some(v))
        .field("LogCrlf", "log-crlf", convert::boolean, |o, v| o.log_crlf = Some(v))
        .field("LogDate", "log-date", convert::boolean, |o, v| o.log_date = Some(v))
        .field("LogRotate", "log-rotate", convert::boolean, |o, v| o.log_rotate = Some(v))
        .field("LogRotateMax", "log-rotate-max", convert::int32, |o, v| {
            o.log_rotate_max = Some(v)
        })
        .field("LogToScreen", "log-to-screen", convert::boolean, |o, v| {
            o.log_to_screen = Some(v)
        })
        .field("LogTruncate", "log-truncate", convert::boolean, |o, v| o.log_truncate = Some(v))
        .field("Verbosity", "verbosity", convert::int32, |o, v| o.verbosity = Some(v))
        .field("Service", "service", convert::boolean, |o, v| o.service = Some(v))
        .field("Daemon", "daemon", convert::boolean, |o, v| o.daemon = Some(v))
        .field("Respawn", "respawn", convert::boolean, |o, v| o.respawn = Some(v))
        .field("RunAs", "run-as", convert::text, |o, v| o.run_as = Some(v))
        .field("DataDirectory", "data-directory", convert::text, |o, v| {
            o.data_directory = Some(v)
        })
        .build()
});

impl Mapped for Options {
    fn property_table() -> &'static PropertyTable<Self> {
        &OPTIONS_TABLE
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
