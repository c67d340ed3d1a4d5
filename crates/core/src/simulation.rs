// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `simulation-info` message: progress of the unit running in one slot.

use std::sync::LazyLock;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::mapping::convert;
use crate::{ConversionError, Mapped, PropertyTable};

/// Raw counters plus date/time views derived from the same keys.
///
/// Derived fields (`*_date_time`, `*_time_span`) are converted
/// independently: a bad raw value records one error for each view.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SimulationInfo {
    pub user: Option<String>,
    pub team: Option<i32>,
    pub project: Option<i32>,
    pub run: Option<i32>,
    pub clone: Option<i32>,
    pub gen: Option<i32>,
    pub core_type: Option<i32>,
    pub core: Option<String>,
    pub description: Option<String>,
    pub total_iterations: Option<i32>,
    pub iterations_done: Option<i32>,
    pub energy: Option<i32>,
    pub temperature: Option<i32>,
    pub start_time: Option<String>,
    pub start_time_date_time: Option<DateTime<Utc>>,
    /// Unix seconds; zero when the unit has no timeout.
    pub timeout: Option<i64>,
    pub timeout_date_time: Option<DateTime<Utc>>,
    pub deadline: Option<i64>,
    pub deadline_date_time: Option<DateTime<Utc>>,
    /// Seconds the unit has been running.
    pub run_time: Option<i64>,
    pub run_time_time_span: Option<Duration>,
    pub simulation_time: Option<i64>,
    pub eta: Option<i64>,
    pub eta_time_span: Option<Duration>,
    pub news: Option<String>,
    pub slot: Option<i32>,
    pub errors: Vec<ConversionError>,
}

crate::message_object!(SimulationInfo);

impl SimulationInfo {
    /// Completed iterations as a percentage, when both counters are known.
    pub fn progress_percent(&self) -> Option<f64> {
        match (self.iterations_done, self.total_iterations) {
            (Some(done), Some(total)) if total > 0 => {
                Some((f64::from(done) * 100.0 / f64::from(total)).clamp(0.0, 100.0))
            }
            _ => None,
        }
    }

    /// Work unit coordinates, `P7610 (R630, C0, G59)`.
    pub fn project_label(&self) -> Option<String> {
        Some(format!(
            "P{} (R{}, C{}, G{})",
            self.project?, self.run?, self.clone?, self.gen?
        ))
    }
}

static SIMULATION_TABLE: LazyLock<PropertyTable<SimulationInfo>> = LazyLock::new(|| {
    PropertyTable::<SimulationInfo>::builder()
        .field("User", "user", convert::text, |s, v| s.user = Some(v))
        .field("Team", "team", convert::int32, |s, v| s.team = Some(v))
        .field("Project", "project", convert::int32, |s, v| s.project = Some(v))
        .field("Run", "run", convert::int32, |s, v| s.run = Some(v))
        .field("Clone", "clone", convert::int32, |s, v| s.clone = Some(v))
        .field("Gen", "gen", convert::int32, |s, v| s.gen = Some(v))
        .field("CoreType", "core_type", convert::int32, |s, v| s.core_type = Some(v))
        .field("Core", "core", convert::text, |s, v| s.core = Some(v))
        .field("Description", "description", convert::text, |s, v| s.description = Some(v))
        .field("TotalIterations", "total_iterations", convert::int32, |s, v| {
            s.total_iterations = Some(v)
        })
        .field("IterationsDone", "iterations_done", convert::int32, |s, v| {
            s.iterations_done = Some(v)
        })
        .field("Energy", "energy", convert::int32, |s, v| s.energy = Some(v))
        .field("Temperature", "temperature", convert::int32, |s, v| s.temperature = Some(v))
        .field("StartTime", "start_time", convert::text, |s, v| s.start_time = Some(v))
        .field("StartTimeDateTime", "start_time", convert::iso_time, |s, v| {
            s.start_time_date_time = v
        })
        .field("Timeout", "timeout", convert::int64, |s, v| s.timeout = Some(v))
        .field("TimeoutDateTime", "timeout", convert::unix_time, |s, v| s.timeout_date_time = v)
        .field("Deadline", "deadline", convert::int64, |s, v| s.deadline = Some(v))
        .field("DeadlineDateTime", "deadline", convert::unix_time, |s, v| {
            s.deadline_date_time = v
        })
        .field("RunTime", "run_time", convert::int64, |s, v| s.run_time = Some(v))
        .field("RunTimeTimeSpan", "run_time", convert::seconds, |s, v| {
            s.run_time_time_span = Some(v)
        })
        .field("SimulationTime", "simulation_time", convert::int64, |s, v| {
            s.simulation_time = Some(v)
        })
        .field("Eta", "eta", convert::int64, |s, v| s.eta = Some(v))
        .field("EtaTimeSpan", "eta", convert::seconds, |s, v| s.eta_time_span = Some(v))
        .field("News", "news", convert::text, |s, v| s.news = Some(v))
        .field("Slot", "slot", convert::int32, |s, v| s.slot = Some(v))
        .build()
});

impl Mapped for SimulationInfo {
    fn property_table() -> &'static PropertyTable<Self> {
        &SIMULATION_TABLE
    }
}

#[cfg(test)]
#[path = "simulation_tests.rs"]
mod tests;
