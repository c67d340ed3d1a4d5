// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `units` message: the work unit queue.

use std::sync::LazyLock;
use std::time::Duration;

use chrono::{DateTime, Utc};
use fah_pyon::Value;
use serde::Serialize;

use crate::mapping::convert;
use crate::{
    fill_list, ConversionError, Mapped, MessageObject, PropertyTable, TypeMappingError, UnitState,
};

/// One queue entry.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Unit {
    /// Queue position, zero-padded text on the wire.
    pub id: Option<i32>,
    pub state: UnitState,
    pub error: Option<String>,
    pub project: Option<i32>,
    pub run: Option<i32>,
    pub clone: Option<i32>,
    pub gen: Option<i32>,
    pub core: Option<String>,
    /// Hex identifier assigned by the work server.
    pub unit: Option<String>,
    pub percent_done: Option<f64>,
    pub eta: Option<Duration>,
    pub ppd: Option<f64>,
    pub credit_estimate: Option<f64>,
    pub base_credit: Option<f64>,
    pub waiting_on: Option<String>,
    pub next_attempt: Option<Duration>,
    pub time_remaining: Option<Duration>,
    pub total_frames: Option<i32>,
    pub frames_done: Option<i32>,
    pub assigned: Option<DateTime<Utc>>,
    pub timeout: Option<DateTime<Utc>>,
    pub deadline: Option<DateTime<Utc>>,
    pub work_server: Option<String>,
    pub collection_server: Option<String>,
    pub attempts: Option<i32>,
    pub slot: Option<i32>,
    /// Time per frame.
    pub tpf: Option<Duration>,
    pub errors: Vec<ConversionError>,
}

crate::message_object!(Unit);

static UNIT_TABLE: LazyLock<PropertyTable<Unit>> = LazyLock::new(|| {
    PropertyTable::<Unit>::builder()
        .field("Id", "id", convert::int32, |u, v| u.id = Some(v))
        .field("State", "state", convert::token::<UnitState>, |u, v| u.state = v)
        .field("Error", "error", convert::text, |u, v| u.error = Some(v))
        .field("Project", "project", convert::int32, |u, v| u.project = Some(v))
        .field("Run", "run", convert::int32, |u, v| u.run = Some(v))
        .field("Clone", "clone", convert::int32, |u, v| u.clone = Some(v))
        .field("Gen", "gen", convert::int32, |u, v| u.gen = Some(v))
        .field("Core", "core", convert::text, |u, v| u.core = Some(v))
        .field("Unit", "unit", convert::text, |u, v| u.unit = Some(v))
        .field("PercentDone", "percentdone", convert::percent, |u, v| u.percent_done = Some(v))
        .field("Eta", "eta", convert::duration_text, |u, v| u.eta = Some(v))
        .field("Ppd", "ppd", convert::float64, |u, v| u.ppd = Some(v))
        .field("CreditEstimate", "creditestimate", convert::float64, |u, v| {
            u.credit_estimate = Some(v)
        })
        .field("BaseCredit", "basecredit", convert::float64, |u, v| u.base_credit = Some(v))
        .field("WaitingOn", "waitingon", convert::text, |u, v| u.waiting_on = Some(v))
        .field("NextAttempt", "nextattempt", convert::duration_text, |u, v| {
            u.next_attempt = Some(v)
        })
        .field("TimeRemaining", "timeremaining", convert::duration_text, |u, v| {
            u.time_remaining = Some(v)
        })
        .field("TotalFrames", "totalframes", convert::int32, |u, v| u.total_frames = Some(v))
        .field("FramesDone", "framesdone", convert::int32, |u, v| u.frames_done = Some(v))
        .field("Assigned", "assigned", convert::iso_time, |u, v| u.assigned = v)
        .field("Timeout", "timeout", convert::iso_time, |u, v| u.timeout = v)
        .field("Deadline", "deadline", convert::iso_time, |u, v| u.deadline = v)
        .field("WorkServer", "ws", convert::text, |u, v| u.work_server = Some(v))
        .field("CollectionServer", "cs", convert::text, |u, v| u.collection_server = Some(v))
        .field("Attempts", "attempts", convert::int32, |u, v| u.attempts = Some(v))
        .field("Slot", "slot", convert::int32, |u, v| u.slot = Some(v))
        .field("Tpf", "tpf", convert::duration_text, |u, v| u.tpf = Some(v))
        .build()
});

impl Mapped for Unit {
    fn property_table() -> &'static PropertyTable<Self> {
        &UNIT_TABLE
    }
}

/// Queue entries from one `units` message, in wire order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct UnitCollection {
    units: Vec<Unit>,
}

impl UnitCollection {
    pub fn from_value(tree: &Value) -> Result<Self, TypeMappingError> {
        fill_list::<Unit>(tree).map(|units| Self { units })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Unit> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn by_id(&self, id: i32) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == Some(id))
    }

    /// Units queued for `slot`.
    pub fn for_slot(&self, slot: i32) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(move |u| u.slot == Some(slot))
    }

    pub fn errors(&self) -> impl Iterator<Item = &ConversionError> {
        self.units.iter().flat_map(|u| u.errors())
    }
}

impl<'a> IntoIterator for &'a UnitCollection {
    type Item = &'a Unit;
    type IntoIter = std::slice::Iter<'a, Unit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
