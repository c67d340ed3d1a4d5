// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `slots` and `slot-options` messages.

use std::sync::LazyLock;

use fah_pyon::Value;
use serde::Serialize;

use crate::mapping::convert;
use crate::{
    fill_list, ClientSubType, ClientType, ConversionError, CorePriority, Mapped, MaxPacketSize,
    PropertyTable, SlotStatus, SlotType, TypeMappingError,
};

/// One configured compute slot.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Slot {
    /// Slot number, sent as zero-padded text (`"00"`).
    pub id: Option<i32>,
    pub status: SlotStatus,
    pub description: Option<String>,
    /// Slot kind, taken from the leading word of `description`.
    pub slot_type: SlotType,
    pub options: SlotOptions,
    pub reason: Option<String>,
    pub idle: Option<bool>,
    pub errors: Vec<ConversionError>,
}

/// Per-slot overrides of client options.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SlotOptions {
    pub client_type: ClientType,
    pub client_subtype: ClientSubType,
    pub cpu_usage: Option<i32>,
    pub machine_id: Option<i32>,
    pub max_packet_size: MaxPacketSize,
    pub core_priority: CorePriority,
    pub next_unit_percentage: Option<i32>,
    pub max_units: Option<i32>,
    pub checkpoint: Option<i32>,
    pub pause_on_start: Option<bool>,
    pub gpu_index: Option<String>,
    pub gpu_usage: Option<i32>,
    pub cpus: Option<i32>,
    pub paused: Option<bool>,
    pub idle: Option<bool>,
    pub cuda_index: Option<String>,
    pub opencl_index: Option<String>,
    pub errors: Vec<ConversionError>,
}

crate::message_object!(Slot, SlotOptions);

fn slot_type(value: &Value) -> Result<SlotType, String> {
    convert::text(value).map(|s| SlotType::from_description(&s))
}

static SLOT_TABLE: LazyLock<PropertyTable<Slot>> = LazyLock::new(|| {
    PropertyTable::<Slot>::builder()
        .field("Id", "id", convert::int32, |s, v| s.id = Some(v))
        .field("Status", "status", convert::token::<SlotStatus>, |s, v| s.status = v)
        .field("Description", "description", convert::text, |s, v| s.description = Some(v))
        .field("SlotType", "description", slot_type, |s, v| s.slot_type = v)
        .nested::<SlotOptions>("SlotOptions", "options", |s, o| s.options = o)
        .field("Reason", "reason", convert::text, |s, v| s.reason = Some(v))
        .field("Idle", "idle", convert::boolean, |s, v| s.idle = Some(v))
        .build()
});

static SLOT_OPTIONS_TABLE: LazyLock<PropertyTable<SlotOptions>> = LazyLock::new(|| {
    PropertyTable::<SlotOptions>::builder()
        .field("ClientType", "client-type", convert::token::<ClientType>, |o, v| {
            o.client_type = v
        })
        .field("ClientSubType", "client-subtype", convert::token::<ClientSubType>, |o, v| {
            o.client_subtype = v
        })
        .field("CpuUsage", "cpu-usage", convert::int32, |o, v| o.cpu_usage = Some(v))
        .field("MachineId", "machine-id", convert::int32, |o, v| o.machine_id = Some(v))
        .field("MaxPacketSize", "max-packet-size", convert::token::<MaxPacketSize>, |o, v| {
            o.max_packet_size = v
        })
        .field("CorePriority", "core-priority", convert::token::<CorePriority>, |o, v| {
            o.core_priority = v
        })
        .field("NextUnitPercentage", "next-unit-percentage", convert::int32, |o, v| {
            o.next_unit_percentage = Some(v)
        })
        .field("MaxUnits", "max-units", convert::int32, |o, v| o.max_units = Some(v))
        .field("Checkpoint", "checkpoint", convert::int32, |o, v| o.checkpoint = Some(v))
        .field("PauseOnStart", "pause-on-start", convert::boolean, |o, v| {
            o.pause_on_start = Some(v)
        })
        .field("GpuIndex", "gpu-index", convert::text, |o, v| o.gpu_index = Some(v))
        .field("GpuUsage", "gpu-usage", convert::int32, |o, v| o.gpu_usage = Some(v))
        .field("Cpus", "cpus", convert::int32, |o, v| o.cpus = Some(v))
        .field("Paused", "paused", convert::boolean, |o, v| o.paused = Some(v))
        .field("Idle", "idle", convert::boolean, |o, v| o.idle = Some(v))
        .field("CudaIndex", "cuda-index", convert::text, |o, v| o.cuda_index = Some(v))
        .field("OpenclIndex", "opencl-index", convert::text, |o, v| o.opencl_index = Some(v))
        .build()
});

impl Mapped for Slot {
    fn property_table() -> &'static PropertyTable<Self> {
        &SLOT_TABLE
    }
}

impl Mapped for SlotOptions {
    fn property_table() -> &'static PropertyTable<Self> {
        &SLOT_OPTIONS_TABLE
    }
}

/// Ordered slots from one `slots` message.
///
/// The element type defaults to [`Slot`]; any [`Mapped`] type can be used
/// to read extra properties from each element.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SlotCollection<T = Slot> {
    slots: Vec<T>,
}

impl<T: Mapped> SlotCollection<T> {
    /// Fill one fresh `T` per list element, in wire order.
    pub fn from_value(tree: &Value) -> Result<Self, TypeMappingError> {
        let slots = fill_list::<T>(tree)?;
        let failed = slots.iter().filter(|s| !s.errors().is_empty()).count();
        if failed > 0 {
            tracing::debug!(slots = slots.len(), failed, "slots mapped with conversion errors");
        }
        Ok(Self { slots })
    }

    /// Conversion errors across every element.
    pub fn errors(&self) -> impl Iterator<Item = &ConversionError> {
        self.slots.iter().flat_map(|s| s.errors())
    }
}

impl<T> SlotCollection<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    pub fn into_vec(self) -> Vec<T> {
        self.slots
    }
}

impl SlotCollection<Slot> {
    pub fn by_id(&self, id: i32) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == Some(id))
    }
}

impl<'a, T> IntoIterator for &'a SlotCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

#[cfg(test)]
#[path = "slot_tests.rs"]
mod tests;
