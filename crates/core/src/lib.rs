// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fah-core: typed models for FAHClient protocol messages

pub mod macros;

pub mod enums;
pub mod error;
pub mod info;
pub mod mapping;
pub mod message;
pub mod options;
pub mod simulation;
pub mod slot;
pub mod unit;

pub use enums::{
    ClientSubType, ClientType, CorePriority, CpuManufacturer, CpuType, FromToken, GpuManufacturer,
    MaxPacketSize, OperatingSystemArchitecture, OperatingSystemType, SlotStatus, SlotType,
    UnitState,
};
pub use error::{ConversionError, MessageError, TypeMappingError};
pub use info::{BuildInfo, ClientInfo, Info, SystemInfo, MAX_GPUS};
pub use mapping::{fill, fill_list, Mapped, MessageObject, PropertyMapping, PropertyTable};
pub use message::{parse, Delivery, FahMessage, Message, MessageKind};
pub use options::Options;
pub use simulation::SimulationInfo;
pub use slot::{Slot, SlotCollection, SlotOptions};
pub use unit::{Unit, UnitCollection};
