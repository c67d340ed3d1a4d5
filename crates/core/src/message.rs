// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parse entry points and dispatch from wire name to typed message.

use fah_pyon::{RawMessage, Value};
use serde::Serialize;

use crate::{
    fill, ConversionError, Info, Mapped, MessageError, MessageObject, Options, SimulationInfo,
    SlotCollection, SlotOptions, TypeMappingError, UnitCollection,
};

/// A typed message body.
pub trait Message: Sized {
    /// Wire name of the message, as it appears in the header.
    const NAME: &'static str;

    fn from_value(tree: &Value) -> Result<Self, TypeMappingError>;
}

/// Decode and map one framed message body.
///
/// An empty body is a caller error and is rejected before decoding.
pub fn parse<M: Message>(body: &str) -> Result<M, MessageError> {
    if body.trim().is_empty() {
        return Err(MessageError::Argument(format!("{} message body is empty", M::NAME)));
    }
    let tree = fah_pyon::decode(body)?;
    Ok(M::from_value(&tree)?)
}

impl Message for Info {
    const NAME: &'static str = "info";

    fn from_value(tree: &Value) -> Result<Self, TypeMappingError> {
        fill(Self::default(), tree)
    }
}

impl Message for Options {
    const NAME: &'static str = "options";

    fn from_value(tree: &Value) -> Result<Self, TypeMappingError> {
        fill(Self::default(), tree)
    }
}

impl Message for SlotOptions {
    const NAME: &'static str = "slot-options";

    fn from_value(tree: &Value) -> Result<Self, TypeMappingError> {
        fill(Self::default(), tree)
    }
}

impl Message for SimulationInfo {
    const NAME: &'static str = "simulation-info";

    fn from_value(tree: &Value) -> Result<Self, TypeMappingError> {
        fill(Self::default(), tree)
    }
}

impl<T: Mapped> Message for SlotCollection<T> {
    const NAME: &'static str = "slots";

    fn from_value(tree: &Value) -> Result<Self, TypeMappingError> {
        SlotCollection::from_value(tree)
    }
}

impl Message for UnitCollection {
    const NAME: &'static str = "units";

    fn from_value(tree: &Value) -> Result<Self, TypeMappingError> {
        UnitCollection::from_value(tree)
    }
}

/// Known message names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MessageKind {
    Info,
    Options,
    Slots,
    SlotOptions,
    SimulationInfo,
    Units,
    Heartbeat,
    LogRestart,
    LogUpdate,
    Unknown,
}

impl MessageKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "info" => Self::Info,
            "options" => Self::Options,
            "slots" => Self::Slots,
            "slot-options" => Self::SlotOptions,
            "simulation-info" => Self::SimulationInfo,
            "units" => Self::Units,
            "heartbeat" => Self::Heartbeat,
            "log-restart" => Self::LogRestart,
            "log-update" => Self::LogUpdate,
            _ => Self::Unknown,
        }
    }
}

crate::simple_display! {
    MessageKind {
        Info => "info",
        Options => "options",
        Slots => "slots",
        SlotOptions => "slot-options",
        SimulationInfo => "simulation-info",
        Units => "units",
        Heartbeat => "heartbeat",
        LogRestart => "log-restart",
        LogUpdate => "log-update",
        Unknown => "unknown",
    }
}

/// A framed message mapped onto its model type.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "kebab-case")]
pub enum FahMessage {
    Info(Info),
    Options(Options),
    Slots(SlotCollection),
    SlotOptions(SlotOptions),
    SimulationInfo(SimulationInfo),
    Units(UnitCollection),
    Heartbeat(Value),
    LogRestart(String),
    LogUpdate(String),
    Unknown { name: String, value: Value },
}

impl FahMessage {
    /// Decode and map a framed message according to its wire name.
    pub fn parse(raw: &RawMessage) -> Result<Self, MessageError> {
        let body = raw.body.as_str();
        let message = match MessageKind::from_name(&raw.type_name) {
            MessageKind::Info => Self::Info(parse(body)?),
            MessageKind::Options => Self::Options(parse(body)?),
            MessageKind::Slots => Self::Slots(parse(body)?),
            MessageKind::SlotOptions => Self::SlotOptions(parse(body)?),
            MessageKind::SimulationInfo => Self::SimulationInfo(parse(body)?),
            MessageKind::Units => Self::Units(parse(body)?),
            MessageKind::Heartbeat => Self::Heartbeat(decode_any(body)?),
            MessageKind::LogRestart => Self::LogRestart(log_text(body)?),
            MessageKind::LogUpdate => Self::LogUpdate(log_text(body)?),
            MessageKind::Unknown => {
                Self::Unknown { name: raw.type_name.clone(), value: decode_any(body)? }
            }
        };
        let errors = message.errors().len();
        if errors > 0 {
            tracing::debug!(message = %raw.type_name, errors, "message mapped with conversion errors");
        }
        Ok(message)
    }

    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Info(_) => MessageKind::Info,
            Self::Options(_) => MessageKind::Options,
            Self::Slots(_) => MessageKind::Slots,
            Self::SlotOptions(_) => MessageKind::SlotOptions,
            Self::SimulationInfo(_) => MessageKind::SimulationInfo,
            Self::Units(_) => MessageKind::Units,
            Self::Heartbeat(_) => MessageKind::Heartbeat,
            Self::LogRestart(_) => MessageKind::LogRestart,
            Self::LogUpdate(_) => MessageKind::LogUpdate,
            Self::Unknown { .. } => MessageKind::Unknown,
        }
    }

    /// Every conversion error recorded while mapping, including those of
    /// list elements.
    pub fn errors(&self) -> Vec<&ConversionError> {
        match self {
            Self::Info(m) => m.errors().iter().collect(),
            Self::Options(m) => m.errors().iter().collect(),
            Self::Slots(m) => m.errors().collect(),
            Self::SlotOptions(m) => m.errors().iter().collect(),
            Self::SimulationInfo(m) => m.errors().iter().collect(),
            Self::Units(m) => m.errors().collect(),
            Self::Heartbeat(_) | Self::LogRestart(_) | Self::LogUpdate(_) | Self::Unknown { .. } => {
                Vec::new()
            }
        }
    }
}

fn decode_any(body: &str) -> Result<Value, MessageError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(fah_pyon::decode(body)?)
}

/// Log messages carry a single string literal.
fn log_text(body: &str) -> Result<String, MessageError> {
    match decode_any(body)? {
        Value::Text(text) => Ok(text),
        Value::Null => Ok(String::new()),
        other => Err(TypeMappingError::Shape { target: "log", expected: "text", found: other.kind() }
            .into()),
    }
}

/// A message as handed to subscribers.
#[derive(Debug, Clone, Serialize)]
pub struct Delivery {
    pub type_name: String,
    pub message: FahMessage,
}

impl Delivery {
    pub fn errors(&self) -> Vec<&ConversionError> {
        self.message.errors()
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
