// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for typed message mapping.

use fah_pyon::FramingError;
use serde::Serialize;
use thiserror::Error;

/// One property whose raw value could not be converted.
///
/// Recorded on the owning object; never aborts a fill.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[error("{property_name}: {reason}")]
pub struct ConversionError {
    pub property_name: String,
    pub reason: String,
}

impl ConversionError {
    pub fn new(property_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { property_name: property_name.into(), reason: reason.into() }
    }

    /// Prefix the property name with its owner, e.g. `System.CpuCount`.
    pub fn qualified(&self, owner: &str) -> Self {
        Self::new(format!("{owner}.{}", self.property_name), self.reason.clone())
    }
}

/// The decoded tree does not have the shape the target type requires.
///
/// Fatal for the fill call that raised it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeMappingError {
    #[error("cannot fill {target}: expected {expected}, found {found}")]
    Shape { target: &'static str, expected: &'static str, found: &'static str },

    #[error("cannot fill {target}: element {index} is {found}, expected map")]
    Element { target: &'static str, index: usize, found: &'static str },
}

/// Errors from the message parse entry points.
#[derive(Debug, Error)]
pub enum MessageError {
    /// Caller contract violation, rejected before decoding.
    #[error("invalid argument: {0}")]
    Argument(String),

    #[error("malformed message body: {0}")]
    Framing(#[from] FramingError),

    #[error(transparent)]
    TypeMapping(#[from] TypeMappingError),
}
