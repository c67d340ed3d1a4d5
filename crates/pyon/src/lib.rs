// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! FAHClient command-port wire format.
//!
//! Wire format: `PyON <version> <name>\n<body>\n---\n`, where the body is a
//! Python-literal-like value (maps, lists, strings, numbers, booleans, None).

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod decode;
mod error;
mod frame;
mod span;
mod value;

pub use decode::{decode, MAX_DEPTH};
pub use error::FramingError;
pub use frame::{extract_next, Frame, FrameBuffer, RawMessage, HEADER_TAG, TERMINATOR};
pub use span::Span;
pub use value::{Number, Value, ValueMap};

#[cfg(test)]
mod property_tests;
