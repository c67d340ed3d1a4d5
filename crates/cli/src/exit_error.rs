// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error carrying a process exit code.
//!
//! Handlers return `ExitError` inside `anyhow::Error`; `main()` downcasts it
//! and exits with the code instead of the generic failure status.

use std::fmt;

pub mod codes {
    /// Some framed messages in the input could not be decoded or mapped.
    pub const DECODE_FAILED: i32 = 3;
    /// The client could not reach or lost the FAHClient command port.
    pub const UNREACHABLE: i32 = 4;
    /// No reply of the expected kind arrived in time.
    pub const NO_REPLY: i32 = 5;
}

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ExitError {}
