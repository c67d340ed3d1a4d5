// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fahc decode`: map every message in a captured command-port stream.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use fah_core::{Delivery, FahMessage};
use fah_pyon::{FrameBuffer, HEADER_TAG};
use serde::Serialize;

use crate::color;
use crate::exit_error::{codes, ExitError};
use crate::output::{self, OutputFormat};

/// A framed message whose body could not be decoded or mapped.
#[derive(Debug, Clone, Serialize)]
pub struct DecodeFailure {
    pub type_name: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Decoded {
    Message(Delivery),
    Failed(DecodeFailure),
}

#[derive(Debug, Default)]
pub struct DecodeReport {
    pub entries: Vec<Decoded>,
    /// A message header was seen but its terminator never arrived.
    pub truncated: bool,
}

impl DecodeReport {
    pub fn failures(&self) -> usize {
        self.entries.iter().filter(|e| matches!(e, Decoded::Failed(_))).count()
    }
}

/// Frame and map a whole captured stream.
pub fn decode_stream(bytes: &[u8]) -> DecodeReport {
    let mut buffer = FrameBuffer::new();
    buffer.push(bytes);
    let entries = buffer
        .drain_messages()
        .into_iter()
        .map(|raw| match FahMessage::parse(&raw) {
            Ok(message) => Decoded::Message(Delivery { type_name: raw.type_name, message }),
            Err(e) => {
                tracing::warn!(message = %raw.type_name, error = %e, "failed to decode message");
                Decoded::Failed(DecodeFailure { type_name: raw.type_name, error: e.to_string() })
            }
        })
        .collect();
    DecodeReport { entries, truncated: buffer.pending().contains(HEADER_TAG) }
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut bytes = Vec::new();
        std::io::stdin().read_to_end(&mut bytes).context("failed to read stdin")?;
        return Ok(bytes);
    }
    std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn handle(path: &Path, format: OutputFormat) -> Result<()> {
    let report = decode_stream(&read_input(path)?);

    for entry in &report.entries {
        match (entry, format) {
            (Decoded::Message(delivery), _) => output::print_delivery(delivery, format)?,
            (Decoded::Failed(failure), OutputFormat::Json) => output::print_json(failure)?,
            (Decoded::Failed(failure), OutputFormat::Text) => {
                println!("{}", color::header(&failure.type_name));
                println!("{}", color::warning(&format!("  ! {}", failure.error)));
            }
        }
    }
    if report.truncated {
        eprintln!("warning: input ends inside a message");
    }

    let failures = report.failures();
    if failures > 0 {
        return Err(ExitError::new(
            codes::DECODE_FAILED,
            format!("{failures} of {} messages failed to decode", report.entries.len()),
        )
        .into());
    }
    Ok(())
}

#[cfg(test)]
#[path = "decode_tests.rs"]
mod tests;
