// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for fixture specs.

use std::path::{Path, PathBuf};

pub use fah_core::{parse, Message};
pub use fah_pyon::{FrameBuffer, RawMessage};

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Raw text of `tests/fixtures/<name>`.
pub fn fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {path:?}: {e}"))
}

/// Frame a fixture that holds exactly one message.
pub fn framed(name: &str) -> RawMessage {
    let mut buffer = FrameBuffer::new();
    buffer.push_str(&fixture(name));
    let messages = buffer.drain_messages();
    assert_eq!(messages.len(), 1, "{name} should hold one message");
    messages.into_iter().next().unwrap()
}

/// Frame, decode and map a single-message fixture.
pub fn mapped<M: Message>(name: &str) -> M {
    let raw = framed(name);
    assert_eq!(raw.type_name, M::NAME, "{name} holds the wrong message");
    parse::<M>(&raw.body).unwrap_or_else(|e| panic!("{name}: {e}"))
}
