// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A captured command-port session read the way the connection reads it.

use fah_core::{Delivery, FahMessage, MessageKind};
use fah_pyon::{extract_next, HEADER_TAG};

use crate::prelude::*;

const SESSION: &str = "client-v7.4.4/session.txt";
const EXPECTED: [&str; 5] = ["options", "slots", "log-restart", "units", "heartbeat"];

fn names(messages: &[RawMessage]) -> Vec<&str> {
    messages.iter().map(|m| m.type_name.as_str()).collect()
}

#[test]
fn whole_session_frames_in_order() {
    let mut buffer = FrameBuffer::new();
    buffer.push_str(&fixture(SESSION));
    let messages = buffer.drain_messages();
    assert_eq!(names(&messages), EXPECTED);
    assert!(buffer.pending().starts_with("> PyON 1 simulation-info"), "{:?}", buffer.pending());
}

#[test]
fn chunked_reads_frame_identically() {
    let bytes = fixture(SESSION).into_bytes();
    let whole = {
        let mut buffer = FrameBuffer::new();
        buffer.push(&bytes);
        buffer.drain_messages()
    };

    for chunk_size in [1, 7, 64, 4096] {
        let mut buffer = FrameBuffer::new();
        let mut messages = Vec::new();
        for chunk in bytes.chunks(chunk_size) {
            buffer.push(chunk);
            messages.extend(buffer.drain_messages());
        }
        similar_asserts::assert_eq!(messages, whole, "chunk size {chunk_size}");
    }
}

#[test]
fn pure_framer_leaves_partial_tail_untouched() {
    let text = fixture(SESSION);
    let mut rest = text.as_str();
    let mut count = 0;
    loop {
        let (frame, tail) = extract_next(rest);
        let Some(_) = frame else { break };
        rest = tail;
        count += 1;
    }
    assert_eq!(count, EXPECTED.len());

    let (frame, tail) = extract_next(rest);
    assert!(frame.is_none());
    assert_eq!(tail, rest);
    assert!(tail.contains(HEADER_TAG));
}

#[test]
fn session_maps_to_typed_messages() {
    let mut buffer = FrameBuffer::new();
    buffer.push_str(&fixture(SESSION));
    let deliveries: Vec<Delivery> = buffer
        .drain_messages()
        .into_iter()
        .map(|raw| {
            let message = FahMessage::parse(&raw).unwrap_or_else(|e| panic!("{}: {e}", raw.type_name));
            Delivery { type_name: raw.type_name, message }
        })
        .collect();

    let kinds: Vec<MessageKind> = deliveries.iter().map(|d| d.message.kind()).collect();
    assert_eq!(
        kinds,
        [
            MessageKind::Options,
            MessageKind::Slots,
            MessageKind::LogRestart,
            MessageKind::Units,
            MessageKind::Heartbeat,
        ]
    );
    assert!(deliveries.iter().all(|d| d.errors().is_empty()));

    let FahMessage::LogRestart(log) = &deliveries[2].message else {
        panic!("expected log text");
    };
    assert!(log.lines().nth(1).is_some_and(|l| l.ends_with("Trying to access database...")));
}

#[test]
fn deliveries_serialize_with_kind_tag() {
    let raw = framed("client-v7.4.4/units.txt");
    let delivery = Delivery { type_name: raw.type_name.clone(), message: FahMessage::parse(&raw).unwrap() };
    let json: serde_json::Value = serde_json::to_value(&delivery).unwrap();
    assert_eq!(json["type_name"], "units");
    assert_eq!(json["message"]["kind"], "units");
    assert_eq!(json["message"]["message"][0]["project"], 7610);
}
