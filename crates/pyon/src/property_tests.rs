// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property tests for framing and decoding invariants.

use proptest::prelude::*;

use super::*;

fn message_name() -> impl Strategy<Value = String> {
    "[a-z][a-z_]{0,12}"
}

fn message_body() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 \n{}\\[\\]\",:.]{0,60}"
}

fn render(name: &str, body: &str) -> String {
    format!("PyON 1 {name}\n{body}\n---\n")
}

proptest! {
    #[test]
    fn framer_yields_every_message_in_order(
        messages in prop::collection::vec((message_name(), message_body()), 1..8)
    ) {
        let stream: String = messages.iter().map(|(n, b)| render(n, b)).collect();

        let mut rest = stream.as_str();
        for (name, body) in &messages {
            let (frame, tail) = extract_next(rest);
            let frame = frame.expect("complete message should frame");
            prop_assert_eq!(frame.type_name, name.as_str());
            prop_assert_eq!(frame.body, body.as_str());
            rest = tail;
        }
        prop_assert_eq!(rest, "");
    }

    #[test]
    fn partial_message_is_never_framed(
        name in message_name(),
        body in message_body(),
        cut in 0.0f64..1.0,
    ) {
        let full = render(&name, &body);
        let len = ((full.len() as f64) * cut) as usize;
        let partial = &full[..len.min(full.len() - 1)];

        let (frame, rest) = extract_next(partial);
        prop_assert!(frame.is_none());
        prop_assert_eq!(rest, partial);
    }

    #[test]
    fn frame_buffer_matches_any_chunking(
        messages in prop::collection::vec((message_name(), message_body()), 1..6),
        chunk in 1usize..32,
    ) {
        let stream: String = messages.iter().map(|(n, b)| render(n, b)).collect();
        let mut buffer = FrameBuffer::new();
        let mut received = Vec::new();
        for piece in stream.as_bytes().chunks(chunk) {
            buffer.push(piece);
            received.extend(buffer.drain_messages());
        }
        let expected: Vec<(String, String)> = messages;
        let actual: Vec<(String, String)> =
            received.into_iter().map(|m| (m.type_name, m.body)).collect();
        prop_assert_eq!(actual, expected);
        prop_assert!(buffer.is_empty());
    }

    #[test]
    fn decode_never_panics(body in "\\PC{0,80}") {
        let _ = decode(&body);
    }

    #[test]
    fn decode_integer_lists(items in prop::collection::vec(any::<i64>(), 0..20)) {
        let body = format!(
            "[{}]",
            items.iter().map(i64::to_string).collect::<Vec<_>>().join(", ")
        );
        let value = decode(&body).expect("valid list");
        let decoded: Vec<i64> = value
            .as_list()
            .expect("list")
            .iter()
            .filter_map(|v| v.as_number().and_then(|n| n.as_i64()))
            .collect();
        prop_assert_eq!(decoded, items);
    }
}
