// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::Slot;

#[yare::parameterized(
    empty      = { "" },
    whitespace = { "  \n\t " },
)]
fn empty_body_is_an_argument_error(body: &str) {
    let err = parse::<Options>(body).unwrap_err();
    assert!(matches!(err, MessageError::Argument(_)), "{err:?}");
    assert!(err.to_string().contains("options"));
}

#[test]
fn malformed_body_is_a_framing_error() {
    let err = parse::<Options>("{\"user\": \"x\"").unwrap_err();
    assert!(matches!(err, MessageError::Framing(_)), "{err:?}");
}

#[test]
fn wrong_root_shape_is_a_type_mapping_error() {
    let err = parse::<SlotCollection<Slot>>("{\"id\": \"00\"}").unwrap_err();
    assert!(matches!(err, MessageError::TypeMapping(TypeMappingError::Shape { .. })), "{err:?}");
}

#[yare::parameterized(
    info       = { "info",            MessageKind::Info },
    options    = { "options",         MessageKind::Options },
    slots      = { "slots",           MessageKind::Slots },
    slot_opts  = { "slot-options",    MessageKind::SlotOptions },
    simulation = { "simulation-info", MessageKind::SimulationInfo },
    units      = { "units",           MessageKind::Units },
    heartbeat  = { "heartbeat",       MessageKind::Heartbeat },
    restart    = { "log-restart",     MessageKind::LogRestart },
    update     = { "log-update",      MessageKind::LogUpdate },
    other      = { "ppd",             MessageKind::Unknown },
)]
fn kind_from_name(name: &str, kind: MessageKind) {
    assert_eq!(MessageKind::from_name(name), kind);
    if kind != MessageKind::Unknown {
        assert_eq!(kind.to_string(), name);
    }
}

#[test]
fn dispatch_maps_slots() {
    let raw = RawMessage::new("slots", r#"[{"id": "00", "status": "READY", "idle": "x"}]"#);
    let message = FahMessage::parse(&raw).unwrap();
    assert_eq!(message.kind(), MessageKind::Slots);
    let FahMessage::Slots(slots) = &message else { panic!("expected slots, got {message:?}") };
    assert_eq!(slots.len(), 1);
    assert_eq!(message.errors().len(), 1);
}

#[test]
fn log_messages_are_single_strings() {
    let raw = RawMessage::new("log-update", r#""12:00:01:WU00:FS00:Connecting\n""#);
    match FahMessage::parse(&raw).unwrap() {
        FahMessage::LogUpdate(text) => assert_eq!(text, "12:00:01:WU00:FS00:Connecting\n"),
        other => panic!("unexpected {other:?}"),
    }
    let bad = RawMessage::new("log-restart", "[1, 2]");
    assert!(matches!(FahMessage::parse(&bad), Err(MessageError::TypeMapping(_))));
}

#[test]
fn heartbeat_and_unknown_keep_raw_value() {
    let beat = FahMessage::parse(&RawMessage::new("heartbeat", "3")).unwrap();
    assert!(matches!(beat, FahMessage::Heartbeat(Value::Number(_))));

    let other = FahMessage::parse(&RawMessage::new("ppd", "{\"ppd\": 1}")).unwrap();
    match other {
        FahMessage::Unknown { name, value } => {
            assert_eq!(name, "ppd");
            assert!(value.get("ppd").is_some());
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn typed_message_with_empty_body_is_rejected() {
    let raw = RawMessage::new("info", "");
    assert!(matches!(FahMessage::parse(&raw), Err(MessageError::Argument(_))));
}

#[test]
fn delivery_serializes_with_kind_tag() {
    let raw = RawMessage::new("simulation-info", r#"{"project": 7610, "slot": 0}"#);
    let delivery = Delivery { type_name: raw.type_name.clone(), message: FahMessage::parse(&raw).unwrap() };
    let json = serde_json::to_value(&delivery).unwrap();
    assert_eq!(json["type_name"], "simulation-info");
    assert_eq!(json["message"]["kind"], "simulation-info");
    assert_eq!(json["message"]["message"]["project"], 7610);
    assert!(delivery.errors().is_empty());
}
