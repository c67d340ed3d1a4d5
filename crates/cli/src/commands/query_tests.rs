// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    info         = { Query::Info,                     "info",               MessageKind::Info },
    options      = { Query::Options,                  "options -a",         MessageKind::Options },
    slots        = { Query::Slots,                    "slot-info",          MessageKind::Slots },
    slot_options = { Query::SlotOptions { slot: 1 },  "slot-options 01 -a", MessageKind::SlotOptions },
    units        = { Query::Units,                    "queue-info",         MessageKind::Units },
    simulation   = { Query::Simulation { slot: 0 },   "simulation-info 00", MessageKind::SimulationInfo },
)]
fn query_command_and_reply(query: Query, line: &str, kind: MessageKind) {
    assert_eq!(query.command().to_string(), line);
    assert_eq!(query.reply_kind(), kind);
}

#[tokio::test]
async fn first_of_kind_skips_other_messages() {
    use fah_core::FahMessage;
    use fah_pyon::RawMessage;

    let (tx, mut rx) = broadcast::channel(8);
    for (name, body) in [("heartbeat", "1"), ("units", "[]"), ("slots", "[]")] {
        let message = FahMessage::parse(&RawMessage::new(name, body)).unwrap();
        tx.send(Arc::new(Delivery { type_name: name.to_string(), message })).unwrap();
    }
    let found = first_of_kind(&mut rx, MessageKind::Units).await.unwrap();
    assert_eq!(found.type_name, "units");
    drop(tx);
    assert!(first_of_kind(&mut rx, MessageKind::Info).await.is_none());
}
