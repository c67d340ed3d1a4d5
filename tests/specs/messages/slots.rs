// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use fah_core::{SlotCollection, SlotStatus, SlotType};

use crate::prelude::*;

#[test]
fn client_7_4_slots_keep_order_and_descriptions() {
    let slots: SlotCollection = mapped("client-v7.4.4/slots.txt");
    assert_eq!(slots.len(), 3);

    let ids: Vec<Option<i32>> = slots.iter().map(|s| s.id).collect();
    assert_eq!(ids, [Some(0), Some(1), Some(2)]);

    let descriptions: Vec<&str> =
        slots.iter().map(|s| s.description.as_deref().unwrap_or_default()).collect();
    similar_asserts::assert_eq!(
        descriptions,
        [
            "smp:4",
            "gpu:0:\"GT200 [GeForce GTX 260]\"",
            "gpu:1:\"G92 [GeForce 9800 GTX]\"",
        ]
    );
    assert_eq!(slots.errors().count(), 0);
}

#[test]
fn client_7_4_slots_derive_type_status_and_options() {
    let slots: SlotCollection = mapped("client-v7.4.4/slots.txt");
    let types: Vec<SlotType> = slots.iter().map(|s| s.slot_type).collect();
    assert_eq!(types, [SlotType::Smp, SlotType::Gpu, SlotType::Gpu]);

    let paused = slots.by_id(2).unwrap();
    assert_eq!(paused.status, SlotStatus::Paused);
    assert_eq!(paused.reason.as_deref(), Some("by user"));
    assert_eq!(paused.options.paused, Some(true));
    assert_eq!(paused.options.pause_on_start, Some(true));
    assert_eq!(paused.idle, Some(false));
}
