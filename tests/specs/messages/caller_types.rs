// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Caller-defined types mapped with the stock machinery.

use std::sync::LazyLock;

use fah_core::mapping::convert;
use fah_core::{
    fill, fill_list, ConversionError, Mapped, PropertyTable, Slot, SlotCollection,
    TypeMappingError,
};

use crate::prelude::*;

/// A slot view that also reads `id` as a boolean.
#[derive(Debug, Default)]
struct SlotWithFlag {
    slot: Slot,
    id_text: Option<String>,
    id_flag: Option<bool>,
    errors: Vec<ConversionError>,
}

fah_core::message_object!(SlotWithFlag);

fn base_slot(target: &mut SlotWithFlag) -> &mut Slot {
    &mut target.slot
}

static SLOT_WITH_FLAG: LazyLock<PropertyTable<SlotWithFlag>> = LazyLock::new(|| {
    PropertyTable::<SlotWithFlag>::builder()
        .embed::<Slot>(base_slot)
        .field("IdText", "id", convert::text, |s, v| s.id_text = Some(v))
        .field("IdFlag", "id", convert::boolean, |s, v| s.id_flag = Some(v))
        .build()
});

impl Mapped for SlotWithFlag {
    fn property_table() -> &'static PropertyTable<Self> {
        &SLOT_WITH_FLAG
    }
}

#[test]
fn same_wire_key_converts_independently() {
    let tree = fah_pyon::decode(r#"{"id": "00"}"#).unwrap();
    let view = fill(SlotWithFlag::default(), &tree).unwrap();

    assert_eq!(view.id_text.as_deref(), Some("00"));
    assert_eq!(view.id_flag, None);
    assert_eq!(view.slot.id, Some(0));
    assert_eq!(view.errors.len(), 1);
    assert_eq!(view.errors[0].property_name, "IdFlag");
}

#[test]
fn extended_slots_fill_from_fixture() {
    let raw = framed("client-v7.4.4/slots.txt");
    let tree = fah_pyon::decode(&raw.body).unwrap();
    let slots = SlotCollection::<SlotWithFlag>::from_value(&tree).unwrap();

    assert_eq!(slots.len(), 3);
    for (index, view) in slots.iter().enumerate() {
        assert_eq!(view.id_text, Some(format!("{index:02}")));
        assert_eq!(view.slot.id, i32::try_from(index).ok());
        let names: Vec<&str> = view.errors.iter().map(|e| e.property_name.as_str()).collect();
        assert_eq!(names, ["IdFlag"]);
    }
}

#[test]
fn non_map_elements_fail_the_whole_list() {
    let tree = fah_pyon::decode(r#"[{"id": "00"}, "01"]"#).unwrap();
    let err = fill_list::<Slot>(&tree).unwrap_err();
    assert!(matches!(err, TypeMappingError::Element { index: 1, found: "text", .. }), "{err}");

    let not_a_list = fah_pyon::decode(r#"{"id": "00"}"#).unwrap();
    assert!(matches!(fill_list::<Slot>(&not_a_list), Err(TypeMappingError::Shape { .. })));
}
