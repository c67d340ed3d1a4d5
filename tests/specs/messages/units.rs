// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

use fah_core::{UnitCollection, UnitState};

use crate::prelude::*;

#[test]
fn client_7_4_units_map() {
    let units: UnitCollection = mapped("client-v7.4.4/units.txt");
    assert_eq!(units.len(), 1);
    assert_eq!(units.errors().count(), 0);

    let unit = units.by_id(0).unwrap();
    assert_eq!(unit.state, UnitState::Running);
    assert_eq!((unit.project, unit.run, unit.clone, unit.gen), (Some(7610), Some(630), Some(0), Some(59)));
    assert_eq!(unit.percent_done, Some(61.1));
    assert_eq!(unit.eta, Some(Duration::from_secs(2 * 3_600 + 21 * 60)));
    assert_eq!(unit.tpf, Some(Duration::from_secs(222)));
    assert_eq!(unit.collection_server.as_deref(), Some("171.67.108.25"));
    assert_eq!(unit.deadline.unwrap().to_rfc3339(), "2012-04-01T00:52:37+00:00");
    assert_eq!(units.for_slot(1).count(), 1);
}
