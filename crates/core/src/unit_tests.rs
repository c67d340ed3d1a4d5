// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

const UNITS: &str = r#"[
  {"id": "01", "state": "RUNNING", "error": "NO_ERROR", "project": 11402, "run": 0,
   "clone": 1, "gen": 10, "core": "0xa4", "unit": "0x0000000c0001329c4f3ca6efd7c7aa1e",
   "percentdone": "72.00%", "eta": "1 hours 05 mins", "ppd": "125532",
   "creditestimate": "6843", "waitingon": "", "nextattempt": "0.00 secs",
   "timeremaining": "3.02 days", "totalframes": 100, "framesdone": 72,
   "assigned": "2013-03-19T22:12:55Z", "timeout": "2013-03-20T22:12:55Z",
   "deadline": "2013-03-22T22:12:55Z", "ws": "171.64.65.124", "cs": "0.0.0.0",
   "attempts": 0, "slot": "00", "tpf": "2 mins 38 secs", "basecredit": "4401"},
  {"id": "02", "state": "DOWNLOAD", "project": 0, "percentdone": "n/a",
   "assigned": "<invalid>", "slot": "01", "tpf": "0.00 secs"}
]"#;

fn units() -> UnitCollection {
    UnitCollection::from_value(&fah_pyon::decode(UNITS).unwrap()).unwrap()
}

#[test]
fn running_unit_populates() {
    let units = units();
    let unit = units.by_id(1).unwrap();
    assert!(unit.errors.is_empty(), "{:?}", unit.errors);
    assert_eq!(unit.state, UnitState::Running);
    assert_eq!(unit.project, Some(11402));
    assert_eq!(unit.percent_done, Some(72.0));
    assert_eq!(unit.eta, Some(Duration::from_secs(3_900)));
    assert_eq!(unit.ppd, Some(125_532.0));
    assert_eq!(unit.frames_done, Some(72));
    assert_eq!(unit.tpf, Some(Duration::from_secs(158)));
    assert_eq!(unit.work_server.as_deref(), Some("171.64.65.124"));
    assert_eq!(unit.assigned.unwrap().to_rfc3339(), "2013-03-19T22:12:55+00:00");
}

#[test]
fn partial_unit_keeps_what_converts() {
    let units = units();
    let unit = units.by_id(2).unwrap();
    assert_eq!(unit.state, UnitState::Download);
    assert_eq!(unit.assigned, None);
    assert_eq!(unit.slot, Some(1));
    let names: Vec<_> = unit.errors.iter().map(|e| e.property_name.as_str()).collect();
    assert_eq!(names, ["PercentDone"]);
    assert_eq!(units.errors().count(), 1);
}

#[test]
fn units_by_slot() {
    let units = units();
    assert_eq!(units.len(), 2);
    assert_eq!(units.for_slot(0).count(), 1);
    assert_eq!(units.for_slot(1).map(|u| u.id).collect::<Vec<_>>(), [Some(2)]);
    assert_eq!(units.for_slot(7).count(), 0);
}
