// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

use fah_core::SimulationInfo;

use crate::prelude::*;

#[test]
fn zero_timeout_and_fractional_deadline() {
    let sim: SimulationInfo = mapped("client-v7.4.4/simulation-info2.txt");
    assert_eq!(sim.timeout, Some(0));
    assert_eq!(sim.timeout_date_time, None);

    let names: Vec<&str> = sim.errors.iter().map(|e| e.property_name.as_str()).collect();
    assert_eq!(names, ["Deadline", "DeadlineDateTime"]);
    assert_eq!(sim.deadline, None);
    assert_eq!(sim.deadline_date_time, None);
}

#[test]
fn siblings_of_failed_fields_still_populate() {
    let sim: SimulationInfo = mapped("client-v7.4.4/simulation-info2.txt");
    assert_eq!(sim.project_label().as_deref(), Some("P7610 (R630, C0, G59)"));
    assert_eq!(sim.core.as_deref(), Some("GROGBA4"));
    assert_eq!(sim.progress_percent(), Some(61.1));
    assert_eq!(sim.run_time_time_span, Some(Duration::from_secs(13_582)));
    assert_eq!(sim.eta_time_span, Some(Duration::from_secs(8_470)));
    assert_eq!(sim.slot, Some(1));
}
