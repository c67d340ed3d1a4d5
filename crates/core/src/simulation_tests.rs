// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::fill;

fn simulation(body: &str) -> SimulationInfo {
    fill(SimulationInfo::default(), &fah_pyon::decode(body).unwrap()).unwrap()
}

const RUNNING: &str = r#"{
  "user": "harlam357", "team": 32, "project": 7610, "run": 630, "clone": 0, "gen": 59,
  "core_type": 164, "core": "GROGBSMP", "description": "",
  "total_iterations": 2000, "iterations_done": 660, "energy": 0, "temperature": 0,
  "start_time": "2012-02-15T17:32:48", "timeout": 1329842784, "deadline": 1330447584,
  "run_time": 6372, "simulation_time": 0, "eta": 12833, "news": "", "slot": 0
}"#;

#[test]
fn raw_and_derived_fields_populate() {
    let sim = simulation(RUNNING);
    assert!(sim.errors.is_empty(), "{:?}", sim.errors);
    assert_eq!(sim.project, Some(7610));
    assert_eq!(sim.core.as_deref(), Some("GROGBSMP"));
    assert_eq!(
        sim.start_time_date_time.unwrap().to_rfc3339(),
        "2012-02-15T17:32:48+00:00"
    );
    assert_eq!(sim.timeout_date_time.unwrap().to_rfc3339(), "2012-02-21T16:46:24+00:00");
    assert_eq!(sim.run_time_time_span, Some(Duration::from_secs(6372)));
    assert_eq!(sim.eta_time_span, Some(Duration::from_secs(12833)));
    assert_eq!(sim.slot, Some(0));
}

#[test]
fn progress_and_label() {
    let sim = simulation(RUNNING);
    assert_eq!(sim.progress_percent(), Some(33.0));
    assert_eq!(sim.project_label().as_deref(), Some("P7610 (R630, C0, G59)"));
    assert_eq!(SimulationInfo::default().progress_percent(), None);
    assert_eq!(SimulationInfo::default().project_label(), None);
}

#[test]
fn zero_timeout_has_no_date() {
    let sim = simulation(r#"{"timeout": 0}"#);
    assert_eq!(sim.timeout, Some(0));
    assert_eq!(sim.timeout_date_time, None);
    assert!(sim.errors.is_empty());
}

#[test]
fn bad_deadline_fails_both_views() {
    let sim = simulation(r#"{"deadline": -1.5, "eta": 60}"#);
    assert_eq!(sim.deadline, None);
    assert_eq!(sim.deadline_date_time, None);
    assert_eq!(sim.eta, Some(60));
    let names: Vec<_> = sim.errors.iter().map(|e| e.property_name.as_str()).collect();
    assert_eq!(names, ["Deadline", "DeadlineDateTime"]);
}

#[test]
fn invalid_start_time_marker_is_unset() {
    let sim = simulation(r#"{"start_time": "<invalid>"}"#);
    assert_eq!(sim.start_time.as_deref(), Some("<invalid>"));
    assert_eq!(sim.start_time_date_time, None);
    assert!(sim.errors.is_empty());
}

#[test]
fn negative_eta_keeps_raw_value() {
    let sim = simulation(r#"{"eta": -5}"#);
    assert_eq!(sim.eta, Some(-5));
    assert_eq!(sim.eta_time_span, None);
    assert_eq!(sim.errors.len(), 1);
    assert_eq!(sim.errors[0].property_name, "EtaTimeSpan");
}
