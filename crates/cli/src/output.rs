// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of mapped messages for the terminal.

use clap::ValueEnum;
use fah_core::{ConversionError, Delivery, FahMessage, Info, SimulationInfo, Slot, Unit};
use serde::Serialize;

use crate::color;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON document per line.
    Json,
}

/// Print one value as a single JSON line.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

pub fn print_delivery(delivery: &Delivery, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(delivery)?,
        OutputFormat::Text => {
            for line in render(delivery) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// Human-readable summary of a delivery, followed by its conversion errors.
pub fn render(delivery: &Delivery) -> Vec<String> {
    let mut lines = vec![color::header(&delivery.type_name)];
    match &delivery.message {
        FahMessage::Info(info) => lines.extend(info_lines(info)),
        FahMessage::Options(options) => {
            lines.push(field("user", options.user.as_deref()));
            lines.push(field("team", options.team.map(|t| t.to_string()).as_deref()));
            lines.push(field("client-type", Some(options.client_type.to_string().as_str())));
            lines.push(field("power", options.power.as_deref()));
        }
        FahMessage::Slots(slots) => lines.extend(slots.iter().map(slot_line)),
        FahMessage::SlotOptions(options) => {
            lines.push(field("client-type", Some(options.client_type.to_string().as_str())));
            lines.push(field("core-priority", Some(options.core_priority.to_string().as_str())));
            lines.push(field("paused", options.paused.map(|p| p.to_string()).as_deref()));
        }
        FahMessage::SimulationInfo(sim) => lines.extend(simulation_lines(sim)),
        FahMessage::Units(units) => lines.extend(units.iter().map(unit_line)),
        FahMessage::Heartbeat(value) => lines.push(format!("  {}", value_text(value))),
        FahMessage::LogRestart(text) | FahMessage::LogUpdate(text) => {
            lines.extend(text.lines().map(|l| format!("  {l}")));
        }
        FahMessage::Unknown { name, .. } => {
            lines.push(color::context(&format!("  unrecognized message '{name}'")));
        }
    }
    lines.extend(delivery.errors().into_iter().map(error_line));
    lines
}

fn field(name: &str, value: Option<&str>) -> String {
    format!("  {:<16}{}", name, value.unwrap_or("-"))
}

fn error_line(error: &ConversionError) -> String {
    color::warning(&format!("  ! {error}"))
}

fn value_text(value: &fah_pyon::Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "?".to_string())
}

fn info_lines(info: &Info) -> Vec<String> {
    let system = &info.system;
    let gpus: Vec<&str> = (0..fah_core::MAX_GPUS).filter_map(|i| system.gpu_id(i)).collect();
    let mut lines = vec![
        field("version", info.build.version.as_deref()),
        field("os", system.operating_system.as_deref()),
        field("cpu", system.cpu.as_deref()),
        field("cpus", system.cpu_count.map(|c| c.to_string()).as_deref()),
        field("memory", system.memory.as_deref()),
    ];
    lines.extend(gpus.iter().enumerate().map(|(i, gpu)| field(&format!("gpu {i}"), Some(gpu))));
    lines
}

fn slot_line(slot: &Slot) -> String {
    let id = slot.id.map(|id| format!("{id:02}")).unwrap_or_else(|| "--".to_string());
    format!(
        "  slot {id}  {:<10}{}",
        slot.status.to_string(),
        color::context(slot.description.as_deref().unwrap_or(""))
    )
}

fn simulation_lines(sim: &SimulationInfo) -> Vec<String> {
    vec![
        field("project", sim.project_label().as_deref()),
        field("core", sim.core.as_deref()),
        field("progress", sim.progress_percent().map(|p| format!("{p:.1}%")).as_deref()),
        field("deadline", sim.deadline_date_time.map(|d| d.to_rfc3339()).as_deref()),
    ]
}

fn unit_line(unit: &Unit) -> String {
    let coords = match (unit.project, unit.run, unit.clone, unit.gen) {
        (Some(p), Some(r), Some(c), Some(g)) => format!("P{p} (R{r}, C{c}, G{g})"),
        _ => "-".to_string(),
    };
    format!(
        "  unit {:02}  slot {:02}  {:<10}{coords}  {}",
        unit.id.unwrap_or_default(),
        unit.slot.unwrap_or_default(),
        unit.state.to_string(),
        unit.percent_done.map(|p| format!("{p:.1}%")).unwrap_or_default()
    )
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
