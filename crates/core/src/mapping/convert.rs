// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field converters: raw [`Value`] to typed field value.
//!
//! FAHClient sends most scalars as text (`"CPUs": "4"`), so numeric and
//! boolean converters accept both the native literal and its text form.

use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, Utc};
use fah_pyon::Value;

use crate::FromToken;

fn mismatch(expected: &str, value: &Value) -> String {
    match value {
        Value::Text(s) => format!("cannot convert text \"{s}\" to {expected}"),
        other => format!("cannot convert {} to {expected}", other.kind()),
    }
}

/// Any scalar rendered as text.
pub fn text(value: &Value) -> Result<String, String> {
    match value {
        Value::Text(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(mismatch("text", other)),
    }
}

/// Text with surrounding whitespace removed; empty text is rejected.
pub fn non_empty_text(value: &Value) -> Result<String, String> {
    let s = text(value)?;
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("text is empty".to_string());
    }
    Ok(trimmed.to_string())
}

pub fn int64(value: &Value) -> Result<i64, String> {
    match value {
        Value::Number(n) => n.as_i64().ok_or_else(|| format!("{n} is not an integer")),
        Value::Text(s) => s.trim().parse::<i64>().map_err(|_| mismatch("an integer", value)),
        other => Err(mismatch("an integer", other)),
    }
}

pub fn int32(value: &Value) -> Result<i32, String> {
    let n = int64(value)?;
    i32::try_from(n).map_err(|_| format!("{n} is out of range for a 32-bit integer"))
}

pub fn float64(value: &Value) -> Result<f64, String> {
    match value {
        Value::Number(n) => Ok(n.as_f64()),
        Value::Text(s) => match s.trim().parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(f),
            _ => Err(mismatch("a number", value)),
        },
        other => Err(mismatch("a number", other)),
    }
}

/// A percentage such as `"72.00%"` or `72.0`.
pub fn percent(value: &Value) -> Result<f64, String> {
    match value {
        Value::Text(s) => float64(&Value::from(s.trim().trim_end_matches('%'))),
        other => float64(other),
    }
}

/// `true`/`false` literals or their lowercase text form.
pub fn boolean(value: &Value) -> Result<bool, String> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Text(s) if s == "true" => Ok(true),
        Value::Text(s) if s == "false" => Ok(false),
        other => Err(mismatch("a boolean", other)),
    }
}

/// Closed enumeration from a text token. Unrecognized tokens are `Unknown`.
pub fn token<E: FromToken>(value: &Value) -> Result<E, String> {
    match value {
        Value::Text(s) => Ok(E::from_token(s)),
        other => Err(mismatch("a token", other)),
    }
}

/// Memory size such as `"4.00GiB"` or `"512.00MiB"`, in GiB.
pub fn memory_gib(value: &Value) -> Result<f64, String> {
    let s = text(value)?;
    let trimmed = s.trim();
    let units: [(&str, f64); 5] = [
        ("TiB", 1024.0),
        ("GiB", 1.0),
        ("MiB", 1.0 / 1024.0),
        ("KiB", 1.0 / (1024.0 * 1024.0)),
        ("B", 1.0 / (1024.0 * 1024.0 * 1024.0)),
    ];
    for (suffix, scale) in units {
        if let Some(number) = trimmed.strip_suffix(suffix) {
            return number
                .trim()
                .parse::<f64>()
                .map(|n| n * scale)
                .map_err(|_| mismatch("a memory size", value));
        }
    }
    float64(value)
}

/// Unix timestamp in seconds. Zero means "not set".
pub fn unix_time(value: &Value) -> Result<Option<DateTime<Utc>>, String> {
    let secs = int64(value)?;
    if secs == 0 {
        return Ok(None);
    }
    DateTime::from_timestamp(secs, 0)
        .map(Some)
        .ok_or_else(|| format!("{secs} is out of range for a timestamp"))
}

/// ISO-8601 date/time, with or without a zone. Zone-less values are UTC.
///
/// FAHClient reports unset times as `<invalid>`, which maps to `None`.
pub fn iso_time(value: &Value) -> Result<Option<DateTime<Utc>>, String> {
    let s = text(value)?;
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed == "<invalid>" {
        return Ok(None);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S"))
        .map(|naive| Some(naive.and_utc()))
        .map_err(|_| mismatch("a date/time", value))
}

/// Whole seconds as a duration. Negative values are rejected.
pub fn seconds(value: &Value) -> Result<Duration, String> {
    let secs = int64(value)?;
    u64::try_from(secs)
        .map(Duration::from_secs)
        .map_err(|_| format!("{secs} is not a valid number of seconds"))
}

/// Human duration such as `"1 hours 05 mins"`, `"3.02 days"` or `"38 secs"`.
pub fn duration_text(value: &Value) -> Result<Duration, String> {
    if let Value::Number(_) = value {
        return seconds(value);
    }
    let s = text(value)?;
    let mut words = s.split_whitespace();
    let mut total = 0.0f64;
    let mut matched = false;
    while let Some(amount) = words.next() {
        let amount: f64 = amount.parse().map_err(|_| mismatch("a duration", value))?;
        let Some(unit) = words.next() else {
            return Err(mismatch("a duration", value));
        };
        let scale = match unit {
            "day" | "days" => 86_400.0,
            "hour" | "hours" => 3_600.0,
            "min" | "mins" => 60.0,
            "sec" | "secs" => 1.0,
            _ => return Err(mismatch("a duration", value)),
        };
        total += amount * scale;
        matched = true;
    }
    if !matched || total < 0.0 {
        return Err(mismatch("a duration", value));
    }
    Ok(Duration::from_secs_f64(total))
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
