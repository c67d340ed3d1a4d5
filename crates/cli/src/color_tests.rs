// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

fn force_color(on: bool) {
    if on {
        std::env::set_var("COLOR", "1");
        std::env::remove_var("NO_COLOR");
    } else {
        std::env::set_var("NO_COLOR", "1");
        std::env::remove_var("COLOR");
    }
}

#[test]
#[serial]
fn styles_follow_color_setting() {
    let plain = format!("{:?}", Styles::plain());
    force_color(true);
    assert_ne!(format!("{:?}", styles()), plain);
    force_color(false);
    assert_eq!(format!("{:?}", styles()), plain);
}

#[yare::parameterized(
    paints_header  = { super::header as fn(&str) -> String,  codes::HEADER },
    paints_context = { super::context as fn(&str) -> String, codes::CONTEXT },
    paints_warning = { super::warning as fn(&str) -> String, codes::WARNING },
)]
#[serial]
fn paint_wraps_text_when_forced(paint: fn(&str) -> String, code: u8) {
    force_color(true);
    let result = paint("slot 00");
    assert!(result.starts_with(&format!("\x1b[38;5;{code}m")), "{result:?}");
    assert!(result.ends_with("slot 00\x1b[0m"), "{result:?}");
}

#[test]
#[serial]
fn no_color_returns_plain_text() {
    force_color(false);
    assert_eq!(header("info"), "info");
    assert_eq!(warning("Deadline: bad"), "Deadline: bad");
}
