// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::builder::styling::{Ansi256Color, Color, Style, Styles};
use std::io::IsTerminal;

pub mod codes {
    /// Message names and section headers: steel blue
    pub const HEADER: u8 = 74;
    /// Commands and literals: light grey
    pub const LITERAL: u8 = 250;
    /// Secondary detail: medium grey
    pub const CONTEXT: u8 = 245;
    /// Conversion errors: soft red
    pub const WARNING: u8 = 174;
}

/// Whether to emit ANSI colors.
///
/// Priority: `NO_COLOR=1` disables, `COLOR=1` forces, otherwise a TTY check.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Clap help styles using the project palette.
pub fn styles() -> Styles {
    if !should_colorize() {
        return Styles::plain();
    }
    let fg = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    Styles::styled()
        .header(fg(codes::HEADER))
        .literal(fg(codes::LITERAL))
        .placeholder(fg(codes::CONTEXT))
}

fn paint(code: u8, text: &str) -> String {
    if should_colorize() {
        format!("\x1b[38;5;{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

pub fn warning(text: &str) -> String {
    paint(codes::WARNING, text)
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
