// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message framing over the FAHClient text stream.
//!
//! [`extract_next`] is the pure framing step; [`FrameBuffer`] owns the bytes
//! read from the socket and drains complete messages from them.

use serde::Serialize;

/// Format tag that starts every message header line.
pub const HEADER_TAG: &str = "PyON";

/// Line that ends every message, including the surrounding newlines.
pub const TERMINATOR: &str = "\n---\n";

/// One framed message, borrowing from the buffer it was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Protocol version from the header, `0` when not numeric.
    pub version: u32,
    /// Message name, e.g. `info` or `slots`.
    pub type_name: &'a str,
    /// Everything between the header line and the terminator.
    pub body: &'a str,
}

impl Frame<'_> {
    pub fn to_owned_message(&self) -> RawMessage {
        RawMessage {
            version: self.version,
            type_name: self.type_name.to_string(),
            body: self.body.to_string(),
        }
    }
}

/// An owned framed message, handed from the read loop to the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawMessage {
    pub version: u32,
    pub type_name: String,
    pub body: String,
}

impl RawMessage {
    pub fn new(type_name: impl Into<String>, body: impl Into<String>) -> Self {
        Self { version: 1, type_name: type_name.into(), body: body.into() }
    }
}

/// Extract the next complete message from `buffer`.
///
/// Returns the message and the unconsumed tail. Text before the header line
/// (greeting banner, `> ` prompts) is skipped along with the message. When no
/// complete message is present the buffer is returned unchanged.
pub fn extract_next(buffer: &str) -> (Option<Frame<'_>>, &str) {
    let Some(header_start) = find_header(buffer) else {
        return (None, buffer);
    };
    let Some(header_len) = buffer[header_start..].find('\n') else {
        return (None, buffer);
    };
    let header_end = header_start + header_len;

    // Search from the header's newline so an empty body still matches
    let Some(term_offset) = buffer[header_end..].find(TERMINATOR) else {
        return (None, buffer);
    };
    let body_end = header_end + term_offset;
    let body = if body_end > header_end { &buffer[header_end + 1..body_end] } else { "" };

    let (version, type_name) = parse_header(&buffer[header_start..header_end]);
    let frame = Frame { version, type_name, body: body.trim_end_matches('\r') };
    (Some(frame), &buffer[body_end + TERMINATOR.len()..])
}

/// Byte offset of the first header line in `buffer`.
///
/// A command prompt (`> `) may precede the tag on the same line.
fn find_header(buffer: &str) -> Option<usize> {
    let mut offset = 0;
    for line in buffer.split_inclusive('\n') {
        let unprompted = line.trim_start_matches("> ");
        if let Some(after_tag) = unprompted.strip_prefix(HEADER_TAG) {
            if after_tag.starts_with([' ', '\t']) {
                return Some(offset + (line.len() - unprompted.len()));
            }
        }
        offset += line.len();
    }
    None
}

fn parse_header(line: &str) -> (u32, &str) {
    let mut parts = line.trim_end_matches('\r').split_whitespace().skip(1);
    let version = parts.next().and_then(|v| v.parse().ok()).unwrap_or(0);
    let type_name = parts.next().unwrap_or("");
    (version, type_name)
}

/// Owned, growing receive buffer.
///
/// Accepts raw socket reads in arbitrary chunks, including UTF-8 sequences
/// split across reads, and yields one [`RawMessage`] per call to
/// [`next_message`](Self::next_message).
#[derive(Debug, Default)]
pub struct FrameBuffer {
    text: String,
    /// Trailing bytes of an incomplete UTF-8 sequence.
    carry: Vec<u8>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append bytes read from the socket.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD.
    pub fn push(&mut self, bytes: &[u8]) {
        let mut pending = std::mem::take(&mut self.carry);
        pending.extend_from_slice(bytes);

        let mut input = pending.as_slice();
        loop {
            match std::str::from_utf8(input) {
                Ok(s) => {
                    self.text.push_str(s);
                    break;
                }
                Err(e) => {
                    let (valid, rest) = input.split_at(e.valid_up_to());
                    self.text.push_str(&String::from_utf8_lossy(valid));
                    match e.error_len() {
                        Some(len) => {
                            self.text.push(char::REPLACEMENT_CHARACTER);
                            input = &rest[len..];
                        }
                        None => {
                            self.carry = rest.to_vec();
                            break;
                        }
                    }
                }
            }
        }
    }

    /// Append already-decoded text.
    pub fn push_str(&mut self, text: &str) {
        self.push(text.as_bytes());
    }

    /// Remove and return the next complete message, if any.
    pub fn next_message(&mut self) -> Option<RawMessage> {
        let (frame, rest) = extract_next(&self.text);
        let Some(frame) = frame else {
            self.discard_noise();
            return None;
        };
        let message = frame.to_owned_message();
        let consumed = self.text.len() - rest.len();
        self.text.drain(..consumed);
        Some(message)
    }

    /// Drain every complete message currently buffered.
    pub fn drain_messages(&mut self) -> Vec<RawMessage> {
        std::iter::from_fn(|| self.next_message()).collect()
    }

    /// Discard everything, including any partially received message.
    pub fn reset(&mut self) {
        self.text.clear();
        self.carry.clear();
    }

    /// Buffered text not yet consumed.
    pub fn pending(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len() + self.carry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop complete lines of non-message text so prompts and banners do not
    /// accumulate while no header has arrived.
    fn discard_noise(&mut self) {
        if find_header(&self.text).is_some() {
            return;
        }
        if let Some(last_newline) = self.text.rfind('\n') {
            self.text.drain(..=last_newline);
        }
    }
}

#[cfg(test)]
#[path = "frame_tests.rs"]
mod tests;
