// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive-descent decoder for PyON message bodies.

use crate::{FramingError, Number, Span, Value, ValueMap};

/// Containers may nest at most this deep.
pub const MAX_DEPTH: usize = 128;

/// Decode one complete message body into a [`Value`].
///
/// The body must hold exactly one value, optionally surrounded by whitespace.
pub fn decode(body: &str) -> Result<Value, FramingError> {
    let mut decoder = Decoder::new(body);
    decoder.skip_whitespace();
    let value = decoder.parse_value(0)?;
    decoder.skip_whitespace();
    if let Some(&(pos, _)) = decoder.chars.peek() {
        return Err(FramingError::TrailingCharacters { span: Span::new(pos, body.len()) });
    }
    Ok(value)
}

struct Decoder<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Decoder<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, chars: input.char_indices().peekable() }
    }

    #[inline]
    fn peek(&mut self) -> Option<(usize, char)> {
        self.chars.peek().copied()
    }

    fn end(&self) -> Span {
        Span::empty(self.input.len())
    }

    fn skip_whitespace(&mut self) {
        while let Some((_, ch)) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.chars.next();
        }
    }

    fn parse_value(&mut self, depth: usize) -> Result<Value, FramingError> {
        let Some((pos, ch)) = self.peek() else {
            return Err(FramingError::UnexpectedEnd { span: self.end() });
        };
        match ch {
            '{' | '[' if depth >= MAX_DEPTH => {
                Err(FramingError::TooDeep { limit: MAX_DEPTH, span: Span::new(pos, pos + 1) })
            }
            '{' => self.parse_map(depth + 1),
            '[' => self.parse_list(depth + 1),
            '"' | '\'' => self.parse_string(ch).map(Value::Text),
            '-' | '+' | '.' | '0'..='9' => self.parse_number(),
            c if c.is_ascii_alphabetic() => self.parse_literal(),
            _ => Err(FramingError::UnexpectedChar { ch, span: Span::new(pos, pos + ch.len_utf8()) }),
        }
    }

    fn parse_map(&mut self, depth: usize) -> Result<Value, FramingError> {
        self.chars.next();
        let mut map = ValueMap::new();
        loop {
            self.skip_whitespace();
            let Some((pos, ch)) = self.peek() else {
                return Err(FramingError::UnexpectedEnd { span: self.end() });
            };
            if ch == '}' {
                self.chars.next();
                return Ok(Value::Map(map));
            }

            let key = match self.parse_value(depth)? {
                Value::Text(s) => s,
                Value::Number(n) => n.to_string(),
                _ => return Err(FramingError::InvalidKey { span: Span::new(pos, pos + 1) }),
            };

            self.skip_whitespace();
            self.expect(':')?;
            self.skip_whitespace();
            let value = self.parse_value(depth)?;
            map.insert(key, value);

            if !self.separator('}')? {
                self.chars.next();
                return Ok(Value::Map(map));
            }
        }
    }

    fn parse_list(&mut self, depth: usize) -> Result<Value, FramingError> {
        self.chars.next();
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            let Some((_, ch)) = self.peek() else {
                return Err(FramingError::UnexpectedEnd { span: self.end() });
            };
            if ch == ']' {
                self.chars.next();
                return Ok(Value::List(items));
            }

            items.push(self.parse_value(depth)?);

            if !self.separator(']')? {
                self.chars.next();
                return Ok(Value::List(items));
            }
        }
    }

    /// Consume whitespace and an optional `,` after a container element.
    ///
    /// Returns `false` when the closing delimiter is next (left unconsumed).
    fn separator(&mut self, close: char) -> Result<bool, FramingError> {
        self.skip_whitespace();
        match self.peek() {
            Some((_, ',')) => {
                self.chars.next();
                Ok(true)
            }
            Some((_, ch)) if ch == close => Ok(false),
            Some((pos, ch @ ('}' | ']'))) => Err(FramingError::UnbalancedDelimiter {
                expected: close,
                found: ch,
                span: Span::new(pos, pos + 1),
            }),
            Some((pos, ch)) => {
                Err(FramingError::UnexpectedChar { ch, span: Span::new(pos, pos + ch.len_utf8()) })
            }
            None => Err(FramingError::UnexpectedEnd { span: self.end() }),
        }
    }

    fn expect(&mut self, want: char) -> Result<(), FramingError> {
        match self.chars.next() {
            Some((_, ch)) if ch == want => Ok(()),
            Some((pos, ch)) => {
                Err(FramingError::UnexpectedChar { ch, span: Span::new(pos, pos + ch.len_utf8()) })
            }
            None => Err(FramingError::UnexpectedEnd { span: self.end() }),
        }
    }

    fn parse_string(&mut self, quote: char) -> Result<String, FramingError> {
        let Some((start, _)) = self.chars.next() else {
            return Err(FramingError::UnexpectedEnd { span: self.end() });
        };
        let mut out = String::new();
        while let Some((pos, ch)) = self.chars.next() {
            match ch {
                c if c == quote => return Ok(out),
                '\\' => {
                    let Some((esc_pos, esc)) = self.chars.next() else {
                        break;
                    };
                    let span = Span::new(pos, esc_pos + esc.len_utf8());
                    let replacement = match esc {
                        '\\' => '\\',
                        '"' => '"',
                        '\'' => '\'',
                        '/' => '/',
                        'n' => '\n',
                        't' => '\t',
                        'r' => '\r',
                        'b' => '\u{08}',
                        'f' => '\u{0c}',
                        '0' => '\0',
                        'x' => self.hex_escape(2, pos)?,
                        'u' => self.hex_escape(4, pos)?,
                        _ => return Err(FramingError::InvalidEscape { ch: esc, span }),
                    };
                    out.push(replacement);
                }
                _ => out.push(ch),
            }
        }
        Err(FramingError::UnterminatedString { span: Span::new(start, self.input.len()) })
    }

    fn hex_escape(&mut self, digits: usize, start: usize) -> Result<char, FramingError> {
        let mut code = 0u32;
        for _ in 0..digits {
            let Some((pos, ch)) = self.chars.next() else {
                return Err(FramingError::UnterminatedString {
                    span: Span::new(start, self.input.len()),
                });
            };
            let Some(d) = ch.to_digit(16) else {
                let span = Span::new(start, pos + ch.len_utf8());
                return Err(FramingError::InvalidEscape { ch, span });
            };
            code = code * 16 + d;
        }
        Ok(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    fn parse_number(&mut self) -> Result<Value, FramingError> {
        let start = self.peek().map(|(pos, _)| pos).unwrap_or(self.input.len());
        let mut end = start;
        let mut is_float = false;
        while let Some((pos, ch)) = self.peek() {
            match ch {
                '0'..='9' | '-' | '+' => {}
                '.' | 'e' | 'E' => is_float = true,
                _ => break,
            }
            end = pos + 1;
            self.chars.next();
        }

        let text = &self.input[start..end];
        let span = Span::new(start, end);
        let invalid = || FramingError::InvalidNumber { text: text.to_string(), span };

        if !is_float {
            if let Ok(n) = text.parse::<i64>() {
                return Ok(Value::Number(Number::Int(n)));
            }
        }
        // Falls through for integers too large for i64
        match text.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Value::Number(Number::Float(f))),
            _ => Err(invalid()),
        }
    }

    fn parse_literal(&mut self) -> Result<Value, FramingError> {
        let start = self.peek().map(|(pos, _)| pos).unwrap_or(self.input.len());
        let mut end = start;
        while let Some((pos, ch)) = self.peek() {
            if !(ch.is_ascii_alphanumeric() || ch == '_') {
                break;
            }
            end = pos + 1;
            self.chars.next();
        }
        match &self.input[start..end] {
            "true" | "True" => Ok(Value::Bool(true)),
            "false" | "False" => Ok(Value::Bool(false)),
            "None" | "null" => Ok(Value::Null),
            word => Err(FramingError::UnknownLiteral {
                word: word.to_string(),
                span: Span::new(start, end),
            }),
        }
    }
}

#[cfg(test)]
#[path = "decode_tests.rs"]
mod tests;
