// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while decoding a message body.

use crate::Span;
use thiserror::Error;

/// A message body that could not be decoded into a [`Value`](crate::Value).
///
/// Only the offending message is lost; the frame buffer has already advanced
/// past it when this error is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FramingError {
    /// The body ended in the middle of a value.
    #[error("unexpected end of body at position {}", span.start)]
    UnexpectedEnd {
        /// Location where more input was expected.
        span: Span,
    },

    /// A character that cannot start or continue a value.
    #[error("unexpected character '{ch}' at position {}", span.start)]
    UnexpectedChar {
        /// The unexpected character.
        ch: char,
        /// Source location span for the error.
        span: Span,
    },

    /// A closing bracket that does not match the open container.
    #[error("expected '{expected}' but found '{found}' at position {}", span.start)]
    UnbalancedDelimiter {
        /// The delimiter that would have closed the container.
        expected: char,
        /// The delimiter actually found.
        found: char,
        /// Source location span for the error.
        span: Span,
    },

    /// A quoted string without its closing quote.
    #[error("unterminated string at position {}", span.start)]
    UnterminatedString {
        /// Span from the opening quote to the end of the body.
        span: Span,
    },

    /// A backslash escape that is not understood.
    #[error("invalid escape sequence '\\{ch}' at position {}", span.start)]
    InvalidEscape {
        /// The character after the backslash.
        ch: char,
        /// Source location span for the error.
        span: Span,
    },

    /// A numeric literal that cannot be represented.
    #[error("invalid number '{text}' at position {}", span.start)]
    InvalidNumber {
        /// The literal text.
        text: String,
        /// Source location span for the error.
        span: Span,
    },

    /// A bare word that is not `true`, `false`, `None` or `null`.
    #[error("unknown literal '{word}' at position {}", span.start)]
    UnknownLiteral {
        /// The bare word.
        word: String,
        /// Source location span for the error.
        span: Span,
    },

    /// A map key that is not a string or number.
    #[error("map key must be a string at position {}", span.start)]
    InvalidKey {
        /// Source location span for the error.
        span: Span,
    },

    /// Content after the top-level value.
    #[error("trailing characters at position {}", span.start)]
    TrailingCharacters {
        /// Span of the trailing content.
        span: Span,
    },

    /// Containers nested deeper than [`MAX_DEPTH`](crate::MAX_DEPTH).
    #[error("nesting exceeds {limit} levels at position {}", span.start)]
    TooDeep {
        /// The configured limit.
        limit: usize,
        /// Location of the container that crossed the limit.
        span: Span,
    },
}

impl FramingError {
    /// Location in the body where the error was detected.
    pub fn span(&self) -> Span {
        match self {
            Self::UnexpectedEnd { span }
            | Self::UnexpectedChar { span, .. }
            | Self::UnbalancedDelimiter { span, .. }
            | Self::UnterminatedString { span }
            | Self::InvalidEscape { span, .. }
            | Self::InvalidNumber { span, .. }
            | Self::UnknownLiteral { span, .. }
            | Self::InvalidKey { span }
            | Self::TrailingCharacters { span }
            | Self::TooDeep { span, .. } => *span,
        }
    }
}
