//! Errors that stop [`lex`](crate::lex).
//!
//! The tokenizer itself never fails: it reports an unknown byte as a
//! zero-width [`Token::Unknown`](jynx_lexer_core::Token::Unknown) and an
//! unclosed string through its terminator. This layer turns those signals
//! into errors with spans.

use crate::Span;

/// Why lexing stopped early.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// No token starts with this character.
    #[error("unknown symbol {symbol:?} at {span}")]
    UnknownSymbol { symbol: char, span: Span },

    /// A newline or the end of input came before the closing `"`.
    /// The span runs from the opening quote to the end of the body.
    #[error("unterminated string literal at {span}")]
    UnterminatedString { span: Span },

    /// A `0x00` byte inside the source.
    #[error("interior null byte at {span}")]
    InteriorNull { span: Span },

    /// Offsets are `u32`; larger sources cannot be addressed.
    #[error("source is {len} bytes, which exceeds the {max} byte limit", max = u32::MAX)]
    SourceTooLarge { len: usize },
}

impl LexError {
    /// Where the error occurred, if it has a location.
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::UnknownSymbol { span, .. }
            | Self::UnterminatedString { span }
            | Self::InteriorNull { span } => Some(*span),
            Self::SourceTooLarge { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests;
