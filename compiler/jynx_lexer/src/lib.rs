//! Lexer for Jynx.
//!
//! Drives [`jynx_lexer_core::TokenStream`] over a whole source and produces
//! a [`TokenList`]: plain tokens, comment bodies after `//`, and string
//! bodies between `"` quotes, each with its [`Span`]. Lexing stops at the
//! first unknown symbol or unterminated string.
//!
//! ```
//! use jynx_lexer::{lex, LexOptions, LexemeKind, Token};
//!
//! let tokens = lex("x = \"hi\" // greet", LexOptions::default())?;
//! let kinds = tokens.kinds();
//! assert_eq!(kinds[2], LexemeKind::Str);
//! assert_eq!(kinds[3], LexemeKind::Comment);
//! assert_eq!(kinds[4], LexemeKind::Token(Token::Eof));
//! # Ok::<(), jynx_lexer::LexError>(())
//! ```

mod dump;
mod lex_error;
mod lexeme;
mod span;

use std::sync::Once;

use tracing::{debug, trace};

pub use dump::dump;
pub use jynx_lexer_core::{StringBody, StringTerminator, Token, TokenStream};
pub use lex_error::LexError;
pub use lexeme::{Lexeme, LexemeKind, TokenList};
pub use span::Span;

/// What [`lex`] keeps in its output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexOptions {
    /// Emit [`LexemeKind::Comment`] lexemes. When `false`, comment bodies
    /// are still consumed but dropped.
    pub keep_comments: bool,
    /// Emit `Newline` lexemes.
    pub keep_newlines: bool,
}

impl LexOptions {
    /// Only the tokens a parser of newline-insensitive code needs.
    pub const fn code_only() -> Self {
        LexOptions {
            keep_comments: false,
            keep_newlines: false,
        }
    }
}

impl Default for LexOptions {
    fn default() -> Self {
        LexOptions {
            keep_comments: true,
            keep_newlines: true,
        }
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set,
/// e.g. `RUST_LOG=jynx_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Lex source code into a [`TokenList`].
///
/// The list always ends with a zero-width [`Token::Eof`] lexeme at the end
/// of the source. Runs of newlines (including the newline that ends a line
/// comment) fold into a single `Newline` lexeme.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str, options: LexOptions) -> Result<TokenList<'_>, LexError> {
    let source_len = u32::try_from(source.len()).map_err(|_| {
        debug!("source too large");
        LexError::SourceTooLarge { len: source.len() }
    })?;

    let mut stream = TokenStream::new(source);
    let mut tokens = TokenList::new();

    loop {
        let before = stream.pos();
        let tok = stream.next_token();
        let start = stream.token_start();

        match tok {
            Token::Eof if before == source_len || stream.pos() == start => break,
            Token::Eof => {
                let span = Span::new(start, stream.pos());
                debug!(%span, "interior null byte");
                return Err(LexError::InteriorNull { span });
            }
            Token::Unknown => {
                let symbol = source
                    .get(start as usize..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                let span = Span::new(start, start + len_u32(symbol.len_utf8()));
                debug!(?symbol, %span, "unknown symbol");
                return Err(LexError::UnknownSymbol { symbol, span });
            }
            Token::SlashSlash => {
                let body_start = stream.pos();
                let body = stream.consume_line();
                let body_end = body_start + len_u32(body.len());
                if options.keep_comments {
                    push(&mut tokens, LexemeKind::Comment, body, Span::new(start, body_end));
                }
                // `consume_line` swallows the newline that ends the comment.
                if options.keep_newlines && stream.pos() > body_end {
                    tokens.push_newline(source, Span::new(body_end, stream.pos()));
                }
            }
            Token::DoubleQuote => {
                let body_start = stream.pos();
                let body = stream.consume_string();
                if !body.is_terminated() {
                    let span = Span::new(start, body_start + len_u32(body.text.len()));
                    debug!(%span, terminator = ?body.terminator, "unterminated string");
                    return Err(LexError::UnterminatedString { span });
                }
                push(&mut tokens, LexemeKind::Str, body.text, Span::new(start, stream.pos()));
            }
            Token::Newline => {
                if options.keep_newlines {
                    tokens.push_newline(source, Span::new(start, stream.pos()));
                }
            }
            tok => {
                let span = Span::new(start, stream.pos());
                push(&mut tokens, LexemeKind::Token(tok), stream.token_str(), span);
            }
        }
    }

    tokens.push(Lexeme::new(
        LexemeKind::Token(Token::Eof),
        "",
        Span::point(source_len),
    ));
    debug!(count = tokens.len(), "lexing complete");
    Ok(tokens)
}

fn push<'a>(tokens: &mut TokenList<'a>, kind: LexemeKind, text: &'a str, span: Span) {
    trace!(%kind, %span, text, "lexeme");
    tokens.push(Lexeme::new(kind, text, span));
}

/// Byte length of a piece of a source already known to fit in `u32`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "lex() rejects sources longer than u32::MAX up front"
)]
fn len_u32(len: usize) -> u32 {
    len as u32
}
