//! Pull-based tokenizer producing one [`Token`] per call.
//!
//! The stream keeps two offsets into the borrowed source: the cursor
//! position (start of the next unscanned byte) and the start of the most
//! recent token. Token text is sliced from the source on demand; nothing
//! is copied or allocated.
//!
//! # Design
//!
//! Fixed punctuation is resolved by `punctuation`, a nested `match` over
//! a three-byte lookahead window that always prefers the longest
//! recognized sequence. Bytes that start no punctuation fall through to
//! the newline, number and identifier rules, in that order. Anything else
//! is [`Token::Unknown`], which has zero width: the stream does not
//! advance, and calling [`TokenStream::next_token`] again returns
//! `Unknown` again. Callers must stop (or step past the byte themselves).

use crate::cursor::Cursor;
use crate::tag::Token;

/// How [`TokenStream::consume_string`] stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StringTerminator {
    /// Closing `"` found and consumed.
    Quote,
    /// A `\n` came first. The newline is left unconsumed.
    Newline,
    /// Source ended before either delimiter.
    EndOfInput,
}

/// Body of a string literal returned by [`TokenStream::consume_string`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StringBody<'a> {
    /// Text strictly between the opening quote and the terminator.
    pub text: &'a str,
    pub terminator: StringTerminator,
}

impl StringBody<'_> {
    /// Returns `true` if the closing quote was found.
    pub fn is_terminated(&self) -> bool {
        self.terminator == StringTerminator::Quote
    }
}

/// Forward-only tokenizer over a borrowed source string.
///
/// # Invariant
///
/// `token_start <= cursor.pos() <= cursor.source_len()`, and the cursor
/// position never decreases.
#[derive(Clone, Debug)]
pub struct TokenStream<'a> {
    cursor: Cursor<'a>,
    /// Start offset of the most recently produced token.
    token_start: u32,
}

impl<'a> TokenStream<'a> {
    /// Create a stream positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
        }
    }

    /// Produce the next token and advance past its text.
    ///
    /// Returns [`Token::Eof`] without advancing once the source is
    /// exhausted; repeated calls keep returning it. Leading whitespace
    /// other than `\n` is skipped and never part of a token's text.
    pub fn next_token(&mut self) -> Token {
        if self.cursor.is_eof() {
            return Token::Eof;
        }
        self.cursor.eat_while(is_inline_space);
        self.token_start = self.cursor.pos();
        if self.cursor.is_eof() {
            return Token::Eof;
        }

        let c0 = self.cursor.current();
        let c1 = self.cursor.peek();
        if let Some((tok, width)) = punctuation(c0, c1, self.cursor.peek2()) {
            self.cursor.advance_n(width);
            return tok;
        }

        match c0 {
            b'\n' => self.newline(),
            b'0' if matches!(c1, b'x' | b'X') => self.hex_number(),
            b'0'..=b'9' => self.number(),
            b'a'..=b'z' | b'A'..=b'Z' => self.identifier(),
            _ => Token::Unknown,
        }
    }

    /// Source text of the most recently returned token.
    ///
    /// Before the first [`next_token`](Self::next_token) call this is the
    /// empty string.
    ///
    /// An [`Token::Eof`] returned because the stream was already at the end
    /// does not move the token start, so this keeps returning the last
    /// token's text. An `Eof` reached by skipping trailing whitespace starts
    /// at the end of the source and has empty text.
    pub fn token_str(&self) -> &'a str {
        self.cursor.slice_from(self.token_start)
    }

    /// Consume the rest of the current line.
    ///
    /// Returns the text from the cursor up to (not including) the next
    /// `\n`, and moves the cursor past that newline, or to the end of the
    /// source if there is none. The token start is left untouched.
    pub fn consume_line(&mut self) -> &'a str {
        let start = self.cursor.pos();
        self.cursor.eat_until_newline_or_eof();
        let line = self.cursor.slice_from(start);
        self.cursor.advance();
        line
    }

    /// Consume a string literal body after its opening `"`.
    ///
    /// Scans to the first `"` or `\n`. A closing quote is consumed; a
    /// newline is not. The returned [`StringTerminator`] tells the caller
    /// whether the literal was closed.
    pub fn consume_string(&mut self) -> StringBody<'a> {
        let start = self.cursor.pos();
        let delim = self.cursor.skip_to_string_delim();
        let text = self.cursor.slice_from(start);
        let terminator = match delim {
            b'"' => {
                self.cursor.advance();
                StringTerminator::Quote
            }
            b'\n' => StringTerminator::Newline,
            _ => StringTerminator::EndOfInput,
        };
        StringBody { text, terminator }
    }

    /// Byte offset of the next unscanned byte.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Byte offset where the most recent token's text starts.
    #[inline]
    pub fn token_start(&self) -> u32 {
        self.token_start
    }

    /// Length of the scannable source.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.cursor.source_len()
    }

    // ─── Variable-width tokens ──────────────────────────────────────

    /// `\n` plus every whitespace byte after it, newlines included.
    fn newline(&mut self) -> Token {
        self.cursor.advance();
        self.cursor.eat_while(is_space);
        Token::Newline
    }

    fn hex_number(&mut self) -> Token {
        self.cursor.advance_n(2); // `0x`
        self.cursor.eat_while(|b| b.is_ascii_hexdigit());
        Token::Number
    }

    /// Digits, at most one `.`, digits. A trailing `.` with no digits after
    /// it stays part of the number (`12.` is one token).
    fn number(&mut self) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' {
            self.cursor.advance();
        }
        self.cursor.eat_while(|b| b.is_ascii_digit());
        Token::Number
    }

    fn identifier(&mut self) -> Token {
        self.cursor.eat_while(is_ident_continue);
        Token::Identifier
    }
}

/// Longest-match punctuation over a three-byte window.
///
/// Returns the token and its width, or `None` if `c0` starts no fixed
/// punctuation. `0x00` (an interior NUL, since the stream checks for the
/// end of input first) reads as [`Token::Eof`] with width 1.
const fn punctuation(c0: u8, c1: u8, c2: u8) -> Option<(Token, u32)> {
    let matched = match c0 {
        0 => (Token::Eof, 1),
        b'(' => (Token::LeftParen, 1),
        b')' => (Token::RightParen, 1),
        b'{' => (Token::LeftBrace, 1),
        b'}' => (Token::RightBrace, 1),
        b'[' => (Token::LeftBracket, 1),
        b']' => (Token::RightBracket, 1),
        b',' => (Token::Comma, 1),
        b';' => (Token::Semicolon, 1),
        b':' => (Token::Colon, 1),
        b'\'' => (Token::SingleQuote, 1),
        b'"' => (Token::DoubleQuote, 1),
        b'.' => (Token::Dot, 1),
        b'=' => match c1 {
            b'=' => (Token::EqualEqual, 2),
            _ => (Token::Equal, 1),
        },
        b'+' => match c1 {
            b'+' => (Token::PlusPlus, 2),
            b'=' => (Token::PlusEqual, 2),
            _ => (Token::Plus, 1),
        },
        b'-' => match c1 {
            b'-' => (Token::MinusMinus, 2),
            b'=' => (Token::MinusEqual, 2),
            _ => (Token::Minus, 1),
        },
        b'*' => match c1 {
            b'=' => (Token::StarEqual, 2),
            _ => (Token::Star, 1),
        },
        b'/' => match c1 {
            b'/' => (Token::SlashSlash, 2),
            b'=' => (Token::SlashEqual, 2),
            _ => (Token::Slash, 1),
        },
        b'|' => match (c1, c2) {
            (b'|', b'=') => (Token::PipePipeEqual, 3),
            (b'|', _) => (Token::PipePipe, 2),
            (b'=', _) => (Token::PipeEqual, 2),
            _ => (Token::Pipe, 1),
        },
        b'&' => match (c1, c2) {
            (b'&', b'=') => (Token::AmpAmpEqual, 3),
            (b'&', _) => (Token::AmpAmp, 2),
            (b'=', _) => (Token::AmpEqual, 2),
            _ => (Token::Amp, 1),
        },
        b'<' => match (c1, c2) {
            (b'<', b'=') => (Token::ShlEqual, 3),
            (b'<', _) => (Token::Shl, 2),
            (b'=', _) => (Token::LessEqual, 2),
            _ => (Token::Less, 1),
        },
        b'>' => match (c1, c2) {
            (b'>', b'=') => (Token::ShrEqual, 3),
            (b'>', _) => (Token::Shr, 2),
            (b'=', _) => (Token::GreaterEqual, 2),
            _ => (Token::Greater, 1),
        },
        _ => return None,
    };
    Some(matched)
}

/// C `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline]
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Whitespace skipped between tokens. Newlines are tokens, not trivia.
#[inline]
fn is_inline_space(b: u8) -> bool {
    b != b'\n' && is_space(b)
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
