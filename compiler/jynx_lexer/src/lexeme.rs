//! Lexemes and the token list produced by [`lex`](crate::lex).

use std::fmt;

use jynx_lexer_core::Token;

use crate::Span;

/// What a [`Lexeme`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexemeKind {
    /// A token straight from the tokenizer.
    Token(Token),
    /// Line comment. The lexeme text is the body after `//`.
    Comment,
    /// String literal. The lexeme text is the body between the quotes.
    Str,
}

impl LexemeKind {
    /// Human-readable name for diagnostics and token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Token(tok) => tok.name(),
            Self::Comment => "comment",
            Self::Str => "string",
        }
    }

    /// Returns the underlying token, if this lexeme is a plain token.
    pub const fn token(self) -> Option<Token> {
        match self {
            Self::Token(tok) => Some(tok),
            Self::Comment | Self::Str => None,
        }
    }
}

impl fmt::Display for LexemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified piece of source text.
///
/// `text` borrows from the source. For plain tokens it is exactly
/// `source[span]`; for comments and strings it is the body only, while
/// `span` also covers the `//` marker or the quotes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub kind: LexemeKind,
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Lexeme<'a> {
    #[inline]
    pub const fn new(kind: LexemeKind, text: &'a str, span: Span) -> Self {
        Lexeme { kind, text, span }
    }

    /// Returns `true` if this lexeme is the given token.
    #[inline]
    pub fn is(&self, tok: Token) -> bool {
        self.kind == LexemeKind::Token(tok)
    }
}

/// Ordered lexemes for one source, always ending with [`Token::Eof`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList<'a> {
    lexemes: Vec<Lexeme<'a>>,
}

impl<'a> TokenList<'a> {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList {
            lexemes: Vec::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, lexeme: Lexeme<'a>) {
        self.lexemes.push(lexeme);
    }

    /// Push a newline, folding it into the previous lexeme when that is a
    /// newline separated from this one by inline whitespace at most.
    ///
    /// `source` must be the text the spans point into.
    pub(crate) fn push_newline(&mut self, source: &'a str, span: Span) {
        if let Some(last) = self.lexemes.last_mut() {
            let gap = source
                .get(last.span.end as usize..span.start as usize)
                .filter(|gap| gap.bytes().all(is_inline_space));
            if last.is(Token::Newline) && gap.is_some() {
                last.span = last.span.merge(span);
                last.text = source.get(last.span.to_range()).unwrap_or_default();
                return;
            }
        }
        let text = source.get(span.to_range()).unwrap_or_default();
        self.push(Lexeme::new(LexemeKind::Token(Token::Newline), text, span));
    }

    /// Get the number of lexemes, including the final EOF.
    #[inline]
    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Lexeme<'a>> {
        self.lexemes.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Lexeme<'a>] {
        &self.lexemes
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Lexeme<'a>> {
        self.lexemes.iter()
    }

    /// Kinds only, in order.
    pub fn kinds(&self) -> Vec<LexemeKind> {
        self.lexemes.iter().map(|lexeme| lexeme.kind).collect()
    }
}

impl<'a> IntoIterator for TokenList<'a> {
    type Item = Lexeme<'a>;
    type IntoIter = std::vec::IntoIter<Lexeme<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lexemes.into_iter()
    }
}

impl<'l, 'a> IntoIterator for &'l TokenList<'a> {
    type Item = &'l Lexeme<'a>;
    type IntoIter = std::slice::Iter<'l, Lexeme<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lexemes.iter()
    }
}

/// Whitespace the tokenizer skips between tokens.
fn is_inline_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x0B | 0x0C | b'\r')
}

#[cfg(test)]
mod tests;
