//! Plain-text token dump, one lexeme per line.
//!
//! ```text
//! identifier       const
//! `=`              =
//! comment          // note
//! string           'hello'
//! newline
//! ```

use std::fmt;

use jynx_lexer_core::Token;

use crate::{LexemeKind, TokenList};

/// Render `tokens` in the dump format. The trailing EOF is not printed.
pub fn dump(tokens: &TokenList<'_>) -> String {
    Dump(tokens).to_string()
}

struct Dump<'t, 'a>(&'t TokenList<'a>);

impl fmt::Display for Dump<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lexeme in self.0 {
            let name = lexeme.kind.name();
            match lexeme.kind {
                LexemeKind::Token(Token::Eof) => {}
                LexemeKind::Token(Token::Newline) => writeln!(f, "{name}")?,
                LexemeKind::Comment => writeln!(f, "{name:<16} // {}", lexeme.text)?,
                LexemeKind::Str => writeln!(f, "{name:<16} '{}'", lexeme.text)?,
                LexemeKind::Token(_) => writeln!(f, "{name:<16} {}", lexeme.text)?,
            }
        }
        Ok(())
    }
}
