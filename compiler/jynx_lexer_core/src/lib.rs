//! Low-level tokenizer for Jynx.
//!
//! Standalone crate with no `jynx_*` dependencies. [`TokenStream`] walks a
//! borrowed source string and produces one [`Token`] per call; the text of
//! the most recent token is sliced from the source on demand.
//!
//! ```
//! use jynx_lexer_core::{Token, TokenStream};
//!
//! let mut stream = TokenStream::new("x += 0xFF");
//! assert_eq!(stream.next_token(), Token::Identifier);
//! assert_eq!(stream.next_token(), Token::PlusEqual);
//! assert_eq!(stream.next_token(), Token::Number);
//! assert_eq!(stream.token_str(), "0xFF");
//! assert_eq!(stream.next_token(), Token::Eof);
//! ```

mod cursor;
mod tag;
mod token_stream;

pub use cursor::Cursor;
pub use tag::Token;
pub use token_stream::{StringBody, StringTerminator, TokenStream};
