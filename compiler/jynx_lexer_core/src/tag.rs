//! Token kinds produced by [`TokenStream`](crate::TokenStream).
//!
//! A [`Token`] carries no text. The matched source text for the most
//! recent token is available from
//! [`TokenStream::token_str`](crate::TokenStream::token_str).

use std::fmt;

/// Closed set of token kinds.
///
/// `#[repr(u8)]` keeps the kind one byte wide. Discriminants are grouped
/// by category, mirroring the order of the token table below.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Token {
    // === Literals & Layout ===
    /// End of input. Also produced for an interior `0x00` byte.
    Eof = 0,
    Identifier,
    /// Decimal, fractional, or `0x` hexadecimal number.
    Number,
    /// A newline together with any whitespace (and newlines) that follow it.
    Newline,

    // === Brackets ===
    LeftParen = 16,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,

    // === Separators ===
    Comma = 32,
    Semicolon,
    Colon,
    SingleQuote,
    DoubleQuote,

    // === Arithmetic ===
    Equal = 48,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    PlusPlus,
    MinusMinus,
    PlusEqual,
    MinusEqual,
    StarEqual,
    SlashEqual,
    PercentEqual,

    // === Logical ===
    PipePipe = 64,
    AmpAmp,
    Bang,
    PipePipeEqual,
    AmpAmpEqual,

    // === Comparison ===
    Less = 80,
    Greater,
    LessEqual,
    GreaterEqual,
    EqualEqual,
    BangEqual,

    // === Bitwise ===
    Pipe = 96,
    Amp,
    Tilde,
    Caret,
    Shl,
    Shr,
    PipeEqual,
    AmpEqual,
    TildeEqual,
    CaretEqual,
    ShlEqual,
    ShrEqual,

    // === Special ===
    Dot = 112,
    Question,
    Dollar,
    Hash,
    At,
    Backtick,
    Backslash,
    /// `//`, the line comment marker.
    SlashSlash,

    /// Unrecognized leading byte. Zero width; the stream does not advance.
    Unknown = 255,
}

impl Token {
    /// Fixed source text of this kind, or `None` for variable-width kinds.
    pub const fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            Self::Eof | Self::Identifier | Self::Number | Self::Newline | Self::Unknown => {
                return None
            }
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::SingleQuote => "'",
            Self::DoubleQuote => "\"",
            Self::Equal => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
            Self::PlusEqual => "+=",
            Self::MinusEqual => "-=",
            Self::StarEqual => "*=",
            Self::SlashEqual => "/=",
            Self::PercentEqual => "%=",
            Self::PipePipe => "||",
            Self::AmpAmp => "&&",
            Self::Bang => "!",
            Self::PipePipeEqual => "||=",
            Self::AmpAmpEqual => "&&=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Pipe => "|",
            Self::Amp => "&",
            Self::Tilde => "~",
            Self::Caret => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::PipeEqual => "|=",
            Self::AmpEqual => "&=",
            Self::TildeEqual => "~=",
            Self::CaretEqual => "^=",
            Self::ShlEqual => "<<=",
            Self::ShrEqual => ">>=",
            Self::Dot => ".",
            Self::Question => "?",
            Self::Dollar => "$",
            Self::Hash => "#",
            Self::At => "@",
            Self::Backtick => "`",
            Self::Backslash => "\\",
            Self::SlashSlash => "//",
        };
        Some(text)
    }

    /// Human-readable name for diagnostics and token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eof => "end of file",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::Newline => "newline",
            Self::Unknown => "unknown symbol",
            Self::LeftParen => "`(`",
            Self::RightParen => "`)`",
            Self::LeftBrace => "`{`",
            Self::RightBrace => "`}`",
            Self::LeftBracket => "`[`",
            Self::RightBracket => "`]`",
            Self::Comma => "`,`",
            Self::Semicolon => "`;`",
            Self::Colon => "`:`",
            Self::SingleQuote => "`'`",
            Self::DoubleQuote => "`\"`",
            Self::Equal => "`=`",
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::Star => "`*`",
            Self::Slash => "`/`",
            Self::Percent => "`%`",
            Self::PlusPlus => "`++`",
            Self::MinusMinus => "`--`",
            Self::PlusEqual => "`+=`",
            Self::MinusEqual => "`-=`",
            Self::StarEqual => "`*=`",
            Self::SlashEqual => "`/=`",
            Self::PercentEqual => "`%=`",
            Self::PipePipe => "`||`",
            Self::AmpAmp => "`&&`",
            Self::Bang => "`!`",
            Self::PipePipeEqual => "`||=`",
            Self::AmpAmpEqual => "`&&=`",
            Self::Less => "`<`",
            Self::Greater => "`>`",
            Self::LessEqual => "`<=`",
            Self::GreaterEqual => "`>=`",
            Self::EqualEqual => "`==`",
            Self::BangEqual => "`!=`",
            Self::Pipe => "`|`",
            Self::Amp => "`&`",
            Self::Tilde => "`~`",
            Self::Caret => "`^`",
            Self::Shl => "`<<`",
            Self::Shr => "`>>`",
            Self::PipeEqual => "`|=`",
            Self::AmpEqual => "`&=`",
            Self::TildeEqual => "`~=`",
            Self::CaretEqual => "`^=`",
            Self::ShlEqual => "`<<=`",
            Self::ShrEqual => "`>>=`",
            Self::Dot => "`.`",
            Self::Question => "`?`",
            Self::Dollar => "`$`",
            Self::Hash => "`#`",
            Self::At => "`@`",
            Self::Backtick => "`` ` ``",
            Self::Backslash => "`\\`",
            Self::SlashSlash => "`//`",
        }
    }

    /// Returns `true` for the kinds after which a scan loop must stop.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Eof | Self::Unknown)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
