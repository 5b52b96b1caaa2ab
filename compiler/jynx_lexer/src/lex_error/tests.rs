use super::*;

#[test]
fn messages() {
    let err = LexError::UnknownSymbol {
        symbol: '@',
        span: Span::new(4, 5),
    };
    assert_eq!(err.to_string(), "unknown symbol '@' at 4..5");

    let err = LexError::UnterminatedString {
        span: Span::new(0, 4),
    };
    assert_eq!(err.to_string(), "unterminated string literal at 0..4");

    let err = LexError::SourceTooLarge { len: 5_000_000_000 };
    assert_eq!(
        err.to_string(),
        "source is 5000000000 bytes, which exceeds the 4294967295 byte limit"
    );
}

#[test]
fn span_accessor() {
    let err = LexError::InteriorNull {
        span: Span::new(2, 3),
    };
    assert_eq!(err.span(), Some(Span::new(2, 3)));
    assert_eq!(LexError::SourceTooLarge { len: 0 }.span(), None);
}

#[test]
fn is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<LexError>();
}
