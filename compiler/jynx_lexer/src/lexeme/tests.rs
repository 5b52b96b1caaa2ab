use pretty_assertions::assert_eq;

use super::*;

fn ident(text: &str, start: u32) -> Lexeme<'_> {
    let end = start + u32::try_from(text.len()).unwrap_or(u32::MAX);
    Lexeme::new(LexemeKind::Token(Token::Identifier), text, Span::new(start, end))
}

#[test]
fn kind_names() {
    assert_eq!(LexemeKind::Token(Token::Semicolon).name(), "`;`");
    assert_eq!(LexemeKind::Comment.name(), "comment");
    assert_eq!(LexemeKind::Str.to_string(), "string");
}

#[test]
fn kind_token_accessor() {
    assert_eq!(LexemeKind::Token(Token::Dot).token(), Some(Token::Dot));
    assert_eq!(LexemeKind::Comment.token(), None);
    assert_eq!(LexemeKind::Str.token(), None);
}

#[test]
fn list_push_and_access() {
    let mut list = TokenList::new();
    assert!(list.is_empty());
    list.push(ident("a", 0));
    list.push(ident("b", 2));
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(1).map(|l| l.text), Some("b"));
    assert_eq!(list.get(2), None);
    assert_eq!(
        list.kinds(),
        vec![
            LexemeKind::Token(Token::Identifier),
            LexemeKind::Token(Token::Identifier)
        ]
    );
}

#[test]
fn list_iterates_in_order() {
    let mut list = TokenList::new();
    list.push(ident("x", 0));
    list.push(ident("y", 1));
    let texts: Vec<&str> = (&list).into_iter().map(|l| l.text).collect();
    assert_eq!(texts, vec!["x", "y"]);
    let owned: Vec<Lexeme<'_>> = list.into_iter().collect();
    assert_eq!(owned.len(), 2);
}

#[test]
fn adjacent_newlines_fold() {
    let source = "a\n\n  b";
    let mut list = TokenList::new();
    list.push(ident("a", 0));
    list.push_newline(source, Span::new(1, 2));
    list.push_newline(source, Span::new(2, 5));
    assert_eq!(list.len(), 2);
    let newline = list.as_slice()[1];
    assert!(newline.is(Token::Newline));
    assert_eq!(newline.span, Span::new(1, 5));
    assert_eq!(newline.text, "\n\n  ");
}

#[test]
fn newlines_fold_across_inline_whitespace() {
    let source = "\n \t\n";
    let mut list = TokenList::new();
    list.push_newline(source, Span::new(0, 1));
    list.push_newline(source, Span::new(3, 4));
    assert_eq!(list.len(), 1);
    assert_eq!(list.as_slice()[0].span, Span::new(0, 4));
    assert_eq!(list.as_slice()[0].text, "\n \t\n");
}

#[test]
fn separated_newlines_do_not_fold() {
    let source = "\nx\n";
    let mut list = TokenList::new();
    list.push_newline(source, Span::new(0, 1));
    list.push(ident("x", 1));
    list.push_newline(source, Span::new(2, 3));
    assert_eq!(list.len(), 3);
}
