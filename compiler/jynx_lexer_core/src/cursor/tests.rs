use super::Cursor;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::new("abc");
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_moves_multiple() {
    let mut cursor = Cursor::new("abcdef");
    cursor.advance_n(3);
    assert_eq!(cursor.current(), b'd');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn advance_n_stops_at_end() {
    let mut cursor = Cursor::new("ab");
    cursor.advance_n(10);
    assert_eq!(cursor.pos(), 2);
    assert!(cursor.is_eof());
}

// === Peek ===

#[test]
fn peek_returns_next_byte() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.peek(), b'b');
    assert_eq!(cursor.peek2(), b'c');
}

#[test]
fn peek_past_end_reads_zero() {
    let mut cursor = Cursor::new("ab");
    cursor.advance(); // at 'b'
    assert_eq!(cursor.peek(), 0);
    assert_eq!(cursor.peek2(), 0);
}

// === EOF Detection ===

#[test]
fn is_eof_on_empty_source() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let mut cursor = Cursor::new("a\0b");
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

// === Slice ===

#[test]
fn slice_extracts_substring() {
    let cursor = Cursor::new("hello world");
    assert_eq!(cursor.slice(0, 5), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
}

#[test]
fn slice_from_extracts_to_current() {
    let mut cursor = Cursor::new("abcdef");
    cursor.advance_n(3);
    assert_eq!(cursor.slice_from(0), "abc");
    assert_eq!(cursor.slice_from(1), "bc");
}

#[test]
fn slice_off_char_boundary_is_empty() {
    let cursor = Cursor::new("é");
    assert_eq!(cursor.slice(0, 1), "");
}

// === Scanning helpers ===

#[test]
fn eat_while_stops_at_predicate() {
    let mut cursor = Cursor::new("aaab");
    cursor.eat_while(|b| b == b'a');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn eat_while_stops_at_end_even_if_pred_accepts_zero() {
    let mut cursor = Cursor::new("  ");
    cursor.eat_while(|_| true);
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn eat_until_newline_stops_on_newline() {
    let mut cursor = Cursor::new("comment\nnext");
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 7);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_until_newline_without_newline_reaches_eof() {
    let mut cursor = Cursor::new("no newline");
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_string_delim_finds_quote() {
    let mut cursor = Cursor::new("abc\" rest");
    assert_eq!(cursor.skip_to_string_delim(), b'"');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn skip_to_string_delim_finds_newline_first() {
    let mut cursor = Cursor::new("abc\ndef\"");
    assert_eq!(cursor.skip_to_string_delim(), b'\n');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn skip_to_string_delim_at_eof_returns_zero() {
    let mut cursor = Cursor::new("abc");
    assert_eq!(cursor.skip_to_string_delim(), 0);
    assert!(cursor.is_eof());
}
