use super::*;
use pretty_assertions::assert_eq;

#[test]
fn origin_is_all_zero() {
    assert_eq!(Location::origin(), Location::default());
    assert_eq!(Location::origin().to_string(), "1:1");
}

#[test]
fn advance_moves_line_relative_counters() {
    let mut loc = Location::origin();
    loc.advance(3, 2);
    assert_eq!(
        loc,
        Location {
            bytes: 3,
            chars: 2,
            lines: 0,
            line_bytes: 3,
            line_chars: 2,
        }
    );
}

#[test]
fn newline_resets_line_counters() {
    let mut loc = Location::origin();
    loc.advance(4, 4);
    loc.advance_newline(false);
    assert_eq!(loc.bytes, 5);
    assert_eq!(loc.chars, 5);
    assert_eq!(loc.lines, 1);
    assert_eq!(loc.line_bytes, 0);
    assert_eq!(loc.line_chars, 0);
}

#[test]
fn crlf_is_one_line_two_bytes() {
    let mut loc = Location::origin();
    loc.advance_newline(true);
    assert_eq!(loc.bytes, 2);
    assert_eq!(loc.chars, 2);
    assert_eq!(loc.lines, 1);
}

#[test]
fn display_is_one_based() {
    let mut loc = Location::origin();
    loc.advance_newline(false);
    loc.advance(6, 3);
    assert_eq!(loc.to_string(), "2:4");
}

#[test]
fn ordering_follows_byte_offset() {
    let mut a = Location::origin();
    let mut b = Location::origin();
    a.advance(1, 1);
    b.advance(2, 2);
    assert!(a < b);
}
