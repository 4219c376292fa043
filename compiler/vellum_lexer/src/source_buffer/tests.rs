use super::*;
use pretty_assertions::assert_eq;

#[test]
fn from_str_keeps_bytes() {
    let buf = SourceBuffer::from("a { }");
    assert_eq!(buf.as_bytes(), b"a { }");
    assert_eq!(buf.len(), 5);
    assert!(!buf.is_empty());
}

#[test]
fn empty_buffer() {
    let buf = SourceBuffer::from("");
    assert!(buf.is_empty());
}

#[test]
fn clone_shares_allocation() {
    let buf = SourceBuffer::from(String::from("color: red"));
    let other = buf.clone();
    assert!(std::ptr::eq(buf.as_bytes(), other.as_bytes()));
}

#[test]
fn accepts_invalid_utf8() {
    let buf = SourceBuffer::from(vec![b'a', 0xFF, b'b']);
    assert_eq!(buf.as_bytes(), &[b'a', 0xFF, b'b']);
}

#[test]
fn is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SourceBuffer>();
}
