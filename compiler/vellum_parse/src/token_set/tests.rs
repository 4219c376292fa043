use super::*;
use pretty_assertions::assert_eq;

const DECLARATION_END: TokenSet = TokenSet::new()
    .with(TokenTag::Semicolon)
    .with(TokenTag::CloseCurly);

#[test]
fn empty_set_contains_nothing() {
    let set = TokenSet::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert!(!set.contains(TokenTag::Eof));
    assert!(!set.contains(TokenTag::Dimension));
}

#[test]
fn const_builder() {
    assert_eq!(DECLARATION_END.len(), 2);
    assert!(DECLARATION_END.contains(TokenTag::Semicolon));
    assert!(DECLARATION_END.contains(TokenTag::CloseCurly));
    assert!(!DECLARATION_END.contains(TokenTag::CloseParens));
}

#[test]
fn first_and_last_tags_fit() {
    let set = TokenSet::single(TokenTag::Eof).with(TokenTag::Dimension);
    assert!(set.contains(TokenTag::Eof));
    assert!(set.contains(TokenTag::Dimension));
    assert_eq!(set.len(), 2);
}

#[test]
fn union_and_collect() {
    let a = TokenSet::single(TokenTag::Comma);
    let b: TokenSet = [TokenTag::Colon, TokenTag::Comma].into_iter().collect();
    let both = a.union(b);
    assert_eq!(both.len(), 2);
    assert!(both.contains(TokenTag::Colon));
}

#[test]
fn matches_token_payload_kinds() {
    let set = TokenSet::single(TokenTag::Ident);
    assert!(set.matches(&Token::Ident("a".into())));
    assert!(!set.matches(&Token::Function("a".into())));
}
