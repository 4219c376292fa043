#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::TokenTag;
use pretty_assertions::assert_eq;
use std::cell::Cell;
use std::rc::Rc;
use vellum_diagnostic::{DiagnosticConfig, DiagnosticQueue, ErrorKind};

/// Every token up to (not including) EOF.
fn tokens(source: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(source);
    let mut out = Vec::new();
    loop {
        let token = tokenizer.read_token();
        if token.is_eof() {
            return out;
        }
        out.push(token);
    }
}

/// Every token with the error it raised.
fn scan_all(source: &[u8]) -> Vec<(Token, Option<ScanError>)> {
    let mut tokenizer = Tokenizer::new(source);
    let mut out = Vec::new();
    loop {
        let (token, error) = tokenizer.scan();
        if token.is_eof() {
            assert!(error.is_none());
            return out;
        }
        out.push((token, error));
    }
}

fn errors(source: &str) -> Vec<String> {
    scan_all(source.as_bytes())
        .into_iter()
        .filter_map(|(_, e)| e.map(|e| e.error.message().to_owned()))
        .collect()
}

fn single(source: &str) -> Token {
    let toks = tokens(source);
    assert_eq!(toks.len(), 1, "{source:?} gave {toks:?}");
    toks.into_iter().next().unwrap()
}

fn ident(s: &str) -> Token {
    Token::Ident(s.to_owned())
}

// === End of input ===

#[test]
fn empty_input_is_eof() {
    let mut t = Tokenizer::new("");
    assert_eq!(t.read_token(), Token::Eof);
    assert!(t.is_eof());
}

#[test]
fn eof_is_idempotent() {
    let mut t = Tokenizer::new("a b");
    while !t.read_token().is_eof() {}
    let end = t.location();
    for _ in 0..5 {
        assert_eq!(t.read_token(), Token::Eof);
        assert_eq!(t.location(), end);
    }
    assert_eq!(end.bytes, 3);
}

// === Whitespace and comments ===

#[test]
fn whitespace_collapses() {
    assert_eq!(tokens(" \t\n\r\n\x0c x"), vec![Token::Whitespace, ident("x")]);
}

#[test]
fn comment_is_one_token() {
    assert_eq!(
        tokens("/* a\nb */c"),
        vec![Token::Comment, ident("c")]
    );
}

#[test]
fn unterminated_comment_reports() {
    let scanned = scan_all(b"a/* never closed");
    assert_eq!(scanned.len(), 2);
    assert_eq!(scanned[1].0, Token::Comment);
    let err = scanned[1].1.as_ref().unwrap();
    assert_eq!(err.error.message(), "Comment not terminated at end of document.");
    assert_eq!(err.error.kind(), ErrorKind::Syntax);
    assert_eq!(err.location.bytes, 16);
}

#[test]
fn lone_slash_is_delim() {
    assert_eq!(tokens("/"), vec![Token::Delim('/')]);
}

// === Numbers ===

#[test]
fn numeric_exactness() {
    assert_eq!(single("123"), Token::SignlessInteger(123.0));
    assert_eq!(single("-4.5"), Token::SignedNumber(-4.5));
    assert_eq!(
        single("10px"),
        Token::SignlessIntegerDimension {
            value: 10.0,
            unit: "px".into()
        }
    );
    assert_eq!(single("50%"), Token::Percentage(50.0));
    assert_eq!(single("1e3"), Token::SignlessNumber(1000.0));
}

#[test]
fn signs_select_signed_kinds() {
    assert_eq!(single("+5"), Token::SignedInteger(5.0));
    assert_eq!(single("-0"), Token::SignedInteger(-0.0));
    assert_eq!(single("+.5"), Token::SignedNumber(0.5));
    assert_eq!(
        single("-3em"),
        Token::SignedIntegerDimension {
            value: -3.0,
            unit: "em".into()
        }
    );
}

#[test]
fn float_forms() {
    assert_eq!(single(".5"), Token::SignlessNumber(0.5));
    assert_eq!(single("1E+2"), Token::SignlessNumber(100.0));
    assert_eq!(single("25e-1"), Token::SignlessNumber(2.5));
    assert_eq!(
        single("1.5s"),
        Token::Dimension {
            value: 1.5,
            unit: "s".into()
        }
    );
    assert_eq!(
        single("2e1px"),
        Token::Dimension {
            value: 20.0,
            unit: "px".into()
        }
    );
}

#[test]
fn exponent_needs_a_digit() {
    assert_eq!(
        single("1e"),
        Token::SignlessIntegerDimension {
            value: 1.0,
            unit: "e".into()
        }
    );
    assert_eq!(
        tokens("1e+"),
        vec![
            Token::SignlessIntegerDimension {
                value: 1.0,
                unit: "e".into()
            },
            Token::Delim('+'),
        ]
    );
}

#[test]
fn trailing_dot_is_not_fraction() {
    assert_eq!(
        tokens("1."),
        vec![Token::SignlessInteger(1.0), Token::Delim('.')]
    );
}

#[test]
fn percentage_of_float() {
    assert_eq!(single("-2.5%"), Token::Percentage(-2.5));
}

#[test]
fn fractional_digits_stop_after_eighteen() {
    // Digits past the eighteenth are consumed but do not change the value.
    let expected = 123_456_789_012_345_678_i64 as f64 / 1e18;
    assert_eq!(
        single("0.1234567890123456789999"),
        Token::SignlessNumber(expected)
    );
    assert_eq!(
        single("0.0000000000000000001"),
        Token::SignlessNumber(0.0)
    );
}

#[test]
fn huge_exponent_saturates_to_infinity() {
    assert_eq!(single("1e99999999999"), Token::SignlessNumber(f64::INFINITY));
}

// === Strings ===

#[test]
fn string_escape_decodes() {
    assert_eq!(single(r#""a\62 c""#), Token::String("abc".into()));
}

#[test]
fn single_quoted_string() {
    assert_eq!(single(r#"'it"s'"#), Token::String("it\"s".into()));
}

#[test]
fn escaped_newline_continues_string() {
    assert_eq!(single("\"ab\\\r\ncd\""), Token::String("abcd".into()));
}

#[test]
fn backslash_at_end_closes_string() {
    assert_eq!(single("\"ab\\"), Token::String("ab".into()));
}

#[test]
fn unterminated_string_is_fine() {
    let scanned = scan_all(b"\"abc");
    assert_eq!(scanned, vec![(Token::String("abc".into()), None)]);
}

#[test]
fn raw_newline_makes_bad_string() {
    let scanned = scan_all(b"\"ab\ncd\"");
    let tags: Vec<_> = scanned.iter().map(|(t, _)| t.tag()).collect();
    assert_eq!(
        tags,
        vec![
            TokenTag::BadString,
            TokenTag::Whitespace,
            TokenTag::Ident,
            TokenTag::String
        ]
    );
    let errs: Vec<_> = scanned.iter().filter_map(|(_, e)| e.as_ref()).collect();
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].error.message(), "Newlines inside strings must be escaped");
    assert_eq!(errs[0].location.bytes, 3);
}

// === Escapes ===

#[test]
fn escape_edge_values() {
    assert_eq!(single("\\0 a"), ident("\u{FFFD}a"));
    assert_eq!(single("\\D800 "), ident("\u{FFFD}"));
    assert_eq!(single("\\110000 "), ident("\u{FFFD}"));
    assert_eq!(single("\\41 B"), ident("AB"));
    assert_eq!(single("\\0000410"), ident("A0"));
    assert_eq!(single("\\(x"), ident("(x"));
}

#[test]
fn escape_consumes_crlf_as_one_whitespace() {
    let mut t = Tokenizer::new("\\41\r\nb");
    assert_eq!(t.read_token(), ident("Ab"));
    assert_eq!(t.location().bytes, 6);
    assert_eq!(t.location().lines, 1);
}

#[test]
fn backslash_at_eof_is_replacement_ident() {
    assert_eq!(single("\\"), ident("\u{FFFD}"));
}

#[test]
fn backslash_newline_is_delim_with_error() {
    let scanned = scan_all(b"\\\nx");
    assert_eq!(scanned[0].0, Token::Delim('\\'));
    assert_eq!(
        scanned[0].1.as_ref().unwrap().error.message(),
        "Newline may not follow '\\' escape character"
    );
    assert_eq!(scanned[1].0, Token::Whitespace);
    assert_eq!(scanned[2], (ident("x"), None));
}

#[test]
fn backslash_newline_folds_into_name() {
    assert_eq!(tokens("ab\\\ncd"), vec![ident("abcd")]);
}

// === Identifiers and functions ===

#[test]
fn identifiers() {
    assert_eq!(single("color"), ident("color"));
    assert_eq!(single("-moz-box"), ident("-moz-box"));
    assert_eq!(single("--custom"), ident("--custom"));
    assert_eq!(single("_x1"), ident("_x1"));
    assert_eq!(single("é€"), ident("é€"));
}

#[test]
fn invalid_utf8_becomes_replacement() {
    let scanned = scan_all(&[b'a', 0xFF, b'b']);
    assert_eq!(scanned, vec![(ident("a\u{FFFD}b"), None)]);
}

#[test]
fn functions() {
    assert_eq!(
        tokens("rgb(1)"),
        vec![
            Token::Function("rgb".into()),
            Token::SignlessInteger(1.0),
            Token::CloseParens
        ]
    );
}

#[test]
fn dash_cases() {
    assert_eq!(tokens("- "), vec![Token::Delim('-'), Token::Whitespace]);
    assert_eq!(tokens("-"), vec![Token::Delim('-')]);
    assert_eq!(single("-->"), Token::Cdc);
    assert_eq!(single("-5"), Token::SignedInteger(-5.0));
    assert_eq!(single("-\\31 "), ident("-1"));
}

// === URLs ===

#[test]
fn unquoted_url() {
    assert_eq!(single("url(img/a.png)"), Token::Url("img/a.png".into()));
    assert_eq!(single("URL(  a.png  )"), Token::Url("a.png".into()));
    assert_eq!(single("url(a\\29 b)"), Token::Url("a)b".into()));
    assert_eq!(single("url()"), Token::Url(String::new()));
}

#[test]
fn url_at_eof_is_terminated() {
    assert_eq!(scan_all(b"url(abc"), vec![(Token::Url("abc".into()), None)]);
    assert_eq!(scan_all(b"url(abc  "), vec![(Token::Url("abc".into()), None)]);
}

#[test]
fn quoted_url_is_function() {
    assert_eq!(
        tokens("url( 'a')"),
        vec![
            Token::Function("url".into()),
            Token::Whitespace,
            Token::String("a".into()),
            Token::CloseParens
        ]
    );
}

#[test]
fn malformed_url_recovers_after_paren() {
    let scanned = scan_all(b"url(bad\"quote) x");
    let toks: Vec<_> = scanned.iter().map(|(t, _)| t.clone()).collect();
    assert_eq!(toks, vec![Token::BadUrl, Token::Whitespace, ident("x")]);
    let errs: Vec<_> = scanned.iter().filter_map(|(_, e)| e.as_ref()).collect();
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].error.message(), "Invalid character \" in url");
    assert_eq!(errs[0].location.bytes, 7);
}

#[test]
fn url_error_messages() {
    assert_eq!(
        errors("url(a b)"),
        vec!["Whitespace only allowed at start and end of url"]
    );
    assert_eq!(
        errors("url(a\u{1}b)"),
        vec!["Nonprintable character 0x01 in url"]
    );
    assert_eq!(errors("url(a(b)"), vec!["Invalid character ( in url"]);
    assert_eq!(
        errors("url(a\\\nb)"),
        vec!["Newline may not follow '\\' escape character"]
    );
}

#[test]
fn bad_url_skips_escaped_paren() {
    let toks = tokens("url(a b\\)c) d");
    assert_eq!(toks, vec![Token::BadUrl, Token::Whitespace, ident("d")]);
}

// === Hash and at-keywords ===

#[test]
fn hashes() {
    assert_eq!(single("#main"), Token::HashId("main".into()));
    assert_eq!(single("#1a"), Token::HashUnrestricted("1a".into()));
    assert_eq!(single("#-"), Token::HashUnrestricted("-".into()));
    assert_eq!(single("#\\31 a"), Token::HashId("1a".into()));
    assert_eq!(tokens("# "), vec![Token::Delim('#'), Token::Whitespace]);
    assert_eq!(tokens("#"), vec![Token::Delim('#')]);
}

#[test]
fn at_keywords() {
    assert_eq!(single("@media"), Token::AtKeyword("media".into()));
    assert_eq!(single("@-x"), Token::AtKeyword("-x".into()));
    assert_eq!(tokens("@1"), vec![Token::Delim('@'), Token::SignlessInteger(1.0)]);
}

// === Punctuation ===

#[test]
fn match_operators() {
    assert_eq!(
        tokens("~=|=^=$=*=||"),
        vec![
            Token::IncludeMatch,
            Token::DashMatch,
            Token::PrefixMatch,
            Token::SuffixMatch,
            Token::SubstringMatch,
            Token::Column
        ]
    );
}

#[test]
fn incomplete_match_operators_are_delims() {
    assert_eq!(
        tokens("~ | ^ $ *"),
        vec![
            Token::Delim('~'),
            Token::Whitespace,
            Token::Delim('|'),
            Token::Whitespace,
            Token::Delim('^'),
            Token::Whitespace,
            Token::Delim('$'),
            Token::Whitespace,
            Token::Delim('*'),
        ]
    );
}

#[test]
fn cdo_consumes_four_bytes() {
    assert_eq!(tokens("<!--a"), vec![Token::Cdo, ident("a")]);
    assert_eq!(
        tokens("<!-"),
        vec![Token::Delim('<'), Token::Delim('!'), Token::Delim('-')]
    );
}

#[test]
fn brackets_and_separators() {
    assert_eq!(
        tokens("([{}]),:;"),
        vec![
            Token::OpenParens,
            Token::OpenSquare,
            Token::OpenCurly,
            Token::CloseCurly,
            Token::CloseSquare,
            Token::CloseParens,
            Token::Comma,
            Token::Colon,
            Token::Semicolon
        ]
    );
}

// === Locations ===

#[test]
fn location_is_start_of_next_token() {
    let mut t = Tokenizer::new("a\r\nbc");
    t.read_token();
    t.read_token();
    let loc = t.location();
    assert_eq!(loc.bytes, 3);
    assert_eq!(loc.chars, 3);
    assert_eq!(loc.lines, 1);
    assert_eq!(loc.line_bytes, 0);
    assert_eq!(t.read_token(), ident("bc"));
    assert_eq!(t.location().line_chars, 2);
}

#[test]
fn location_counts_code_points() {
    let mut t = Tokenizer::new("é x");
    t.read_token();
    let loc = t.location();
    assert_eq!(loc.bytes, 2);
    assert_eq!(loc.chars, 1);
}

// === Reporting ===

#[test]
fn reporter_receives_token_and_location() {
    let mut seen = Vec::new();
    {
        let mut t = Tokenizer::with_reporter(
            "a \"b\n",
            |origin: Origin, location: &Location, token: &Token, error: &CssError| {
                seen.push((origin, location.bytes, token.clone(), error.clone()));
            },
        );
        while !t.read_token().is_eof() {}
    }
    assert_eq!(seen.len(), 1);
    let (origin, bytes, token, error) = &seen[0];
    assert_eq!(*origin, Origin::Tokenizer);
    assert_eq!(*bytes, 4);
    assert_eq!(*token, Token::BadString);
    assert_eq!(error.kind(), ErrorKind::Syntax);
}

#[test]
fn reporter_into_queue() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    {
        let mut t = Tokenizer::with_reporter("url(a b) /* x", &mut queue);
        while !t.read_token().is_eof() {}
    }
    let diags = queue.flush();
    assert_eq!(diags.len(), 2);
    assert_eq!(diags[0].token, "url(bad url)");
    assert_eq!(diags[1].message, "Comment not terminated at end of document.");
}

#[test]
fn scan_does_not_report() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let mut t = Tokenizer::with_reporter(
        "\\\n",
        move |_: Origin, _: &Location, _: &Token, _: &CssError| counter.set(counter.get() + 1),
    );
    let (token, error) = t.scan();
    assert_eq!(token, Token::Delim('\\'));
    assert!(error.is_some());
    assert_eq!(calls.get(), 0);
}

struct DropCounter(Rc<Cell<usize>>);

impl ErrorReporter for DropCounter {
    fn report(&mut self, _: Origin, _: &Location, _: &Token, _: &CssError) {}
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn reporter_dropped_once_with_tokenizer() {
    let drops = Rc::new(Cell::new(0));
    let t = Tokenizer::with_reporter("a", DropCounter(Rc::clone(&drops)));
    assert_eq!(drops.get(), 0);
    drop(t);
    assert_eq!(drops.get(), 1);
}

// === Properties ===

mod proptest_tokenizer {
    use super::*;
    use proptest::prelude::*;

    fn expected_lines(bytes: &[u8]) -> usize {
        bytes
            .iter()
            .enumerate()
            .filter(|&(i, &b)| match b {
                b'\r' | 0x0C => true,
                b'\n' => i == 0 || bytes[i - 1] != b'\r',
                _ => false,
            })
            .count()
    }

    proptest! {
        #[test]
        fn locations_are_monotonic(bytes in prop::collection::vec(any::<u8>(), 0..96)) {
            let mut t = Tokenizer::new(bytes.clone());
            let mut previous = t.location();
            loop {
                let token = t.read_token();
                let now = t.location();
                if token.is_eof() {
                    prop_assert_eq!(now, previous);
                    break;
                }
                prop_assert!(now.bytes > previous.bytes, "no progress on {:?}", token);
                prop_assert!(now.chars > previous.chars);
                prop_assert!(now.lines >= previous.lines);
                previous = now;
            }
            prop_assert_eq!(previous.bytes, bytes.len());
            prop_assert_eq!(previous.lines, expected_lines(&bytes));
        }

        #[test]
        fn chars_match_code_points(source in r"(?s).{0,48}") {
            let mut t = Tokenizer::new(source.as_str());
            while !t.read_token().is_eof() {}
            prop_assert_eq!(t.location().chars, source.chars().count());
        }

        #[test]
        fn at_most_one_error_per_token(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            // `scan` panics in debug builds if a production raises twice.
            let scanned = scan_all(&bytes);
            prop_assert!(scanned.len() <= bytes.len());
        }
    }
}
