//! The `check` command: walk a stylesheet's rule structure and report every
//! problem the tokenizer and parser find.
//!
//! The walk knows only the outline of CSS: qualified rules with a
//! declaration block, at-rules ending at `;` or with a block, and
//! `name: value` declarations. Selectors, preludes and values are skipped a
//! component at a time, so only structural errors are reported.

use tracing::debug;
use vellum_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use vellum_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue};
use vellum_lexer::{SourceBuffer, Token, TokenTag};
use vellum_parse::Parser;

use super::{read_file, CommandOptions};

/// At-rules whose block holds rules rather than declarations.
const RULE_LIST_AT_RULES: &[&str] = &[
    "container",
    "document",
    "layer",
    "media",
    "supports",
    "keyframes",
    "-webkit-keyframes",
];

/// Outcome of checking one stylesheet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Qualified rules with a declaration block, nested ones included.
    pub rules: usize,
    pub at_rules: usize,
    /// Declarations with a name, a colon and a value.
    pub declarations: usize,
    /// Reports sorted by location.
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_warning()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Walk `source` as a stylesheet.
pub fn check_source(source: impl Into<SourceBuffer>, config: DiagnosticConfig) -> CheckReport {
    let mut queue = DiagnosticQueue::with_config(config);
    let mut report = CheckReport::default();
    {
        let mut parser = Parser::for_bytes(source, &mut queue);
        walk_stylesheet(&mut parser, &mut report);
    }
    report.diagnostics = queue.flush();
    report
}

/// Check a file, printing its diagnostics to stderr.
///
/// Exits with status 1 when errors were reported. Warnings alone still
/// print the OK line.
pub fn check_file(path: &str, options: &CommandOptions) {
    let content = read_file(path);
    let report = check_source(content, options.diagnostic_config());

    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let mut emitter = TerminalEmitter::with_color_mode(std::io::stderr(), options.color, is_tty)
        .with_file_path(path);

    if !report.diagnostics.is_empty() {
        emitter.emit_all(&report.diagnostics);
        emitter.emit_summary(report.error_count(), report.warning_count());
        emitter.flush();
    }

    if report.has_errors() {
        std::process::exit(1);
    }

    println!(
        "OK: {path} ({} rules, {} at-rules, {} declarations)",
        report.rules, report.at_rules, report.declarations
    );
}

// ─── Walker ───

fn walk_stylesheet(parser: &mut Parser<'_>, report: &mut CheckReport) {
    while !parser.is_eof() {
        // `<!--` and `-->` are allowed between top-level rules.
        if parser.consume_if(TokenTag::Cdo) || parser.consume_if(TokenTag::Cdc) {
            continue;
        }
        walk_rule(parser, report);
    }
}

/// Rules until the end of the innermost open block.
fn walk_rule_list(parser: &mut Parser<'_>, report: &mut CheckReport) {
    while !parser.is_eof() {
        walk_rule(parser, report);
    }
}

fn walk_rule(parser: &mut Parser<'_>, report: &mut CheckReport) {
    if parser.has_token(TokenTag::AtKeyword) {
        walk_at_rule(parser, report);
    } else {
        walk_qualified_rule(parser, report);
    }
}

fn walk_at_rule(parser: &mut Parser<'_>, report: &mut CheckReport) {
    let name = match parser.get_token() {
        Token::AtKeyword(name) => name.to_ascii_lowercase(),
        _ => return,
    };

    parser.start_semicolon_block(TokenTag::OpenCurly);
    parser.consume_token();
    if parser.end_block_prelude() {
        debug!(%name, "at-rule block");
        if RULE_LIST_AT_RULES.contains(&name.as_str()) {
            walk_rule_list(parser, report);
        } else {
            walk_declarations(parser, report);
        }
    }
    parser.end_block();
    report.at_rules += 1;
}

fn walk_qualified_rule(parser: &mut Parser<'_>, report: &mut CheckReport) {
    parser.get_token();
    let prelude_start = parser.start_location();

    parser.skip_until(TokenTag::OpenCurly);
    if !parser.has_token(TokenTag::OpenCurly) {
        parser.error_syntax("Expected '{' after selectors");
        return;
    }
    if parser.start_location() == prelude_start {
        parser.error_syntax("Expected a selector");
    }

    parser.start_block();
    walk_declarations(parser, report);
    parser.end_block();
    report.rules += 1;
}

/// Declarations until the end of the innermost open block.
fn walk_declarations(parser: &mut Parser<'_>, report: &mut CheckReport) {
    while !parser.is_eof() {
        walk_declaration(parser, report);
    }
}

fn walk_declaration(parser: &mut Parser<'_>, report: &mut CheckReport) {
    parser.start_semicolon_block(TokenTag::Eof);

    // A lone `;` is an empty declaration, which is allowed.
    if !parser.is_eof() && parser.consume_ident().is_some() {
        if !parser.consume_if(TokenTag::Colon) {
            parser.error_syntax("Expected ':'");
        } else if parser.is_eof() {
            parser.error_syntax("Expected a value");
        } else {
            report.declarations += 1;
        }
    }

    parser.end_block();
}

#[cfg(test)]
mod tests;
