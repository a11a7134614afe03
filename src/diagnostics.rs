//! Source-highlighted error reporting for the CLI.
//!
//! Lex and syntax errors carry a byte span straight from the token/parse
//! stage; the checker's own errors (name/type/recursion/value/not-
//! implemented) carry only a line number, so their range is widened to
//! that whole line before handing off to `ariadne`.

use std::ops::Range;

use ariadne::{Color, Label, Report, ReportKind, Source as AriadneSource};

use crate::semantic::CheckError;

fn line_range(source: &str, line: usize) -> Range<usize> {
    let mut start = 0;
    for (i, l) in source.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            let end = start + l.trim_end_matches('\n').len();
            return start..end.max(start);
        }
        start += l.len();
    }
    let end = source.len();
    end..end
}

fn print(filename: &str, source: &str, span: Range<usize>, message: &str) {
    let result = Report::build(ReportKind::Error, (filename, span.clone()))
        .with_message(message)
        .with_label(Label::new((filename, span)).with_message(message).with_color(Color::Red))
        .finish()
        .eprint((filename, AriadneSource::from(source)));
    if let Err(e) = result {
        eprintln!("{filename}: {message}");
        eprintln!("(failed to render source-highlighted report: {e})");
    }
}

/// Prints `error` against `source`, falling back to a plain line if the
/// byte span can't be rendered (e.g. non-UTF8-aligned offsets).
pub fn report_error(filename: &str, source: &str, error: &CheckError) {
    match error {
        CheckError::Lex(e) => print(filename, source, e.span.start..e.span.end, &e.message),
        CheckError::Syntax(e) => print(filename, source, e.span.start..e.span.end, &e.message),
        CheckError::Name { line, message }
        | CheckError::Type { line, message }
        | CheckError::Recursion { line, message }
        | CheckError::Value { line, message }
        | CheckError::NotImplemented { line, message } => print(filename, source, line_range(source, *line), message),
        CheckError::Io { message } => eprintln!("{filename}: {message}"),
    }
}
