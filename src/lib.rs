#![allow(clippy::module_inception)]

use std::sync::Once;

use crate::errors::{
    errors::{Error, ErrorTip},
    reporter::Diagnostics,
};
use crate::lexer::{lexer::tokenize, tokens::Token};

pub mod errors;
pub mod lexer;
pub mod macros;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=slox=debug` or
/// `RUST_LOG=slox=trace` (one event per token).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}

/// Scans one complete source text. Every call starts with a fresh error state.
pub fn run(source: &str) -> (Vec<Token>, Diagnostics) {
    tokenize(source.to_string())
}

/// Returns the text of the 1-based `line` of `source`, without its line break.
pub fn get_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    eprint!("{}", render_error(error, source, file));
}

/// Formats an error the way `display_error` prints it:
///
/// ```text
/// [line 2] Error: Unexpected character
/// UnexpectedCharacter (Unexpected character: `@`, it does not start any token)
/// -> script.lox
///   |
/// 2 | var a = @;
///   |
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let line = error.get_line();
    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = format!("{}\n", error);

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("{}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("{} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file));

    if let Some(line_text) = get_line(source, line) {
        out.push_str(&format!("{:>padding$}\n", "|"));
        out.push_str(&format!("{} | {}\n", line_string, line_text.trim()));
        out.push_str(&format!("{:>padding$}\n", "|"));
    }

    out
}

#[cfg(test)]
mod tests {
    use crate::errors::errors::{Error, ErrorImpl};

    #[test]
    fn test_get_line() {
        let source = "var a = 1;\nprint a;\r\n\nend";

        assert_eq!(super::get_line(source, 1), Some("var a = 1;"));
        assert_eq!(super::get_line(source, 2), Some("print a;"));
        assert_eq!(super::get_line(source, 3), Some(""));
        assert_eq!(super::get_line(source, 4), Some("end"));
        assert_eq!(super::get_line(source, 5), None);
        assert_eq!(super::get_line(source, 0), None);
    }

    #[test]
    fn test_render_error() {
        let source = "var a = 1;\n  var b = @;";
        let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '@' }, 2);

        let rendered = super::render_error(&error, source, "test.lox");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "[line 2] Error: Unexpected character");
        assert!(lines[1].starts_with("UnexpectedCharacter ("));
        assert!(lines[1].contains("`@`"));
        assert_eq!(lines[2], "-> test.lox");
        assert_eq!(lines[3], "  |");
        assert_eq!(lines[4], "2 | var b = @;");
        assert_eq!(lines[5], "  |");
    }

    #[test]
    fn test_render_error_past_end_of_source() {
        let error = Error::new(ErrorImpl::UnterminatedString, 9);
        let rendered = super::render_error(&error, "\"abc", "shell");

        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.starts_with("[line 9] Error: Unterminated string\n"));
    }

    #[test]
    fn test_run_has_fresh_error_state() {
        let (_, first) = super::run("@");
        let (tokens, second) = super::run("1");

        assert!(first.had_error());
        assert!(!second.had_error());
        assert_eq!(tokens.len(), 2);
    }
}
