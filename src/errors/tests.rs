//! Unit tests for error handling.
//!
//! This module contains tests for error types and the error reporters.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::errors::reporter::{Diagnostics, ErrorReporter};

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '@' }, 10);

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.get_line(), 10);
}

#[test]
fn test_error_messages() {
    let unexpected = Error::new(ErrorImpl::UnexpectedCharacter { character: '#' }, 1);
    let unterminated = Error::new(ErrorImpl::UnterminatedString, 1);

    assert_eq!(unexpected.message(), "Unexpected character");
    assert_eq!(unterminated.message(), "Unterminated string");
    assert_eq!(unterminated.get_error_name(), "UnterminatedString");
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::UnterminatedString, 7);

    assert_eq!(error.to_string(), "[line 7] Error: Unterminated string");
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '\u{7}' }, 1);

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`\\u{7}`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_diagnostics_collects_in_order() {
    let mut diagnostics = Diagnostics::new();
    assert!(!diagnostics.had_error());

    diagnostics.report(Error::new(ErrorImpl::UnexpectedCharacter { character: '$' }, 1));
    diagnostics.report(Error::new(ErrorImpl::UnterminatedString, 4));

    assert!(diagnostics.had_error());
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics.errors()[0].get_line(), 1);
    assert_eq!(diagnostics.errors()[1].get_line(), 4);
}

#[test]
fn test_diagnostics_clear() {
    let mut diagnostics = Diagnostics::default();
    diagnostics.report(Error::new(ErrorImpl::UnterminatedString, 1));
    diagnostics.clear();

    assert!(diagnostics.is_empty());
    assert!(diagnostics.into_errors().is_empty());
}

#[test]
fn test_closure_reporter() {
    let mut lines = vec![];
    let mut reporter = |error: Error| lines.push(error.get_line());

    reporter.report(Error::new(ErrorImpl::UnterminatedString, 3));
    reporter.report(Error::new(ErrorImpl::UnterminatedString, 5));

    assert_eq!(lines, vec![3, 5]);
}
