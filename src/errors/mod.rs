//! Error types and error reporting for the scanner.
//!
//! This module defines the lexical errors produced while scanning. It
//! includes:
//!
//! - Error structures carrying the line they occurred on
//! - The error variants the scanner can report
//! - Helpful tips for displaying errors
//! - The `ErrorReporter` sink and the `Diagnostics` collector

pub mod errors;
pub mod reporter;

#[cfg(test)]
mod tests;
