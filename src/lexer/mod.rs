//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into a flat
//! sequence of tokens for a parser. It handles:
//!
//! - A single left-to-right pass with one character of lookahead
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
