use tracing::{debug, trace};

use crate::{
    errors::{
        errors::{Error, ErrorImpl},
        reporter::{Diagnostics, ErrorReporter},
    },
    MK_TOKEN,
};

use super::tokens::{Literal, Token, TokenKind};

/// Single-use scanner over one source string.
///
/// `start` and `current` are byte offsets into `source` and always sit on
/// character boundaries, with `start <= current <= source.len()`.
pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    start: usize,
    current: usize,
    line: usize,
    /// Line of `start`; differs from `line` only inside multi-line strings.
    start_line: usize,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            tokens: vec![],
            source,
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
        }
    }

    /// Runs the scan to completion, reporting lexical errors as they are
    /// found. The returned sequence always ends with exactly one EOF token.
    pub fn scan_tokens<R: ErrorReporter + ?Sized>(mut self, reporter: &mut R) -> Vec<Token> {
        while !self.at_eof() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token(reporter);
        }

        self.tokens
            .push(MK_TOKEN!(TokenKind::EOF, String::new(), self.line));
        self.tokens
    }

    fn scan_token<R: ErrorReporter + ?Sized>(&mut self, reporter: &mut R) {
        let c = self.advance();

        match c {
            '(' => self.push(TokenKind::LeftParen),
            ')' => self.push(TokenKind::RightParen),
            '{' => self.push(TokenKind::LeftBrace),
            '}' => self.push(TokenKind::RightBrace),
            ',' => self.push(TokenKind::Comma),
            '.' => self.push(TokenKind::Dot),
            '-' => self.push(TokenKind::Minus),
            '+' => self.push(TokenKind::Plus),
            ';' => self.push(TokenKind::Semicolon),
            '*' => self.push(TokenKind::Star),
            '!' => self.push_either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.push_either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.push_either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.push_either('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '/' => {
                if self.match_char('/') {
                    self.skip_comment();
                } else {
                    self.push(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.string(reporter),
            c if is_digit(c) => self.number(),
            c if is_alpha(c) => self.identifier(),
            c => self.error(
                reporter,
                ErrorImpl::UnexpectedCharacter { character: c },
            ),
        }
    }

    fn skip_comment(&mut self) {
        while self.peek() != Some('\n') && !self.at_eof() {
            self.advance();
        }
    }

    fn string<R: ErrorReporter + ?Sized>(&mut self, reporter: &mut R) {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.at_eof() {
            self.error(reporter, ErrorImpl::UnterminatedString);
            return;
        }

        // closing quote
        self.advance();

        let value = self.source[self.start + 1..self.current - 1].to_string();
        self.push_literal(TokenKind::String, Literal::String(value));
    }

    fn number(&mut self) {
        while self.peek().is_some_and(is_digit) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(is_digit) {
            self.advance();

            while self.peek().is_some_and(is_digit) {
                self.advance();
            }
        }

        // Only ASCII digits and one inner dot reach here, so parsing cannot fail.
        let value = self.lexeme().parse::<f64>().unwrap_or_default();
        self.push_literal(TokenKind::Number, Literal::Number(value));
    }

    fn identifier(&mut self) {
        while self.peek().is_some_and(is_alpha_numeric) {
            self.advance();
        }

        let kind = TokenKind::from_identifier(self.lexeme());
        self.push(kind);
    }

    fn error<R: ErrorReporter + ?Sized>(&self, reporter: &mut R, error_impl: ErrorImpl) {
        let error = Error::new(error_impl, self.line);
        debug!(line = self.line, error = %error, "lexical error");
        reporter.report(error);
    }

    fn push_either(&mut self, expected: char, matched: TokenKind, otherwise: TokenKind) {
        let kind = if self.match_char(expected) {
            matched
        } else {
            otherwise
        };
        self.push(kind);
    }

    fn push(&mut self, kind: TokenKind) {
        self.push_literal(kind, Literal::None);
    }

    fn push_literal(&mut self, kind: TokenKind, literal: Literal) {
        let lexeme = self.lexeme().to_string();
        trace!(%kind, %lexeme, line = self.start_line, "token");
        self.tokens
            .push(MK_TOKEN!(kind, lexeme, literal, self.start_line));
    }

    fn lexeme(&self) -> &str {
        &self.source[self.start..self.current]
    }

    fn advance(&mut self) -> char {
        // Only called when not at EOF, so there is always a next char.
        let c = self.peek().unwrap_or('\0');
        self.current += c.len_utf8();
        c
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }

        self.current += expected.len_utf8();
        true
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

/// Scans `source` into tokens, collecting every lexical error.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: String) -> (Vec<Token>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let tokens = tokenize_with(source, &mut diagnostics);

    debug!(
        tokens = tokens.len(),
        errors = diagnostics.len(),
        "scan finished"
    );
    (tokens, diagnostics)
}

/// Scans `source` into tokens, handing each lexical error to `reporter`.
pub fn tokenize_with<R: ErrorReporter + ?Sized>(source: String, reporter: &mut R) -> Vec<Token> {
    Lexer::new(source).scan_tokens(reporter)
}
