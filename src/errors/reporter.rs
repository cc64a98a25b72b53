use super::errors::Error;

/// Sink for lexical errors found during a scan.
///
/// Reporting never stops the scan; the reporter decides what an error
/// means for the overall run.
pub trait ErrorReporter {
    fn report(&mut self, error: Error);
}

impl<F> ErrorReporter for F
where
    F: FnMut(Error),
{
    fn report(&mut self, error: Error) {
        self(error)
    }
}

/// Collects the errors of one scan (or one REPL line).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    errors: Vec<Error>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics { errors: vec![] }
    }

    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

impl ErrorReporter for Diagnostics {
    fn report(&mut self, error: Error) {
        self.errors.push(error);
    }
}
