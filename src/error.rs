use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// A single diagnostic anchored to a byte offset in the input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (at byte {next_index})")]
pub struct ParserError {
    pub message: Cow<'static, str>,
    /// Byte offset the diagnostic refers to (0-based)
    pub next_index: usize,
}

impl ParserError {
    pub fn new(message: impl Into<Cow<'static, str>>, next_index: usize) -> Self {
        ParserError {
            message: message.into(),
            next_index,
        }
    }
}

/// Accumulated failure context, outermost entry first
///
/// Combinators grow the chain as a failure propagates outward: sequencing
/// and scoping prepend context at the front, alternation appends the
/// second branch's errors at the back. The innermost (most specific)
/// diagnostic is always last.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParserFailure {
    errors: Vec<ParserError>,
}

impl ParserFailure {
    /// A failure holding a single diagnostic
    pub fn new(error: ParserError) -> Self {
        ParserFailure {
            errors: vec![error],
        }
    }

    /// A failure holding an already-ordered chain of diagnostics
    pub fn from_errors(errors: Vec<ParserError>) -> Self {
        ParserFailure { errors }
    }

    pub fn errors(&self) -> &[ParserError] {
        &self.errors
    }

    /// The innermost (most specific) diagnostic
    pub fn last_error(&self) -> Option<&ParserError> {
        self.errors.last()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Add new outer context ahead of the existing chain
    pub fn prepending_error(mut self, error: ParserError) -> Self {
        self.errors.insert(0, error);
        self
    }

    /// Append a diagnostic after the existing chain
    pub fn appending_error(mut self, error: ParserError) -> Self {
        self.errors.push(error);
        self
    }

    /// Append another failure's whole chain after this one's
    pub fn appending_errors_from(mut self, other: ParserFailure) -> Self {
        self.errors.extend(other.errors);
        self
    }

    /// Collapse the chain to a single diagnostic carrying `message`
    ///
    /// The replacement is anchored at the innermost existing error's
    /// offset; an empty chain stays empty. All prior context is
    /// discarded, not annotated.
    pub fn label(self, message: impl Into<Cow<'static, str>>) -> Self {
        match self.errors.last() {
            Some(last) => ParserFailure::new(ParserError::new(message, last.next_index)),
            None => ParserFailure::default(),
        }
    }
}

impl fmt::Display for ParserFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "parsing failed");
        }
        writeln!(f, "parsing failed:")?;
        for error in &self.errors {
            writeln!(f, "  {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParserFailure {}
