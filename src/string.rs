use crate::error::{ParserError, ParserFailure};
use crate::location::Location;
use crate::parser::Parser;
use crate::result::{ParserResult, ParserSuccess};
use std::borrow::Cow;

/// Parser that matches an exact literal at the current location
///
/// The comparison is a plain prefix match against the unconsumed suffix;
/// no normalization or tokenization is applied.
pub struct StringParser {
    literal: Cow<'static, str>,
}

impl StringParser {
    pub fn new(literal: impl Into<Cow<'static, str>>) -> Self {
        StringParser {
            literal: literal.into(),
        }
    }
}

impl<'input> Parser<'input> for StringParser {
    type Output = Cow<'static, str>;

    fn parse(&self, location: Location<'input>) -> ParserResult<'input, Self::Output> {
        let remaining = location.remaining();
        if remaining.starts_with(self.literal.as_ref()) {
            // Clone is cheap here - just copies the reference for &'static str
            ParserResult::Success(ParserSuccess::new(
                self.literal.clone(),
                location.advance_by(self.literal.len()),
            ))
        } else {
            let message = format!("expected '{}', found '{}'", self.literal, remaining);
            ParserResult::Failure(ParserFailure::new(ParserError::new(
                message,
                location.next_index(),
            )))
        }
    }
}

/// Convenience function to create a StringParser
pub fn string(literal: impl Into<Cow<'static, str>>) -> StringParser {
    StringParser::new(literal)
}
