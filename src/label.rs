use crate::location::Location;
use crate::parser::Parser;
use crate::result::ParserResult;
use std::borrow::Cow;

/// Parser combinator that replaces the failure diagnostic with a single message
///
/// On failure the inner parser's whole error chain collapses to one error
/// carrying `message`, anchored at the innermost existing error's offset.
/// Prior context is discarded, not annotated; use [`crate::scope`] to add
/// outer context while keeping the detail.
pub struct Label<P> {
    parser: P,
    message: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, message: impl Into<Cow<'static, str>>) -> Self {
        Label {
            parser,
            message: message.into(),
        }
    }
}

impl<'input, P> Parser<'input> for Label<P>
where
    P: Parser<'input>,
{
    type Output = P::Output;

    fn parse(&self, location: Location<'input>) -> ParserResult<'input, Self::Output> {
        self.parser
            .parse(location)
            .map_failure(|failure| failure.label(self.message.clone()))
    }
}

/// Convenience function to create a Label parser
pub fn label<'input, P>(parser: P, message: impl Into<Cow<'static, str>>) -> Label<P>
where
    P: Parser<'input>,
{
    Label::new(parser, message)
}

/// Extension trait to add .label() method support for parsers
pub trait LabelExt<'input>: Parser<'input> + Sized {
    fn label(self, message: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, message)
    }
}

/// Implement LabelExt for all parsers
impl<'input, P> LabelExt<'input> for P where P: Parser<'input> {}
