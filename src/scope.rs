use crate::error::ParserError;
use crate::location::Location;
use crate::parser::Parser;
use crate::result::ParserResult;
use std::borrow::Cow;

/// Parser combinator that adds outer context to a failure without discarding detail
///
/// On failure a new context error carrying `message` is prepended ahead of
/// the inner parser's whole error chain, anchored at the offset where the
/// scope was entered. The inner errors all survive in order; use
/// [`crate::label`] to replace them instead.
pub struct Scope<P> {
    parser: P,
    message: Cow<'static, str>,
}

impl<P> Scope<P> {
    pub fn new(parser: P, message: impl Into<Cow<'static, str>>) -> Self {
        Scope {
            parser,
            message: message.into(),
        }
    }
}

impl<'input, P> Parser<'input> for Scope<P>
where
    P: Parser<'input>,
{
    type Output = P::Output;

    fn parse(&self, location: Location<'input>) -> ParserResult<'input, Self::Output> {
        let entry = location.next_index();
        self.parser.parse(location).map_failure(|failure| {
            failure.prepending_error(ParserError::new(self.message.clone(), entry))
        })
    }
}

/// Convenience function to create a Scope parser
pub fn scope<'input, P>(parser: P, message: impl Into<Cow<'static, str>>) -> Scope<P>
where
    P: Parser<'input>,
{
    Scope::new(parser, message)
}

/// Extension trait to add .scope() method support for parsers
pub trait ScopeExt<'input>: Parser<'input> + Sized {
    fn scope(self, message: impl Into<Cow<'static, str>>) -> Scope<Self> {
        Scope::new(self, message)
    }
}

/// Implement ScopeExt for all parsers
impl<'input, P> ScopeExt<'input> for P where P: Parser<'input> {}
