use crate::error::ParserFailure;
use crate::location::Location;
use crate::parser::Parser;
use crate::result::ParserResult;

/// Parser combinator that transforms the failure using a mapping function
///
/// A success passes through untouched. This is the general hook behind
/// labeling and scoping; use it directly for custom failure reshaping.
pub struct MapFailure<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapFailure<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapFailure { parser, mapper }
    }
}

impl<'input, P, F> Parser<'input> for MapFailure<P, F>
where
    P: Parser<'input>,
    F: Fn(ParserFailure) -> ParserFailure,
{
    type Output = P::Output;

    fn parse(&self, location: Location<'input>) -> ParserResult<'input, Self::Output> {
        self.parser.parse(location).map_failure(&self.mapper)
    }
}

/// Convenience function to create a MapFailure parser
pub fn map_failure<'input, P, F>(parser: P, mapper: F) -> MapFailure<P, F>
where
    P: Parser<'input>,
    F: Fn(ParserFailure) -> ParserFailure,
{
    MapFailure::new(parser, mapper)
}

/// Extension trait to add .map_failure() method support for parsers
pub trait MapFailureExt<'input>: Parser<'input> + Sized {
    fn map_failure<F>(self, mapper: F) -> MapFailure<Self, F>
    where
        F: Fn(ParserFailure) -> ParserFailure,
    {
        MapFailure::new(self, mapper)
    }
}

/// Implement MapFailureExt for all parsers
impl<'input, P> MapFailureExt<'input> for P where P: Parser<'input> {}
