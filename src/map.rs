use crate::location::Location;
use crate::parser::Parser;
use crate::result::ParserResult;

/// Parser combinator that transforms the success value using a mapping function
///
/// The location is preserved; a failure passes through untouched.
pub struct MapSuccess<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapSuccess<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapSuccess { parser, mapper }
    }
}

impl<'input, P, F, T, U> Parser<'input> for MapSuccess<P, F>
where
    P: Parser<'input, Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse(&self, location: Location<'input>) -> ParserResult<'input, Self::Output> {
        self.parser.parse(location).map_value(&self.mapper)
    }
}

/// Convenience function to create a MapSuccess parser
pub fn map_success<'input, P, F, T, U>(parser: P, mapper: F) -> MapSuccess<P, F>
where
    P: Parser<'input, Output = T>,
    F: Fn(T) -> U,
{
    MapSuccess::new(parser, mapper)
}

/// Extension trait to add .map_success() method support for parsers
pub trait MapSuccessExt<'input>: Parser<'input> + Sized {
    fn map_success<F, U>(self, mapper: F) -> MapSuccess<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        MapSuccess::new(self, mapper)
    }
}

/// Implement MapSuccessExt for all parsers
impl<'input, P> MapSuccessExt<'input> for P where P: Parser<'input> {}
