use crate::location::Location;
use crate::parser::Parser;
use crate::result::ParserResult;

/// Parser combinator that transforms the whole result using a mapping function
///
/// The most general reshaping hook: the mapper receives the inner
/// [`ParserResult`] as-is and may turn a success into a failure or the
/// other way around.
pub struct MapResult<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapResult<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapResult { parser, mapper }
    }
}

impl<'input, P, F, U> Parser<'input> for MapResult<P, F>
where
    P: Parser<'input>,
    F: Fn(ParserResult<'input, P::Output>) -> ParserResult<'input, U>,
{
    type Output = U;

    fn parse(&self, location: Location<'input>) -> ParserResult<'input, Self::Output> {
        (self.mapper)(self.parser.parse(location))
    }
}

/// Convenience function to create a MapResult parser
pub fn map_result<'input, P, F, U>(parser: P, mapper: F) -> MapResult<P, F>
where
    P: Parser<'input>,
    F: Fn(ParserResult<'input, P::Output>) -> ParserResult<'input, U>,
{
    MapResult::new(parser, mapper)
}

/// Extension trait to add .map_result() method support for parsers
pub trait MapResultExt<'input>: Parser<'input> + Sized {
    fn map_result<F, U>(self, mapper: F) -> MapResult<Self, F>
    where
        F: Fn(ParserResult<'input, Self::Output>) -> ParserResult<'input, U>,
    {
        MapResult::new(self, mapper)
    }
}

/// Implement MapResultExt for all parsers
impl<'input, P> MapResultExt<'input> for P where P: Parser<'input> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParserError, ParserFailure};
    use crate::result::ParserSuccess;
    use crate::string::string;

    #[test]
    fn test_reshapes_success() {
        let parser = string("ab").map_result(|result| result.map_value(|s| s.len()));
        let result = parser.run_string("abc");

        let success = result.success().unwrap();
        assert_eq!(success.value, 2);
        assert_eq!(success.location.next_index(), 2);
    }

    #[test]
    fn test_can_turn_failure_into_success() {
        let parser = string("ab").map_result(|result| {
            result.bind_failure(|_| {
                ParserResult::Success(ParserSuccess::new("fallback".into(), Location::new("")))
            })
        });
        let result = parser.run_string("xy");

        assert_eq!(result.success().unwrap().value, "fallback");
    }

    #[test]
    fn test_can_turn_success_into_failure() {
        let parser = string("ab").map_result(|result| {
            result.bind_success(|_| {
                ParserResult::<()>::Failure(ParserFailure::new(ParserError::new("rejected", 0)))
            })
        });
        let result = parser.run_string("ab");

        let failure = result.failure().unwrap();
        assert_eq!(failure.errors()[0].message, "rejected");
    }

    #[test]
    fn test_function_syntax() {
        let parser = map_result(string("x"), |result| result.map_value(|_| 1u8));
        let result = parser.run_string("x");

        assert_eq!(result.success().unwrap().value, 1);
    }
}
