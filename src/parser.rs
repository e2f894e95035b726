use crate::location::Location;
use crate::result::ParserResult;

/// Core parser trait for parser combinators
pub trait Parser<'input>: Sized {
    type Output;

    /// Attempt to parse from the given location
    ///
    /// Returns a success carrying the value and the advanced location, or
    /// a failure carrying the accumulated error chain. Parsers are pure:
    /// re-running on the same location produces the same result.
    fn parse(&self, location: Location<'input>) -> ParserResult<'input, Self::Output>;

    /// Run this parser against the start of `input`
    fn run_string(&self, input: &'input str) -> ParserResult<'input, Self::Output> {
        self.parse(Location::new(input))
    }
}
