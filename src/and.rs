use crate::error::ParserError;
use crate::location::Location;
use crate::parser::Parser;
use crate::result::ParserResult;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `((a, b), c)` rather than flat tuples. The nested shape is general and the
/// destructuring pattern is explicit about the parsing order.
///
/// A failure from either operand is wrapped in a context error anchored at
/// the offset where the sequence began, not where the failing operand
/// failed.
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'input, P1, P2> Parser<'input> for And<P1, P2>
where
    P1: Parser<'input>,
    P2: Parser<'input>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, location: Location<'input>) -> ParserResult<'input, Self::Output> {
        let entry = location.next_index();
        self.parser1
            .parse(location)
            .bind_success(|first| {
                self.parser2
                    .parse(first.location)
                    .bind_success(|second| ParserResult::Success(first.append(second)))
            })
            .map_failure(|failure| {
                failure.prepending_error(ParserError::new("sequence failed", entry))
            })
    }
}

/// Convenience function to create an And parser
pub fn and<'input, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'input>,
    P2: Parser<'input>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'input>: Parser<'input> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'input>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'input, P> AndExt<'input> for P where P: Parser<'input> {}
