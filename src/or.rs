use crate::either::Either;
use crate::error::ParserError;
use crate::location::Location;
use crate::parser::Parser;
use crate::result::ParserResult;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The operands may produce different value types; the combined output is
/// an [`Either`] tagging which branch matched. A successful first branch
/// short-circuits: the second parser is never invoked. A failing first
/// branch never hands partial consumption to the second: the retry starts
/// from the entry location.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'input, P1, P2> Parser<'input> for Or<P1, P2>
where
    P1: Parser<'input>,
    P2: Parser<'input>,
{
    type Output = Either<P1::Output, P2::Output>;

    fn parse(&self, location: Location<'input>) -> ParserResult<'input, Self::Output> {
        let entry = location.next_index();
        self.parser1
            .parse(location)
            .map_value(Either::Left)
            .bind_failure(|first_failure| {
                self.parser2
                    .parse(location)
                    .map_value(Either::Right)
                    .map_failure(|second_failure| {
                        // Left branch's errors first, behind the context
                        // entry, then the right branch's errors.
                        first_failure
                            .prepending_error(ParserError::new("alternation failed", entry))
                            .appending_errors_from(second_failure)
                    })
            })
    }
}

/// Convenience function to create an Or parser
pub fn or<'input, P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'input>,
    P2: Parser<'input>,
{
    Or::new(parser1, parser2)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'input>: Parser<'input> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'input>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'input, P> OrExt<'input> for P where P: Parser<'input> {}
