use crate::location::Location;
use crate::parser::Parser;
use crate::result::ParserResult;

/// Parser combinator that forwards the inner parser's result unchanged
///
/// A failed attempt keeps the inner failure's positions as they are; the
/// entry location is not restored. Downstream combinators therefore
/// observe exactly the positions the inner parser reported.
// TODO: restore the entry location on failure so alternation can retry
// cleanly after partial consumption.
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<'input, P> Parser<'input> for Attempt<P>
where
    P: Parser<'input>,
{
    type Output = P::Output;

    fn parse(&self, location: Location<'input>) -> ParserResult<'input, Self::Output> {
        self.parser.parse(location)
    }
}

/// Convenience function to create an Attempt parser
pub fn attempt<'input, P>(parser: P) -> Attempt<P>
where
    P: Parser<'input>,
{
    Attempt::new(parser)
}

/// Extension trait to add .attempt() method support for parsers
pub trait AttemptExt<'input>: Parser<'input> + Sized {
    fn attempt(self) -> Attempt<Self> {
        Attempt::new(self)
    }
}

/// Implement AttemptExt for all parsers
impl<'input, P> AttemptExt<'input> for P where P: Parser<'input> {}
