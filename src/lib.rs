//! # StrComb - Parser Combinator Algebra
//!
//! A minimal parser combinator algebra over string input: small literal
//! parsers combined through sequencing and alternation, producing either a
//! consumed value with an advanced position or a position-tagged failure
//! with accumulated context.
//!
//! The library emphasizes:
//!
//! - **Failures as data**: No panics and no exceptions; every outcome is a
//!   `ParserResult` value the caller inspects with an exhaustive `match`
//! - **Position-tagged diagnostics**: Each failure carries an ordered chain
//!   of errors anchored to byte offsets, outermost context first
//! - **Immutability**: Parsers are pure functions over a `Copy` location;
//!   combinators wrap, they never mutate
//! - **Composability**: Small parsers combine into larger ones using
//!   combinators
//!
//! ```
//! use strcomb::and::AndExt;
//! use strcomb::or::OrExt;
//! use strcomb::{Either, Parser, ParserResult, string};
//!
//! let greeting = string("hello").or(string("hi")).and(string("!"));
//!
//! match greeting.run_string("hi!") {
//!     ParserResult::Success(success) => {
//!         assert_eq!(success.value.0, Either::Right("hi".into()));
//!         assert_eq!(success.location.next_index(), 3);
//!     }
//!     ParserResult::Failure(failure) => panic!("{}", failure),
//! }
//! ```

pub mod and;
pub mod attempt;
pub mod either;
pub mod error;
pub mod label;
pub mod location;
pub mod map;
pub mod map_failure;
pub mod map_result;
pub mod or;
pub mod parser;
pub mod result;
pub mod scope;
pub mod string;

pub use either::Either;
pub use error::{ParserError, ParserFailure};
pub use location::Location;
pub use parser::Parser;
pub use result::{ParserResult, ParserSuccess};
pub use string::{StringParser, string};
