use crate::error::ParserFailure;
use crate::location::Location;

/// A produced value paired with the location after consuming it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserSuccess<'input, A> {
    pub value: A,
    pub location: Location<'input>,
}

impl<'input, A> ParserSuccess<'input, A> {
    pub fn new(value: A, location: Location<'input>) -> Self {
        ParserSuccess { value, location }
    }

    /// Pair this success with a later one, keeping the second location
    ///
    /// Sequencing advances the cursor monotonically, so the combined
    /// success sits where the second parse ended.
    pub fn append<B>(self, other: ParserSuccess<'input, B>) -> ParserSuccess<'input, (A, B)> {
        ParserSuccess::new((self.value, other.value), other.location)
    }

    /// Transform the value, preserving the location
    pub fn map<B, F>(self, f: F) -> ParserSuccess<'input, B>
    where
        F: FnOnce(A) -> B,
    {
        ParserSuccess::new(f(self.value), self.location)
    }
}

/// Outcome of running a parser: a value with its end position, or an
/// accumulated chain of position-tagged errors
///
/// The enum is public so callers extract the variant with an exhaustive
/// `match`; the methods below cover the common reshaping patterns without
/// leaving the sum type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserResult<'input, A> {
    Success(ParserSuccess<'input, A>),
    Failure(ParserFailure),
}

impl<'input, A> ParserResult<'input, A> {
    pub fn is_success(&self) -> bool {
        matches!(self, ParserResult::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ParserResult::Failure(_))
    }

    /// The success wrapper, if present
    pub fn success(self) -> Option<ParserSuccess<'input, A>> {
        match self {
            ParserResult::Success(success) => Some(success),
            ParserResult::Failure(_) => None,
        }
    }

    /// The failure, if present
    pub fn failure(self) -> Option<ParserFailure> {
        match self {
            ParserResult::Success(_) => None,
            ParserResult::Failure(failure) => Some(failure),
        }
    }

    /// Transform the success value in place, preserving the location
    pub fn map_value<B, F>(self, f: F) -> ParserResult<'input, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            ParserResult::Success(success) => ParserResult::Success(success.map(f)),
            ParserResult::Failure(failure) => ParserResult::Failure(failure),
        }
    }

    /// Chain a computation off the success wrapper
    ///
    /// A failure passes through unchanged.
    pub fn bind_success<B, F>(self, f: F) -> ParserResult<'input, B>
    where
        F: FnOnce(ParserSuccess<'input, A>) -> ParserResult<'input, B>,
    {
        match self {
            ParserResult::Success(success) => f(success),
            ParserResult::Failure(failure) => ParserResult::Failure(failure),
        }
    }

    /// Chain a fallback computation off the failure
    ///
    /// A success passes through unchanged.
    pub fn bind_failure<F>(self, f: F) -> ParserResult<'input, A>
    where
        F: FnOnce(ParserFailure) -> ParserResult<'input, A>,
    {
        match self {
            ParserResult::Success(success) => ParserResult::Success(success),
            ParserResult::Failure(failure) => f(failure),
        }
    }

    /// Transform only the failure branch
    pub fn map_failure<F>(self, f: F) -> ParserResult<'input, A>
    where
        F: FnOnce(ParserFailure) -> ParserFailure,
    {
        match self {
            ParserResult::Success(success) => ParserResult::Success(success),
            ParserResult::Failure(failure) => ParserResult::Failure(f(failure)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParserError;
    use proptest::prelude::*;

    fn success_at(value: i32, input: &str, offset: usize) -> ParserResult<'_, i32> {
        ParserResult::Success(ParserSuccess::new(value, Location::new(input).advance_by(offset)))
    }

    fn failure_at(offset: usize) -> ParserResult<'static, i32> {
        ParserResult::Failure(ParserFailure::new(ParserError::new("boom", offset)))
    }

    #[test]
    fn test_append_keeps_second_location() {
        let input = "abcd";
        let first = ParserSuccess::new("ab", Location::new(input).advance_by(2));
        let second = ParserSuccess::new("cd", Location::new(input).advance_by(4));

        let combined = first.append(second);
        assert_eq!(combined.value, ("ab", "cd"));
        assert_eq!(combined.location.next_index(), 4);
    }

    #[test]
    fn test_map_value_preserves_location() {
        let result = success_at(21, "xy", 1).map_value(|v| v * 2);
        let success = result.success().unwrap();
        assert_eq!(success.value, 42);
        assert_eq!(success.location.next_index(), 1);
    }

    #[test]
    fn test_map_value_leaves_failure_untouched() {
        let result = failure_at(3).map_value(|v| v * 2);
        let failure = result.failure().unwrap();
        assert_eq!(failure.errors()[0].next_index, 3);
    }

    #[test]
    fn test_bind_success_chains() {
        let input = "ab";
        let result = success_at(1, input, 1)
            .bind_success(|s| ParserResult::Success(s.map(|v| v + 10)));
        assert_eq!(result.success().unwrap().value, 11);
    }

    #[test]
    fn test_bind_success_passes_failure_through() {
        let result = failure_at(2).bind_success(|s| ParserResult::Success(s.map(|v| v + 10)));
        assert_eq!(result.failure().unwrap().errors()[0].next_index, 2);
    }

    #[test]
    fn test_bind_failure_recovers() {
        let input = "ab";
        let result = failure_at(2).bind_failure(|_| success_at(9, input, 0));
        assert_eq!(result.success().unwrap().value, 9);
    }

    #[test]
    fn test_bind_failure_passes_success_through() {
        let result = success_at(5, "ab", 0).bind_failure(|_| failure_at(7));
        assert_eq!(result.success().unwrap().value, 5);
    }

    #[test]
    fn test_map_failure_only_touches_failure() {
        let result = failure_at(1)
            .map_failure(|f| f.prepending_error(ParserError::new("context", 0)));
        let failure = result.failure().unwrap();
        assert_eq!(failure.len(), 2);
        assert_eq!(failure.errors()[0].next_index, 0);

        let result = success_at(3, "ab", 0)
            .map_failure(|f| f.prepending_error(ParserError::new("context", 0)));
        assert!(result.is_success());
    }

    proptest! {
        #[test]
        fn map_value_identity_law(value in any::<i32>(), offset in 0usize..8) {
            let input = "abcdefgh";
            let result = success_at(value, input, offset);
            prop_assert_eq!(result.clone().map_value(|v| v), result);
        }

        #[test]
        fn map_value_composition_law(value in any::<i32>()) {
            let f = |v: i32| v.wrapping_add(3);
            let g = |v: i32| v.wrapping_mul(2);
            let result = success_at(value, "ab", 1);
            prop_assert_eq!(
                result.clone().map_value(|v| f(g(v))),
                result.map_value(g).map_value(f)
            );
        }
    }
}
