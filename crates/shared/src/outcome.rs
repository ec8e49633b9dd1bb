//! Combinators for composing fallible upstream lookups.
//!
//! `Result` already is the two-channel container; this module adds the
//! vocabulary the lookup pipelines are written in and the first-failure-wins
//! [`sequence`].

/// Collects results into a single result, keeping input order.
///
/// Returns the first failure in iteration order. Later failures are
/// discarded and later inputs are not evaluated.
pub fn sequence<T, E, I>(results: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let iter = results.into_iter();
    let mut values = Vec::with_capacity(iter.size_hint().0);

    for result in iter {
        values.push(result?);
    }

    Ok(values)
}

/// Pipeline combinators on top of `Result`.
pub trait Outcome<T, E>: Sized {
    /// Applies `f` to the success value; failures pass through unchanged.
    fn chain<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>;

    /// Transforms only the failure channel.
    fn map_error<E2, F>(self, f: F) -> Result<T, E2>
    where
        F: FnOnce(E) -> E2;

    /// Collapses both channels into one value.
    fn fold<R, L, S>(self, on_failure: L, on_success: S) -> R
    where
        L: FnOnce(E) -> R,
        S: FnOnce(T) -> R;

    /// Recovers a success value from a failure.
    fn or_else_value<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T;
}

impl<T, E> Outcome<T, E> for Result<T, E> {
    fn chain<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        self.and_then(f)
    }

    fn map_error<E2, F>(self, f: F) -> Result<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        self.map_err(f)
    }

    fn fold<R, L, S>(self, on_failure: L, on_success: S) -> R
    where
        L: FnOnce(E) -> R,
        S: FnOnce(T) -> R,
    {
        match self {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }

    fn or_else_value<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.unwrap_or_else(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sequence_all_success_keeps_order() {
        let results: Vec<Result<&str, &str>> = vec![Ok("one"), Ok("two"), Ok("three")];
        assert_eq!(sequence(results), Ok(vec!["one", "two", "three"]));
    }

    #[test]
    fn test_sequence_empty_is_success() {
        let results: Vec<Result<u8, &str>> = vec![];
        assert_eq!(sequence(results), Ok(vec![]));
    }

    #[test]
    fn test_sequence_returns_first_failure() {
        let results: Vec<Result<u8, &str>> = vec![Ok(1), Err("first"), Ok(2), Err("second")];
        assert_eq!(sequence(results), Err("first"));
    }

    #[test]
    fn test_sequence_stops_evaluating_after_failure() {
        let mut evaluated = Vec::new();
        let results = (0..5).map(|i| {
            evaluated.push(i);
            if i == 1 { Err(i) } else { Ok(i) }
        });

        assert_eq!(sequence(results), Err(1));
        assert_eq!(evaluated, vec![0, 1]);
    }

    #[test]
    fn test_chain_short_circuits_on_failure() {
        let failed: Result<u8, &str> = Err("boom");
        let mut called = false;
        let result = failed.chain(|v| {
            called = true;
            Ok::<_, &str>(v + 1)
        });

        assert_eq!(result, Err("boom"));
        assert!(!called);
    }

    #[test]
    fn test_chain_applies_on_success() {
        let ok: Result<u8, &str> = Ok(1);
        assert_eq!(ok.chain(|v| Ok(v * 10)), Ok(10));
        assert_eq!(ok.chain(|_| Err::<u8, _>("inner")), Err("inner"));
    }

    #[test]
    fn test_map_error_only_touches_failure() {
        let ok: Result<u8, &str> = Ok(3);
        let err: Result<u8, &str> = Err("bad");

        assert_eq!(ok.map_error(str::len), Ok(3));
        assert_eq!(err.map_error(str::len), Err(3));
    }

    #[test]
    fn test_fold_and_recover() {
        let err: Result<u8, &str> = Err("bad");
        assert_eq!(err.fold(|e| e.len(), usize::from), 3);
        assert_eq!(err.or_else_value(|_| 7), 7);
        assert_eq!(Ok::<u8, &str>(2).or_else_value(|_| 7), 2);
    }

    proptest! {
        /// All successes come back in input order.
        #[test]
        fn prop_sequence_preserves_order(values in proptest::collection::vec(any::<i32>(), 0..50)) {
            let results: Vec<Result<i32, usize>> = values.iter().copied().map(Ok).collect();
            prop_assert_eq!(sequence(results), Ok(values));
        }

        /// The failure at the lowest index wins.
        #[test]
        fn prop_sequence_is_left_biased(
            len in 1usize..40,
            failures in proptest::collection::btree_set(0usize..40, 1..5),
        ) {
            let failures: Vec<usize> = failures.into_iter().filter(|p| *p < len).collect();
            prop_assume!(!failures.is_empty());

            let results: Vec<Result<usize, usize>> = (0..len)
                .map(|i| if failures.contains(&i) { Err(i) } else { Ok(i) })
                .collect();

            prop_assert_eq!(sequence(results), Err(failures[0]));
        }
    }
}
