use crate::{FailureKind, Raise, Result};

/// A boxed operation taking no arguments.
pub type NoArgsClosure<'a, T, E> = Box<dyn FnOnce() -> std::result::Result<T, E> + 'a>;

/// Runs `operation` once and captures failures matching `expected`.
///
/// - a returned value becomes a successful [`Result`], whatever its type
/// - a failure matching `expected` is captured into a failed [`Result`]
/// - any other failure is handed back untouched in the outer `Err`, so the
///   caller can keep propagating it with `?`
///
/// ```
/// use no_exceptions::{kind, test::{divide, AttributeMissing, DivideByZero}, try_expecting};
///
/// # fn main() -> Result<(), DivideByZero> {
/// let result = try_expecting(|| divide(42.0, 0.0), kind::<DivideByZero>())?;
/// assert_eq!(result.unpack(), (false, None));
/// assert_eq!(result.unwrap_or(1.0), 1.0);
///
/// let result = try_expecting(|| divide(4.0, 2.0), kind::<DivideByZero>())?;
/// assert_eq!(result.unwrap(), 2.0);
///
/// let error = try_expecting(
///     || Err::<f64, _>(AttributeMissing::new("foo")),
///     kind::<DivideByZero>(),
/// )
/// .unwrap_err();
/// assert_eq!(error, AttributeMissing::new("foo"));
/// # Ok(())
/// # }
/// ```
pub fn try_expecting<T, E, K>(
    operation: impl FnOnce() -> std::result::Result<T, E>,
    expected: K,
) -> std::result::Result<Result<T>, E>
where
    E: Raise,
    K: FailureKind,
{
    match operation() {
        Ok(value) => Ok(Result::new_ok(value)),
        Err(error) if expected.matches(error.as_error()) => {
            log::trace!("captured expected failure: {}", error.as_error());
            Ok(Result::new_err(error.into_failure()))
        }
        Err(error) => {
            log::trace!("propagating unexpected failure: {}", error.as_error());
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{
        caused_by, kind, predicate,
        test::{checked_div, divide, ArithmeticError, AttributeMissing, DivideByZero, Overflow},
        Failure,
    };

    #[test]
    fn success_is_wrapped() {
        let result = try_expecting(|| divide(42.0, 6.0), kind::<DivideByZero>()).unwrap();
        assert!(result.is_ok());
        assert_eq!(result.unpack(), (true, Some(&7.0)));
        assert_eq!(result.clone().unwrap_or(0.0), 7.0);
        assert_eq!(result.unwrap(), 7.0);
    }

    #[test]
    fn expected_failure_is_captured() {
        let result = try_expecting(|| divide(1.0, 0.0), kind::<DivideByZero>()).unwrap();
        assert!(result.is_err());
        assert!(result.failure().unwrap().is::<DivideByZero>());
        assert_eq!(result.unpack(), (false, None));
        assert_eq!(result.clone().unwrap_or(0.0), 0.0);
        assert!(result.try_unwrap().is_err());
    }

    #[test]
    #[should_panic(expected = "Tried to unwrap an erroneous result: Result(DivideByZero)!")]
    fn unwrapping_a_captured_failure_panics() {
        try_expecting(|| divide(1.0, 0.0), kind::<DivideByZero>())
            .unwrap()
            .unwrap();
    }

    #[test]
    fn unexpected_failure_propagates_unchanged() {
        let error = try_expecting(
            || Err::<f64, _>(AttributeMissing::new("foo")),
            kind::<DivideByZero>(),
        )
        .expect_err("not a DivideByZero");
        assert_eq!(error, AttributeMissing::new("foo"));
    }

    #[test]
    fn unexpected_failure_propagates_through_question_mark() {
        fn lookup() -> anyhow::Result<i64> {
            let result = try_expecting(|| checked_div(i64::MIN, -1), kind::<DivideByZero>())?;
            Ok(result.unwrap_or(0))
        }

        let error = lookup().unwrap_err();
        assert_eq!(
            error.downcast_ref::<ArithmeticError>(),
            Some(&ArithmeticError::Overflow(Overflow))
        );
    }

    #[test]
    fn returned_errors_are_values() {
        let result =
            try_expecting(|| Ok::<_, DivideByZero>(AttributeMissing::new("foo")), kind::<DivideByZero>())
                .unwrap();
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), AttributeMissing::new("foo"));

        let result = try_expecting(|| Ok::<_, ArithmeticError>(Overflow), caused_by::<Overflow>())
            .unwrap();
        assert_eq!(result.unwrap(), Overflow);
    }

    #[test]
    fn caused_by_captures_more_specific_failures() {
        let result = try_expecting(|| checked_div(1, 0), caused_by::<DivideByZero>()).unwrap();
        let failure = result.failure().unwrap();
        assert!(failure.is::<ArithmeticError>());
        assert!(failure.source().unwrap().is::<DivideByZero>());

        let error = try_expecting(|| checked_div(i64::MIN, -1), caused_by::<DivideByZero>())
            .unwrap_err();
        assert_eq!(error, ArithmeticError::Overflow(Overflow));
    }

    #[test]
    fn exact_kind_does_not_look_through_wrappers() {
        let error = try_expecting(|| checked_div(1, 0), kind::<DivideByZero>()).unwrap_err();
        assert_eq!(error, ArithmeticError::DivideByZero(DivideByZero));
    }

    #[test]
    fn families_and_predicates() {
        let family = (kind::<DivideByZero>(), kind::<AttributeMissing>());
        for input in [0.0, 2.0] {
            let result = try_expecting(|| divide(4.0, input), family).unwrap();
            assert_eq!(result.is_ok(), input != 0.0);
        }

        let only_foo = predicate(|failure| {
            failure
                .downcast_ref::<AttributeMissing>()
                .map_or(false, |missing| missing.name() == "foo")
        });
        let raise = |name: &str| Err::<(), _>(AttributeMissing::new(name));

        assert!(try_expecting(|| raise("foo"), &only_foo).unwrap().is_err());
        assert!(try_expecting(|| raise("bar"), &only_foo).is_err());
    }

    #[test]
    fn failure_on_the_channel_is_classified_by_its_contents() {
        let raise = || Err::<i32, _>(Failure::new(DivideByZero));

        let result = try_expecting(raise, kind::<DivideByZero>()).unwrap();
        assert!(result.failure().unwrap().is::<DivideByZero>());

        let error = try_expecting(raise, kind::<Overflow>()).unwrap_err();
        assert!(error.is::<DivideByZero>());
    }

    #[test]
    fn operation_runs_exactly_once() {
        let calls = Cell::new(0);
        let operation: NoArgsClosure<'_, i32, DivideByZero> = Box::new(|| {
            calls.set(calls.get() + 1);
            Ok(1)
        });

        let result = try_expecting(operation, kind::<DivideByZero>()).unwrap();
        assert_eq!(result.unwrap(), 1);
        assert_eq!(calls.get(), 1);
    }
}
