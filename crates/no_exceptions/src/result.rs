use crate::{Failure, Raise};

/// The outcome of a fallible operation: a success value, or a captured
/// [`Failure`].
///
/// Exactly one of the two is present, fixed at construction. Nothing on this
/// type mutates it in place; every combinator produces a new `Result`.
#[derive(Clone)]
pub struct Result<T> {
    inner: Inner<T>,
}

#[derive(Clone)]
enum Inner<T> {
    Ok(T),
    Err(Failure),
}

impl<T> Result<T> {
    pub fn new_ok(value: T) -> Self {
        Self {
            inner: Inner::Ok(value),
        }
    }

    pub fn new_err(failure: impl Into<Failure>) -> Self {
        Self {
            inner: Inner::Err(failure.into()),
        }
    }

    pub fn from_std<E>(result: std::result::Result<T, E>) -> Self
    where
        E: Raise,
    {
        match result {
            Ok(value) => Self::new_ok(value),
            Err(error) => Self::new_err(error.into_failure()),
        }
    }

    pub fn into_std(self) -> std::result::Result<T, Failure> {
        match self.inner {
            Inner::Ok(value) => Ok(value),
            Inner::Err(failure) => Err(failure),
        }
    }

    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self.inner, Inner::Ok(..))
    }

    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Splits the result into a success flag and the success value.
    ///
    /// On failure this yields `(false, None)`: the captured failure is *not*
    /// handed out here. Use [`Result::failure`] or the `Debug` rendering when
    /// the failure detail is needed.
    pub fn unpack(&self) -> (bool, Option<&T>) {
        match &self.inner {
            Inner::Ok(value) => (true, Some(value)),
            Inner::Err(..) => (false, None),
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match &self.inner {
            Inner::Ok(..) => None,
            Inner::Err(failure) => Some(failure),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics when the result holds a failure. The message embeds the
    /// failure's `Debug` form, e.g.
    /// `Tried to unwrap an erroneous result: Result(DivideByZero)!`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    pub fn try_unwrap(self) -> std::result::Result<T, UnwrapError> {
        self.into_std().map_err(|failure| UnwrapError { failure })
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self.inner {
            Inner::Ok(value) => value,
            Inner::Err(..) => default,
        }
    }

    pub fn unwrap_or_else(self, f: impl FnOnce(&Failure) -> T) -> T {
        match self.inner {
            Inner::Ok(value) => value,
            Inner::Err(failure) => f(&failure),
        }
    }

    pub fn ok(self) -> Option<T> {
        self.into_std().ok()
    }

    pub fn as_ref(&self) -> Result<&T> {
        let inner = match &self.inner {
            Inner::Ok(value) => Inner::Ok(value),
            Inner::Err(failure) => Inner::Err(failure.clone()),
        };
        Result { inner }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Result<U> {
        let inner = match self.inner {
            Inner::Ok(value) => Inner::Ok(f(value)),
            Inner::Err(failure) => Inner::Err(failure),
        };
        Result { inner }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Result<U>) -> Result<U> {
        match self.inner {
            Inner::Ok(value) => f(value),
            Inner::Err(failure) => Result::new_err(failure),
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T>
where
    E: Raise,
{
    fn from(result: std::result::Result<T, E>) -> Self {
        Self::from_std(result)
    }
}

impl<T> PartialEq for Result<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (&self.inner, &other.inner) {
            (Inner::Ok(left), Inner::Ok(right)) => left == right,
            (Inner::Err(left), Inner::Err(right)) => left.same_as(right),
            _ => false,
        }
    }
}

impl<T> std::fmt::Display for Result<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            Inner::Ok(value) => write!(f, "Fallible operation result: {value}"),
            Inner::Err(failure) => write!(f, "Fallible operation result: {failure}"),
        }
    }
}

impl<T> std::fmt::Debug for Result<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            Inner::Ok(value) => write!(f, "Result({value:?})"),
            Inner::Err(failure) => write!(f, "Result({failure:?})"),
        }
    }
}

/// Returned by [`Result::try_unwrap`] when the result holds a failure.
#[non_exhaustive]
#[derive(Clone)]
pub struct UnwrapError {
    failure: Failure,
}

impl UnwrapError {
    pub fn failure(&self) -> &Failure {
        &self.failure
    }

    pub fn into_failure(self) -> Failure {
        self.failure
    }
}

impl std::fmt::Display for UnwrapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Tried to unwrap an erroneous result: Result({:?})!",
            self.failure
        )
    }
}

impl std::fmt::Debug for UnwrapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnwrapError")
            .field("failure", &self.failure)
            .finish()
    }
}

impl std::error::Error for UnwrapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.failure.as_error())
    }
}
