use std::{error::Error, marker::PhantomData};

/// Names the category of failure a call site is prepared to capture.
///
/// Implemented by [`Is`], [`CausedBy`], tuples of kinds (a failure family,
/// matching when any member matches) and plain predicates over
/// `&(dyn Error + 'static)`.
pub trait FailureKind {
    fn matches(&self, failure: &(dyn Error + 'static)) -> bool;
}

/// Matches failures of exactly the type `E`.
pub struct Is<E>(PhantomData<fn() -> E>);

/// Matches failures of type `E`, and failures caused by an `E` somewhere in
/// their source chain.
pub struct CausedBy<E>(PhantomData<fn() -> E>);

pub const fn kind<E>() -> Is<E>
where
    E: Error + 'static,
{
    Is(PhantomData)
}

pub const fn caused_by<E>() -> CausedBy<E>
where
    E: Error + 'static,
{
    CausedBy(PhantomData)
}

/// Pins a closure to the predicate signature so its argument type is inferred.
pub fn predicate<F>(f: F) -> F
where
    F: Fn(&(dyn Error + 'static)) -> bool,
{
    f
}

impl<E> FailureKind for Is<E>
where
    E: Error + 'static,
{
    #[inline]
    fn matches(&self, failure: &(dyn Error + 'static)) -> bool {
        failure.is::<E>()
    }
}

impl<E> FailureKind for CausedBy<E>
where
    E: Error + 'static,
{
    fn matches(&self, failure: &(dyn Error + 'static)) -> bool {
        std::iter::successors(Some(failure), |error| (*error).source()).any(|error| error.is::<E>())
    }
}

impl<F> FailureKind for F
where
    F: Fn(&(dyn Error + 'static)) -> bool,
{
    #[inline]
    fn matches(&self, failure: &(dyn Error + 'static)) -> bool {
        self(failure)
    }
}

macro_rules! family {
    ($($kind:ident)+) => {
        impl<$($kind),+> FailureKind for ($($kind,)+)
        where
            $($kind: FailureKind,)+
        {
            #[allow(non_snake_case)]
            fn matches(&self, failure: &(dyn Error + 'static)) -> bool {
                let ($($kind,)+) = self;
                false $(|| $kind.matches(failure))+
            }
        }
    };
}

family!(A);
family!(A B);
family!(A B C);
family!(A B C D);
family!(A B C D E);
family!(A B C D E F);

impl<E> Clone for Is<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Is<E> {}

impl<E> std::fmt::Debug for Is<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Is<{}>", std::any::type_name::<E>())
    }
}

impl<E> Clone for CausedBy<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for CausedBy<E> {}

impl<E> std::fmt::Debug for CausedBy<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CausedBy<{}>", std::any::type_name::<E>())
    }
}
