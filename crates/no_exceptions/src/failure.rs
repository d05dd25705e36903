use std::{error::Error, sync::Arc};

type DynError = dyn Error + Send + Sync + 'static;

/// A captured failure.
///
/// Any [`std::error::Error`] can be captured. The failure is shared rather
/// than copied, so a cloned [`crate::Result`] and an [`crate::UnwrapError`]
/// point at the same underlying error.
///
/// `Failure` deliberately does not implement [`std::error::Error`] itself, so
/// that every error type converts into it with `From`.
#[derive(Clone)]
pub struct Failure {
    inner: Arc<DynError>,
}

impl Failure {
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(error),
        }
    }

    pub fn from_boxed(error: Box<DynError>) -> Self {
        Self {
            inner: Arc::from(error),
        }
    }

    pub fn as_error(&self) -> &(dyn Error + 'static) {
        &*self.inner
    }

    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.as_error().is::<E>()
    }

    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.as_error().downcast_ref::<E>()
    }

    pub fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.source()
    }

    /// The captured error followed by each of its sources, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        std::iter::successors(Some(self.as_error()), |error| (*error).source())
    }

    /// Whether both handles refer to the same captured error.
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<E> From<E> for Failure
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&*self.inner, f)
    }
}

impl std::fmt::Debug for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&*self.inner, f)
    }
}

/// Something that can travel on an operation's failure channel.
pub trait Raise: Sized {
    fn as_error(&self) -> &(dyn Error + 'static);
    fn into_failure(self) -> Failure;
}

impl<E> Raise for E
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn as_error(&self) -> &(dyn Error + 'static) {
        self
    }

    #[inline]
    fn into_failure(self) -> Failure {
        Failure::new(self)
    }
}

impl Raise for Failure {
    #[inline]
    fn as_error(&self) -> &(dyn Error + 'static) {
        Failure::as_error(self)
    }

    #[inline]
    fn into_failure(self) -> Failure {
        self
    }
}
