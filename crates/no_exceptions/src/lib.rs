//! Errors as values.
//!
//! [`try_expecting`] runs a fallible operation and captures one named kind of
//! failure into a [`Result`]; every other failure is handed back to the caller
//! unchanged.

mod failure;
pub use failure::{Failure, Raise};

mod kind;
pub use kind::{caused_by, kind, predicate, CausedBy, FailureKind, Is};

mod result;
pub use result::{Result, UnwrapError};

mod adapter;
pub use adapter::{try_expecting, NoArgsClosure};
