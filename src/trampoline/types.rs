//! Trampoline Types
//!
//! A chain of deferred computations is represented as a tagged value: either a
//! terminal result or a thunk that produces the next step. The tag, not a
//! runtime type check, decides whether the trampoline keeps going, so a
//! terminal value can never be mistaken for something callable.

use std::convert::Infallible;
use std::fmt;

/// A zero-argument deferred computation producing the next step of a chain.
///
/// `FnOnce` guarantees each thunk is consumed exactly once.
pub type Thunk<'a, T, E = Infallible> = Box<dyn FnOnce() -> Result<Step<'a, T, E>, E> + 'a>;

/// One link in a trampolined chain
pub enum Step<'a, T, E = Infallible> {
    /// Terminal value - ends the trampoline loop
    Done(T),
    /// Deferred computation - invoke it to get the next step
    Call(Thunk<'a, T, E>),
}

impl<'a, T, E> Step<'a, T, E> {
    /// Wrap a terminal value.
    pub fn done(value: T) -> Self {
        Step::Done(value)
    }

    /// Defer an infallible computation that yields the next step.
    pub fn call<F>(f: F) -> Self
    where
        F: FnOnce() -> Step<'a, T, E> + 'a,
    {
        Step::Call(Box::new(move || Ok(f())))
    }

    /// Defer a computation that may fail. An `Err` stops the chain and is
    /// handed back to whoever is running it.
    pub fn try_call<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<Step<'a, T, E>, E> + 'a,
    {
        Step::Call(Box::new(f))
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done(_))
    }

    /// Transform the terminal value once the chain lands.
    ///
    /// Nothing is evaluated here. Each pending thunk gets wrapped so that its
    /// successor is mapped in turn, which keeps the stack flat while running.
    pub fn map<U, F>(self, f: F) -> Step<'a, U, E>
    where
        T: 'a,
        E: 'a,
        U: 'a,
        F: FnOnce(T) -> U + 'a,
    {
        match self {
            Step::Done(value) => Step::Done(f(value)),
            Step::Call(thunk) => Step::Call(Box::new(move || Ok(thunk()?.map(f)))),
        }
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Step<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Done(value) => f.debug_tuple("Done").field(value).finish(),
            Step::Call(_) => f.write_str("Call(<thunk>)"),
        }
    }
}

impl<T, E> From<T> for Step<'_, T, E> {
    fn from(value: T) -> Self {
        Step::Done(value)
    }
}

/// Terminal value of a configured run, along with how many thunks it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Landed<T> {
    pub value: T,
    pub steps: u64,
}
