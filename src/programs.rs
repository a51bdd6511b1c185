//! Lesson Programs
//!
//! Small self-recursive computations written both as trampolined chains and,
//! where it is instructive, as naive recursion. The recursive versions grow
//! the native stack by one frame per step and exist as a reference to compare
//! the trampolined results against.

use std::hint::black_box;

use tracing::trace;

use crate::errors::ProgramError;
use crate::trampoline::Step;

/// Message produced when a countdown reaches zero
pub const COUNTDOWN_DONE: &str = "Done!";

/// Trampolined countdown from `n`.
///
/// Nothing runs until the returned step is driven. Each step reports the
/// current count to `sink` and defers `count - 1`; at zero the chain lands on
/// [`COUNTDOWN_DONE`].
pub fn countdown<'a, F>(n: u64, sink: F) -> Step<'a, &'static str>
where
    F: FnMut(u64) + 'a,
{
    Step::call(move || countdown_step(n, sink))
}

fn countdown_step<'a, F>(n: u64, mut sink: F) -> Step<'a, &'static str>
where
    F: FnMut(u64) + 'a,
{
    if n == 0 {
        return Step::done(COUNTDOWN_DONE);
    }
    trace!(target: "trampoline::programs", count = n, "countdown step");
    sink(n);
    Step::call(move || countdown_step(n - 1, sink))
}

/// Recursive countdown. Overflows the stack for large `n`.
///
/// `black_box` keeps the recursive call out of tail position so the
/// optimizer cannot turn it into a loop.
pub fn countdown_recursive<F>(n: u64, sink: &mut F) -> &'static str
where
    F: FnMut(u64),
{
    if n == 0 {
        return COUNTDOWN_DONE;
    }
    sink(n);
    black_box(countdown_recursive(n - 1, sink))
}

/// Sum of `1..=n` as a trampolined chain with an accumulator.
/// Overflow stops the chain with [`ProgramError::Overflow`].
pub fn sum_to(n: u64) -> Step<'static, u64, ProgramError> {
    sum_step(n, 0)
}

fn sum_step(n: u64, acc: u64) -> Step<'static, u64, ProgramError> {
    if n == 0 {
        return Step::done(acc);
    }
    Step::try_call(move || {
        let acc = acc.checked_add(n).ok_or(ProgramError::Overflow { at: n })?;
        Ok(sum_step(n - 1, acc))
    })
}

/// Sum of `1..=n` by plain recursion. Overflows the stack for large `n`,
/// in release builds too: `black_box` stops the recursion being folded
/// into a loop.
pub fn sum_recursive(n: u64) -> Result<u64, ProgramError> {
    if n == 0 {
        return Ok(0);
    }
    let rest = black_box(sum_recursive(n - 1))?;
    rest.checked_add(n).ok_or(ProgramError::Overflow { at: n })
}

/// Parity by mutual recursion between `is_even` and `is_odd`.
pub fn is_even(n: u64) -> Step<'static, bool> {
    if n == 0 {
        Step::done(true)
    } else {
        Step::call(move || is_odd(n - 1))
    }
}

pub fn is_odd(n: u64) -> Step<'static, bool> {
    if n == 0 {
        Step::done(false)
    } else {
        Step::call(move || is_even(n - 1))
    }
}

/// `n!` with checked multiplication. Overflow stops the chain with
/// [`ProgramError::Overflow`].
pub fn factorial(n: u64) -> Step<'static, u64, ProgramError> {
    factorial_step(n, 1)
}

fn factorial_step(n: u64, acc: u64) -> Step<'static, u64, ProgramError> {
    if n <= 1 {
        return Step::done(acc);
    }
    Step::try_call(move || {
        let acc = acc
            .checked_mul(n)
            .ok_or(ProgramError::Overflow { at: n })?;
        Ok(factorial_step(n - 1, acc))
    })
}
