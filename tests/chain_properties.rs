//! Behavioural tests for the trampoline evaluator
//!
//! Covers agreement with naive recursion, constant stack use on very long
//! chains, the countdown lesson, and step failure propagation.

use std::cell::{Cell, RefCell};
use std::thread;

use trampoline_eval::programs::{
    countdown, countdown_recursive, is_even, is_odd, sum_recursive, sum_to,
};
use trampoline_eval::{run_trampoline, try_run_trampoline, RunError, Step, Trampoline};

/// Stack for the deep-chain tests. 100,000 recursive frames would need
/// several megabytes; the trampoline only ever needs a handful.
const SMALL_STACK: usize = 256 * 1024;

const DEEP: u64 = 100_000;

fn on_small_stack<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    thread::Builder::new()
        .stack_size(SMALL_STACK)
        .spawn(f)
        .expect("failed to spawn test thread")
        .join()
        .expect("test thread panicked")
}

#[test]
fn test_matches_recursive_reference() {
    for n in [0, 1, 2, 3, 10, 100, 1_000, 5_000] {
        assert_eq!(try_run_trampoline(sum_to(n)), sum_recursive(n), "n = {}", n);
    }
}

#[test]
fn test_countdown_matches_recursive_reference() {
    for n in [0, 1, 7, 250] {
        let mut trampolined = Vec::new();
        let mut recursive = Vec::new();

        let a = run_trampoline(countdown(n, |c| trampolined.push(c)));
        let b = countdown_recursive(n, &mut |c| recursive.push(c));

        assert_eq!(a, b);
        assert_eq!(trampolined, recursive);
    }
}

#[test]
fn test_deep_sum_on_small_stack() {
    let result = on_small_stack(|| try_run_trampoline(sum_to(DEEP)));
    assert_eq!(result, Ok(DEEP * (DEEP + 1) / 2));
}

#[test]
fn test_deep_countdown_on_small_stack() {
    let (result, logged) = on_small_stack(|| {
        let mut logged = 0u64;
        let result = run_trampoline(countdown(DEEP, |_| logged += 1));
        (result, logged)
    });
    assert_eq!(result, "Done!");
    assert_eq!(logged, DEEP);
}

#[test]
fn test_deep_mutual_recursion_on_small_stack() {
    let (even, odd) = on_small_stack(|| {
        (
            run_trampoline(is_even(DEEP)),
            run_trampoline(is_odd(DEEP + 1)),
        )
    });
    assert!(even);
    assert!(odd);
}

#[test]
fn test_deep_chain_counts_steps() {
    let landed = on_small_stack(|| Trampoline::default().run(sum_to(DEEP)).unwrap());
    assert_eq!(landed.steps, DEEP);
}

#[test]
fn test_independent_chains_agree() {
    fn sum_up_to(limit: u64) -> Step<'static, u64> {
        fn go(i: u64, limit: u64, acc: u64) -> Step<'static, u64> {
            if i > limit {
                Step::done(acc)
            } else {
                Step::call(move || go(i + 1, limit, acc + i))
            }
        }
        go(1, limit, 0)
    }

    assert_eq!(
        try_run_trampoline(sum_to(2_000)),
        Ok(run_trampoline(sum_up_to(2_000)))
    );
    assert_eq!(try_run_trampoline(sum_to(42)), try_run_trampoline(sum_to(42)));
}

#[test]
fn test_terminal_input_invokes_nothing() {
    assert_eq!(run_trampoline(Step::<i32>::done(9)), 9);
}

#[test]
fn test_callable_terminal_value_is_not_invoked() {
    let invoked = Cell::new(false);
    let callback: Box<dyn Fn() + '_> = Box::new(|| invoked.set(true));

    let landed = run_trampoline(Step::done(callback));
    assert!(!invoked.get());

    // Still the caller's closure, untouched by the loop
    landed();
    assert!(invoked.get());
}

#[test]
fn test_countdown_from_five() {
    let log = RefCell::new(Vec::new());
    let result = run_trampoline(countdown(5, |n| log.borrow_mut().push(n)));

    assert_eq!(result, "Done!");
    assert_eq!(log.into_inner(), vec![5, 4, 3, 2, 1]);
}

#[derive(Debug, PartialEq)]
struct StepFailed {
    invocation: u32,
}

fn failing_chain<'a>(
    calls: &'a Cell<u32>,
    effects: &'a RefCell<Vec<u32>>,
) -> Step<'a, u32, StepFailed> {
    Step::try_call(move || {
        let invocation = calls.get() + 1;
        calls.set(invocation);
        if invocation == 3 {
            return Err(StepFailed { invocation });
        }
        effects.borrow_mut().push(invocation);
        Ok(failing_chain(calls, effects))
    })
}

#[test]
fn test_error_on_third_step_propagates() {
    let calls = Cell::new(0);
    let effects = RefCell::new(Vec::new());

    let result = try_run_trampoline(failing_chain(&calls, &effects));

    assert_eq!(result, Err(StepFailed { invocation: 3 }));
    assert_eq!(calls.get(), 3);
    assert_eq!(effects.into_inner(), vec![1, 2]);
}

#[test]
fn test_runner_carries_step_error() {
    let calls = Cell::new(0);
    let effects = RefCell::new(Vec::new());

    let err = Trampoline::default()
        .run(failing_chain(&calls, &effects))
        .unwrap_err();

    assert_eq!(err, RunError::Step(StepFailed { invocation: 3 }));
    assert_eq!(effects.into_inner(), vec![1, 2]);
}

#[test]
#[should_panic(expected = "step exploded")]
fn test_panic_in_step_unwinds_to_caller() {
    let step: Step<'_, ()> = Step::call(|| Step::call(|| panic!("step exploded")));
    run_trampoline(step);
}
