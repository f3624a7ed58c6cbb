//! Infallible loop combinators.
//!
//! Each combinator is the tail-recursive definition of its loop rewritten as
//! an explicit loop over an owned local, so stack usage stays constant no
//! matter how many iterations run.

/// Pre-condition loop.
///
/// Evaluates `predicate` on the current state and, while it holds, replaces
/// the state with `step(state)`. If the predicate is false for `initial`, the
/// initial state is returned unchanged and `step` never runs.
///
/// Termination is the caller's concern: a predicate that never turns false
/// loops forever.
///
/// # Example
///
/// ```rust
/// use stackless::core::while_loop;
///
/// // factorial of 5, state is (accumulator, n)
/// let (acc, _) = while_loop((1u64, 5u64), |&(_, n)| n > 1, |(acc, n)| (acc * n, n - 1));
/// assert_eq!(acc, 120);
/// ```
pub fn while_loop<S, P, F>(initial: S, mut predicate: P, mut step: F) -> S
where
    P: FnMut(&S) -> bool,
    F: FnMut(S) -> S,
{
    let mut current = initial;
    while predicate(&current) {
        current = step(current);
    }
    current
}

/// Post-condition loop.
///
/// Runs `step` once unconditionally, then keeps running it while `predicate`
/// holds for the state `step` produced. `step` always runs at least once,
/// even when the predicate would have been false for `initial`.
///
/// # Example
///
/// ```rust
/// use stackless::core::do_while;
///
/// let calls = std::cell::Cell::new(0);
/// let result = do_while(10, |n| { calls.set(calls.get() + 1); n + 1 }, |_| false);
///
/// assert_eq!(result, 11);
/// assert_eq!(calls.get(), 1);
/// ```
pub fn do_while<S, F, P>(initial: S, mut step: F, mut predicate: P) -> S
where
    F: FnMut(S) -> S,
    P: FnMut(&S) -> bool,
{
    let mut current = step(initial);
    while predicate(&current) {
        current = step(current);
    }
    current
}

/// Counted loop.
///
/// Like [`while_loop`], but each iteration applies `step` followed by
/// `post_step`. The split mirrors the body and increment clauses of a classic
/// three-clause `for`, keeping counter advancement apart from the body.
///
/// # Example
///
/// ```rust
/// use stackless::core::for_loop;
///
/// // (accumulator, i)
/// let result = for_loop(
///     (1u64, 1u64),
///     |&(_, i)| i <= 5,
///     |(acc, i)| (acc * i, i),
///     |(acc, i)| (acc, i + 1),
/// );
/// assert_eq!(result, (120, 6));
/// ```
pub fn for_loop<S, P, F, G>(initial: S, mut predicate: P, mut step: F, mut post_step: G) -> S
where
    P: FnMut(&S) -> bool,
    F: FnMut(S) -> S,
    G: FnMut(S) -> S,
{
    let mut current = initial;
    while predicate(&current) {
        current = post_step(step(current));
    }
    current
}
