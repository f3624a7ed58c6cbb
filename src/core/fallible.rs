//! Fallible loop combinators.
//!
//! Same iteration protocols as [`super::engine`], but the caller's predicate
//! and step functions may fail. The first error stops the loop and is
//! returned to the caller exactly as produced.

/// Pre-condition loop with fallible predicate and step.
///
/// # Example
///
/// ```rust
/// use stackless::core::try_while_loop;
///
/// let result: Result<u32, String> = try_while_loop(
///     0u32,
///     |n| Ok(*n < 10),
///     |n| if n == 3 { Err(format!("rejected {n}")) } else { Ok(n + 1) },
/// );
/// assert_eq!(result, Err("rejected 3".to_string()));
/// ```
pub fn try_while_loop<S, E, P, F>(initial: S, mut predicate: P, mut step: F) -> Result<S, E>
where
    P: FnMut(&S) -> Result<bool, E>,
    F: FnMut(S) -> Result<S, E>,
{
    let mut current = initial;
    while predicate(&current)? {
        current = step(current)?;
    }
    Ok(current)
}

/// Post-condition loop with fallible step and predicate.
pub fn try_do_while<S, E, F, P>(initial: S, mut step: F, mut predicate: P) -> Result<S, E>
where
    F: FnMut(S) -> Result<S, E>,
    P: FnMut(&S) -> Result<bool, E>,
{
    let mut current = step(initial)?;
    while predicate(&current)? {
        current = step(current)?;
    }
    Ok(current)
}

/// Counted loop with fallible predicate, step and post-step.
pub fn try_for_loop<S, E, P, F, G>(
    initial: S,
    mut predicate: P,
    mut step: F,
    mut post_step: G,
) -> Result<S, E>
where
    P: FnMut(&S) -> Result<bool, E>,
    F: FnMut(S) -> Result<S, E>,
    G: FnMut(S) -> Result<S, E>,
{
    let mut current = initial;
    while predicate(&current)? {
        current = post_step(step(current)?)?;
    }
    Ok(current)
}
