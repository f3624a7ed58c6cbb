//! Loops as Stillwater effects.
//!
//! These constructors describe a loop without running it. The returned
//! effect runs the corresponding fallible engine loop when it is run against
//! an environment, handing that environment to every predicate and step
//! call. This lets loops compose with other effects in the
//! "pure core, imperative shell" style.
//!
//! # Example
//!
//! ```rust
//! use stackless::effects::while_effect;
//! use stillwater::prelude::*;
//!
//! #[derive(Clone)]
//! struct Limits {
//!     max: u64,
//! }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let effect = while_effect::<_, String, Limits, _, _>(
//!     1u64,
//!     |n, env| Ok(*n < env.max),
//!     |n, _env| Ok(n * 2),
//! );
//!
//! let result = effect.run(&Limits { max: 100 }).await;
//! assert_eq!(result, Ok(128));
//! # }
//! ```

use crate::core::{try_do_while, try_for_loop, try_while_loop};
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

/// Pre-condition loop effect.
pub fn while_effect<S, E, Env, P, F>(initial: S, predicate: P, step: F) -> BoxedEffect<S, E, Env>
where
    S: Clone + Send + Sync + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
    P: Fn(&S, &Env) -> Result<bool, E> + Send + Sync + 'static,
    F: Fn(S, &Env) -> Result<S, E> + Send + Sync + 'static,
{
    from_fn(move |env: &Env| {
        try_while_loop(
            initial.clone(),
            |state| predicate(state, env),
            |state| step(state, env),
        )
    })
    .boxed()
}

/// Post-condition loop effect. The step runs at least once per run.
pub fn do_while_effect<S, E, Env, F, P>(initial: S, step: F, predicate: P) -> BoxedEffect<S, E, Env>
where
    S: Clone + Send + Sync + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
    F: Fn(S, &Env) -> Result<S, E> + Send + Sync + 'static,
    P: Fn(&S, &Env) -> Result<bool, E> + Send + Sync + 'static,
{
    from_fn(move |env: &Env| {
        try_do_while(
            initial.clone(),
            |state| step(state, env),
            |state| predicate(state, env),
        )
    })
    .boxed()
}

/// Counted loop effect.
pub fn for_effect<S, E, Env, P, F, G>(
    initial: S,
    predicate: P,
    step: F,
    post_step: G,
) -> BoxedEffect<S, E, Env>
where
    S: Clone + Send + Sync + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
    P: Fn(&S, &Env) -> Result<bool, E> + Send + Sync + 'static,
    F: Fn(S, &Env) -> Result<S, E> + Send + Sync + 'static,
    G: Fn(S, &Env) -> Result<S, E> + Send + Sync + 'static,
{
    from_fn(move |env: &Env| {
        try_for_loop(
            initial.clone(),
            |state| predicate(state, env),
            |state| step(state, env),
            |state| post_step(state, env),
        )
    })
    .boxed()
}
