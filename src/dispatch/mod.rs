//! Blocking and dispatched execution of the loop combinators.
//!
//! A [`Dispatcher`] runs any loop from [`crate::core`] in one of two modes:
//!
//! - **Blocking**: the loop runs inline on whatever thread polls the call.
//!   Nothing else scheduled on that thread makes progress until it ends.
//! - **Dispatched**: the loop runs on a Tokio blocking task and the caller
//!   awaits its completion with no timeout. Other tasks keep running.
//!
//! Both modes return identical final states for identical inputs. Neither
//! supports cancellation: once launched, a loop runs to completion.

mod config;
mod error;

pub use config::{DispatchConfig, ExecutionMode};
pub use error::DispatchError;

use crate::core;
use tokio::runtime::Handle;
use uuid::Uuid;

/// Which combinator a dispatched task is running. Used for log fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoopKind {
    While,
    DoWhile,
    For,
}

impl LoopKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::While => "while",
            Self::DoWhile => "do_while",
            Self::For => "for",
        }
    }
}

/// Runs loop combinators in a configured [`ExecutionMode`].
///
/// # Example
///
/// ```rust
/// use stackless::dispatch::Dispatcher;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), stackless::dispatch::DispatchError> {
/// let dispatcher = Dispatcher::dispatched();
/// let (acc, _) = dispatcher
///     .while_loop((1u64, 5u64), |&(_, n)| n > 1, |(acc, n)| (acc * n, n - 1))
///     .await?;
/// assert_eq!(acc, 120);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dispatcher {
    mode: ExecutionMode,
}

impl Dispatcher {
    pub fn new(mode: ExecutionMode) -> Self {
        Self { mode }
    }

    /// Dispatcher that runs loops on the caller's own context.
    pub fn blocking() -> Self {
        Self::new(ExecutionMode::Blocking)
    }

    /// Dispatcher that runs loops on a separate task and awaits them.
    pub fn dispatched() -> Self {
        Self::new(ExecutionMode::Dispatched)
    }

    pub fn from_config(config: &DispatchConfig) -> Self {
        Self::new(config.mode)
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Pre-condition loop. See [`core::while_loop`].
    pub async fn while_loop<S, P, F>(
        &self,
        initial: S,
        predicate: P,
        step: F,
    ) -> Result<S, DispatchError>
    where
        S: Send + 'static,
        P: FnMut(&S) -> bool + Send + 'static,
        F: FnMut(S) -> S + Send + 'static,
    {
        self.run(LoopKind::While, move || {
            core::while_loop(initial, predicate, step)
        })
        .await
    }

    /// Post-condition loop. See [`core::do_while`].
    pub async fn do_while<S, F, P>(
        &self,
        initial: S,
        step: F,
        predicate: P,
    ) -> Result<S, DispatchError>
    where
        S: Send + 'static,
        F: FnMut(S) -> S + Send + 'static,
        P: FnMut(&S) -> bool + Send + 'static,
    {
        self.run(LoopKind::DoWhile, move || {
            core::do_while(initial, step, predicate)
        })
        .await
    }

    /// Counted loop. See [`core::for_loop`].
    pub async fn for_loop<S, P, F, G>(
        &self,
        initial: S,
        predicate: P,
        step: F,
        post_step: G,
    ) -> Result<S, DispatchError>
    where
        S: Send + 'static,
        P: FnMut(&S) -> bool + Send + 'static,
        F: FnMut(S) -> S + Send + 'static,
        G: FnMut(S) -> S + Send + 'static,
    {
        self.run(LoopKind::For, move || {
            core::for_loop(initial, predicate, step, post_step)
        })
        .await
    }

    /// Fallible pre-condition loop. See [`core::try_while_loop`].
    ///
    /// Errors from the caller's functions come back unchanged; dispatch
    /// failures are converted into the caller's error type.
    pub async fn try_while_loop<S, E, P, F>(
        &self,
        initial: S,
        predicate: P,
        step: F,
    ) -> Result<S, E>
    where
        S: Send + 'static,
        E: From<DispatchError> + Send + 'static,
        P: FnMut(&S) -> Result<bool, E> + Send + 'static,
        F: FnMut(S) -> Result<S, E> + Send + 'static,
    {
        self.run(LoopKind::While, move || {
            core::try_while_loop(initial, predicate, step)
        })
        .await?
    }

    /// Fallible post-condition loop. See [`core::try_do_while`].
    pub async fn try_do_while<S, E, F, P>(
        &self,
        initial: S,
        step: F,
        predicate: P,
    ) -> Result<S, E>
    where
        S: Send + 'static,
        E: From<DispatchError> + Send + 'static,
        F: FnMut(S) -> Result<S, E> + Send + 'static,
        P: FnMut(&S) -> Result<bool, E> + Send + 'static,
    {
        self.run(LoopKind::DoWhile, move || {
            core::try_do_while(initial, step, predicate)
        })
        .await?
    }

    /// Fallible counted loop. See [`core::try_for_loop`].
    pub async fn try_for_loop<S, E, P, F, G>(
        &self,
        initial: S,
        predicate: P,
        step: F,
        post_step: G,
    ) -> Result<S, E>
    where
        S: Send + 'static,
        E: From<DispatchError> + Send + 'static,
        P: FnMut(&S) -> Result<bool, E> + Send + 'static,
        F: FnMut(S) -> Result<S, E> + Send + 'static,
        G: FnMut(S) -> Result<S, E> + Send + 'static,
    {
        self.run(LoopKind::For, move || {
            core::try_for_loop(initial, predicate, step, post_step)
        })
        .await?
    }

    async fn run<T, W>(&self, kind: LoopKind, work: W) -> Result<T, DispatchError>
    where
        T: Send + 'static,
        W: FnOnce() -> T + Send + 'static,
    {
        match self.mode {
            ExecutionMode::Blocking => Ok(work()),
            ExecutionMode::Dispatched => dispatch(kind, work).await,
        }
    }
}

/// Launch `work` as a blocking task and wait for it unconditionally.
///
/// A panic inside the task is resumed on the awaiting caller, the same way it
/// would surface in blocking mode.
async fn dispatch<T, W>(kind: LoopKind, work: W) -> Result<T, DispatchError>
where
    T: Send + 'static,
    W: FnOnce() -> T + Send + 'static,
{
    let handle = Handle::try_current()?;
    let loop_id = Uuid::new_v4();

    tracing::debug!(%loop_id, kind = kind.as_str(), "dispatching loop");

    match handle.spawn_blocking(work).await {
        Ok(value) => {
            tracing::debug!(%loop_id, kind = kind.as_str(), "dispatched loop completed");
            Ok(value)
        }
        Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
        Err(_) => Err(DispatchError::Cancelled {
            kind: kind.as_str(),
        }),
    }
}

/// Pre-condition loop in dispatched mode.
pub async fn spawn_while<S, P, F>(initial: S, predicate: P, step: F) -> Result<S, DispatchError>
where
    S: Send + 'static,
    P: FnMut(&S) -> bool + Send + 'static,
    F: FnMut(S) -> S + Send + 'static,
{
    Dispatcher::dispatched()
        .while_loop(initial, predicate, step)
        .await
}

/// Post-condition loop in dispatched mode.
pub async fn spawn_do_while<S, F, P>(initial: S, step: F, predicate: P) -> Result<S, DispatchError>
where
    S: Send + 'static,
    F: FnMut(S) -> S + Send + 'static,
    P: FnMut(&S) -> bool + Send + 'static,
{
    Dispatcher::dispatched()
        .do_while(initial, step, predicate)
        .await
}

/// Counted loop in dispatched mode.
pub async fn spawn_for<S, P, F, G>(
    initial: S,
    predicate: P,
    step: F,
    post_step: G,
) -> Result<S, DispatchError>
where
    S: Send + 'static,
    P: FnMut(&S) -> bool + Send + 'static,
    F: FnMut(S) -> S + Send + 'static,
    G: FnMut(S) -> S + Send + 'static,
{
    Dispatcher::dispatched()
        .for_loop(initial, predicate, step, post_step)
        .await
}
