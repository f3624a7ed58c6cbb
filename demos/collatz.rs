//! Collatz
//!
//! Counts the steps a Collatz sequence takes to reach 1. Input validation is
//! the caller's job: zero and negative starts are rejected before any loop
//! runs.
//!
//! Run with: cargo run --example collatz -- 837799

use stackless::dispatch::{DispatchError, Dispatcher};
use stackless::timing::measure_async;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CollatzError {
    #[error("Expected an integer argument, got '{0}'")]
    InvalidArgument(String),

    #[error("Collatz sequences start at a positive integer, got {0}")]
    NonPositive(i128),

    #[error("Sequence from {0} overflowed u128")]
    Overflow(u128),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

#[derive(Clone, Copy, Debug)]
struct Sequence {
    value: u128,
    steps: u64,
    peak: u128,
}

fn next(state: Sequence) -> Result<Sequence, CollatzError> {
    let value = if state.value % 2 == 0 {
        state.value / 2
    } else {
        state
            .value
            .checked_mul(3)
            .and_then(|v| v.checked_add(1))
            .ok_or(CollatzError::Overflow(state.value))?
    };

    Ok(Sequence {
        value,
        steps: state.steps + 1,
        peak: state.peak.max(value),
    })
}

async fn collatz(dispatcher: &Dispatcher, start: i128) -> Result<Sequence, CollatzError> {
    if start <= 0 {
        return Err(CollatzError::NonPositive(start));
    }

    let start = start as u128;
    dispatcher
        .try_while_loop(
            Sequence {
                value: start,
                steps: 0,
                peak: start,
            },
            |s| Ok(s.value != 1),
            next,
        )
        .await
}

#[tokio::main]
async fn main() -> Result<(), CollatzError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let arg = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "989345275647".to_string());
    let start: i128 = arg
        .parse()
        .map_err(|_| CollatzError::InvalidArgument(arg.clone()))?;

    println!("=== Collatz sequence from {} ===\n", start);

    let dispatcher = Dispatcher::dispatched();
    let timed = measure_async(collatz(&dispatcher, start)).await;
    let elapsed = timed.elapsed();
    let sequence = timed.into_inner()?;

    println!("  steps: {}", sequence.steps);
    println!("  peak:  {}", sequence.peak);
    println!(
        "  took:  {}us",
        elapsed.num_microseconds().unwrap_or_default()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
