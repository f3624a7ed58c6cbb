//! Integration tests for blocking and dispatched execution.

use stackless::core::{do_while, while_loop};
use stackless::dispatch::{DispatchError, Dispatcher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Collatz {
    value: u64,
    steps: u64,
}

#[derive(Debug, Error)]
enum CollatzError {
    #[error("Collatz sequences start at a positive integer, got {0}")]
    NonPositive(i64),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

fn collatz_next(state: Collatz) -> Collatz {
    let value = if state.value % 2 == 0 {
        state.value / 2
    } else {
        3 * state.value + 1
    };
    Collatz {
        value,
        steps: state.steps + 1,
    }
}

async fn collatz_steps(
    dispatcher: &Dispatcher,
    start: i64,
    loops_started: &AtomicUsize,
) -> Result<u64, CollatzError> {
    if start <= 0 {
        return Err(CollatzError::NonPositive(start));
    }

    loops_started.fetch_add(1, Ordering::SeqCst);
    let result = dispatcher
        .while_loop(
            Collatz {
                value: start as u64,
                steps: 0,
            },
            |s| s.value != 1,
            collatz_next,
        )
        .await?;

    Ok(result.steps)
}

#[tokio::test]
async fn collatz_step_counts_match_known_values() {
    let started = AtomicUsize::new(0);

    for dispatcher in [Dispatcher::blocking(), Dispatcher::dispatched()] {
        assert_eq!(collatz_steps(&dispatcher, 1, &started).await.unwrap(), 0);
        assert_eq!(collatz_steps(&dispatcher, 27, &started).await.unwrap(), 111);
        assert_eq!(
            collatz_steps(&dispatcher, 837_799, &started).await.unwrap(),
            524
        );
    }
}

#[tokio::test]
async fn non_positive_input_is_rejected_before_any_loop_runs() {
    let started = AtomicUsize::new(0);
    let dispatcher = Dispatcher::dispatched();

    let negative = collatz_steps(&dispatcher, -12, &started).await;
    let zero = collatz_steps(&dispatcher, 0, &started).await;

    assert!(matches!(negative, Err(CollatzError::NonPositive(-12))));
    assert!(matches!(zero, Err(CollatzError::NonPositive(0))));
    assert_eq!(started.load(Ordering::SeqCst), 0);
}

#[test]
fn million_iterations_fit_in_a_small_stack() {
    let handle = std::thread::Builder::new()
        .stack_size(64 * 1024)
        .spawn(|| {
            let counted = while_loop(0u64, |n| *n < 1_000_000, |n| n + 1);
            let posted = do_while(0u64, |n| n + 1, |n| *n < 1_000_000);
            (counted, posted)
        })
        .unwrap();

    assert_eq!(handle.join().unwrap(), (1_000_000, 1_000_000));
}

#[tokio::test]
async fn dispatched_long_loop_completes() {
    let result = Dispatcher::dispatched()
        .for_loop(0u64, |n| *n < 5_000_000, |n| n, |n| n + 1)
        .await
        .unwrap();

    assert_eq!(result, 5_000_000);
}

#[tokio::test(flavor = "current_thread")]
async fn dispatched_mode_lets_other_tasks_run() {
    let ticks = Arc::new(AtomicUsize::new(0));
    let ticker_count = Arc::clone(&ticks);
    let ticker = tokio::spawn(async move {
        loop {
            ticker_count.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    });

    let result = Dispatcher::dispatched()
        .while_loop(
            0u32,
            |n| *n < 25,
            |n| {
                std::thread::sleep(Duration::from_millis(2));
                n + 1
            },
        )
        .await
        .unwrap();

    assert_eq!(result, 25);
    assert!(ticks.load(Ordering::SeqCst) > 0);
    ticker.abort();
}

#[tokio::test(flavor = "current_thread")]
async fn blocking_mode_holds_the_caller_context() {
    let ticks = Arc::new(AtomicUsize::new(0));
    let ticker_count = Arc::clone(&ticks);
    let ticker = tokio::spawn(async move {
        loop {
            ticker_count.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    });

    let result = Dispatcher::blocking()
        .while_loop(
            0u32,
            |n| *n < 10,
            |n| {
                std::thread::sleep(Duration::from_millis(2));
                n + 1
            },
        )
        .await
        .unwrap();

    assert_eq!(result, 10);
    assert_eq!(ticks.load(Ordering::SeqCst), 0);
    ticker.abort();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn independent_dispatched_loops_run_concurrently() {
    let first = tokio::spawn(stackless::dispatch::spawn_while(
        0u64,
        |n| *n < 100_000,
        |n| n + 1,
    ));
    let second = tokio::spawn(stackless::dispatch::spawn_do_while(
        0u64,
        |n| n + 2,
        |n| *n < 100_000,
    ));

    assert_eq!(first.await.unwrap().unwrap(), 100_000);
    assert_eq!(second.await.unwrap().unwrap(), 100_000);
}
