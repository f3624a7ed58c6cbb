//! Factorial
//!
//! Computes factorials with the counted loop and the pre-condition loop, in
//! both blocking and dispatched mode, and reports how long each run took.
//!
//! Run with: cargo run --example factorial -- 20
//! Set RUST_LOG=stackless=debug to see dispatch events.

use stackless::dispatch::{DispatchError, Dispatcher};
use stackless::timing::measure_async;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Factorial {
    accumulator: u128,
    i: u128,
}

async fn factorial_counted(dispatcher: &Dispatcher, n: u128) -> Result<u128, DispatchError> {
    let result = dispatcher
        .for_loop(
            Factorial {
                accumulator: 1,
                i: 1,
            },
            move |s| s.i <= n,
            |s| Factorial {
                accumulator: s.accumulator * s.i,
                ..s
            },
            |s| Factorial { i: s.i + 1, ..s },
        )
        .await?;

    Ok(result.accumulator)
}

async fn factorial_while(dispatcher: &Dispatcher, n: u128) -> Result<u128, DispatchError> {
    let result = dispatcher
        .while_loop(
            Factorial {
                accumulator: 1,
                i: n,
            },
            |s| s.i > 1,
            |s| Factorial {
                accumulator: s.accumulator * s.i,
                i: s.i - 1,
            },
        )
        .await?;

    Ok(result.accumulator)
}

#[tokio::main]
async fn main() -> Result<(), DispatchError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 34! is the largest factorial that fits in a u128
    let n = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u128>().ok())
        .unwrap_or(20)
        .min(34);

    println!("=== Factorial of {} ===\n", n);

    for dispatcher in [Dispatcher::blocking(), Dispatcher::dispatched()] {
        let counted = measure_async(factorial_counted(&dispatcher, n)).await;
        let elapsed = counted.elapsed();
        println!(
            "  for_loop   ({:?}): {} in {}us",
            dispatcher.mode(),
            counted.into_inner()?,
            elapsed.num_microseconds().unwrap_or_default()
        );

        let plain = measure_async(factorial_while(&dispatcher, n)).await;
        let elapsed = plain.elapsed();
        println!(
            "  while_loop ({:?}): {} in {}us",
            dispatcher.mode(),
            plain.into_inner()?,
            elapsed.num_microseconds().unwrap_or_default()
        );
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
