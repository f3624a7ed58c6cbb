//! Stackless: stack-safe loop combinators
//!
//! Stackless provides three higher-order loops that thread an opaque state
//! value through caller-supplied functions until a predicate says stop:
//!
//! - **`while_loop`**: pre-condition loop, may run zero times
//! - **`do_while`**: post-condition loop, runs at least once
//! - **`for_loop`**: counted loop with separate step and post-step
//!
//! None of them grow the call stack with the iteration count. Each can run
//! inline on the caller's context or be dispatched to a separate task that
//! the caller awaits, so other concurrent work keeps running.
//!
//! # Modules
//!
//! - [`core`]: the pure iteration engine
//! - [`dispatch`]: blocking and dispatched execution modes
//! - [`effects`]: loops as Stillwater effects
//! - [`timing`]: wall-clock measurement for callers
//!
//! # Example
//!
//! ```rust
//! use stackless::core::for_loop;
//!
//! #[derive(Debug, PartialEq)]
//! struct Factorial {
//!     accumulator: u64,
//!     i: u64,
//! }
//!
//! let result = for_loop(
//!     Factorial { accumulator: 1, i: 1 },
//!     |s| s.i <= 5,
//!     |s| Factorial { accumulator: s.accumulator * s.i, ..s },
//!     |s| Factorial { i: s.i + 1, ..s },
//! );
//!
//! assert_eq!(result, Factorial { accumulator: 120, i: 6 });
//! ```

pub mod core;
pub mod dispatch;
pub mod effects;
pub mod timing;

// Re-export commonly used items
pub use crate::core::{do_while, for_loop, try_do_while, try_for_loop, try_while_loop, while_loop};
pub use dispatch::{DispatchConfig, DispatchError, Dispatcher, ExecutionMode};
pub use timing::{measure, measure_async, Timed};
