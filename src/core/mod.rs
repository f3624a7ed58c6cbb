//! Stack-safe iteration engine.
//!
//! This module contains the pure loop algorithms:
//! - Pre-condition loop via [`while_loop`]
//! - Post-condition loop via [`do_while`]
//! - Counted loop via [`for_loop`]
//!
//! plus `try_` variants whose caller-supplied functions may fail. The state
//! type is opaque to the engine: it is only handed to and taken back from the
//! caller's functions, one owned value per iteration.

mod engine;
mod fallible;

pub use engine::{do_while, for_loop, while_loop};
pub use fallible::{try_do_while, try_for_loop, try_while_loop};
