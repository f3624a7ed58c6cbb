//! Wall-clock measurement of loop runs.
//!
//! Loops never read the clock themselves. Callers that want to report how
//! long a loop took wrap the call in [`measure`] or [`measure_async`].

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// A value together with the timestamps bracketing its computation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Timed<T> {
    /// Result of the measured computation
    pub value: T,

    /// When the computation started
    pub started_at: DateTime<Utc>,

    /// When the computation returned
    pub finished_at: DateTime<Utc>,
}

impl<T> Timed<T> {
    /// Time between start and finish. Never negative.
    pub fn elapsed(&self) -> Duration {
        (self.finished_at - self.started_at).max(Duration::zero())
    }

    /// Transform the measured value, keeping its timestamps.
    pub fn map<U, F>(self, f: F) -> Timed<U>
    where
        F: FnOnce(T) -> U,
    {
        Timed {
            value: f(self.value),
            started_at: self.started_at,
            finished_at: self.finished_at,
        }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Run `f` and record when it started and finished.
///
/// # Example
///
/// ```rust
/// use stackless::core::while_loop;
/// use stackless::timing::measure;
///
/// let timed = measure(|| while_loop(0u32, |n| *n < 1000, |n| n + 1));
///
/// assert_eq!(timed.value, 1000);
/// assert!(timed.finished_at >= timed.started_at);
/// ```
pub fn measure<T, F>(f: F) -> Timed<T>
where
    F: FnOnce() -> T,
{
    let started_at = Utc::now();
    let value = f();
    let finished_at = Utc::now();

    Timed {
        value,
        started_at,
        finished_at,
    }
}

/// Await `future` and record when polling started and when it completed.
pub async fn measure_async<T, Fut>(future: Fut) -> Timed<T>
where
    Fut: Future<Output = T>,
{
    let started_at = Utc::now();
    let value = future.await;
    let finished_at = Utc::now();

    Timed {
        value,
        started_at,
        finished_at,
    }
}
