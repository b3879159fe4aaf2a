// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounce and throttle wrappers for plain functions.
//!
//! Wrapping a function returns a handle whose `call` either runs the function now or
//! defers it to a timer, so rapid bursts of events turn into a bounded number of
//! executions.
//!
//! # Overview
//!
//! - **[`Debounced`]** - Runs once after calls stop arriving for `delay`
//! - **[`Throttled`]** - Runs at most once per `interval`
//! - **[`DebounceExt`] / [`ThrottleExt`]** - `.debounce_with_scheduler(..)` and
//!   `.throttle_with_scheduler(..)` on any `Fn(Args) -> R`
//! - **[`DebounceWithDefaultSchedulerExt`] / [`ThrottleWithDefaultSchedulerExt`]** -
//!   `.debounce(delay)` and `.throttle(interval)` on the default runtime
//!
//! Timing goes through the [`Scheduler`] trait. Any implementation works; tests use
//! the deterministic `VirtualScheduler` from `pacer-test-utils`.
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - [`TokioScheduler`](pacer_runtime::impls::tokio::TokioScheduler)
//! - `runtime-smol` - [`SmolScheduler`](pacer_runtime::impls::smol::SmolScheduler)
//! - `tracing` (default) - log through `tracing`; without it only errors are printed
//!
//! # Example
//!
//! ```rust,no_run
//! use pacer::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let resize = (|(width, height): (u32, u32)| width * height)
//!     .throttle_with_options(ThrottleOptions::new(Duration::from_millis(100)).trailing(true));
//!
//! assert_eq!(resize.call((800, 600)), Some(480_000));
//! assert_eq!(resize.call((1024, 768)), None);
//!
//! tokio::time::sleep(Duration::from_millis(150)).await;
//! # }
//! ```

mod callback;
mod debounce;
mod throttle;
mod timer_slot;

pub mod prelude;

pub use callback::ResultCallback;
pub use debounce::{DebounceExt, DebounceOptions, Debounced, DEFAULT_DEBOUNCE_DELAY};
pub use pacer_runtime::scheduler::{Scheduler, TimerHandle};
pub use pacer_runtime::timer::Timer;
pub use throttle::{ThrottleExt, ThrottleOptions, Throttled};

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use debounce::DebounceWithDefaultSchedulerExt;
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use throttle::ThrottleWithDefaultSchedulerExt;

/// Scheduler used by `.debounce(..)` and `.throttle(..)`.
#[cfg(feature = "runtime-tokio")]
pub type DefaultScheduler = pacer_runtime::impls::tokio::TokioScheduler;

/// Scheduler used by `.debounce(..)` and `.throttle(..)`.
#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub type DefaultScheduler = pacer_runtime::impls::smol::SmolScheduler;

/// Binds to the current tokio runtime when there is one, so the wrapper can later be
/// called from threads outside the runtime. Otherwise falls back to the ambient runtime
/// at call time.
#[cfg(feature = "runtime-tokio")]
pub(crate) fn default_scheduler() -> DefaultScheduler {
    DefaultScheduler::try_current().unwrap_or_else(|err| {
        pacer_runtime::warn!("{}; timers will use the runtime current at call time", err);
        DefaultScheduler::default()
    })
}

#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub(crate) fn default_scheduler() -> DefaultScheduler {
    DefaultScheduler::default()
}
