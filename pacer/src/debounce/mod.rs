// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounce: collapse a burst of calls into one execution.
//!
//! A burst is a run of calls each arriving before the previous call's quiet window
//! (`delay`) expired. State machine:
//!
//! - **idle** → **burst-active** on any call. With `leading` enabled this transition
//!   runs the function synchronously and hands its value to the caller and to the
//!   result callback.
//! - While **burst-active**, each call clears the pending timer and arms a new one
//!   that runs the function with that call's arguments (trailing edge).
//! - **burst-active** → **idle** when the timer fires with no intervening call, or on
//!   `cancel()`.
//!
//! A single leading-edge call is not followed by a trailing execution: its timer only
//! closes the window. Trailing executions never reach the result callback.
//!
//! # Example
//!
//! ```rust
//! use pacer::{DebounceExt, DebounceOptions};
//! use pacer_test_utils::{CallRecorder, VirtualScheduler};
//! use std::time::Duration;
//!
//! let clock = VirtualScheduler::new();
//! let saved = CallRecorder::new();
//! let recorder = saved.clone();
//!
//! let save = (move |text: &'static str| recorder.record(text)).debounce_with_scheduler(
//!     DebounceOptions::new(Duration::from_millis(100)),
//!     clock.clone(),
//! );
//!
//! save.call("h");
//! save.call("he");
//! save.call("hello");
//!
//! clock.advance(Duration::from_millis(100));
//! assert_eq!(saved.calls(), vec!["hello"]);
//! ```

mod extension;
mod implementation;
mod options;

pub use extension::DebounceExt;
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use extension::DebounceWithDefaultSchedulerExt;
pub use implementation::Debounced;
pub use options::{DebounceOptions, DEFAULT_DEBOUNCE_DELAY};
