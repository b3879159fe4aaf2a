// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Throttle: run a function at most once per interval.
//!
//! - When a call arrives more than `interval` after the last execution (or before any
//!   execution), the function runs immediately and its value is returned. A pending
//!   trailing call is dropped.
//! - Calls arriving inside the window are suppressed. With `trailing` enabled, the
//!   first of them schedules one execution at the end of the window and every later
//!   one replaces the arguments it will use, so the latest suppressed call wins.
//! - The result callback sees the value of every execution, immediate or trailing.
//!
//! # Example
//!
//! ```rust
//! use pacer::{ThrottleExt, ThrottleOptions};
//! use pacer_test_utils::{CallRecorder, VirtualScheduler};
//! use std::time::Duration;
//!
//! let clock = VirtualScheduler::new();
//! let seen = CallRecorder::new();
//! let recorder = seen.clone();
//!
//! let on_scroll = (move |offset: u32| recorder.record(offset)).throttle_with_scheduler(
//!     ThrottleOptions::new(Duration::from_millis(100)).trailing(true),
//!     clock.clone(),
//! );
//!
//! on_scroll.call(0);
//! clock.advance(Duration::from_millis(40));
//! on_scroll.call(40);
//! on_scroll.call(80);
//!
//! clock.advance(Duration::from_millis(60));
//! assert_eq!(seen.calls(), vec![0, 80]);
//! ```

mod extension;
mod implementation;
mod options;

pub use extension::ThrottleExt;
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use extension::ThrottleWithDefaultSchedulerExt;
pub use implementation::Throttled;
pub use options::ThrottleOptions;
