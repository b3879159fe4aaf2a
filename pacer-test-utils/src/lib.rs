// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the pacer workspace.
//!
//! Designed for development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## `VirtualScheduler`
//!
//! A deterministic clock implementing `Timer` and `Scheduler`. Nothing happens until
//! the test advances it, and due callbacks run in deadline order:
//!
//! ```rust
//! use pacer_runtime::scheduler::Scheduler;
//! use pacer_test_utils::{CallRecorder, VirtualScheduler};
//! use std::time::Duration;
//!
//! let clock = VirtualScheduler::new();
//! let recorder = CallRecorder::new();
//!
//! let (tick_clock, tick_recorder) = (clock.clone(), recorder.clone());
//! clock.schedule(Duration::from_millis(100), move || {
//!     tick_recorder.record(tick_clock.elapsed_millis());
//! });
//!
//! clock.advance(Duration::from_millis(99));
//! assert!(recorder.is_empty());
//!
//! clock.advance(Duration::from_millis(1));
//! assert_eq!(recorder.calls(), vec![100]);
//! ```
//!
//! ## `CallRecorder`
//!
//! A cloneable, thread-safe log of values handed to a wrapped function.
//!
//! # Module Organization
//!
//! - `virtual_scheduler` - `VirtualScheduler`, `VirtualInstant`, `VirtualSleep`
//! - `no_cancel` - `NoCancelScheduler`, a virtual clock whose handles never cancel
//! - `recorder` - `CallRecorder`, `timed_recorder`
//! - `helpers` - tokio paused-clock helpers

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod no_cancel;
pub mod recorder;
pub mod virtual_scheduler;

pub use helpers::advance_and_settle;
pub use no_cancel::{NoCancelHandle, NoCancelScheduler};
pub use recorder::{timed_recorder, CallRecorder};
pub use virtual_scheduler::{VirtualInstant, VirtualScheduler, VirtualSleep, VirtualTimerHandle};
