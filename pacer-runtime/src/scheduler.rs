// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deferred-callback capability on top of [`Timer`].
//!
//! A [`Scheduler`] runs a callback once after a delay and returns a handle that can
//! discard that future run. This is the only timing primitive the debounce and
//! throttle wrappers rely on, so a deterministic implementation can be swapped in
//! for tests.

use crate::timer::Timer;
use core::time::Duration;
use pacer_error::{PacerError, Result};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Handle to a callback registered with [`Scheduler::schedule`].
pub trait TimerHandle: Send + 'static {
    /// Discards the scheduled callback.
    ///
    /// Has no effect if the callback already ran. Dropping a handle without calling
    /// `cancel` leaves the callback scheduled.
    fn cancel(self);
}

pub trait Scheduler: Timer {
    type Handle: TimerHandle;

    /// Runs `task` once, `delay` after now.
    ///
    /// Never blocks. A zero delay still defers `task` to the scheduler instead of
    /// running it inline.
    fn schedule<F>(&self, delay: Duration, task: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static;
}

/// Runs a scheduled callback, turning a panic into [`PacerError::CallbackPanic`].
///
/// The panic is logged at error level; the scheduler's worker keeps running.
pub fn run_guarded<F>(runtime: &'static str, task: F) -> Result<()>
where
    F: FnOnce(),
{
    catch_unwind(AssertUnwindSafe(task)).map_err(|payload| {
        let err = PacerError::from_panic(payload);
        crate::error!("{} timer callback failed: {}", runtime, err);
        err
    })
}
