// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::virtual_scheduler::{VirtualInstant, VirtualScheduler, VirtualSleep};
use core::time::Duration;
use pacer_runtime::scheduler::{Scheduler, TimerHandle};
use pacer_runtime::timer::Timer;

/// A [`VirtualScheduler`] whose handles ignore `cancel`.
///
/// Every scheduled callback runs at its deadline, cancelled or not. Models a runtime
/// where a timer wakes up just as it is being cancelled, so callers must tell a stale
/// callback apart from a live one on their own.
#[derive(Clone, Debug, Default)]
pub struct NoCancelScheduler {
    clock: VirtualScheduler,
}

impl NoCancelScheduler {
    pub fn new(clock: VirtualScheduler) -> Self {
        Self { clock }
    }

    /// The underlying clock, for advancing time and inspecting the queue.
    pub fn clock(&self) -> &VirtualScheduler {
        &self.clock
    }
}

impl Timer for NoCancelScheduler {
    type Sleep = VirtualSleep;

    type Instant = VirtualInstant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        self.clock.sleep_future(duration)
    }

    fn now(&self) -> Self::Instant {
        self.clock.now()
    }
}

impl Scheduler for NoCancelScheduler {
    type Handle = NoCancelHandle;

    fn schedule<F>(&self, delay: Duration, task: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static,
    {
        // The real handle is dropped, which leaves the callback queued.
        let _ = self.clock.schedule(delay, task);
        NoCancelHandle
    }
}

#[derive(Debug)]
pub struct NoCancelHandle;

impl TimerHandle for NoCancelHandle {
    fn cancel(self) {}
}
