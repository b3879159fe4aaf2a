// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::options::DebounceOptions;
use crate::callback::WrappedFn;
use crate::timer_slot::TimerSlot;
use core::fmt;
use core::time::Duration;
use pacer_runtime::scheduler::Scheduler;
use pacer_runtime::{debug, trace};
use parking_lot::Mutex;
use std::sync::Arc;

/// A function wrapped so that a burst of calls collapses into one execution.
///
/// Each call restarts a quiet window of `delay`. When the window elapses without
/// another call, the function runs once with the arguments of the last call
/// (trailing edge). With `leading` enabled, the first call of a burst also runs the
/// function synchronously and returns its value.
///
/// Clones share state: they belong to the same burst and the same pending timer.
pub struct Debounced<Args, R, S>
where
    S: Scheduler,
{
    inner: Arc<Inner<Args, R, S>>,
}

struct Inner<Args, R, S>
where
    S: Scheduler,
{
    func: WrappedFn<Args, R>,
    options: DebounceOptions<R>,
    scheduler: S,
    timer: Mutex<TimerSlot<S::Handle>>,
}

impl<Args, R, S> Debounced<Args, R, S>
where
    Args: Send + 'static,
    R: 'static,
    S: Scheduler,
{
    pub fn new<F>(func: F, options: DebounceOptions<R>, scheduler: S) -> Self
    where
        F: Fn(Args) -> R + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                func: Box::new(func),
                options,
                scheduler,
                timer: Mutex::new(TimerSlot::default()),
            }),
        }
    }

    /// Registers a call attempt.
    ///
    /// Returns `Some` with the function's value only when this call fired on the
    /// leading edge. Deferred calls return `None`; their value is discarded.
    pub fn call(&self, args: Args) -> Option<R> {
        let mut timer = self.inner.timer.lock();
        let burst_active = timer.clear();
        let generation = timer.generation();

        if self.inner.options.leading && !burst_active {
            let inner = self.inner.clone();
            timer.arm(
                self.inner
                    .scheduler
                    .schedule(self.inner.options.delay, move || {
                        inner.close_window(generation)
                    }),
            );
            drop(timer);

            debug!("debounce leading call");
            return Some(self.inner.invoke_leading(args));
        }

        let inner = self.inner.clone();
        timer.arm(
            self.inner
                .scheduler
                .schedule(self.inner.options.delay, move || {
                    inner.fire_trailing(generation, args)
                }),
        );
        trace!(
            "debounce trailing call {} for {:?}",
            if burst_active { "rescheduled" } else { "scheduled" },
            self.inner.options.delay
        );
        None
    }

    /// Drops the pending trailing call, if any, and ends the current burst.
    ///
    /// Safe to call at any time; calling it repeatedly has no further effect.
    pub fn cancel(&self) {
        if self.inner.timer.lock().clear() {
            trace!("debounce timer cancelled");
        }
    }

    /// Whether a burst is in progress, i.e. a timer is pending.
    pub fn is_pending(&self) -> bool {
        self.inner.timer.lock().is_pending()
    }

    pub fn delay(&self) -> Duration {
        self.inner.options.delay
    }

    pub fn is_leading(&self) -> bool {
        self.inner.options.leading
    }
}

impl<Args, R, S> Inner<Args, R, S>
where
    S: Scheduler,
{
    fn invoke_leading(&self, args: Args) -> R {
        let value = (self.func)(args);
        if let Some(callback) = &self.options.result {
            callback(&value);
        }
        value
    }

    fn fire_trailing(&self, generation: u64, args: Args) {
        {
            let mut timer = self.timer.lock();
            if !timer.is_current(generation) {
                return;
            }
            timer.release();
        }

        trace!("debounce trailing call fired");
        let _ = (self.func)(args);
    }

    fn close_window(&self, generation: u64) {
        let mut timer = self.timer.lock();
        if timer.is_current(generation) {
            timer.release();
            trace!("debounce window closed");
        }
    }
}

impl<Args, R, S> Clone for Debounced<Args, R, S>
where
    S: Scheduler,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<Args, R, S> fmt::Debug for Debounced<Args, R, S>
where
    S: Scheduler,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("options", &self.inner.options)
            .field("pending", &self.inner.timer.lock().is_pending())
            .field("scheduler", &self.inner.scheduler)
            .finish()
    }
}
