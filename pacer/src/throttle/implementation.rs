// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::options::ThrottleOptions;
use crate::callback::WrappedFn;
use crate::timer_slot::TimerSlot;
use core::fmt;
use core::time::Duration;
use pacer_runtime::scheduler::Scheduler;
use pacer_runtime::timer::Timer;
use pacer_runtime::{debug, trace};
use parking_lot::Mutex;
use std::sync::Arc;

/// A function wrapped so that it runs at most once per interval.
///
/// A call arriving once more than `interval` has passed since the last execution runs
/// the function immediately and returns its value. Calls inside the window are
/// suppressed; with `trailing` enabled the latest of them runs when the window closes.
///
/// Clones share state.
pub struct Throttled<Args, R, S>
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
    options: ThrottleOptions<R>,
    scheduler: S,
    state: Mutex<ThrottleState<Args, S>>,
}

struct ThrottleState<Args, S>
where
    S: Scheduler,
{
    timer: TimerSlot<S::Handle>,
    last_fired: Option<<S as Timer>::Instant>,
    trailing_args: Option<Args>,
}

impl<Args, R, S> Throttled<Args, R, S>
where
    Args: Send + 'static,
    R: 'static,
    S: Scheduler,
{
    pub fn new<F>(func: F, options: ThrottleOptions<R>, scheduler: S) -> Self
    where
        F: Fn(Args) -> R + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                func: Box::new(func),
                options,
                scheduler,
                state: Mutex::new(ThrottleState {
                    timer: TimerSlot::default(),
                    last_fired: None,
                    trailing_args: None,
                }),
            }),
        }
    }

    /// Registers a call attempt.
    ///
    /// Returns `Some` with the function's value when the call ran immediately, `None`
    /// when it was suppressed or deferred to the trailing edge.
    pub fn call(&self, args: Args) -> Option<R> {
        let interval = self.inner.options.interval;
        let now = self.inner.scheduler.now();
        let mut state = self.inner.state.lock();

        let elapsed = state.last_fired.map(|last| now - last);
        let Some(elapsed) = elapsed.filter(|elapsed| *elapsed <= interval) else {
            state.timer.clear();
            state.trailing_args = None;
            state.last_fired = Some(now);
            drop(state);

            debug!("throttle immediate call");
            return Some(self.inner.invoke(args));
        };

        if !self.inner.options.trailing {
            trace!("throttle call dropped, {:?} into the window", elapsed);
            return None;
        }

        state.trailing_args = Some(args);
        if !state.timer.is_pending() {
            let remaining = interval.saturating_sub(elapsed);
            let generation = state.timer.generation();
            let inner = self.inner.clone();
            state.timer.arm(
                self.inner
                    .scheduler
                    .schedule(remaining, move || inner.fire_trailing(generation)),
            );
            trace!("throttle trailing call scheduled in {:?}", remaining);
        }
        None
    }

    /// Drops the pending trailing call, if any.
    ///
    /// The time of the last execution is kept, so the current window still applies
    /// to the next call.
    pub fn cancel(&self) {
        let mut state = self.inner.state.lock();
        state.trailing_args = None;
        if state.timer.clear() {
            trace!("throttle trailing call cancelled");
        }
    }

    /// Whether a trailing call is scheduled.
    pub fn is_pending(&self) -> bool {
        self.inner.state.lock().timer.is_pending()
    }

    pub fn interval(&self) -> Duration {
        self.inner.options.interval
    }

    pub fn is_trailing(&self) -> bool {
        self.inner.options.trailing
    }
}

impl<Args, R, S> Inner<Args, R, S>
where
    S: Scheduler,
{
    fn invoke(&self, args: Args) -> R {
        let value = (self.func)(args);
        if let Some(callback) = &self.options.result {
            callback(&value);
        }
        value
    }

    fn fire_trailing(&self, generation: u64) {
        let args = {
            let mut state = self.state.lock();
            if !state.timer.is_current(generation) {
                return;
            }
            state.timer.release();
            state.last_fired = Some(self.scheduler.now());
            state.trailing_args.take()
        };

        if let Some(args) = args {
            trace!("throttle trailing call fired");
            let _ = self.invoke(args);
        }
    }
}

impl<Args, R, S> Clone for Throttled<Args, R, S>
where
    S: Scheduler,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<Args, R, S> fmt::Debug for Throttled<Args, R, S>
where
    S: Scheduler,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("Throttled")
            .field("options", &self.inner.options)
            .field("last_fired", &state.last_fired)
            .field("pending", &state.timer.is_pending())
            .field("scheduler", &self.inner.scheduler)
            .finish()
    }
}
