// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::implementation::Throttled;
use super::options::ThrottleOptions;
use pacer_runtime::scheduler::Scheduler;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
use core::time::Duration;

/// Extension trait providing `throttle_with_scheduler` for functions.
pub trait ThrottleExt<Args, R>: Fn(Args) -> R + Send + Sync + Sized + 'static
where
    Args: Send + 'static,
    R: 'static,
{
    /// Wraps the function in a [`Throttled`] driven by `scheduler`.
    fn throttle_with_scheduler<S>(
        self,
        options: ThrottleOptions<R>,
        scheduler: S,
    ) -> Throttled<Args, R, S>
    where
        S: Scheduler;
}

impl<F, Args, R> ThrottleExt<Args, R> for F
where
    F: Fn(Args) -> R + Send + Sync + 'static,
    Args: Send + 'static,
    R: 'static,
{
    fn throttle_with_scheduler<S>(
        self,
        options: ThrottleOptions<R>,
        scheduler: S,
    ) -> Throttled<Args, R, S>
    where
        S: Scheduler,
    {
        Throttled::new(self, options, scheduler)
    }
}

/// Extension trait for throttling with the default scheduler.
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub trait ThrottleWithDefaultSchedulerExt<Args, R>: ThrottleExt<Args, R>
where
    Args: Send + 'static,
    R: 'static,
{
    /// Throttles to one immediate execution per `interval`, without trailing calls.
    fn throttle(self, interval: Duration) -> Throttled<Args, R, crate::DefaultScheduler>;

    fn throttle_with_options(
        self,
        options: ThrottleOptions<R>,
    ) -> Throttled<Args, R, crate::DefaultScheduler>;
}

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
impl<F, Args, R> ThrottleWithDefaultSchedulerExt<Args, R> for F
where
    F: ThrottleExt<Args, R>,
    Args: Send + 'static,
    R: 'static,
{
    fn throttle(self, interval: Duration) -> Throttled<Args, R, crate::DefaultScheduler> {
        self.throttle_with_options(ThrottleOptions::new(interval))
    }

    fn throttle_with_options(
        self,
        options: ThrottleOptions<R>,
    ) -> Throttled<Args, R, crate::DefaultScheduler> {
        self.throttle_with_scheduler(options, crate::default_scheduler())
    }
}
