// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::implementation::Debounced;
use super::options::DebounceOptions;
use pacer_runtime::scheduler::Scheduler;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
use core::time::Duration;

/// Extension trait providing `debounce_with_scheduler` for functions.
///
/// Implemented for every `Fn(Args) -> R + Send + Sync + 'static`. Functions of
/// several arguments take them as a tuple.
pub trait DebounceExt<Args, R>: Fn(Args) -> R + Send + Sync + Sized + 'static
where
    Args: Send + 'static,
    R: 'static,
{
    /// Wraps the function in a [`Debounced`] driven by `scheduler`.
    fn debounce_with_scheduler<S>(
        self,
        options: DebounceOptions<R>,
        scheduler: S,
    ) -> Debounced<Args, R, S>
    where
        S: Scheduler;
}

impl<F, Args, R> DebounceExt<Args, R> for F
where
    F: Fn(Args) -> R + Send + Sync + 'static,
    Args: Send + 'static,
    R: 'static,
{
    fn debounce_with_scheduler<S>(
        self,
        options: DebounceOptions<R>,
        scheduler: S,
    ) -> Debounced<Args, R, S>
    where
        S: Scheduler,
    {
        Debounced::new(self, options, scheduler)
    }
}

/// Extension trait for debouncing with the default scheduler.
///
/// Uses the scheduler of the enabled runtime feature, see
/// [`DefaultScheduler`](crate::DefaultScheduler).
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub trait DebounceWithDefaultSchedulerExt<Args, R>: DebounceExt<Args, R>
where
    Args: Send + 'static,
    R: 'static,
{
    /// Debounces with the given quiet window, trailing edge only.
    ///
    /// ```rust,no_run
    /// use pacer::prelude::*;
    /// use std::time::Duration;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let search = (|query: String| println!("searching {query}"))
    ///     .debounce(Duration::from_millis(300));
    ///
    /// search.call("ru".to_string());
    /// search.call("rust".to_string());
    /// # }
    /// ```
    fn debounce(self, delay: Duration) -> Debounced<Args, R, crate::DefaultScheduler>;

    fn debounce_with_options(
        self,
        options: DebounceOptions<R>,
    ) -> Debounced<Args, R, crate::DefaultScheduler>;
}

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
impl<F, Args, R> DebounceWithDefaultSchedulerExt<Args, R> for F
where
    F: DebounceExt<Args, R>,
    Args: Send + 'static,
    R: 'static,
{
    fn debounce(self, delay: Duration) -> Debounced<Args, R, crate::DefaultScheduler> {
        self.debounce_with_options(DebounceOptions::new(delay))
    }

    fn debounce_with_options(
        self,
        options: DebounceOptions<R>,
    ) -> Debounced<Args, R, crate::DefaultScheduler> {
        self.debounce_with_scheduler(options, crate::default_scheduler())
    }
}
