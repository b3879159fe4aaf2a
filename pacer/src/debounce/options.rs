// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::callback::ResultCallback;
use core::fmt;
use core::time::Duration;
use std::sync::Arc;

/// Quiet window used when no delay is given.
pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Configuration for a [`Debounced`](crate::Debounced) wrapper.
///
/// Defaults: [`DEFAULT_DEBOUNCE_DELAY`], trailing edge only, no result callback.
///
/// ```rust
/// use pacer::DebounceOptions;
/// use std::time::Duration;
///
/// let options = DebounceOptions::<u32>::new(Duration::from_millis(100))
///     .leading(true)
///     .on_result(|value| println!("leading call returned {value}"));
/// ```
pub struct DebounceOptions<R> {
    pub(crate) delay: Duration,
    pub(crate) leading: bool,
    pub(crate) result: Option<ResultCallback<R>>,
}

impl<R> DebounceOptions<R> {
    /// Create options with the given quiet window and default edges.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            leading: false,
            result: None,
        }
    }

    /// Builder-style: set the quiet window
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Builder-style: fire synchronously on the first call of a burst
    pub fn leading(mut self, leading: bool) -> Self {
        self.leading = leading;
        self
    }

    /// Builder-style: observe the value returned by leading-edge calls.
    ///
    /// Trailing calls run on the scheduler and never reach this callback.
    pub fn on_result<F>(mut self, callback: F) -> Self
    where
        F: Fn(&R) + Send + Sync + 'static,
    {
        self.result = Some(Arc::new(callback));
        self
    }
}

impl<R> Default for DebounceOptions<R> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_DELAY)
    }
}

impl<R> Clone for DebounceOptions<R> {
    fn clone(&self) -> Self {
        Self {
            delay: self.delay,
            leading: self.leading,
            result: self.result.clone(),
        }
    }
}

impl<R> fmt::Debug for DebounceOptions<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebounceOptions")
            .field("delay", &self.delay)
            .field("leading", &self.leading)
            .field("result", &self.result.is_some())
            .finish()
    }
}
