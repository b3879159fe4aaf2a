// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::callback::ResultCallback;
use core::fmt;
use core::time::Duration;
use std::sync::Arc;

/// Configuration for a [`Throttled`](crate::Throttled) wrapper.
///
/// The interval has no default. Trailing execution is off and there is no result
/// callback unless set.
///
/// ```rust
/// use pacer::ThrottleOptions;
/// use std::time::Duration;
///
/// let options = ThrottleOptions::<String>::new(Duration::from_millis(250))
///     .trailing(true)
///     .on_result(|body| println!("fetched {} bytes", body.len()));
/// ```
pub struct ThrottleOptions<R> {
    pub(crate) interval: Duration,
    pub(crate) trailing: bool,
    pub(crate) result: Option<ResultCallback<R>>,
}

impl<R> ThrottleOptions<R> {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            trailing: false,
            result: None,
        }
    }

    /// Builder-style: set the minimum spacing between immediate executions
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Builder-style: run the latest suppressed call once the window closes
    pub fn trailing(mut self, trailing: bool) -> Self {
        self.trailing = trailing;
        self
    }

    /// Builder-style: observe the value of every execution, immediate or trailing
    pub fn on_result<F>(mut self, callback: F) -> Self
    where
        F: Fn(&R) + Send + Sync + 'static,
    {
        self.result = Some(Arc::new(callback));
        self
    }
}

impl<R> Clone for ThrottleOptions<R> {
    fn clone(&self) -> Self {
        Self {
            interval: self.interval,
            trailing: self.trailing,
            result: self.result.clone(),
        }
    }
}

impl<R> fmt::Debug for ThrottleOptions<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThrottleOptions")
            .field("interval", &self.interval)
            .field("trailing", &self.trailing)
            .field("result", &self.result.is_some())
            .finish()
    }
}
