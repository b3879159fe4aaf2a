// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(feature = "runtime-tokio")]
use std::time::{Duration, Instant};

#[cfg(feature = "runtime-tokio")]
use pacer_error::{PacerError, Result};
#[cfg(feature = "runtime-tokio")]
use tokio::runtime::Handle;
#[cfg(feature = "runtime-tokio")]
use tokio::task::AbortHandle;

#[cfg(feature = "runtime-tokio")]
use super::common::CancelToken;
#[cfg(feature = "runtime-tokio")]
use crate::scheduler::{run_guarded, Scheduler, TimerHandle};
#[cfg(feature = "runtime-tokio")]
use crate::timer::Timer;

/// Scheduler backed by tokio tasks and `tokio::time`.
///
/// Each scheduled callback is a spawned task sleeping until its deadline. Time is read
/// from tokio's clock, so `tokio::time::pause` and `advance` drive it in tests.
///
/// A scheduler built with [`TokioScheduler::new`] spawns onto the ambient runtime and
/// panics when used outside of one, like `tokio::spawn`. Use
/// [`TokioScheduler::try_current`] to capture the runtime up front.
#[cfg(feature = "runtime-tokio")]
#[derive(Clone, Debug, Default)]
pub struct TokioScheduler {
    handle: Option<Handle>,
}

#[cfg(feature = "runtime-tokio")]
impl TokioScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules every callback on the given runtime, whichever thread calls in.
    pub fn with_handle(handle: Handle) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    /// Captures the runtime the caller is currently running on.
    ///
    /// # Errors
    /// Returns [`PacerError::NoRuntime`] when called outside of a tokio runtime.
    pub fn try_current() -> Result<Self> {
        Handle::try_current()
            .map(Self::with_handle)
            .map_err(|_| PacerError::no_runtime("tokio"))
    }
}

#[cfg(feature = "runtime-tokio")]
impl Timer for TokioScheduler {
    type Sleep = tokio::time::Sleep;

    type Instant = Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        let _guard = self.handle.as_ref().map(Handle::enter);
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Self::Instant {
        let _guard = self.handle.as_ref().map(Handle::enter);
        tokio::time::Instant::now().into_std()
    }
}

#[cfg(feature = "runtime-tokio")]
impl Scheduler for TokioScheduler {
    type Handle = TokioTimerHandle;

    fn schedule<F>(&self, delay: Duration, task: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static,
    {
        let _guard = self.handle.as_ref().map(Handle::enter);
        let token = CancelToken::default();
        let fired = token.clone();
        let sleep = self.sleep_future(delay);

        let join = tokio::spawn(async move {
            sleep.await;
            if fired.is_cancelled() {
                return Ok(());
            }
            run_guarded("tokio", task)
        });

        crate::trace!("tokio timer scheduled in {:?}", delay);
        TokioTimerHandle {
            token,
            abort: join.abort_handle(),
        }
    }
}

/// Cancels a tokio timer by flagging it and aborting its task.
#[cfg(feature = "runtime-tokio")]
#[derive(Debug)]
pub struct TokioTimerHandle {
    token: CancelToken,
    abort: AbortHandle,
}

#[cfg(feature = "runtime-tokio")]
impl TimerHandle for TokioTimerHandle {
    fn cancel(self) {
        self.token.cancel();
        self.abort.abort();
    }
}
