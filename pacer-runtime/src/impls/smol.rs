// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(feature = "runtime-smol")]
use std::time::{Duration, Instant};

#[cfg(feature = "runtime-smol")]
use pacer_error::Result;

#[cfg(feature = "runtime-smol")]
use super::common::CancelToken;
#[cfg(feature = "runtime-smol")]
use crate::scheduler::{run_guarded, Scheduler, TimerHandle};
#[cfg(feature = "runtime-smol")]
use crate::timer::Timer;

/// Scheduler backed by tasks on smol's global executor.
#[cfg(feature = "runtime-smol")]
#[derive(Clone, Debug, Default)]
pub struct SmolScheduler;

#[cfg(feature = "runtime-smol")]
pub struct SmolSleep {
    timer: async_io::Timer,
}

#[cfg(feature = "runtime-smol")]
impl SmolSleep {
    fn new(duration: Duration) -> Self {
        Self {
            timer: async_io::Timer::after(duration),
        }
    }
}

#[cfg(feature = "runtime-smol")]
impl core::future::Future for SmolSleep {
    type Output = ();

    fn poll(
        mut self: core::pin::Pin<&mut Self>,
        cx: &mut core::task::Context<'_>,
    ) -> core::task::Poll<Self::Output> {
        core::pin::Pin::new(&mut self.timer).poll(cx).map(|_| ())
    }
}

#[cfg(feature = "runtime-smol")]
impl Timer for SmolScheduler {
    type Sleep = SmolSleep;

    type Instant = Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        SmolSleep::new(duration)
    }

    fn now(&self) -> Self::Instant {
        Instant::now()
    }
}

#[cfg(feature = "runtime-smol")]
impl Scheduler for SmolScheduler {
    type Handle = SmolTimerHandle;

    fn schedule<F>(&self, delay: Duration, task: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static,
    {
        let token = CancelToken::default();
        let fired = token.clone();
        let sleep = self.sleep_future(delay);

        let task = smol::spawn(async move {
            sleep.await;
            if fired.is_cancelled() {
                return Ok(());
            }
            run_guarded("smol", task)
        });

        crate::trace!("smol timer scheduled in {:?}", delay);
        SmolTimerHandle {
            token,
            task: Some(task),
        }
    }
}

/// Cancels a smol timer by flagging it and dropping its task, which releases
/// everything the callback captured without waiting for the deadline.
///
/// Dropping the handle without calling `cancel` detaches the task, so the callback
/// still runs.
#[cfg(feature = "runtime-smol")]
#[derive(Debug)]
pub struct SmolTimerHandle {
    token: CancelToken,
    task: Option<smol::Task<Result<()>>>,
}

#[cfg(feature = "runtime-smol")]
impl TimerHandle for SmolTimerHandle {
    fn cancel(mut self) {
        self.token.cancel();
        drop(self.task.take());
    }
}

#[cfg(feature = "runtime-smol")]
impl Drop for SmolTimerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.detach();
        }
    }
}
