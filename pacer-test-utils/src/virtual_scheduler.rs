// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use core::ops::{Add, Sub};
use core::pin::Pin;
use core::task::{Context, Poll, Waker};
use core::time::Duration;
use pacer_runtime::scheduler::{Scheduler, TimerHandle};
use pacer_runtime::timer::Timer;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Weak};

type Task = Box<dyn FnOnce() + Send>;

/// Deadline plus insertion order; callbacks sharing a deadline run first-in first-out.
type TimerKey = (Duration, u64);

/// A point on the virtual timeline, measured from the scheduler's creation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtualInstant(Duration);

impl VirtualInstant {
    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    pub const fn since_start(self) -> Duration {
        self.0
    }
}

impl Add<Duration> for VirtualInstant {
    type Output = VirtualInstant;

    fn add(self, duration: Duration) -> Self::Output {
        VirtualInstant(self.0 + duration)
    }
}

impl Sub<VirtualInstant> for VirtualInstant {
    type Output = Duration;

    fn sub(self, other: VirtualInstant) -> Self::Output {
        self.0.saturating_sub(other.0)
    }
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<TimerKey, Task>,
}

impl Clock {
    fn insert(&mut self, deadline: Duration, task: Task) -> TimerKey {
        let key = (deadline, self.next_id);
        self.next_id += 1;
        self.queue.insert(key, task);
        key
    }

    fn pop_due(&mut self, until: Duration) -> Option<Task> {
        let key = *self.queue.keys().next()?;
        if key.0 > until {
            return None;
        }
        self.now = self.now.max(key.0);
        self.queue.remove(&key)
    }
}

/// Deterministic scheduler for tests.
///
/// Time only moves when [`advance`](Self::advance) is called. Each due callback runs
/// with the clock set to its own deadline, so callbacks observe the instant they were
/// scheduled for, and callbacks scheduled while advancing run in the same pass if they
/// fall inside the advanced range.
///
/// Callbacks run on the thread calling `advance`, without any internal lock held; a
/// panicking callback unwinds out of `advance`.
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    clock: Arc<Mutex<Clock>>,
}

impl fmt::Debug for VirtualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clock = self.clock.lock();
        f.debug_struct("VirtualScheduler")
            .field("now", &clock.now)
            .field("pending_timers", &clock.queue.len())
            .finish()
    }
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn elapsed(&self) -> Duration {
        self.clock.lock().now
    }

    pub fn elapsed_millis(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }

    /// Number of callbacks scheduled and not yet run or cancelled.
    pub fn pending_timers(&self) -> usize {
        self.clock.lock().queue.len()
    }

    /// Moves the clock forward by `duration`, running every callback that falls due.
    ///
    /// Returns how many callbacks ran.
    pub fn advance(&self, duration: Duration) -> usize {
        let target = self.clock.lock().now + duration;
        let mut fired = 0;

        loop {
            let next = self.clock.lock().pop_due(target);
            match next {
                Some(task) => {
                    task();
                    fired += 1;
                }
                None => break,
            }
        }

        self.clock.lock().now = target;
        fired
    }

    pub fn advance_millis(&self, millis: u64) -> usize {
        self.advance(Duration::from_millis(millis))
    }

    /// Advances to an absolute point on the timeline. Does nothing if it already passed.
    pub fn advance_to_millis(&self, millis: u64) -> usize {
        let target = Duration::from_millis(millis);
        let now = self.elapsed();
        self.advance(target.saturating_sub(now))
    }
}

impl Timer for VirtualScheduler {
    type Sleep = VirtualSleep;

    type Instant = VirtualInstant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        let deadline = self.clock.lock().now + duration;
        VirtualSleep {
            clock: self.clock.clone(),
            deadline,
            registration: None,
        }
    }

    fn now(&self) -> Self::Instant {
        VirtualInstant(self.elapsed())
    }
}

impl Scheduler for VirtualScheduler {
    type Handle = VirtualTimerHandle;

    fn schedule<F>(&self, delay: Duration, task: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static,
    {
        let mut clock = self.clock.lock();
        let deadline = clock.now + delay;
        let key = clock.insert(deadline, Box::new(task));
        VirtualTimerHandle {
            clock: Arc::downgrade(&self.clock),
            key,
        }
    }
}

/// Removes its callback from the virtual queue on cancel.
#[derive(Debug)]
pub struct VirtualTimerHandle {
    clock: Weak<Mutex<Clock>>,
    key: TimerKey,
}

impl TimerHandle for VirtualTimerHandle {
    fn cancel(self) {
        if let Some(clock) = self.clock.upgrade() {
            clock.lock().queue.remove(&self.key);
        }
    }
}

/// Future completing once the virtual clock reaches its deadline.
///
/// The first pending poll registers a wake entry in the queue; dropping the sleep
/// removes it.
pub struct VirtualSleep {
    clock: Arc<Mutex<Clock>>,
    deadline: Duration,
    registration: Option<(TimerKey, Arc<Mutex<Option<Waker>>>)>,
}

impl Drop for VirtualSleep {
    fn drop(&mut self) {
        if let Some((key, _)) = self.registration.take() {
            self.clock.lock().queue.remove(&key);
        }
    }
}

impl fmt::Debug for VirtualSleep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualSleep")
            .field("deadline", &self.deadline)
            .finish()
    }
}

impl Future for VirtualSleep {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        if this.clock.lock().now >= this.deadline {
            return Poll::Ready(());
        }

        match &this.registration {
            Some((_, slot)) => *slot.lock() = Some(cx.waker().clone()),
            None => {
                let slot = Arc::new(Mutex::new(Some(cx.waker().clone())));
                let wake_slot = slot.clone();
                let key = this.clock.lock().insert(
                    this.deadline,
                    Box::new(move || {
                        if let Some(waker) = wake_slot.lock().take() {
                            waker.wake();
                        }
                    }),
                );
                this.registration = Some((key, slot));
            }
        }

        Poll::Pending
    }
}
