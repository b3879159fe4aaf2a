// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer_runtime::scheduler::TimerHandle;

/// The single pending timer owned by a wrapper.
///
/// Every [`clear`](Self::clear) starts a new generation. A timer callback captures the
/// generation current when it was armed and must check [`is_current`](Self::is_current)
/// before acting, so a callback that already woke up when it was superseded does
/// nothing.
#[derive(Debug)]
pub(crate) struct TimerSlot<H> {
    handle: Option<H>,
    generation: u64,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self {
            handle: None,
            generation: 0,
        }
    }
}

impl<H: TimerHandle> TimerSlot<H> {
    pub(crate) fn is_pending(&self) -> bool {
        self.handle.is_some()
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.generation == generation && self.handle.is_some()
    }

    /// Cancels the pending timer. Returns whether one was pending.
    pub(crate) fn clear(&mut self) -> bool {
        self.generation = self.generation.wrapping_add(1);
        match self.handle.take() {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    /// Stores the handle of a timer armed with the current generation.
    pub(crate) fn arm(&mut self, handle: H) {
        debug_assert!(self.handle.is_none(), "timer armed over a pending one");
        self.handle = Some(handle);
    }

    /// Forgets the handle of a timer that is firing right now.
    pub(crate) fn release(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.handle = None;
    }
}
