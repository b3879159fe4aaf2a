// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::virtual_scheduler::VirtualScheduler;
use parking_lot::Mutex;
use std::sync::Arc;

/// Records the values a wrapped function was invoked with.
///
/// Clones share the same log, so one clone can live inside the wrapped closure while
/// the test keeps another for assertions.
#[derive(Debug)]
pub struct CallRecorder<T> {
    calls: Arc<Mutex<Vec<T>>>,
}

impl<T> Clone for CallRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}

impl<T> Default for CallRecorder<T> {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T> CallRecorder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, value: T) {
        self.calls.lock().push(value);
    }

    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.calls.lock())
    }
}

impl<T: Clone> CallRecorder<T> {
    pub fn calls(&self) -> Vec<T> {
        self.calls.lock().clone()
    }

    pub fn last(&self) -> Option<T> {
        self.calls.lock().last().cloned()
    }
}

/// Returns a recorder plus a function logging each argument with the virtual time it
/// ran at, in milliseconds.
pub fn timed_recorder<T>(
    clock: &VirtualScheduler,
) -> (CallRecorder<(u64, T)>, impl Fn(T) + Send + Sync + 'static)
where
    T: Send + 'static,
{
    let recorder = CallRecorder::new();
    let log = recorder.clone();
    let clock = clock.clone();
    (recorder, move |value: T| {
        log.record((clock.elapsed_millis(), value))
    })
}
