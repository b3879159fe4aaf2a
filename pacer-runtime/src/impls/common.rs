// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Shared flag checked by a spawned timer task right before it runs its callback.
///
/// Aborting a task is not enough on its own: the sleep may already have completed,
/// so the flag closes the window between wake-up and callback.
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
#[derive(Clone, Debug, Default)]
pub(crate) struct CancelToken(Arc<AtomicBool>);

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
impl CancelToken {
    pub(crate) fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
