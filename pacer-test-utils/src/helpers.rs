// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use tokio::task::yield_now;
use tokio::time::advance;

/// Advances tokio's paused clock, then yields so that timer tasks woken by the jump get
/// to run before the caller asserts.
pub async fn advance_and_settle(duration: Duration) {
    advance(duration).await;
    settle().await;
}

/// Yields a few times to let spawned tasks that are already ready run to completion.
pub async fn settle() {
    for _ in 0..8 {
        yield_now().await;
    }
}
