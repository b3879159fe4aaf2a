// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer::prelude::*;
use pacer_test_utils::CallRecorder;
use std::thread;
use std::time::Duration;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_debounce_called_from_plain_threads() -> anyhow::Result<()> {
    // Arrange
    let calls = CallRecorder::new();
    let log = calls.clone();
    let debounced = (move |value: usize| log.record(value)).debounce(Duration::from_millis(50));

    // Act
    let workers: Vec<_> = (0..4)
        .map(|worker| {
            let debounced = debounced.clone();
            thread::spawn(move || debounced.call(worker))
        })
        .collect();
    for worker in workers {
        let _ = worker.join();
    }
    tokio::time::sleep(Duration::from_millis(200)).await;

    // Assert
    assert_eq!(calls.len(), 1);
    assert!(!debounced.is_pending());

    Ok(())
}
