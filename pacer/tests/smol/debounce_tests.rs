// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer::{DebounceExt, DebounceOptions};
use pacer_runtime::impls::smol::SmolScheduler;
use pacer_test_utils::CallRecorder;
use std::time::Duration;

#[test]
fn test_debounce_smol_trailing_call() {
    smol::block_on(async {
        // Arrange
        let calls = CallRecorder::new();
        let log = calls.clone();
        let debounced = (move |value: &'static str| log.record(value)).debounce_with_scheduler(
            DebounceOptions::new(Duration::from_millis(50)),
            SmolScheduler,
        );

        // Act
        debounced.call("a");
        debounced.call("b");
        smol::Timer::after(Duration::from_millis(150)).await;

        // Assert
        assert_eq!(calls.calls(), vec!["b"]);
    });
}

#[test]
fn test_debounce_smol_cancel() {
    smol::block_on(async {
        // Arrange
        let calls = CallRecorder::new();
        let log = calls.clone();
        let debounced = (move |value: u32| log.record(value)).debounce_with_scheduler(
            DebounceOptions::new(Duration::from_millis(50)),
            SmolScheduler,
        );

        // Act
        debounced.call(1);
        debounced.cancel();
        smol::Timer::after(Duration::from_millis(150)).await;

        // Assert
        assert!(calls.is_empty());
    });
}
