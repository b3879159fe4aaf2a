// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer::{ThrottleExt, ThrottleOptions};
use pacer_runtime::impls::smol::SmolScheduler;
use pacer_test_utils::CallRecorder;
use std::time::Duration;

#[test]
fn test_throttle_smol_trailing_call() {
    smol::block_on(async {
        // Arrange
        let calls = CallRecorder::new();
        let log = calls.clone();
        let throttled = (move |value: u32| log.record(value)).throttle_with_scheduler(
            ThrottleOptions::new(Duration::from_millis(50)).trailing(true),
            SmolScheduler,
        );

        // Act
        let first = throttled.call(1);
        let second = throttled.call(2);
        smol::Timer::after(Duration::from_millis(150)).await;

        // Assert
        assert_eq!(first, Some(()));
        assert_eq!(second, None);
        assert_eq!(calls.calls(), vec![1, 2]);
    });
}
