// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer::prelude::*;
use pacer_test_utils::{advance_and_settle, CallRecorder};
use std::time::Duration;
use tokio::time::pause;

#[tokio::test]
async fn test_debounce_emits_after_quiet_period() -> anyhow::Result<()> {
    pause();

    // Arrange
    let calls = CallRecorder::new();
    let log = calls.clone();
    let debounced = (move |value: &'static str| log.record(value)).debounce(Duration::from_millis(100));

    // Act
    debounced.call("a");
    advance_and_settle(Duration::from_millis(30)).await;
    debounced.call("b");
    advance_and_settle(Duration::from_millis(30)).await;
    debounced.call("c");

    // Assert - not yet 100ms since the last call
    advance_and_settle(Duration::from_millis(90)).await;
    assert!(calls.is_empty());

    advance_and_settle(Duration::from_millis(20)).await;
    assert_eq!(calls.calls(), vec!["c"]);

    Ok(())
}

#[tokio::test]
async fn test_debounce_leading_returns_value() -> anyhow::Result<()> {
    pause();

    // Arrange
    let debounced = (|value: u32| value * 3)
        .debounce_with_options(DebounceOptions::new(Duration::from_millis(50)).leading(true));

    // Act
    let first = debounced.call(3);
    let second = debounced.call(4);

    // Assert
    assert_eq!(first, Some(9));
    assert_eq!(second, None);
    assert!(debounced.is_pending());

    advance_and_settle(Duration::from_millis(60)).await;
    assert!(!debounced.is_pending());

    Ok(())
}

#[tokio::test]
async fn test_debounce_cancel_aborts_timer_task() -> anyhow::Result<()> {
    pause();

    // Arrange
    let calls = CallRecorder::new();
    let log = calls.clone();
    let debounced = (move |value: u32| log.record(value)).debounce(Duration::from_millis(100));
    debounced.call(1);

    // Act
    advance_and_settle(Duration::from_millis(50)).await;
    debounced.cancel();
    advance_and_settle(Duration::from_millis(200)).await;

    // Assert
    assert!(calls.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_debounce_panicking_fn_does_not_stop_other_wrappers() -> anyhow::Result<()> {
    pause();

    // Arrange
    let calls = CallRecorder::new();
    let log = calls.clone();
    let failing = (|_: ()| panic!("save failed")).debounce(Duration::from_millis(10));
    let healthy = (move |value: u32| log.record(value)).debounce(Duration::from_millis(20));

    // Act
    failing.call(());
    healthy.call(1);
    advance_and_settle(Duration::from_millis(50)).await;

    // Assert
    assert_eq!(calls.calls(), vec![1]);

    Ok(())
}
