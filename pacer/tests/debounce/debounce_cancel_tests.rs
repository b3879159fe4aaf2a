// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer::{DebounceExt, DebounceOptions};
use pacer_test_utils::{timed_recorder, NoCancelScheduler, VirtualScheduler};
use std::time::Duration;

#[test]
fn test_cancel_prevents_pending_call() {
    // Arrange
    let clock = VirtualScheduler::new();
    let (calls, func) = timed_recorder::<u32>(&clock);
    let debounced =
        func.debounce_with_scheduler(DebounceOptions::new(Duration::from_millis(100)), clock.clone());
    debounced.call(1);

    // Act
    clock.advance_millis(50);
    debounced.cancel();
    clock.advance_millis(500);

    // Assert
    assert!(calls.is_empty());
    assert!(!debounced.is_pending());
    assert_eq!(clock.pending_timers(), 0);
}

#[test]
fn test_cancel_without_pending_call_is_noop() {
    // Arrange
    let clock = VirtualScheduler::new();
    let (calls, func) = timed_recorder::<u32>(&clock);
    let debounced =
        func.debounce_with_scheduler(DebounceOptions::new(Duration::from_millis(100)), clock.clone());

    // Act
    debounced.cancel();
    debounced.call(1);
    clock.advance_millis(100);

    // Assert
    assert_eq!(calls.calls(), vec![(100, 1)]);
}

#[test]
fn test_cancel_is_idempotent() {
    // Arrange
    let clock = VirtualScheduler::new();
    let (calls, func) = timed_recorder::<u32>(&clock);
    let debounced =
        func.debounce_with_scheduler(DebounceOptions::new(Duration::from_millis(100)), clock.clone());
    debounced.call(1);

    // Act
    debounced.cancel();
    debounced.cancel();
    debounced.cancel();
    clock.advance_millis(200);
    debounced.call(2);
    clock.advance_millis(100);

    // Assert
    assert_eq!(calls.calls(), vec![(300, 2)]);
}

#[test]
fn test_cancel_after_fire_has_no_effect() {
    // Arrange
    let clock = VirtualScheduler::new();
    let (calls, func) = timed_recorder::<u32>(&clock);
    let debounced =
        func.debounce_with_scheduler(DebounceOptions::new(Duration::from_millis(100)), clock.clone());
    debounced.call(1);
    clock.advance_millis(100);

    // Act
    debounced.cancel();

    // Assert
    assert_eq!(calls.calls(), vec![(100, 1)]);
}

#[test]
fn test_cancel_ends_leading_burst() {
    // Arrange
    let clock = VirtualScheduler::new();
    let (calls, func) = timed_recorder::<u32>(&clock);
    let debounced = func.debounce_with_scheduler(
        DebounceOptions::new(Duration::from_millis(100)).leading(true),
        clock.clone(),
    );
    debounced.call(1);

    // Act
    clock.advance_to_millis(10);
    debounced.cancel();
    clock.advance_to_millis(20);
    let second = debounced.call(2);

    // Assert
    assert_eq!(second, Some(()));
    assert_eq!(calls.calls(), vec![(0, 1), (20, 2)]);
}

#[test]
fn test_cancel_from_clone_stops_shared_timer() {
    // Arrange
    let clock = VirtualScheduler::new();
    let (calls, func) = timed_recorder::<u32>(&clock);
    let debounced =
        func.debounce_with_scheduler(DebounceOptions::new(Duration::from_millis(100)), clock.clone());
    let other = debounced.clone();
    debounced.call(1);

    // Act
    other.cancel();
    clock.advance_millis(200);

    // Assert
    assert!(calls.is_empty());
}

#[test]
fn test_superseded_callbacks_that_still_fire_are_ignored() {
    // Arrange
    let clock = VirtualScheduler::new();
    let (calls, func) = timed_recorder::<u32>(&clock);
    let debounced = func.debounce_with_scheduler(
        DebounceOptions::new(Duration::from_millis(100)),
        NoCancelScheduler::new(clock.clone()),
    );

    // Act
    debounced.call(1);
    clock.advance_to_millis(30);
    debounced.call(2);
    debounced.cancel();
    debounced.call(3);

    // Assert
    assert_eq!(clock.pending_timers(), 3);
    clock.advance_to_millis(500);
    assert_eq!(calls.calls(), vec![(130, 3)]);
    assert!(!debounced.is_pending());
}

#[test]
fn test_stale_window_close_does_not_end_new_leading_burst() {
    // Arrange
    let clock = VirtualScheduler::new();
    let (calls, func) = timed_recorder::<u32>(&clock);
    let debounced = func.debounce_with_scheduler(
        DebounceOptions::new(Duration::from_millis(100)).leading(true),
        NoCancelScheduler::new(clock.clone()),
    );
    debounced.call(1);
    debounced.cancel();

    // Act
    clock.advance_to_millis(50);
    debounced.call(2);
    clock.advance_to_millis(100);
    let inside_window = debounced.call(3);
    clock.advance_to_millis(500);

    // Assert
    assert_eq!(inside_window, None);
    assert_eq!(calls.calls(), vec![(0, 1), (50, 2), (200, 3)]);
}
