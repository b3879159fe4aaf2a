// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the extension traits and option types.
//!
//! ```rust
//! use pacer::prelude::*;
//! ```

pub use crate::debounce::{DebounceExt, DebounceOptions, Debounced};
pub use crate::throttle::{ThrottleExt, ThrottleOptions, Throttled};

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use crate::debounce::DebounceWithDefaultSchedulerExt;
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use crate::throttle::ThrottleWithDefaultSchedulerExt;
