// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timer and scheduler abstraction used by the pacer wrappers.
//!
//! - [`timer::Timer`] reads the clock and builds sleep futures.
//! - [`scheduler::Scheduler`] runs a callback after a delay and hands back a
//!   [`scheduler::TimerHandle`] that can cancel it.
//!
//! Enable a runtime with `runtime-tokio` (default) or `runtime-smol`.

pub mod impls;
pub mod logging;
pub mod scheduler;
pub mod timer;

#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use tracing as __tracing;
