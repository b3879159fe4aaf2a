// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the pacer call-rate-control library
//!
//! Debounced and throttled wrappers never fail on the call path: they do not
//! validate their timing parameters and do not intercept errors from the wrapped
//! function. The errors defined here come from the runtime layer, when a scheduler
//! is requested outside of its runtime or when a scheduled callback panics.
//!
//! # Examples
//!
//! ```
//! use pacer_error::{PacerError, Result};
//!
//! fn scheduler_for(runtime: &'static str, available: bool) -> Result<()> {
//!     if available {
//!         Ok(())
//!     } else {
//!         Err(PacerError::no_runtime(runtime))
//!     }
//! }
//!
//! assert!(scheduler_for("tokio", false).is_err());
//! ```

use std::any::Any;

/// Root error type for all pacer operations
#[derive(Debug, thiserror::Error)]
pub enum PacerError {
    /// No runtime context was available to build a scheduler
    ///
    /// Returned when a scheduler that needs an ambient runtime (for example
    /// `TokioScheduler::try_current`) is constructed outside of that runtime.
    #[error("No {runtime} runtime available in the current context")]
    NoRuntime {
        /// Name of the runtime that was expected
        runtime: &'static str,
    },

    /// A scheduled callback panicked
    ///
    /// Trailing and window-closing callbacks run on the scheduler, away from any
    /// caller. A panic there is caught and reported through this variant.
    #[error("Scheduled callback panicked: {context}")]
    CallbackPanic {
        /// The panic message, when one could be extracted
        context: String,
    },
}

impl PacerError {
    /// Create a missing-runtime error for the named runtime
    #[must_use]
    pub const fn no_runtime(runtime: &'static str) -> Self {
        Self::NoRuntime { runtime }
    }

    /// Create a callback panic error with the given context
    pub fn callback_panic(context: impl Into<String>) -> Self {
        Self::CallbackPanic {
            context: context.into(),
        }
    }

    /// Convert a panic payload caught by `catch_unwind` into a `CallbackPanic`
    ///
    /// String payloads (the common `panic!("...")` case) are kept verbatim; any
    /// other payload type is reported as opaque.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let context = if let Some(message) = payload.downcast_ref::<&'static str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self::CallbackPanic { context }
    }

    /// Check if this is a recoverable error
    ///
    /// A missing runtime can be fixed by retrying from inside the runtime; a panicked
    /// callback already ran and cannot be replayed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::NoRuntime { .. })
    }
}

/// Specialized Result type for pacer operations
///
/// # Examples
///
/// ```
/// use pacer_error::Result;
///
/// fn ready() -> Result<bool> {
///     Ok(true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, PacerError>;
