// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;

/// Observer for the values returned by the wrapped function.
pub type ResultCallback<R> = Arc<dyn Fn(&R) + Send + Sync>;

/// The wrapped function, type-erased so wrappers only carry their argument and
/// return types.
pub(crate) type WrappedFn<Args, R> = Box<dyn Fn(Args) -> R + Send + Sync>;
