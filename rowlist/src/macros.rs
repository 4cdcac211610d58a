// Copyright 2025 the Rowlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logging shims that compile away without the `tracing` feature.

#[cfg(feature = "tracing")]
macro_rules! rl_trace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "rowlist", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! rl_trace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! rl_debug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "rowlist", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! rl_debug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! rl_warn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "rowlist", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! rl_warn {
    ($($tt:tt)*) => {};
}
