#![allow(unused_macros)]

//! Log wrappers that compile to nothing unless the `logging` feature is on.

macro_rules! trace {
    (target: $target:expr, $($arg:tt)+) => (
        #[cfg(feature = "logging")]
        log::trace!(target: $target, $($arg)+);
    );
    ($($arg:tt)+) => (
        #[cfg(feature = "logging")]
        log::trace!(target: "strarray", $($arg)+);
    )
}

macro_rules! debug {
    (target: $target:expr, $($arg:tt)+) => (
        #[cfg(feature = "logging")]
        log::debug!(target: $target, $($arg)+);
    );
    ($($arg:tt)+) => (
        #[cfg(feature = "logging")]
        log::debug!(target: "strarray", $($arg)+);
    )
}

/// Failed operations report here as well as through their `Result`.
macro_rules! warn {
    (target: $target:expr, $($arg:tt)+) => (
        #[cfg(feature = "logging")]
        log::warn!(target: $target, $($arg)+);
    );
    ($($arg:tt)+) => (
        #[cfg(feature = "logging")]
        log::warn!(target: "strarray", $($arg)+);
    )
}
