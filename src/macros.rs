//! src/macros.rs
//! Level-tagged entry-point macros for the global logger.
//!
//! Each macro is sugar for logging at one fixed severity with that level's
//! line tag. Arguments follow [`format!`] syntax.

/// Logs a message at [`Level::Trace`](crate::Level::Trace).
///
/// # Example
/// ```ignore
/// yellog::trace!("entering {}", name);
/// ```
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::log($crate::Level::Trace, ::core::format_args!($($arg)*));
    };
}

/// Logs a message at [`Level::Debug`](crate::Level::Debug).
///
/// # Example
/// ```ignore
/// yellog::debug!("cache miss for {}", key);
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::log($crate::Level::Debug, ::core::format_args!($($arg)*));
    };
}

/// Logs a message at [`Level::Info`](crate::Level::Info).
///
/// # Example
/// ```ignore
/// yellog::info!("listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log($crate::Level::Info, ::core::format_args!($($arg)*));
    };
}

/// Logs a message at [`Level::Warn`](crate::Level::Warn).
///
/// # Example
/// ```ignore
/// yellog::warn!("retrying after {} ms", delay);
/// ```
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log($crate::Level::Warn, ::core::format_args!($($arg)*));
    };
}

/// Logs a message at [`Level::Error`](crate::Level::Error).
///
/// # Example
/// ```ignore
/// yellog::error!("write failed: {}", err);
/// ```
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log($crate::Level::Error, ::core::format_args!($($arg)*));
    };
}

/// Logs a message at [`Level::Critical`](crate::Level::Critical).
///
/// # Example
/// ```ignore
/// yellog::critical!("out of descriptors");
/// ```
#[macro_export]
macro_rules! critical {
    ($($arg:tt)*) => {
        $crate::log($crate::Level::Critical, ::core::format_args!($($arg)*));
    };
}
