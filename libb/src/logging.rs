//! Runtime diagnostics with a level filter.
//!
//! Messages go straight to fd 2 through [`bsys::Stderr`]; they never look at
//! or touch the `fout` selector, so they cannot interleave with a program's
//! own stream choice. The default threshold is `Warn`, which keeps the
//! runtime's trace and debug points silent.
//!
//! Levels, lowest first:
//! - TRACE: per-call detail (exit status, end of input)
//! - DEBUG: tolerated oddities (unknown format directives)
//! - INFO, WARN, ERROR: for programs built on the runtime

use core::sync::atomic::{AtomicU8, Ordering};
use bapi::LogLevel;

/// Global log level filter. Messages below this level are suppressed.
static LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Warn as u8);

pub fn get_log_level() -> LogLevel {
    LogLevel::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

pub fn set_log_level(level: LogLevel) {
    LOG_LEVEL.store(level as u8, Ordering::Relaxed);
}

#[inline]
pub fn should_log(level: LogLevel) -> bool {
    level as u8 >= LOG_LEVEL.load(Ordering::Relaxed)
}

/// Leveled log line on stderr: `[LEVEL] message`.
#[macro_export]
macro_rules! blog {
    ($level:expr, $($arg:tt)*) => {{
        let level: $crate::LogLevel = $level;
        if $crate::logging::should_log(level) {
            use core::fmt::Write as _;
            let mut err = $crate::__bsys::Stderr;
            let _ = err.write_str(level.tag());
            let _ = write!(err, $($arg)*);
            let _ = err.write_str("\n");
        }
    }};
}

#[macro_export]
macro_rules! btrace {
    ($($arg:tt)*) => { $crate::blog!($crate::LogLevel::Trace, $($arg)*) };
}

#[macro_export]
macro_rules! bdebug {
    ($($arg:tt)*) => { $crate::blog!($crate::LogLevel::Debug, $($arg)*) };
}

#[macro_export]
macro_rules! binfo {
    ($($arg:tt)*) => { $crate::blog!($crate::LogLevel::Info, $($arg)*) };
}

#[macro_export]
macro_rules! bwarn {
    ($($arg:tt)*) => { $crate::blog!($crate::LogLevel::Warn, $($arg)*) };
}

#[macro_export]
macro_rules! berror {
    ($($arg:tt)*) => { $crate::blog!($crate::LogLevel::Error, $($arg)*) };
}
