#![cfg_attr(not(test), no_std)]

//! The B runtime: what a compiled B program links against to reach the kernel.
//!
//! Every value is a [`Word`]. Strings are words holding the address of
//! NUL-terminated bytes. Character output goes to the stream selected by
//! [`stream::FOUT`]; block I/O takes an explicit descriptor and returns the
//! kernel's result untouched. There is no heap and no buffering, and the whole
//! runtime assumes a single thread.

#[macro_use]
pub mod logging;

pub mod entry;
pub mod format;
pub mod io;
pub mod stream;
pub mod word;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use bapi::{LogLevel, Word};
pub use entry::{exit, exit_with};
pub use format::{printd, printf, printo};
pub use io::{flush, nread, nwrite, read, write, writeb};
pub use word::{char_at, lchar};

#[doc(hidden)]
pub use bsys as __bsys;
