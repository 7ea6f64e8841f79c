#![cfg_attr(not(test), no_std)]

//! Constants and small types shared between the syscall layer and the B runtime.

/// The single B value type: a signed integer as wide as an address.
pub type Word = isize;

/// Unsigned view of a [`Word`], used wherever two's-complement arithmetic matters.
pub type UWord = usize;

/// Bytes in a [`Word`].
pub const WORD_BYTES: usize = core::mem::size_of::<Word>();

/// Syscall numbers for the (arch, os) pair being built.
pub mod nr {
    #[cfg(all(target_os = "linux", target_arch = "x86_64"))]
    mod table {
        pub const READ: usize = 0; // read(fd, buf, len) -> n
        pub const WRITE: usize = 1; // write(fd, buf, len) -> n
        pub const EXIT: usize = 60; // exit(code) -> !, calling thread only
        pub const EXIT_GROUP: usize = 231; // exit_group(code) -> !, whole process
    }

    // aarch64 and riscv64 share the generic Linux table.
    #[cfg(all(target_os = "linux", not(target_arch = "x86_64")))]
    mod table {
        pub const READ: usize = 63;
        pub const WRITE: usize = 64;
        pub const EXIT: usize = 93;
        pub const EXIT_GROUP: usize = 94;
    }

    #[cfg(target_os = "macos")]
    mod table {
        pub const READ: usize = 3;
        pub const WRITE: usize = 4;
        pub const EXIT: usize = 1;
        // BSD exit already ends the process
        pub const EXIT_GROUP: usize = EXIT;
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    compile_error!("bapi: no syscall table for this operating system (linux and macos are supported)");

    pub use table::*;

    /// Darwin x86_64 routes BSD syscalls through class 2.
    pub const DARWIN_BSD_CLASS: usize = 0x200_0000;
}

/// Standard descriptors.
pub mod fd {
    pub const STDIN: i32 = 0;
    pub const STDOUT: i32 = 1;
    pub const STDERR: i32 = 2;
}

/// Stream selector values as seen by B programs through `fout`.
pub mod stream {
    use crate::Word;

    pub const STDOUT: Word = 0;
    pub const STDERR: Word = 1;

    /// Selector value to descriptor: 0 -> 1, 1 -> 2.
    #[inline(always)]
    pub const fn descriptor(selector: Word) -> Word {
        selector + 1
    }
}

/// Returned by single-character read on end of input or I/O error (ASCII ETX).
pub const EOT: crate::Word = 4;

/// Returned by single-character read for a byte outside 1..=127.
pub const NON_ASCII: crate::Word = 0;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SysErr {
    /// The kernel returned `-errno`.
    Os(i32),
    /// A write made no progress.
    WriteZero,
}

pub type SysResult<T> = core::result::Result<T, SysErr>;

/// Split a raw syscall result into success or `-errno`.
#[inline(always)]
pub const fn check(ret: Word) -> SysResult<usize> {
    if ret < 0 {
        Err(SysErr::Os(ret.wrapping_neg() as i32))
    } else {
        Ok(ret as usize)
    }
}

/// Runtime log levels, lowest first.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    pub const fn from_u8(v: u8) -> LogLevel {
        match v {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            LogLevel::Trace => "[TRACE] ",
            LogLevel::Debug => "[DEBUG] ",
            LogLevel::Info => "[INFO]  ",
            LogLevel::Warn => "[WARN]  ",
            LogLevel::Error => "[ERROR] ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_is_address_sized() {
        assert_eq!(WORD_BYTES, core::mem::size_of::<*const u8>());
    }

    #[test]
    fn test_check_splits_errno() {
        assert_eq!(check(7), Ok(7));
        assert_eq!(check(0), Ok(0));
        assert_eq!(check(-9), Err(SysErr::Os(9)));
    }

    #[test]
    fn test_stream_descriptor() {
        assert_eq!(stream::descriptor(stream::STDOUT), fd::STDOUT as Word);
        assert_eq!(stream::descriptor(stream::STDERR), fd::STDERR as Word);
    }

    #[test]
    fn test_log_level_roundtrip() {
        for lvl in [LogLevel::Trace, LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error] {
            assert_eq!(LogLevel::from_u8(lvl as u8), lvl);
        }
        assert_eq!(LogLevel::from_u8(200), LogLevel::Error);
        assert!(LogLevel::Debug < LogLevel::Warn);
    }

    #[cfg(all(target_os = "linux", target_arch = "x86_64"))]
    #[test]
    fn test_linux_x86_64_numbers() {
        assert_eq!((nr::READ, nr::WRITE, nr::EXIT, nr::EXIT_GROUP), (0, 1, 60, 231));
    }
}
