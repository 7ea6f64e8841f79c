#![cfg_attr(not(test), no_std)]

use core::fmt::{self, Write};
use bapi::{check, nr, SysErr, SysResult, Word};

mod arch;

#[repr(transparent)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Fd(pub i32);

pub const STDIN:  Fd = Fd(bapi::fd::STDIN);
pub const STDOUT: Fd = Fd(bapi::fd::STDOUT);
pub const STDERR: Fd = Fd(bapi::fd::STDERR);

/* -------- the shim ---------- */

/// Trap into the kernel with up to three word arguments and return the raw
/// result word. Negative results are `-errno`.
///
/// # Safety
/// Whatever the kernel does with the arguments (pointers included) is on the caller.
#[inline(always)]
pub unsafe fn syscall3(nr: usize, a1: Word, a2: Word, a3: Word) -> Word {
    arch::syscall3(nr, a1 as usize, a2 as usize, a3 as usize)
}

/* -------- raw passthrough ---------- */

/// `read(fd, buf, count)` with no checking at all.
///
/// # Safety
/// `buf` must be writable for `count` bytes.
#[inline]
pub unsafe fn read_raw(fd: Word, buf: *mut u8, count: Word) -> Word {
    syscall3(nr::READ, fd, buf as Word, count)
}

/// `write(fd, buf, count)` with no checking at all.
///
/// # Safety
/// `buf` must be readable for `count` bytes.
#[inline]
pub unsafe fn write_raw(fd: Word, buf: *const u8, count: Word) -> Word {
    syscall3(nr::WRITE, fd, buf as Word, count)
}

/* -------- basic I/O ---------- */

pub fn write_fd(fd: Fd, buf: &[u8]) -> SysResult<usize> {
    let r = unsafe { write_raw(fd.0 as Word, buf.as_ptr(), buf.len() as Word) };
    check(r)
}

pub fn read_fd(fd: Fd, buf: &mut [u8]) -> SysResult<usize> {
    let r = unsafe { read_raw(fd.0 as Word, buf.as_mut_ptr(), buf.len() as Word) };
    check(r)
}

/// Terminate the process with `code` as its exit status.
pub fn exit(code: Word) -> ! {
    unsafe { arch::exit(code as usize) }
}

/* -------- file-like API ---------- */

impl Fd {
    pub fn read(&self, buf: &mut [u8]) -> SysResult<usize> { read_fd(*self, buf) }
    pub fn write(&self, buf: &[u8]) -> SysResult<usize> { write_fd(*self, buf) }
}

/* ---------- tiny io traits ---------- */

pub trait IoWrite {
    fn write(&self, buf: &[u8]) -> SysResult<usize>;
    fn write_all(&self, mut buf: &[u8]) -> SysResult<()> {
        while !buf.is_empty() {
            let n = self.write(buf)?;
            if n == 0 { return Err(SysErr::WriteZero); }
            buf = &buf[n..];
        }
        Ok(())
    }
}
pub trait IoRead {
    fn read(&self, buf: &mut [u8]) -> SysResult<usize>;
}

impl IoWrite for Fd {
    fn write(&self, b: &[u8]) -> SysResult<usize> { write_fd(*self, b) }
}

impl IoRead for Fd { fn read(&self, b: &mut [u8]) -> SysResult<usize> { read_fd(*self, b) } }

/* -------- stderr sink ---------- */

/// `fmt::Write` onto fd 2, used for diagnostics.
pub struct Stderr;

impl Write for Stderr {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let _ = STDERR.write_all(s.as_bytes());
        Ok(())
    }
}

#[macro_export]
macro_rules! eprint {
    ($($arg:tt)*) => {{
        let _ = core::fmt::write(&mut $crate::Stderr, format_args!($($arg)*));
    }}
}

#[macro_export]
macro_rules! eprintln {
    () => { $crate::eprint!("\n") };
    ($fmt:literal $(, $($arg:tt)+)?) => {{
        $crate::eprint!(concat!($fmt, "\n") $(, $($arg)+)?);
    }}
}

/* -------- NUL-terminated literal helper ---------- */

#[macro_export]
macro_rules! cstr {
    ($lit:literal) => {{
        const S: &str = concat!($lit, "\0");
        // SAFETY: we appended a NUL ourselves, and $lit can't contain interior NUL
        unsafe { core::ffi::CStr::from_bytes_with_nul_unchecked(S.as_bytes()) }
    }};
}
