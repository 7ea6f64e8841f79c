//! Raw character and block I/O.
//!
//! The block primitives hand their arguments straight to the kernel and return
//! whatever comes back; a short transfer is reported, never retried. The
//! character primitives write to whichever stream `fout` selects at the time
//! of the call and ignore the result.

use heapless::Vec;

use bapi::{UWord, Word, EOT, NON_ASCII, WORD_BYTES};
use bsys::{IoRead, IoWrite, STDIN};

use crate::stream::Selected;

/* -------- single character input ---------- */

/// Next character from `r`: the byte if it is in 1..=127, [`NON_ASCII`] for
/// any other byte, [`EOT`] at end of input or on error.
pub fn getc<R: IoRead>(r: &R) -> Word {
    let mut c = [0u8; 1];
    match r.read(&mut c) {
        Ok(1) => match c[0] {
            1..=127 => c[0] as Word,
            _ => NON_ASCII,
        },
        _ => EOT,
    }
}

/// Next character from standard input (B's `read()`).
pub fn read() -> Word {
    let c = getc(&STDIN);
    if c == EOT {
        btrace!("read: end of input");
    }
    c
}

/* -------- block transfer ---------- */

/// Read up to `count` bytes from `file` into `buffer`. Returns the byte count
/// or a negative errno.
///
/// # Safety
/// `buffer` must be writable for `count` bytes.
pub unsafe fn nread(file: Word, buffer: Word, count: Word) -> Word {
    bsys::read_raw(file, buffer as *mut u8, count)
}

/// Write `count` bytes from `buffer` to `file`. Returns the byte count or a
/// negative errno.
///
/// # Safety
/// `buffer` must be readable for `count` bytes.
pub unsafe fn nwrite(file: Word, buffer: Word, count: Word) -> Word {
    bsys::write_raw(file, buffer as *const u8, count)
}

/* -------- character output ---------- */

/// The bytes `write` emits for `ch`: big-endian, leading zero bytes dropped,
/// but never fewer than one byte.
pub fn pack(ch: Word) -> Vec<u8, WORD_BYTES> {
    let mut out = Vec::new();
    for (i, &byte) in (ch as UWord).to_be_bytes().iter().enumerate() {
        if byte != 0 || !out.is_empty() || i == WORD_BYTES - 1 {
            // capacity is exactly WORD_BYTES
            let _ = out.push(byte);
        }
    }
    out
}

pub fn write_to<W: IoWrite>(w: &W, ch: Word) {
    let _ = w.write(&pack(ch));
}

pub fn writeb_to<W: IoWrite>(w: &W, c: Word) {
    let _ = w.write(&[c as u8]);
}

/// One or more characters packed into `ch`, on the selected stream.
pub fn write(ch: Word) {
    write_to(&Selected, ch)
}

/// Exactly one byte, the low byte of `c`, on the selected stream.
pub fn writeb(c: Word) {
    writeb_to(&Selected, c)
}

/// Output is unbuffered; nothing to do.
pub fn flush() {}


/// Re-running the test binary so a single test can act in a process of its own.
#[cfg(all(test, any(target_os = "linux", target_os = "macos")))]
pub(crate) mod child {
    use std::process::{Command, Output};

    const ROLE: &str = "LIBB_TEST_CHILD";

    /// The role this process was started with, if it is a child.
    pub fn role() -> Option<String> {
        std::env::var(ROLE).ok()
    }

    /// Run only `test` (full path, e.g. `entry::tests::test_x`) in a fresh
    /// copy of this binary with `role` set, and collect its output.
    pub fn run(test: &str, role: &str) -> Output {
        let exe = std::env::current_exe().unwrap();
        Command::new(exe)
            .args([test, "--exact", "--test-threads=1"])
            .env(ROLE, role)
            .output()
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::capture::Capture;
    use super::*;
    use bapi::{SysErr, SysResult};
    use core::cell::RefCell;

    /// Reader over a fixed byte string, then end of input forever.
    struct Script(RefCell<&'static [u8]>);

    impl IoRead for Script {
        fn read(&self, buf: &mut [u8]) -> SysResult<usize> {
            let mut rest = self.0.borrow_mut();
            let n = rest.len().min(buf.len());
            buf[..n].copy_from_slice(&rest[..n]);
            *rest = &rest[n..];
            Ok(n)
        }
    }

    struct Broken;

    impl IoRead for Broken {
        fn read(&self, _: &mut [u8]) -> SysResult<usize> {
            Err(SysErr::Os(5))
        }
    }

    #[test]
    fn test_getc_ascii_and_sentinels() {
        let input = Script(RefCell::new(&b"a\x7f\x80\xff\0"[..]));
        assert_eq!(getc(&input), 'a' as Word);
        assert_eq!(getc(&input), 0x7f);
        assert_eq!(getc(&input), NON_ASCII);
        assert_eq!(getc(&input), NON_ASCII);
        assert_eq!(getc(&input), NON_ASCII);
        assert_eq!(getc(&input), EOT);
    }

    #[test]
    fn test_getc_end_of_input_is_sticky() {
        let input = Script(RefCell::new(&b""[..]));
        for _ in 0..4 {
            assert_eq!(getc(&input), EOT);
        }
    }

    #[test]
    fn test_getc_error_reads_as_eot() {
        assert_eq!(getc(&Broken), EOT);
    }

    #[test]
    fn test_pack_zero_is_one_byte() {
        assert_eq!(&pack(0)[..], &[0u8]);
    }

    #[test]
    fn test_pack_single_chars() {
        for c in 1..=127u8 {
            assert_eq!(&pack(c as Word)[..], &[c]);
        }
    }

    #[test]
    fn test_pack_multi_char_constant() {
        // 'foo' packs as 0x666f6f
        assert_eq!(&pack(0x666f6f)[..], b"foo");
        // interior zero bytes survive once output has started
        assert_eq!(&pack(0x4100_42)[..], b"A\0B");
    }

    #[test]
    fn test_pack_negative_uses_all_bytes() {
        let p = pack(-1);
        assert_eq!(p.len(), WORD_BYTES);
        assert!(p.iter().all(|&b| b == 0xff));
    }

    #[test]
    fn test_write_is_one_call() {
        let out = Capture::default();
        write_to(&out, 0x48_656c_6c6f); // 'Hello'
        assert_eq!(out.calls.borrow().len(), 1);
        assert_eq!(out.text(), "Hello");
    }

    #[test]
    fn test_writeb_low_byte_only() {
        let out = Capture::default();
        writeb_to(&out, 0x4142);
        writeb_to(&out, 0);
        assert_eq!(out.bytes(), b"B\0");
    }

    #[cfg(any(target_os = "linux", target_os = "macos"))]
    mod host {
        use super::*;
        use std::fs::File;
        use std::os::fd::AsRawFd;

        fn scratch(name: &str) -> std::path::PathBuf {
            std::env::temp_dir().join(format!("libb-io-{}-{}", std::process::id(), name))
        }

        #[test]
        fn test_nwrite_then_nread_roundtrip() {
            let path = scratch("roundtrip");
            let out = File::create(&path).unwrap();
            let msg = b"foobar\n";

            let n = unsafe { nwrite(out.as_raw_fd() as Word, msg.as_ptr() as Word, msg.len() as Word) };
            assert_eq!(n, msg.len() as Word);

            let inp = File::open(&path).unwrap();
            let mut buf = [0u8; 16];
            let n = unsafe { nread(inp.as_raw_fd() as Word, buf.as_mut_ptr() as Word, buf.len() as Word) };
            assert_eq!(n, msg.len() as Word);
            assert_eq!(&buf[..msg.len()], msg);

            let _ = std::fs::remove_file(&path);
        }

        #[test]
        fn test_nread_bad_descriptor_is_negative() {
            let mut buf = [0u8; 4];
            let n = unsafe { nread(-1, buf.as_mut_ptr() as Word, 4) };
            assert!(n < 0);
        }

        #[test]
        fn test_getc_on_empty_file() {
            let path = scratch("empty");
            File::create(&path).unwrap();
            let f = File::open(&path).unwrap();
            let fd = bsys::Fd(f.as_raw_fd());

            assert_eq!(getc(&fd), EOT);
            assert_eq!(getc(&fd), EOT);
            let _ = std::fs::remove_file(&path);
        }
    }
}
