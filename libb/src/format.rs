//! Number rendering and the `%` directive formatter.
//!
//! Digits are assembled backward into a fixed stack buffer and go out in a
//! single write. Nothing here allocates.

use core::ffi::CStr;

use bapi::{UWord, Word, WORD_BYTES};
use bsys::IoWrite;

use crate::io::write_to;
use crate::stream::Selected;
use crate::word::as_cstr;

/// Room for a sign and every decimal digit of a word.
pub const DECIMAL_WIDTH: usize = 2 + WORD_BYTES * 3;

/// Room for every octal digit of a word.
pub const OCTAL_WIDTH: usize = (WORD_BYTES * 8 + 2) / 3;

/// Signed decimal text of `n`, written into the tail of `buf`.
pub fn render_decimal(n: Word, buf: &mut [u8; DECIMAL_WIDTH]) -> &[u8] {
    let negative = n < 0;
    let mut value = n as UWord;
    if negative {
        // two's complement on the unsigned view, safe for Word::MIN
        value = 1 + !value;
    }

    let mut p = buf.len();
    loop {
        p -= 1;
        buf[p] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    if negative {
        p -= 1;
        buf[p] = b'-';
    }
    &buf[p..]
}

/// Unsigned octal text of `n`, written into the tail of `buf`.
pub fn render_octal(n: Word, buf: &mut [u8; OCTAL_WIDTH]) -> &[u8] {
    let mut value = n as UWord;
    let mut p = buf.len();
    loop {
        p -= 1;
        buf[p] = b'0' + (value & 7) as u8;
        value >>= 3;
        if value == 0 {
            break;
        }
    }
    &buf[p..]
}

pub fn printd_to<W: IoWrite>(w: &W, n: Word) {
    let mut buf = [0u8; DECIMAL_WIDTH];
    let _ = w.write(render_decimal(n, &mut buf));
}

pub fn printo_to<W: IoWrite>(w: &W, n: Word) {
    let mut buf = [0u8; OCTAL_WIDTH];
    let _ = w.write(render_octal(n, &mut buf));
}

/// Signed decimal on the selected stream.
pub fn printd(n: Word) {
    printd_to(&Selected, n)
}

/// Unsigned octal on the selected stream.
pub fn printo(n: Word) {
    printo_to(&Selected, n)
}

/// Interpret `fmt` against `args`, writing to `w`.
///
/// `%d` decimal, `%o` octal, `%c` packed characters, `%s` string, `%%` a
/// literal percent. Any other directive prints as written. Arguments are taken
/// in order; once they run out every further directive reads 0.
///
/// # Safety
/// Every argument consumed by a `%s` must be the address of a NUL-terminated
/// string.
pub unsafe fn printf_to<W: IoWrite>(w: &W, fmt: &CStr, args: &[Word]) {
    let mut args = args.iter().copied();
    let mut next = move || args.next().unwrap_or(0);

    let mut bytes = fmt.to_bytes().iter().copied();
    while let Some(c) = bytes.next() {
        if c != b'%' {
            write_to(w, c as Word);
            continue;
        }
        match bytes.next() {
            Some(b'd') => printd_to(w, next()),
            Some(b'o') => {
                let x = next();
                let magnitude = if x < 0 {
                    write_to(w, '-' as Word);
                    x.wrapping_neg()
                } else {
                    x
                };
                printo_to(w, magnitude);
            }
            Some(b'c') => write_to(w, next()),
            Some(b's') => {
                let s = as_cstr(next());
                let _ = w.write(s.to_bytes());
            }
            Some(b'%') => write_to(w, '%' as Word),
            Some(other) => {
                bdebug!("printf: unknown directive %{}", other as char);
                write_to(w, '%' as Word);
                write_to(w, other as Word);
            }
            None => {
                write_to(w, '%' as Word);
                break;
            }
        }
    }
}

/// [`printf_to`] on the selected stream.
///
/// # Safety
/// See [`printf_to`].
pub unsafe fn printf(fmt: &CStr, args: &[Word]) {
    printf_to(&Selected, fmt, args)
}
