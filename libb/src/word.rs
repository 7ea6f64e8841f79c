//! Words and strings.
//!
//! A string is just a word holding the address of a NUL-terminated run of
//! ASCII bytes. Nothing here checks bounds or ownership; the program owns the
//! memory and the runtime only borrows it for the length of a call.

use core::ffi::{c_char, CStr};

use bapi::Word;

/// The `i`-th character of `string`.
///
/// # Safety
/// `string + i` must be readable.
#[inline]
pub unsafe fn char_at(string: Word, i: Word) -> Word {
    *(string as *const u8).offset(i) as Word
}

/// Store the low byte of `chr` as the `i`-th character of `string`.
///
/// # Safety
/// `string + i` must be writable.
#[inline]
pub unsafe fn lchar(string: Word, i: Word, chr: Word) {
    *(string as *mut u8).offset(i) = chr as u8;
}

/// Borrow the string at `string` up to (not including) its NUL.
///
/// # Safety
/// `string` must point to a NUL-terminated byte sequence that outlives `'a`.
#[inline]
pub unsafe fn as_cstr<'a>(string: Word) -> &'a CStr {
    CStr::from_ptr(string as *const c_char)
}

/// Address of a borrowed string, as a B program would hold it.
#[inline]
pub fn addr(s: &CStr) -> Word {
    s.as_ptr() as Word
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_at_indexes_bytes() {
        let s = bsys::cstr!("fubar");
        let base = addr(s);
        let picked: Vec<u8> = [2, 4, 1, 0, 3]
            .iter()
            .map(|&i| (unsafe { char_at(base, i) }) as u8)
            .collect();
        assert_eq!(picked, b"brufa");
        // the terminator is readable too
        assert_eq!(unsafe { char_at(base, 5) }, 0);
    }

    #[test]
    fn test_lchar_builds_string() {
        let mut buf = [0xffu8; 8];
        let base = buf.as_mut_ptr() as Word;
        for (i, &c) in b"fubar\0".iter().enumerate() {
            unsafe { lchar(base, i as Word, c as Word) };
        }
        assert_eq!(&buf[..6], b"fubar\0");
        assert_eq!(unsafe { as_cstr(base) }.to_bytes(), b"fubar");
    }

    #[test]
    fn test_lchar_keeps_low_byte() {
        let mut buf = [0u8; 2];
        unsafe { lchar(buf.as_mut_ptr() as Word, 1, 0x1241) };
        assert_eq!(buf, [0, 0x41]);
    }
}
