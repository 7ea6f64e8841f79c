//! C ABI surface for compiled B programs.
//!
//! Every argument and result is a word. `b_printf` takes its arguments as a
//! vector of words plus a count instead of C varargs.

use core::slice;

use bapi::Word;

use crate::{entry, format, io, word};

#[no_mangle]
pub extern "C" fn b_exit() -> ! {
    entry::exit()
}

#[no_mangle]
pub unsafe extern "C" fn b_char(string: Word, i: Word) -> Word {
    word::char_at(string, i)
}

#[no_mangle]
pub unsafe extern "C" fn b_lchar(string: Word, i: Word, chr: Word) {
    word::lchar(string, i, chr)
}

#[no_mangle]
pub extern "C" fn b_read() -> Word {
    io::read()
}

#[no_mangle]
pub unsafe extern "C" fn b_nread(file: Word, buffer: Word, count: Word) -> Word {
    io::nread(file, buffer, count)
}

#[no_mangle]
pub unsafe extern "C" fn b_nwrite(file: Word, buffer: Word, count: Word) -> Word {
    io::nwrite(file, buffer, count)
}

#[no_mangle]
pub extern "C" fn b_writeb(c: Word) {
    io::writeb(c)
}

#[no_mangle]
pub extern "C" fn b_write(ch: Word) {
    io::write(ch)
}

#[no_mangle]
pub extern "C" fn b_printd(n: Word) {
    format::printd(n)
}

#[no_mangle]
pub extern "C" fn b_printo(n: Word) {
    format::printo(n)
}

/// `argv` may be null when `argc` is 0.
#[no_mangle]
pub unsafe extern "C" fn b_printf(fmt: Word, argv: *const Word, argc: Word) {
    let args = if argv.is_null() || argc <= 0 {
        &[][..]
    } else {
        slice::from_raw_parts(argv, argc as usize)
    };
    format::printf(word::as_cstr(fmt), args)
}

#[no_mangle]
pub extern "C" fn b_flush() {
    io::flush()
}
