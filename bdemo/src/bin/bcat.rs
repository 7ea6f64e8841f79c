#![no_std]
#![no_main]

// Copy standard input to standard output.

use bsys::cstr;
use libb::{nread, nwrite, printf, Word};

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    bdemo::on_panic(info)
}

fn fail(what: &core::ffi::CStr, code: Word) -> Word {
    libb::stream::select(bapi::stream::STDERR);
    unsafe { printf(cstr!("bcat: %s failed (%d)\n"), &[libb::word::addr(what), code]) };
    1
}

#[no_mangle]
pub extern "C" fn main() -> Word {
    let mut buf = [0u8; 128];
    let base = buf.as_mut_ptr() as Word;

    loop {
        let n = unsafe { nread(bapi::fd::STDIN as Word, base, buf.len() as Word) };
        if n == 0 {
            break;
        }
        if n < 0 {
            return fail(cstr!("read"), n);
        }

        // nwrite reports short writes; finish the block here
        let mut off = 0;
        while off < n {
            let w = unsafe { nwrite(bapi::fd::STDOUT as Word, base + off, n - off) };
            if w <= 0 {
                return fail(cstr!("write"), w);
            }
            off += w;
        }
    }
    libb::flush();
    0
}
