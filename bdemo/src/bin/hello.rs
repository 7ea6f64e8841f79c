#![no_std]
#![no_main]

use bsys::cstr;
use libb::word::addr;
use libb::{printd, printf, printo, write, Word};

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    bdemo::on_panic(info)
}

#[no_mangle]
pub extern "C" fn main() -> Word {
    write(0x48_656c_6c6f_2c); // 'Hello,'
    write(0x20_576f_726c_64); // ' World'
    write(0x21_0a); // '!*n'

    unsafe {
        printf(cstr!("%% %% %%%%\n"), &[]);
        printf(cstr!("format %%d: %d %d\n"), &[123, -123]);
        printf(cstr!("format %%o: %o %o\n"), &[234, -234]);
        printf(cstr!("format %%c: %c %c\n"), &[0x666f6f, 0x626172]);
        printf(
            cstr!("format %%s: \"%s\" \"%s\"\n"),
            &[addr(cstr!("Hello")), addr(cstr!("World"))],
        );
        printf(cstr!("unknown format: %q\n"), &[]);
    }

    printd(Word::MIN);
    write('\n' as Word);
    printo(-1);
    write('\n' as Word);

    // the rest goes to stderr
    libb::stream::select(bapi::stream::STDERR);
    unsafe { printf(cstr!("done\n"), &[]) };
    0
}
