#![no_std]

//! Shared bits for the demo programs.

use bapi::Word;

/// Status a demo exits with after a panic.
pub const PANIC_STATUS: Word = 101;

/// Report a panic on stderr and exit.
pub fn on_panic(info: &core::panic::PanicInfo) -> ! {
    bsys::eprintln!("PANIC: {}", info);
    libb::exit_with(PANIC_STATUS)
}
