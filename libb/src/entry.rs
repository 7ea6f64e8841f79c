//! Process entry and exit.
//!
//! With the `start` feature on Linux, `_start` aligns the stack, clears the
//! frame pointer and calls [`libb_start`], which runs the program's
//! `main() -> Word` and hands the result to the exit syscall unchanged. There
//! is no cleanup phase.

use bapi::Word;

/// Terminate the process with status 0 (B's `exit()`).
pub fn exit() -> ! {
    exit_with(0)
}

/// Terminate the process with `code` as its status.
pub fn exit_with(code: Word) -> ! {
    btrace!("exit: status {}", code);
    bsys::exit(code)
}

// gp must hold __global_pointer$ before any gp-relative access; loading it
// must not itself be relaxed into one.
#[allow(unused_macros)]
macro_rules! riscv64_start {
    () => {
        r#"
    .section .text._start
    .globl _start
_start:
    li   s0, 0
    li   ra, 0
    .option push
    .option norelax
    lla  gp, __global_pointer$
    .option pop
    andi sp, sp, -16
    call libb_start
    unimp
"#
    };
}

#[cfg(all(feature = "start", target_os = "linux"))]
mod start {
    use core::arch::global_asm;

    use bapi::Word;

    extern "C" {
        fn main() -> Word;
    }

    #[no_mangle]
    pub extern "C" fn libb_start() -> ! {
        let code = unsafe { main() };
        super::exit_with(code)
    }

    #[cfg(target_arch = "x86_64")]
    global_asm!(
        r#"
    .section .text._start
    .globl _start
_start:
    xor  ebp, ebp
    and  rsp, -16
    call libb_start
    ud2
"#
    );

    #[cfg(target_arch = "aarch64")]
    global_asm!(
        r#"
    .section .text._start
    .globl _start
_start:
    mov  x29, xzr
    mov  x30, xzr
    mov  x9, sp
    and  sp, x9, #-16
    bl   libb_start
    brk  #0
"#
    );

    #[cfg(target_arch = "riscv64")]
    global_asm!(riscv64_start!());
}
