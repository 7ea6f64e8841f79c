// bsys/src/arch/riscv64.rs
//
// a7 = number, a0/a1/a2 = args, a0 = result. Same on every OS that runs here.

use core::arch::asm;

#[inline(always)]
pub unsafe fn syscall3(nr: usize, a1: usize, a2: usize, a3: usize) -> isize {
    let ret: isize;
    asm!(
        "ecall",
        in("a7") nr,
        inlateout("a0") a1 as isize => ret,
        in("a1") a2,
        in("a2") a3,
        options(nostack),
    );
    ret
}

#[inline(always)]
pub unsafe fn exit(code: usize) -> ! {
    asm!("ecall", in("a7") bapi::nr::EXIT_GROUP, in("a0") code, options(noreturn, nostack));
}
