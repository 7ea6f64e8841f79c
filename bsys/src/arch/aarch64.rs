// bsys/src/arch/aarch64.rs
//
// x0/x1/x2 = args, x0 = result. Linux takes the number in x8 and traps with
// `svc #0`; Darwin takes it in x16 and traps with `svc #0x80`.

use core::arch::asm;

#[cfg(target_os = "linux")]
#[inline(always)]
pub unsafe fn syscall3(nr: usize, a1: usize, a2: usize, a3: usize) -> isize {
    let ret: isize;
    asm!(
        "svc #0",
        inlateout("x0") a1 as isize => ret,
        in("x1") a2,
        in("x2") a3,
        in("x8") nr,
        options(nostack),
    );
    ret
}

/// Carry set on return means x0 holds a positive errno.
#[cfg(target_os = "macos")]
#[inline(always)]
pub unsafe fn syscall3(nr: usize, a1: usize, a2: usize, a3: usize) -> isize {
    let ret: isize;
    asm!(
        "svc #0x80",
        "b.cc 2f",
        "neg x0, x0",
        "2:",
        inlateout("x0") a1 as isize => ret,
        inlateout("x1") a2 => _,
        inlateout("x2") a3 => _,
        in("x16") nr,
        options(nostack),
    );
    ret
}

#[inline(always)]
pub unsafe fn exit(code: usize) -> ! {
    #[cfg(target_os = "linux")]
    asm!("svc #0", in("x0") code, in("x8") bapi::nr::EXIT_GROUP, options(noreturn, nostack));

    #[cfg(target_os = "macos")]
    asm!("svc #0x80", in("x0") code, in("x16") bapi::nr::EXIT_GROUP, options(noreturn, nostack));
}
