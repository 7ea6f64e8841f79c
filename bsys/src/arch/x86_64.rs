// bsys/src/arch/x86_64.rs
//
// rax = number, rdi/rsi/rdx = args, `syscall` clobbers rcx and r11.

use core::arch::asm;

#[cfg(target_os = "linux")]
#[inline(always)]
pub unsafe fn syscall3(nr: usize, a1: usize, a2: usize, a3: usize) -> isize {
    let ret: isize;
    asm!(
        "syscall",
        inlateout("rax") nr as isize => ret,
        in("rdi") a1,
        in("rsi") a2,
        in("rdx") a3,
        lateout("rcx") _,
        lateout("r11") _,
        options(nostack),
    );
    ret
}

/// Darwin reports failure through the carry flag with a positive errno in rax;
/// fold that back into the `-errno` convention.
#[cfg(target_os = "macos")]
#[inline(always)]
pub unsafe fn syscall3(nr: usize, a1: usize, a2: usize, a3: usize) -> isize {
    let ret: isize;
    asm!(
        "syscall",
        "jnc 2f",
        "neg rax",
        "2:",
        inlateout("rax") (nr | bapi::nr::DARWIN_BSD_CLASS) as isize => ret,
        in("rdi") a1,
        in("rsi") a2,
        in("rdx") a3,
        lateout("rcx") _,
        lateout("r11") _,
        options(nostack),
    );
    ret
}

#[inline(always)]
pub unsafe fn exit(code: usize) -> ! {
    #[cfg(target_os = "linux")]
    let nr = bapi::nr::EXIT_GROUP;
    #[cfg(target_os = "macos")]
    let nr = bapi::nr::EXIT_GROUP | bapi::nr::DARWIN_BSD_CLASS;

    asm!(
        "syscall",
        in("rax") nr,
        in("rdi") code,
        options(noreturn, nostack),
    );
}
