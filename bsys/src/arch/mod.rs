//! One trap sequence per instruction set, picked at build time.
//!
//! Every variant exposes the same two functions:
//! `syscall3(nr, a1, a2, a3) -> isize` returning the raw result (`-errno` on
//! failure) and a diverging `exit(code)`.

#[cfg(target_arch = "x86_64")]
mod x86_64;
#[cfg(target_arch = "x86_64")]
pub use self::x86_64::{exit, syscall3};

#[cfg(target_arch = "aarch64")]
mod aarch64;
#[cfg(target_arch = "aarch64")]
pub use self::aarch64::{exit, syscall3};

#[cfg(target_arch = "riscv64")]
mod riscv64;
#[cfg(target_arch = "riscv64")]
pub use self::riscv64::{exit, syscall3};

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "riscv64")))]
compile_error!("bsys: unsupported instruction set (x86_64, aarch64 and riscv64 are supported)");
