//! The output stream selector (`fout` in B).
//!
//! One process-wide word: 0 sends character output to stdout, 1 to stderr.
//! It is read at the moment of every write. B programs assign it directly;
//! the atomic has the layout of a plain word so the exported symbol behaves
//! like one. Single-threaded use only.

use core::sync::atomic::{AtomicIsize, Ordering};

use bapi::{SysResult, Word};
use bsys::{Fd, IoWrite};

#[cfg_attr(feature = "ffi", export_name = "fout")]
pub static FOUT: AtomicIsize = AtomicIsize::new(bapi::stream::STDOUT);

/// Current selector value.
#[inline]
pub fn selected() -> Word {
    FOUT.load(Ordering::Relaxed)
}

/// Point character output at `selector` (0 = stdout, 1 = stderr).
#[inline]
pub fn select(selector: Word) {
    FOUT.store(selector, Ordering::Relaxed);
}

/// Descriptor the selector currently resolves to.
#[inline]
pub fn current() -> Fd {
    Fd(bapi::stream::descriptor(selected()) as i32)
}

/// Writer that resolves the selector on every call.
#[derive(Copy, Clone, Debug, Default)]
pub struct Selected;

impl IoWrite for Selected {
    fn write(&self, buf: &[u8]) -> SysResult<usize> {
        current().write(buf)
    }
}
