// ─────────────────────────────────────────────────────────────────────
// Deviation Latch — C ABI
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Stable C ABI around [`latch_core::SafetyKernel`].
//!
//! Contract (mirrored in `include/deviation_latch.h`):
//!
//! | Symbol | Meaning |
//! |---|---|
//! | `latch_kernel_new(limit)` | new running kernel, opaque handle |
//! | `latch_kernel_evaluate(k, deviation)` | `0 = CONTINUE`, `1 = ATOMIC_HALT` |
//! | `latch_kernel_is_halted(k)` | informational query |
//! | `latch_kernel_free(k)` | return the allocation; optional |
//!
//! # FFI Safety
//!
//! - The handle is a `Box` turned into a raw pointer; the host never sees
//!   its layout.
//! - No exported function can panic, so nothing unwinds across the
//!   boundary.
//! - Null handles are outside the contract. They fail closed: evaluate
//!   answers `ATOMIC_HALT`, the query answers halted, free is a no-op.
//! - The kernel is not synchronized. Concurrent calls on one handle need
//!   a host-side lock.
//!
//! With the `python` feature the same library is also a PyO3 extension
//! module named `deviation_latch`.

use latch_core::SafetyKernel;

#[cfg(feature = "python")]
mod python;

pub use latch_types::{ATOMIC_HALT_CODE, CONTINUE_CODE};

/// Opaque kernel handle handed to C callers.
pub struct LatchKernel {
    inner: SafetyKernel,
}

/// Create a new kernel in the running state. Never returns null.
#[no_mangle]
pub extern "C" fn latch_kernel_new(limit: f32) -> *mut LatchKernel {
    Box::into_raw(Box::new(LatchKernel {
        inner: SafetyKernel::new(limit),
    }))
}

/// Evaluate one deviation. Returns a stable decision code.
///
/// # Safety
///
/// `kernel` must be null or a live pointer from [`latch_kernel_new`],
/// with no other call on the same handle in progress.
#[no_mangle]
pub unsafe extern "C" fn latch_kernel_evaluate(kernel: *mut LatchKernel, deviation: f32) -> u8 {
    // SAFETY: caller guarantees the pointer is null or live and unaliased.
    match unsafe { kernel.as_mut() } {
        Some(k) => k.inner.evaluate(deviation).code(),
        None => {
            log::error!("latch_kernel_evaluate: null handle, failing closed");
            ATOMIC_HALT_CODE
        }
    }
}

/// Whether the latch has fired. Informational only: gate on
/// [`latch_kernel_evaluate`], never on this.
///
/// # Safety
///
/// `kernel` must be null or a live pointer from [`latch_kernel_new`].
#[no_mangle]
pub unsafe extern "C" fn latch_kernel_is_halted(kernel: *const LatchKernel) -> bool {
    // SAFETY: caller guarantees the pointer is null or live.
    match unsafe { kernel.as_ref() } {
        Some(k) => k.inner.is_halted(),
        None => {
            log::error!("latch_kernel_is_halted: null handle, reporting halted");
            true
        }
    }
}

/// Release a kernel. Null is accepted and ignored.
///
/// # Safety
///
/// `kernel` must be null or a pointer from [`latch_kernel_new`] that has
/// not been freed yet. The handle is dangling afterwards.
#[no_mangle]
pub unsafe extern "C" fn latch_kernel_free(kernel: *mut LatchKernel) {
    if kernel.is_null() {
        return;
    }
    // SAFETY: non-null, produced by Box::into_raw, freed at most once.
    drop(unsafe { Box::from_raw(kernel) });
}
