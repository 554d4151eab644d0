// ─────────────────────────────────────────────────────────────────────
// Deviation Latch — Shared Kernel
// ─────────────────────────────────────────────────────────────────────
//! Exclusive-access wrapper for hosts that evaluate from several threads.
//!
//! The kernel itself is single-writer and lock-free. This wrapper only
//! serializes calls; each call holds the lock for one kernel operation.

use parking_lot::Mutex;

use latch_types::{Decision, KernelConfig};

use crate::kernel::SafetyKernel;

/// Thread-safe: every access is guarded by a `parking_lot::Mutex`.
#[derive(Debug)]
pub struct SharedKernel {
    inner: Mutex<SafetyKernel>,
}

impl SharedKernel {
    pub fn new(limit: f32) -> Self {
        Self::from_kernel(SafetyKernel::new(limit))
    }

    pub fn from_config(config: &KernelConfig) -> Self {
        Self::new(config.limit)
    }

    /// Take ownership of an existing kernel, halted or not.
    pub fn from_kernel(kernel: SafetyKernel) -> Self {
        Self {
            inner: Mutex::new(kernel),
        }
    }

    pub fn evaluate(&self, deviation: f32) -> Decision {
        self.inner.lock().evaluate(deviation)
    }

    /// Informational only; see [`SafetyKernel::is_halted`].
    pub fn is_halted(&self) -> bool {
        self.inner.lock().is_halted()
    }

    pub fn limit(&self) -> f32 {
        self.inner.lock().limit()
    }
}
