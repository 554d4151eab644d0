// ─────────────────────────────────────────────────────────────────────
// Deviation Latch — Safety Kernel
// ─────────────────────────────────────────────────────────────────────
//! Two-state machine: `Running --[deviation > limit]--> Halted`.
//! `Halted` has no outgoing edge.

use latch_types::{Decision, KernelConfig};

/// Diagnostic view of the kernel's position in the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelState {
    Running,
    Halted,
}

/// One-way deviation latch.
///
/// Fields are private and there is no setter: the only write to
/// `halted` is the `false -> true` store in [`SafetyKernel::evaluate`].
/// Not `Clone` and not `Default`; every kernel starts from
/// [`SafetyKernel::new`].
#[derive(Debug)]
pub struct SafetyKernel {
    limit: f32,
    halted: bool,
}

impl SafetyKernel {
    /// Create a running kernel. Any `f32` is accepted as `limit`.
    pub const fn new(limit: f32) -> Self {
        Self {
            limit,
            halted: false,
        }
    }

    pub const fn from_config(config: &KernelConfig) -> Self {
        Self::new(config.limit)
    }

    /// Evaluate one deviation signal.
    ///
    /// 1. Already halted: `ATOMIC_HALT`, nothing changes.
    /// 2. `deviation > limit`: latch, then `ATOMIC_HALT`.
    /// 3. Otherwise `CONTINUE`, nothing changes.
    ///
    /// A NaN deviation (or a NaN limit) never satisfies rule 2.
    #[inline]
    pub fn evaluate(&mut self, deviation: f32) -> Decision {
        if self.halted {
            return Decision::AtomicHalt;
        }

        if deviation > self.limit {
            self.halted = true;
            log::error!(
                ">>> SAFETY LATCH FIRED: deviation {deviation} > limit {} <<<",
                self.limit
            );
            Decision::AtomicHalt
        } else {
            Decision::Continue
        }
    }

    /// Whether the latch has fired.
    ///
    /// Informational only. Hosts must gate on the return value of
    /// [`SafetyKernel::evaluate`], not on this query.
    #[inline]
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    #[inline]
    pub const fn limit(&self) -> f32 {
        self.limit
    }

    pub const fn state(&self) -> KernelState {
        if self.halted {
            KernelState::Halted
        } else {
            KernelState::Running
        }
    }
}
