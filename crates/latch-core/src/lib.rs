// ─────────────────────────────────────────────────────────────────────
// Deviation Latch — Core Kernel
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! The irreversible deviation latch and its host-side helpers.
//!
//! # Safety Invariants
//!
//! 1. **Halt is monotonic**: once [`SafetyKernel::evaluate`] returns
//!    `ATOMIC_HALT`, every later call returns `ATOMIC_HALT`. No method
//!    clears the halted flag; there is no reset and no override.
//!
//! 2. **The limit is frozen**: it is set by the constructor and only
//!    ever read afterwards.
//!
//! 3. **The only way in is `deviation > limit`**: a strict IEEE-754
//!    comparison inside `evaluate`. Equal-to-limit continues. NaN on
//!    either side compares false and therefore never halts.
//!
//! 4. **Total and bounded**: every kernel operation is a few comparisons
//!    and at most one store. No allocation, no locking, no error path.
//!
//! Everything outside [`kernel`] is a convenience built on top of those
//! invariants and cannot weaken them: each helper owns a `SafetyKernel`
//! and reaches its state only through `evaluate`.

pub mod baseline;
pub mod divergence;
pub mod kernel;
pub mod shared;
pub mod stream;

#[cfg(test)]
mod kernel_proptests;

pub use baseline::BaselineKernel;
pub use divergence::{kl_divergence, DivergenceMonitor};
pub use kernel::{KernelState, SafetyKernel};
pub use shared::SharedKernel;
pub use stream::evaluate_stream;

pub use latch_types::{Decision, KernelConfig, LatchError, LatchResult};
