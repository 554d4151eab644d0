// ─────────────────────────────────────────────────────────────────────
// Deviation Latch — Kernel Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Decision codes, configuration, error hierarchy, and stream report
//! types shared by the deviation latch kernel and its bindings.

pub mod config;
pub mod decision;
pub mod error;
pub mod trace;

pub use config::KernelConfig;
pub use decision::{Decision, ATOMIC_HALT_CODE, CONTINUE_CODE};
pub use error::{LatchError, LatchResult};
pub use trace::{EvaluationTrace, HaltCause, StepEvent, StreamHalt};
