// ─────────────────────────────────────────────────────────────────────
// Deviation Latch — Stream Report Types
// ─────────────────────────────────────────────────────────────────────
//! Host-side record of driving a kernel over a deviation sequence.
//!
//! These describe what the kernel answered, never the kernel's own state;
//! a trace cannot be turned back into a kernel.

use serde::Serialize;

use crate::decision::Decision;

/// One evaluate call inside a stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepEvent {
    /// Position in the input sequence.
    pub index: usize,
    /// Deviation supplied by the host.
    pub deviation: f32,
    /// Kernel answer for this deviation.
    pub decision: Decision,
}

/// Why a stream ended in `ATOMIC_HALT`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HaltCause {
    /// The latch fired during this stream.
    Threshold { deviation: f32, limit: f32 },
    /// The kernel was already halted before the stream started.
    AlreadyLatched,
}

/// Where and why a stream stopped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StreamHalt {
    /// Index of the step that answered `ATOMIC_HALT`.
    pub index: usize,
    pub cause: HaltCause,
}

/// `halt` is the single record of whether the stream stopped; the
/// accessors below all read from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvaluationTrace {
    pub events: Vec<StepEvent>,
    pub halt: Option<StreamHalt>,
}

impl EvaluationTrace {
    pub fn halted(&self) -> bool {
        self.halt.is_some()
    }

    pub fn halt_index(&self) -> Option<usize> {
        self.halt.map(|h| h.index)
    }

    pub fn halt_cause(&self) -> Option<HaltCause> {
        self.halt.map(|h| h.cause)
    }

    pub fn steps(&self) -> usize {
        self.events.len()
    }

    /// Number of steps answered with `CONTINUE`.
    pub fn continued(&self) -> usize {
        self.events
            .iter()
            .filter(|e| e.decision == Decision::Continue)
            .count()
    }

    /// Decision of the last evaluated step, if any.
    pub fn final_decision(&self) -> Option<Decision> {
        self.events.last().map(|e| e.decision)
    }

    /// `(last decision code, halt index)`, the compact form handed to
    /// foreign callers. The code is `None` for an empty stream.
    pub fn outcome_codes(&self) -> (Option<u8>, Option<usize>) {
        (self.final_decision().map(Decision::code), self.halt_index())
    }

    /// Largest deviation seen, ignoring NaN.
    pub fn max_deviation(&self) -> Option<f32> {
        self.events
            .iter()
            .map(|e| e.deviation)
            .filter(|d| !d.is_nan())
            .fold(None, |acc, d| match acc {
                Some(m) if m >= d => Some(m),
                _ => Some(d),
            })
    }
}
