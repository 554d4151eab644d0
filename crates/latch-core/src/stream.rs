// ─────────────────────────────────────────────────────────────────────
// Deviation Latch — Stream Driver
// ─────────────────────────────────────────────────────────────────────
//! Drive a kernel over a recorded deviation sequence and report what it
//! answered at each step.

use latch_types::{Decision, EvaluationTrace, HaltCause, StepEvent, StreamHalt};

use crate::kernel::SafetyKernel;

/// Evaluate `deviations` in order, stopping after the first `ATOMIC_HALT`.
///
/// Every input up to and including the halting one goes through
/// [`SafetyKernel::evaluate`]; nothing is decided here.
pub fn evaluate_stream(kernel: &mut SafetyKernel, deviations: &[f32]) -> EvaluationTrace {
    let latched_on_entry = kernel.is_halted();
    let mut trace = EvaluationTrace {
        events: Vec::with_capacity(deviations.len()),
        ..Default::default()
    };

    for (index, &deviation) in deviations.iter().enumerate() {
        let decision = kernel.evaluate(deviation);
        trace.events.push(StepEvent {
            index,
            deviation,
            decision,
        });

        if decision == Decision::AtomicHalt {
            let cause = if latched_on_entry {
                HaltCause::AlreadyLatched
            } else {
                HaltCause::Threshold {
                    deviation,
                    limit: kernel.limit(),
                }
            };
            trace.halt = Some(StreamHalt { index, cause });
            break;
        }
    }

    trace
}
