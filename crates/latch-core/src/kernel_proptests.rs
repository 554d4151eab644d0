//! Property-based tests for the latch invariants.
//!
//! Deviations and limits are drawn from the whole `f32` domain, including
//! NaN, infinities, subnormals, and signed zeros.

use proptest::prelude::*;

use crate::kernel::{KernelState, SafetyKernel};
use crate::Decision;

/// Any `f32`, with non-finite values well represented.
fn scalar() -> impl Strategy<Value = f32> {
    prop_oneof![
        4 => any::<f32>(),
        1 => Just(f32::NAN),
        1 => Just(f32::INFINITY),
        1 => Just(f32::NEG_INFINITY),
        1 => Just(0.0_f32),
        1 => Just(-0.0_f32),
    ]
}

fn deviations() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(scalar(), 0..64)
}

proptest! {
    /// Property: once halted, every later call halts and the query agrees.
    #[test]
    fn prop_halt_is_monotonic(limit in scalar(), inputs in deviations()) {
        let mut k = SafetyKernel::new(limit);
        let mut seen_halt = false;
        for d in inputs {
            let decision = k.evaluate(d);
            if seen_halt {
                prop_assert_eq!(decision, Decision::AtomicHalt);
            }
            seen_halt |= decision == Decision::AtomicHalt;
            prop_assert_eq!(k.is_halted(), seen_halt);
        }
    }

    /// Property: the first halt happens exactly at the first `d > limit`.
    #[test]
    fn prop_decision_matches_rule(limit in scalar(), inputs in deviations()) {
        let mut k = SafetyKernel::new(limit);
        let mut halted = false;
        for d in inputs {
            let expected = if halted || d > limit {
                halted = true;
                Decision::AtomicHalt
            } else {
                Decision::Continue
            };
            prop_assert_eq!(k.evaluate(d), expected);
        }
    }

    /// Property: a deviation equal to a non-NaN limit never halts.
    #[test]
    fn prop_equal_to_limit_continues(limit in scalar()) {
        prop_assume!(!limit.is_nan());
        let mut k = SafetyKernel::new(limit);
        prop_assert_eq!(k.evaluate(limit), Decision::Continue);
        prop_assert!(!k.is_halted());
    }

    /// Property: anything strictly above a finite limit halts.
    #[test]
    fn prop_above_limit_halts(limit in -1.0e30_f32..1.0e30, eps in 1.0e-3_f32..1.0e3) {
        let above = limit + eps.max(limit.abs() * 1.0e-6);
        prop_assume!(above > limit);
        let mut k = SafetyKernel::new(limit);
        prop_assert_eq!(k.evaluate(above), Decision::AtomicHalt);
        prop_assert!(k.is_halted());
    }

    /// Property: after halt, no input changes the state.
    #[test]
    fn prop_idempotent_after_halt(limit in -1.0e6_f32..1.0e6, inputs in deviations()) {
        let mut k = SafetyKernel::new(limit);
        k.evaluate(f32::INFINITY);
        prop_assert_eq!(k.state(), KernelState::Halted);
        for d in inputs {
            prop_assert_eq!(k.evaluate(d), Decision::AtomicHalt);
            prop_assert_eq!(k.state(), KernelState::Halted);
            prop_assert_eq!(k.limit().to_bits(), limit.to_bits());
        }
    }

    /// Property: construction always yields a running kernel.
    #[test]
    fn prop_construction_is_running(limit in scalar()) {
        let k = SafetyKernel::new(limit);
        prop_assert!(!k.is_halted());
        prop_assert_eq!(k.state(), KernelState::Running);
        prop_assert_eq!(k.limit().to_bits(), limit.to_bits());
    }

    /// Property: a `CONTINUE` leaves both fields exactly as they were.
    #[test]
    fn prop_continue_has_no_side_effect(limit in scalar(), inputs in deviations()) {
        let mut k = SafetyKernel::new(limit);
        for d in inputs {
            if k.evaluate(d) == Decision::Continue {
                prop_assert!(!k.is_halted());
                prop_assert_eq!(k.limit().to_bits(), limit.to_bits());
            }
        }
    }
}
