// ─────────────────────────────────────────────────────────────────────
// Deviation Latch — Baseline-Relative Gate
// ─────────────────────────────────────────────────────────────────────
//! Gate over raw metrics: the deviation is the absolute distance from a
//! fixed baseline, and the latch rule is the plain [`SafetyKernel`] one.

use latch_types::{Decision, KernelConfig};

use crate::kernel::SafetyKernel;

#[derive(Debug)]
pub struct BaselineKernel {
    baseline: f32,
    kernel: SafetyKernel,
}

impl BaselineKernel {
    pub const fn new(baseline: f32, threshold: f32) -> Self {
        Self {
            baseline,
            kernel: SafetyKernel::new(threshold),
        }
    }

    /// Missing baseline means the metric is already a deviation from zero.
    pub fn from_config(config: &KernelConfig) -> Self {
        Self::new(config.baseline.unwrap_or(0.0), config.limit)
    }

    /// `|metric - baseline|` as a two-branch subtraction. NaN in, NaN out.
    #[inline]
    pub fn deviation_of(&self, metric: f32) -> f32 {
        if metric >= self.baseline {
            metric - self.baseline
        } else {
            self.baseline - metric
        }
    }

    /// Evaluate one raw metric sample.
    pub fn evaluate_metric(&mut self, metric: f32) -> Decision {
        let deviation = self.deviation_of(metric);
        self.kernel.evaluate(deviation)
    }

    pub const fn is_halted(&self) -> bool {
        self.kernel.is_halted()
    }

    pub const fn baseline(&self) -> f32 {
        self.baseline
    }

    pub const fn threshold(&self) -> f32 {
        self.kernel.limit()
    }
}
