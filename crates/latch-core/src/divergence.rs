// ─────────────────────────────────────────────────────────────────────
// Deviation Latch — Distribution Divergence Source
// ─────────────────────────────────────────────────────────────────────
//! KL divergence of a current distribution against a fixed baseline,
//! fed to a [`SafetyKernel`] as the deviation signal.

use latch_types::{Decision, LatchError, LatchResult};

use crate::kernel::SafetyKernel;

/// Smoothing added to every entry so no term takes `ln(0)`.
const EPSILON: f64 = 1e-10;

/// `D_KL(P || Q)` in nats.
///
/// Both inputs are truncated to the shorter length, smoothed by
/// [`EPSILON`], and renormalized to sum 1, so raw non-negative weights
/// (activations, counts) are accepted as well as probabilities.
///
/// A slice whose largest entry exceeds 1.0 is first divided by that
/// entry, so any finite weights sum without overflow. Slices already in
/// `[0, 1]` are used as given.
pub fn kl_divergence(p: &[f64], q: &[f64]) -> LatchResult<f64> {
    let n = p.len().min(q.len());
    if n == 0 {
        return Err(LatchError::EmptyDistribution);
    }
    let p = &p[..n];
    let q = &q[..n];
    check_entries("P", p)?;
    check_entries("Q", q)?;

    let p_scale = scale_of(p);
    let q_scale = scale_of(q);
    let p_total: f64 = p.iter().map(|x| x / p_scale + EPSILON).sum();
    let q_total: f64 = q.iter().map(|x| x / q_scale + EPSILON).sum();

    let kl = p
        .iter()
        .zip(q)
        .map(|(&pi, &qi)| {
            let pi = (pi / p_scale + EPSILON) / p_total;
            let qi = (qi / q_scale + EPSILON) / q_total;
            pi * (pi / qi).ln()
        })
        .sum::<f64>();

    if !kl.is_finite() {
        return Err(LatchError::InvalidDistribution(format!(
            "divergence is not finite ({kl})"
        )));
    }
    Ok(kl)
}

/// Divisor bringing every entry into `[0, 1]`; never below 1.0.
fn scale_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(1.0, f64::max)
}

fn check_entries(name: &str, values: &[f64]) -> LatchResult<()> {
    match values
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite() || **v < 0.0)
    {
        Some((i, v)) => Err(LatchError::InvalidDistribution(format!(
            "{name}[{i}] = {v} (entries must be finite and >= 0)"
        ))),
        None => Ok(()),
    }
}

/// Feeds the divergence of each observed distribution from a stored
/// baseline into its own kernel.
#[derive(Debug)]
pub struct DivergenceMonitor {
    baseline: Vec<f64>,
    kernel: SafetyKernel,
}

impl DivergenceMonitor {
    pub fn new(baseline: Vec<f64>, limit: f32) -> Self {
        Self {
            baseline,
            kernel: SafetyKernel::new(limit),
        }
    }

    /// Measure `current` against the baseline and evaluate the result.
    ///
    /// A halted monitor answers `ATOMIC_HALT` without measuring. A
    /// measurement error is returned as-is and the kernel is not touched.
    pub fn observe(&mut self, current: &[f64]) -> LatchResult<Decision> {
        if self.kernel.is_halted() {
            return Ok(Decision::AtomicHalt);
        }
        let kl = kl_divergence(current, &self.baseline).map_err(|e| {
            log::warn!("divergence observation rejected: {e}");
            e
        })?;
        Ok(self.kernel.evaluate(kl as f32))
    }

    pub const fn is_halted(&self) -> bool {
        self.kernel.is_halted()
    }

    pub const fn limit(&self) -> f32 {
        self.kernel.limit()
    }

    pub fn baseline(&self) -> &[f64] {
        &self.baseline
    }
}
