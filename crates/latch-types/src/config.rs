// ─────────────────────────────────────────────────────────────────────
// Deviation Latch — Kernel Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{LatchError, LatchResult};

/// Construction parameters for a kernel.
///
/// No value is ever rejected: negative, zero, infinite, and NaN limits
/// are all legal and follow plain IEEE-754 ordering at evaluation time.
/// JSON has no literal for NaN or infinity, so hosts that need those
/// construct the kernel directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KernelConfig {
    /// Deviation threshold. A deviation strictly greater than this halts.
    /// Default: 0.5.
    pub limit: f32,

    /// Reference point for metric-based gating. When present, the
    /// deviation is `|metric - baseline|`. Default: none (treated as 0.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<f32>,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            limit: 0.5,
            baseline: None,
        }
    }
}

impl KernelConfig {
    pub const fn new(limit: f32) -> Self {
        Self {
            limit,
            baseline: None,
        }
    }

    pub fn with_baseline(mut self, baseline: f32) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> LatchResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| LatchError::Config(format!("JSON parse error: {e}")))
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> LatchResult<String> {
        serde_json::to_string(self)
            .map_err(|e| LatchError::Config(format!("JSON encode error: {e}")))
    }
}
