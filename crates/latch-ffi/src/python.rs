// ─────────────────────────────────────────────────────────────────────
// Deviation Latch — PyO3 Bindings
// ─────────────────────────────────────────────────────────────────────
//! Python-callable wrapper around the Rust kernel.
//!
//! Install: `pip install -e crates/latch-ffi` with maturin and
//! `--features python`.
//!
//! ```python
//! from deviation_latch import SafetyKernel
//!
//! kernel = SafetyKernel(limit=1.0)
//! assert kernel.evaluate(0.5) == SafetyKernel.CONTINUE
//! assert kernel.evaluate(2.0) == SafetyKernel.ATOMIC_HALT
//! ```

use pyo3::prelude::*;

use latch_core::{evaluate_stream, SafetyKernel};
use latch_types::{ATOMIC_HALT_CODE, CONTINUE_CODE};

// ─── PySafetyKernel ─────────────────────────────────────────────────

/// Irreversible deviation latch exposed to Python.
///
/// Python only ever holds the object; its fields are not reachable.
#[pyclass(name = "SafetyKernel", module = "deviation_latch")]
struct PySafetyKernel {
    inner: SafetyKernel,
}

#[pymethods]
impl PySafetyKernel {
    #[classattr]
    const CONTINUE: u8 = CONTINUE_CODE;

    #[classattr]
    const ATOMIC_HALT: u8 = ATOMIC_HALT_CODE;

    #[new]
    #[pyo3(signature = (limit = 0.5))]
    fn new(limit: f32) -> Self {
        Self {
            inner: SafetyKernel::new(limit),
        }
    }

    /// Evaluate one deviation. Returns 0 (CONTINUE) or 1 (ATOMIC_HALT).
    fn evaluate(&mut self, deviation: f32) -> u8 {
        self.inner.evaluate(deviation).code()
    }

    /// Evaluate a sequence, stopping at the first halt.
    ///
    /// Returns:
    ///     (last decision code or None if empty, halt index or None)
    fn evaluate_stream(&mut self, deviations: Vec<f32>) -> (Option<u8>, Option<usize>) {
        evaluate_stream(&mut self.inner, &deviations).outcome_codes()
    }

    /// Informational only. Gate on `evaluate`, never on this.
    #[getter]
    fn is_halted(&self) -> bool {
        self.inner.is_halted()
    }

    #[getter]
    fn limit(&self) -> f32 {
        self.inner.limit()
    }

    fn __repr__(&self) -> String {
        format!(
            "SafetyKernel(limit={}, halted={})",
            self.inner.limit(),
            self.inner.is_halted()
        )
    }
}

#[pymodule]
fn deviation_latch(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySafetyKernel>()?;
    m.add("CONTINUE", CONTINUE_CODE)?;
    m.add("ATOMIC_HALT", ATOMIC_HALT_CODE)?;
    Ok(())
}
