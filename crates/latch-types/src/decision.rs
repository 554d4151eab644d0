// ─────────────────────────────────────────────────────────────────────
// Deviation Latch — Decision Codes
// ─────────────────────────────────────────────────────────────────────
//! The binary kernel decision and its frozen ABI codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// ABI code for [`Decision::Continue`]. Frozen.
pub const CONTINUE_CODE: u8 = 0;

/// ABI code for [`Decision::AtomicHalt`]. Frozen.
pub const ATOMIC_HALT_CODE: u8 = 1;

/// Output of a single kernel evaluation.
///
/// There is no third outcome. The discriminants are part of the binary
/// interface and must never change across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Decision {
    /// Operation may continue.
    Continue = CONTINUE_CODE,
    /// Immediate and irreversible stop.
    AtomicHalt = ATOMIC_HALT_CODE,
}

impl Decision {
    /// Stable numeric code (`0` or `1`).
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Decision::code`]. Any other value is not a decision.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            CONTINUE_CODE => Some(Self::Continue),
            ATOMIC_HALT_CODE => Some(Self::AtomicHalt),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_halt(self) -> bool {
        matches!(self, Self::AtomicHalt)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continue => f.write_str("CONTINUE"),
            Self::AtomicHalt => f.write_str("ATOMIC_HALT"),
        }
    }
}
