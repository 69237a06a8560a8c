//! Memory access types.
//!
//! This module defines the classification of trace operations used throughout the simulator:
//! 1. **Dirty tracking:** Writes mark frames dirty under the write-back policy.
//! 2. **Statistics:** Reads and writes are counted separately.
//! 3. **Reporting:** Each access event carries the operation that produced it.

use std::fmt;

use serde::Serialize;

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AccessType {
    /// Data read (`R` in the trace).
    Read,
    /// Data write (`W` in the trace).
    Write,
}

impl AccessType {
    /// Classifies a trace operation character.
    ///
    /// Returns `None` for anything other than `R` or `W`; such operations are
    /// ignored by the engine.
    pub const fn from_op(op: char) -> Option<Self> {
        match op {
            'R' => Some(Self::Read),
            'W' => Some(Self::Write),
            _ => None,
        }
    }

    /// The trace character for this access.
    pub const fn as_char(self) -> char {
        match self {
            Self::Read => 'R',
            Self::Write => 'W',
        }
    }

    /// True for stores.
    #[inline(always)]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Write)
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
