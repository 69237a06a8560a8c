//! Page Replacement Policies.
//!
//! Implements the algorithms that pick a victim frame when a page fault
//! finds every frame occupied. Empty frames are always filled first by the
//! MMU; a policy is only consulted once the table is full.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out (rotating cursor).
//! - `Lru`: Least Recently Used (minimum timestamp).
//! - `Clock`: Second-chance clock (reference bits + persistent hand).

/// Second-chance clock replacement policy.
pub mod clock;

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used replacement policy.
pub mod lru;

pub use clock::ClockPolicy;
pub use fifo::FifoPolicy;
pub use lru::LruPolicy;

use crate::config::Algorithm;
use crate::core::units::mmu::frames::FrameTable;

/// Trait for page replacement policies.
///
/// Policies own only their cursor state; everything else is read from (and,
/// for CLOCK, written to) the frame table passed in.
pub trait ReplacementPolicy {
    /// Selects the frame to evict from a full frame table.
    ///
    /// # Arguments
    ///
    /// * `frames` - The frame table; must contain at least one frame.
    ///
    /// # Returns
    ///
    /// The index of the frame to evict.
    fn select_victim(&mut self, frames: &mut FrameTable) -> usize;
}

/// The replacement policy chosen for a run.
///
/// A closed set of variants so the per-policy cursor state lives in one
/// place and dispatch needs no allocation.
#[derive(Clone, Debug)]
pub enum Policy {
    /// FIFO cursor.
    Fifo(FifoPolicy),
    /// Stateless LRU scan.
    Lru(LruPolicy),
    /// CLOCK hand.
    Clock(ClockPolicy),
}

impl Policy {
    /// Creates the policy for `algorithm` with its cursor at frame 0.
    pub const fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Fifo => Self::Fifo(FifoPolicy::new()),
            Algorithm::Lru => Self::Lru(LruPolicy::new()),
            Algorithm::Clock => Self::Clock(ClockPolicy::new()),
        }
    }

    /// The algorithm this policy implements.
    pub const fn algorithm(&self) -> Algorithm {
        match self {
            Self::Fifo(_) => Algorithm::Fifo,
            Self::Lru(_) => Algorithm::Lru,
            Self::Clock(_) => Algorithm::Clock,
        }
    }
}

impl ReplacementPolicy for Policy {
    fn select_victim(&mut self, frames: &mut FrameTable) -> usize {
        match self {
            Self::Fifo(p) => p.select_victim(frames),
            Self::Lru(p) => p.select_victim(frames),
            Self::Clock(p) => p.select_victim(frames),
        }
    }
}
