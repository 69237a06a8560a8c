//! Least Recently Used (LRU) Replacement Policy.
//!
//! Evicts the frame with the oldest `last_used` timestamp. The frame table
//! stamps every hit and install with the shared logical clock, so the policy
//! itself keeps no state.
//!
//! Ties go to the lowest frame index: the scan starts at frame 0 and only a
//! strictly smaller timestamp replaces the current candidate.
//!
//! # Performance
//!
//! - **Time Complexity:** O(N) per victim, N = number of frames
//! - **Space Complexity:** O(1)

use super::ReplacementPolicy;
use crate::core::units::mmu::frames::FrameTable;

/// LRU Policy state.
#[derive(Clone, Debug, Default)]
pub struct LruPolicy;

impl LruPolicy {
    /// Creates a new LRU policy instance.
    pub const fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for LruPolicy {
    fn select_victim(&mut self, frames: &mut FrameTable) -> usize {
        let mut victim = 0;
        let mut oldest = u64::MAX;
        for (i, frame) in frames.frames().iter().enumerate() {
            if frame.last_used < oldest {
                oldest = frame.last_used;
                victim = i;
            }
        }
        victim
    }
}
