//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! Frames are evicted in the order they were filled. Because empty frames
//! are always filled left to right before any eviction happens, fill order is
//! index order, and a single rotating cursor reproduces it exactly: each
//! eviction takes the cursor's frame and advances the cursor.
//!
//! Hits never move the cursor.
//!
//! # Performance
//!
//! - **Time Complexity:** O(1) per victim
//! - **Space Complexity:** O(1)

use super::ReplacementPolicy;
use crate::core::units::mmu::frames::FrameTable;

/// FIFO Policy state.
#[derive(Clone, Debug, Default)]
pub struct FifoPolicy {
    /// Next frame to be evicted.
    next: usize,
}

impl FifoPolicy {
    /// Creates a new FIFO policy with the cursor on frame 0.
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// The frame that the next eviction will take.
    pub const fn cursor(&self) -> usize {
        self.next
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn select_victim(&mut self, frames: &mut FrameTable) -> usize {
        let victim = self.next;
        self.next = (self.next + 1) % frames.len();
        victim
    }
}
