//! Second-Chance CLOCK Replacement Policy.
//!
//! Frames are arranged in a ring swept by a hand. Starting at the hand, a
//! frame with its reference bit set loses the bit and is skipped; the first
//! frame found with the bit clear is the victim, and the hand stops one past
//! it. The hand is never reset between faults.
//!
//! The sweep always terminates: after at most one full revolution every bit
//! the hand passed over is clear, so the frame under the hand is taken.
//!
//! # Performance
//!
//! - **Time Complexity:** O(N) worst case per victim, N = number of frames
//! - **Space Complexity:** O(1)

use super::ReplacementPolicy;
use crate::core::units::mmu::frames::FrameTable;

/// CLOCK Policy state.
#[derive(Clone, Debug, Default)]
pub struct ClockPolicy {
    /// Frame under the hand.
    hand: usize,
}

impl ClockPolicy {
    /// Creates a new CLOCK policy with the hand on frame 0.
    pub const fn new() -> Self {
        Self { hand: 0 }
    }

    /// Current hand position.
    pub const fn hand(&self) -> usize {
        self.hand
    }
}

impl ReplacementPolicy for ClockPolicy {
    fn select_victim(&mut self, frames: &mut FrameTable) -> usize {
        let n = frames.len();
        loop {
            let frame = frames.frame_mut(self.hand);
            let candidate = self.hand;
            self.hand = (self.hand + 1) % n;
            if frame.referenced {
                frame.referenced = false;
            } else {
                tracing::trace!(victim = candidate, hand = self.hand, "clock sweep stopped");
                return candidate;
            }
        }
    }
}
