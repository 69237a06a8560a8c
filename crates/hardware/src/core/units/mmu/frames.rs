//! Physical Frame Table.
//!
//! A fixed array of physical frames, each holding at most one virtual page.
//! Alongside the occupant every frame carries the metadata the replacement
//! policies read: a recency timestamp (LRU), a reference bit (CLOCK) and a
//! dirty bit (write-back accounting).
//!
//! All metadata is maintained on every access regardless of which policy is
//! active; the unused fields are simply never consulted.

use crate::common::{AccessType, Vpn};
use crate::config::WritePolicy;

/// A single physical frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    /// Page currently resident in this frame.
    pub occupant: Option<Vpn>,
    /// Tick of the most recent access.
    pub last_used: u64,
    /// Second-chance bit for CLOCK.
    pub referenced: bool,
    /// Modified since load (write-back only).
    pub dirty: bool,
}

impl Frame {
    /// True when no page is resident.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// The set of physical frames backing the address space.
#[derive(Clone, Debug)]
pub struct FrameTable {
    frames: Vec<Frame>,
}

impl FrameTable {
    /// Creates a table of `num_frames` empty frames.
    ///
    /// The frame count is validated by [`Config::validate`](crate::config::Config::validate);
    /// the replacement policies assume it is non-zero.
    pub fn new(num_frames: usize) -> Self {
        Self {
            frames: vec![Frame::default(); num_frames],
        }
    }

    /// Number of frames.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when the table has no frames at all.
    pub const fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Finds the frame holding `vpn`.
    ///
    /// Linear scan; the lowest matching index wins.
    pub fn lookup(&self, vpn: Vpn) -> Option<usize> {
        self.frames.iter().position(|f| f.occupant == Some(vpn))
    }

    /// Returns the lowest-indexed empty frame, if any.
    pub fn first_empty(&self) -> Option<usize> {
        self.frames.iter().position(Frame::is_empty)
    }

    /// Records an access to an already resident frame.
    ///
    /// Refreshes the recency stamp, sets the reference bit and, for a store
    /// under write-back, marks the frame dirty.
    ///
    /// # Arguments
    ///
    /// * `idx` - Frame index.
    /// * `tick` - Current logical time.
    /// * `access` - Read or write.
    /// * `policy` - Active write policy.
    pub fn touch(&mut self, idx: usize, tick: u64, access: AccessType, policy: WritePolicy) {
        let frame = &mut self.frames[idx];
        frame.last_used = tick;
        frame.referenced = true;
        if access.is_write() && policy.is_write_back() {
            frame.dirty = true;
        }
    }

    /// Places `vpn` into frame `idx`.
    ///
    /// The caller has already evicted the previous occupant (TLB invalidation
    /// and write-back). Reference and dirty bits start clear and then receive
    /// the same update as [`touch`](Self::touch).
    pub fn install(
        &mut self,
        idx: usize,
        vpn: Vpn,
        tick: u64,
        access: AccessType,
        policy: WritePolicy,
    ) {
        self.frames[idx] = Frame {
            occupant: Some(vpn),
            last_used: tick,
            referenced: false,
            dirty: false,
        };
        self.touch(idx, tick, access, policy);
    }

    /// Clears the dirty bit of frame `idx`, returning its previous value.
    pub(crate) fn take_dirty(&mut self, idx: usize) -> bool {
        std::mem::replace(&mut self.frames[idx].dirty, false)
    }

    /// Read access to a single frame.
    pub fn frame(&self, idx: usize) -> Option<&Frame> {
        self.frames.get(idx)
    }

    /// Mutable access for the replacement policies.
    pub(crate) fn frame_mut(&mut self, idx: usize) -> &mut Frame {
        &mut self.frames[idx]
    }

    /// All frames, in index order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Occupancy of every frame, in index order.
    pub fn snapshot(&self) -> Vec<Option<Vpn>> {
        self.frames.iter().map(|f| f.occupant).collect()
    }
}
