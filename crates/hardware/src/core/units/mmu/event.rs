//! Per-access events.
//!
//! Every access the MMU handles produces one [`AccessEvent`] describing the
//! path it took (TLB hit, frame hit, or page fault) and the frame occupancy
//! afterwards. The `Display` form is the per-access line report printed by
//! the CLI.

use std::fmt;

use serde::Serialize;

use crate::common::{AccessType, VirtAddr, Vpn};

/// Result of the TLB probe for an access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TlbLookup {
    /// The TLB has no entries; it was not consulted.
    Disabled,
    /// Translation served by the TLB.
    Hit,
    /// TLB consulted and missed.
    Miss,
}

/// Where an access was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AccessOutcome {
    /// The TLB supplied the frame; the frame table was not scanned.
    TlbHit {
        /// Frame named by the TLB entry.
        frame: usize,
    },
    /// The page was resident (found by scanning the frame table).
    FrameHit {
        /// Frame holding the page.
        frame: usize,
    },
    /// The page was not resident and was loaded.
    PageFault {
        /// Frame the page was loaded into.
        frame: usize,
        /// Page that previously occupied the frame.
        evicted: Option<Vpn>,
        /// Whether the evicted page was dirty and written back.
        write_back: bool,
    },
}

impl AccessOutcome {
    /// Frame that now holds the accessed page.
    pub const fn frame(&self) -> usize {
        match *self {
            Self::TlbHit { frame } | Self::FrameHit { frame } | Self::PageFault { frame, .. } => {
                frame
            }
        }
    }

    /// True for page faults.
    pub const fn is_fault(&self) -> bool {
        matches!(self, Self::PageFault { .. })
    }
}

/// Record of one simulated access.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccessEvent {
    /// Logical time of the access.
    pub tick: u64,
    /// Read or write.
    pub access: AccessType,
    /// Address from the trace.
    pub addr: VirtAddr,
    /// Page of `addr`.
    pub vpn: Vpn,
    /// TLB probe result.
    pub tlb: TlbLookup,
    /// Resolution path.
    pub outcome: AccessOutcome,
    /// Frame occupancy after the access, in frame order.
    pub frames: Vec<Option<Vpn>>,
}

impl fmt::Display for AccessEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tlb == TlbLookup::Miss {
            writeln!(f, " -> TLB MISS")?;
        }
        write!(
            f,
            "Operation: {} | Address: {} | VPN: {} -> ",
            self.access, self.addr, self.vpn
        )?;
        match self.outcome {
            AccessOutcome::TlbHit { frame } => writeln!(f, "TLB HIT (frame {frame})")?,
            AccessOutcome::FrameHit { .. } => writeln!(f, "HIT")?,
            AccessOutcome::PageFault { .. } => writeln!(f, "PAGE FAULT")?,
        }
        f.write_str("Frames: [")?;
        for slot in &self.frames {
            match slot {
                Some(vpn) => write!(f, " {vpn}")?,
                None => f.write_str(" -")?,
            }
        }
        f.write_str(" ]")
    }
}
