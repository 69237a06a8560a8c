//! Memory Management Unit (MMU).
//!
//! This module implements the translation/eviction engine. For every access
//! it performs, in order:
//! 1. **TLB probe:** A hit is trusted outright and the frame table is not re-scanned.
//! 2. **Frame table scan:** On a TLB miss (or with the TLB disabled).
//! 3. **Fault service:** First empty frame, otherwise the replacement policy's victim.
//!    The victim's page is invalidated in the TLB and, if dirty under write-back,
//!    written back before the new page is installed.
//!
//! The MMU owns the logical clock. Each access advances it once and the same
//! tick is handed to both the frame table and the TLB.

/// Per-access event records.
pub mod event;

/// Physical frame table.
pub mod frames;

/// Translation Lookaside Buffer (TLB) for caching VPN → frame translations.
pub mod tlb;

use tracing::{debug, trace};

use self::event::{AccessEvent, AccessOutcome, TlbLookup};
use self::frames::FrameTable;
use self::tlb::{Tlb, TlbEntry};
use crate::common::{AccessType, ConfigError, VirtAddr, Vpn};
use crate::config::{Config, WritePolicy};
use crate::core::units::policies::{Policy, ReplacementPolicy};
use crate::stats::SimStats;

/// Memory Management Unit for a single address space.
#[derive(Debug)]
pub struct Mmu {
    frames: FrameTable,
    tlb: Tlb,
    policy: Policy,
    write_policy: WritePolicy,
    tick: u64,
    /// Counters accumulated over the run.
    pub stats: SimStats,
}

impl Mmu {
    /// Creates an MMU with empty frames and an empty TLB.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFrameCount`] if `config.num_frames` is zero.
    /// No table is allocated in that case.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            frames: FrameTable::new(config.num_frames),
            tlb: Tlb::new(config.tlb_size),
            policy: Policy::new(config.algorithm),
            write_policy: config.write_policy,
            tick: 0,
            stats: SimStats::default(),
        })
    }

    /// Processes one trace operation.
    ///
    /// The clock advances for every operation handed in. Operations other
    /// than `R` and `W` stop there: nothing else changes and `None` is
    /// returned.
    pub fn process(&mut self, op: char, addr: VirtAddr) -> Option<AccessEvent> {
        self.tick += 1;
        let Some(access) = AccessType::from_op(op) else {
            trace!(tick = self.tick, op = %op, "ignoring unknown operation");
            return None;
        };
        Some(self.translate(access, addr))
    }

    /// Performs a read or write access.
    pub fn access(&mut self, access: AccessType, addr: VirtAddr) -> AccessEvent {
        self.tick += 1;
        self.translate(access, addr)
    }

    fn translate(&mut self, access: AccessType, addr: VirtAddr) -> AccessEvent {
        let tick = self.tick;
        let vpn = addr.vpn();

        match access {
            AccessType::Read => self.stats.reads += 1,
            AccessType::Write => self.stats.writes += 1,
        }

        let mut tlb_result = TlbLookup::Disabled;
        if self.tlb.is_enabled() {
            if let Some(frame) = self.tlb.lookup(vpn, tick) {
                self.stats.tlb_hits += 1;
                self.frames.touch(frame, tick, access, self.write_policy);
                return self.event(access, addr, TlbLookup::Hit, AccessOutcome::TlbHit { frame });
            }
            self.stats.tlb_misses += 1;
            tlb_result = TlbLookup::Miss;
        }

        let outcome = if let Some(frame) = self.frames.lookup(vpn) {
            self.frames.touch(frame, tick, access, self.write_policy);
            self.tlb.insert(vpn, frame, tick);
            AccessOutcome::FrameHit { frame }
        } else {
            self.stats.page_faults += 1;
            self.service_fault(vpn, access, tick)
        };

        self.event(access, addr, tlb_result, outcome)
    }

    /// Loads `vpn` into a frame, evicting if the table is full.
    fn service_fault(&mut self, vpn: Vpn, access: AccessType, tick: u64) -> AccessOutcome {
        let frame = match self.frames.first_empty() {
            Some(idx) => idx,
            None => self.policy.select_victim(&mut self.frames),
        };

        let evicted = self.frames.frame(frame).and_then(|f| f.occupant);
        let mut write_back = false;
        if let Some(old) = evicted {
            self.tlb.invalidate(old);
            if self.write_policy.is_write_back() && self.frames.take_dirty(frame) {
                self.stats.write_backs += 1;
                write_back = true;
            }
            debug!(
                frame,
                evicted = old.val(),
                incoming = vpn.val(),
                write_back,
                policy = %self.policy.algorithm(),
                "evicting page"
            );
        }

        self.frames.install(frame, vpn, tick, access, self.write_policy);
        self.tlb.insert(vpn, frame, tick);

        AccessOutcome::PageFault {
            frame,
            evicted,
            write_back,
        }
    }

    fn event(
        &self,
        access: AccessType,
        addr: VirtAddr,
        tlb: TlbLookup,
        outcome: AccessOutcome,
    ) -> AccessEvent {
        trace!(
            tick = self.tick,
            op = %access,
            addr = addr.val(),
            vpn = addr.vpn().val(),
            offset = addr.page_offset(),
            ?outcome,
            "access"
        );
        debug_assert!(self.is_coherent(), "TLB maps a page to a frame it does not occupy");
        AccessEvent {
            tick: self.tick,
            access,
            addr,
            vpn: addr.vpn(),
            tlb,
            outcome,
            frames: self.frames.snapshot(),
        }
    }

    /// Valid TLB entries whose frame no longer holds their page.
    ///
    /// Always empty while the MMU maintains its invariants.
    pub fn stale_tlb_entries(&self) -> impl Iterator<Item = &TlbEntry> {
        self.tlb.valid_entries().filter(|e| {
            self.frames
                .frame(e.frame)
                .is_none_or(|f| f.occupant != Some(e.vpn))
        })
    }

    /// True when every valid TLB entry points at the frame holding its page.
    pub fn is_coherent(&self) -> bool {
        self.stale_tlb_entries().next().is_none()
    }

    /// Logical time of the most recent operation.
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// The frame table.
    pub const fn frames(&self) -> &FrameTable {
        &self.frames
    }

    /// The TLB.
    pub const fn tlb(&self) -> &Tlb {
        &self.tlb
    }

    /// The replacement policy and its cursor state.
    pub const fn policy(&self) -> &Policy {
        &self.policy
    }
}
