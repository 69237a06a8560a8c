//! Translation Lookaside Buffer (TLB).
//!
//! A fully associative cache of VPN → frame mappings. Lookups scan every
//! entry; a hit refreshes the entry's recency stamp. On insert into a full
//! table the least recently used entry is replaced.
//!
//! A TLB built with zero entries is disabled: every lookup misses and inserts
//! and invalidations are ignored, so the engine can treat it uniformly.

use crate::common::Vpn;

/// A single entry in the TLB.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TlbEntry {
    /// Entry validity flag.
    pub valid: bool,
    /// Virtual Page Number (Tag).
    pub vpn: Vpn,
    /// Frame holding the page (Data).
    pub frame: usize,
    /// Tick of the most recent lookup hit or insert.
    pub last_used: u64,
}

/// Translation Lookaside Buffer structure.
#[derive(Clone, Debug)]
pub struct Tlb {
    /// Vector of TLB entries.
    entries: Vec<TlbEntry>,
}

impl Tlb {
    /// Creates a new TLB with `size` entries (zero disables it).
    pub fn new(size: usize) -> Self {
        Self {
            entries: vec![TlbEntry::default(); size],
        }
    }

    /// Number of entries.
    pub const fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Whether the TLB takes part in translation.
    #[inline(always)]
    pub const fn is_enabled(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Looks up a VPN in the TLB.
    ///
    /// # Arguments
    ///
    /// * `vpn` - The Virtual Page Number to look up.
    /// * `tick` - Current logical time, stamped on the entry on a hit.
    ///
    /// # Returns
    ///
    /// The cached frame index if present, otherwise `None`.
    pub fn lookup(&mut self, vpn: Vpn, tick: u64) -> Option<usize> {
        let entry = self.entries.iter_mut().find(|e| e.valid && e.vpn == vpn)?;
        entry.last_used = tick;
        Some(entry.frame)
    }

    /// Inserts or refreshes a mapping.
    ///
    /// An existing entry for `vpn` is updated in place. Otherwise the first
    /// invalid slot is used, and failing that the entry with the smallest
    /// `last_used` (lowest index on ties) is replaced.
    pub fn insert(&mut self, vpn: Vpn, frame: usize, tick: u64) {
        if !self.is_enabled() {
            return;
        }

        let slot = self
            .entries
            .iter()
            .position(|e| e.valid && e.vpn == vpn)
            .or_else(|| self.entries.iter().position(|e| !e.valid))
            .unwrap_or_else(|| self.lru_slot());

        self.entries[slot] = TlbEntry {
            valid: true,
            vpn,
            frame,
            last_used: tick,
        };
    }

    /// Drops every mapping for `vpn`.
    ///
    /// Must be called before the frame holding `vpn` is given to another page.
    pub fn invalidate(&mut self, vpn: Vpn) {
        for e in self.entries.iter_mut().filter(|e| e.valid && e.vpn == vpn) {
            e.valid = false;
        }
    }

    /// Flushes all entries from the TLB.
    pub fn flush(&mut self) {
        for e in &mut self.entries {
            e.valid = false;
        }
    }

    /// Iterates over the valid entries.
    pub fn valid_entries(&self) -> impl Iterator<Item = &TlbEntry> {
        self.entries.iter().filter(|e| e.valid)
    }

    /// Raw slot contents, valid or not, in index order.
    pub fn entries(&self) -> &[TlbEntry] {
        &self.entries
    }

    /// Index of the least recently used slot; first minimum wins.
    fn lru_slot(&self) -> usize {
        let mut victim = 0;
        for (i, e) in self.entries.iter().enumerate().skip(1) {
            if e.last_used < self.entries[victim].last_used {
                victim = i;
            }
        }
        victim
    }
}
