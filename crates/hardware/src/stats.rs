//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the paging simulator. It provides:
//! 1. **Counters:** Reads, writes, page faults, TLB hits/misses and write-backs.
//! 2. **Derived metrics:** Hit and fault rates, TLB hit rate and approximate memory access time.
//! 3. **Report:** A serializable end-of-run summary with the classic text layout.

use std::fmt;

use serde::Serialize;

use crate::common::constants::{DISK_LATENCY, MEM_LATENCY, TLB_LATENCY};
use crate::config::{Algorithm, Config, WritePolicy};

/// Simulation statistics structure tracking all performance metrics.
///
/// Every counter only ever increases during a run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Read accesses processed.
    pub reads: u64,
    /// Write accesses processed.
    pub writes: u64,
    /// Accesses whose page was not resident.
    pub page_faults: u64,
    /// Translations served by the TLB.
    pub tlb_hits: u64,
    /// TLB lookups that missed.
    pub tlb_misses: u64,
    /// Dirty frames written back on eviction.
    pub write_backs: u64,
}

impl SimStats {
    /// Reads plus writes.
    pub const fn total_accesses(&self) -> u64 {
        self.reads + self.writes
    }

    /// Fraction of accesses that faulted, or 0 with no accesses.
    pub fn fault_rate(&self) -> f64 {
        ratio(self.page_faults, self.total_accesses())
    }

    /// Fraction of accesses whose page was resident.
    ///
    /// `None` when nothing was accessed.
    pub fn hit_rate(&self) -> Option<f64> {
        (self.total_accesses() > 0).then(|| 1.0 - self.fault_rate())
    }

    /// Total TLB lookups.
    pub const fn tlb_lookups(&self) -> u64 {
        self.tlb_hits + self.tlb_misses
    }

    /// `tlb_hits / (tlb_hits + tlb_misses)`, or `None` without lookups.
    pub fn tlb_hit_rate(&self) -> Option<f64> {
        let lookups = self.tlb_lookups();
        (lookups > 0).then(|| ratio(self.tlb_hits, lookups))
    }

    /// Approximate memory access time.
    ///
    /// Weighted translation cost (TLB hit vs. memory lookup) plus the fault
    /// rate scaled by the disk latency. `None` without TLB lookups.
    // Unfused: results must round identically on every target.
    #[allow(clippy::suboptimal_flops)]
    pub fn amat(&self) -> Option<f64> {
        let h = self.tlb_hit_rate()?;
        let base = h * TLB_LATENCY + (1.0 - h) * MEM_LATENCY;
        Some(base + self.fault_rate() * DISK_LATENCY)
    }

    /// Builds the end-of-run report for a run configured by `config`.
    pub fn report(&self, config: &Config) -> StatsReport {
        let total = self.total_accesses();
        let tlb = config.tlb_enabled().then(|| TlbReport {
            entries: config.tlb_size,
            hits: self.tlb_hits,
            misses: self.tlb_misses,
            hit_rate: self.tlb_hit_rate(),
            approx_memory_access_time: self.amat(),
        });
        StatsReport {
            algorithm: config.algorithm,
            write_policy: config.write_policy,
            num_frames: config.num_frames,
            reads: self.reads,
            writes: self.writes,
            total_accesses: total,
            page_faults: self.page_faults,
            hit_rate: self.hit_rate(),
            fault_rate: (total > 0).then(|| self.fault_rate()),
            tlb,
            write_backs: self.write_backs,
        }
    }
}

const fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// TLB section of the report, present only when the TLB is enabled.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TlbReport {
    /// Configured TLB entries.
    pub entries: usize,
    /// Lookup hits.
    pub hits: u64,
    /// Lookup misses.
    pub misses: u64,
    /// Hit fraction; absent without lookups.
    pub hit_rate: Option<f64>,
    /// AMAT estimate; absent without lookups.
    pub approx_memory_access_time: Option<f64>,
}

/// End-of-run statistics.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatsReport {
    /// Replacement algorithm.
    pub algorithm: Algorithm,
    /// Write policy.
    pub write_policy: WritePolicy,
    /// Physical frames.
    pub num_frames: usize,
    /// Read accesses.
    pub reads: u64,
    /// Write accesses.
    pub writes: u64,
    /// Reads plus writes.
    pub total_accesses: u64,
    /// Page faults.
    pub page_faults: u64,
    /// Resident fraction; absent without accesses.
    pub hit_rate: Option<f64>,
    /// Faulting fraction; absent without accesses.
    pub fault_rate: Option<f64>,
    /// TLB figures, if the TLB was enabled.
    pub tlb: Option<TlbReport>,
    /// Dirty evictions.
    pub write_backs: u64,
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Stats ---")?;
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(f, "Write policy: {}", self.write_policy)?;
        writeln!(f, "Frames: {}", self.num_frames)?;
        writeln!(f, "Reads: {}", self.reads)?;
        writeln!(f, "Writes: {}", self.writes)?;
        writeln!(f, "Total accesses: {}", self.total_accesses)?;
        writeln!(f, "Total page faults: {}", self.page_faults)?;
        if let (Some(hit), Some(fault)) = (self.hit_rate, self.fault_rate) {
            writeln!(f, "Memory hit rate: {:.2}%", hit * 100.0)?;
            writeln!(f, "Page fault rate: {:.2}%", fault * 100.0)?;
        }
        if let Some(tlb) = &self.tlb {
            writeln!(f, "TLB entries: {}", tlb.entries)?;
            writeln!(f, "TLB hits: {}", tlb.hits)?;
            writeln!(f, "TLB misses: {}", tlb.misses)?;
            if let (Some(rate), Some(amat)) = (tlb.hit_rate, tlb.approx_memory_access_time) {
                writeln!(f, "TLB hit rate: {:.2}%", rate * 100.0)?;
                writeln!(f, "Approx. AMAT: {amat:.2} cycles")?;
            }
        }
        write!(f, "Write-backs (dirty evictions): {}", self.write_backs)
    }
}
