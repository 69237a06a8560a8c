//! Global simulation constants.
//!
//! This module defines the fixed parameters of the simulated machine:
//! 1. **Paging:** Page size and the derived shift/mask.
//! 2. **Latency model:** The unit costs used by the approximate memory access time.

/// Page size in bytes (4KB).
pub const PAGE_SIZE: u64 = 4096;

/// Number of bits to shift to convert between bytes and pages.
pub const PAGE_SHIFT: u64 = 12;

/// Mask for extracting the page offset from an address.
pub const PAGE_OFFSET_MASK: u64 = PAGE_SIZE - 1;

/// Cost of a translation served by the TLB.
pub const TLB_LATENCY: f64 = 1.0;

/// Cost of a translation that has to consult the page/frame table in memory.
pub const MEM_LATENCY: f64 = 100.0;

/// Cost of servicing a page fault from backing store.
pub const DISK_LATENCY: f64 = 10_000_000.0;
