//! Virtual address and page number types.
//!
//! This module defines strong types for the two quantities the simulator moves around:
//! 1. **Virtual addresses:** Raw addresses read from the trace.
//! 2. **Virtual page numbers:** The page an address falls in, the unit of translation.

use std::fmt;

use serde::Serialize;

use super::constants::{PAGE_OFFSET_MASK, PAGE_SHIFT};

/// A virtual address in the simulated address space.
///
/// Addresses come straight from the trace and are never translated to a
/// physical byte address; only their page number takes part in paging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct VirtAddr(pub u64);

/// A virtual page number (address divided by the page size).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Vpn(pub u64);

impl VirtAddr {
    /// Creates a new virtual address from a raw 64-bit value.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw 64-bit address value.
    #[inline(always)]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw 64-bit address value.
    #[inline(always)]
    pub const fn val(&self) -> u64 {
        self.0
    }

    /// Returns the page this address belongs to.
    ///
    /// Equivalent to integer division by [`PAGE_SIZE`](super::constants::PAGE_SIZE).
    #[inline(always)]
    pub const fn vpn(&self) -> Vpn {
        Vpn(self.0 >> PAGE_SHIFT)
    }

    /// Extracts the byte offset within the page (0-4095).
    pub const fn page_offset(&self) -> u64 {
        self.0 & PAGE_OFFSET_MASK
    }
}

impl Vpn {
    /// Returns the raw page number.
    #[inline(always)]
    pub const fn val(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VirtAddr {
    fn from(addr: u64) -> Self {
        Self(addr)
    }
}

impl fmt::Display for VirtAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::Display for Vpn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
