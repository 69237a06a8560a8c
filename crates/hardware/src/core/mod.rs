//! Translation and replacement core.
//!
//! This module contains the paging machinery: the frame table, the TLB, the
//! replacement policies, and the MMU that sequences them for each access.

/// Functional units (MMU, TLB, frame table, replacement policies).
pub mod units;

pub use self::units::mmu::Mmu;
