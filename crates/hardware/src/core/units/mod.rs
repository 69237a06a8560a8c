//! Functional units of the paging core.
//!
//! The MMU drives an access through the TLB and frame table and asks a
//! replacement policy for a victim when a fault finds no free frame.

/// Memory Management Unit with TLB and frame table.
pub mod mmu;

/// Page replacement policies (FIFO, LRU, CLOCK).
pub mod policies;
