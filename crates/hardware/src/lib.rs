//! Paging simulator library.
//!
//! This crate replays a trace of reads and writes against a single virtual
//! address space and models what a paging MMU with a TLB would do:
//! 1. **Core:** Frame table, TLB, replacement policies (FIFO, LRU, CLOCK) and the MMU that sequences them.
//! 2. **Simulation:** Trace reader and the driver that runs a whole trace.
//! 3. **Statistics:** Fault and hit rates, TLB hit rate, write-backs and approximate memory access time.

/// Common types and constants (addresses, page numbers, access types, errors).
pub mod common;
/// Simulator configuration (algorithm, frames, TLB size, write policy).
pub mod config;
/// Translation core (MMU, TLB, frame table, replacement policies).
pub mod core;
/// Trace reader and simulation driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Translation engine holding frames, TLB and counters.
pub use crate::core::Mmu;
/// Run driver; construct with `Simulator::new`.
pub use crate::sim::Simulator;
