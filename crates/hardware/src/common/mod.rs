//! Common utilities and types used throughout the paging simulator.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Address Types:** Strong types for virtual addresses and page numbers.
//! 2. **Constants:** Page geometry and the latency model.
//! 3. **Memory Access:** Read/write classification of trace operations.
//! 4. **Error Handling:** Configuration, trace and simulation errors.

/// Address type definitions (virtual addresses and page numbers).
pub mod addr;

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types.
pub mod error;

pub use addr::{VirtAddr, Vpn};
pub use constants::{PAGE_SHIFT, PAGE_SIZE};
pub use data::AccessType;
pub use error::{ConfigError, Result, SimError, TraceError};
