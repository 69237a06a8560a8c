//! Simulation driver and trace input.
//!
//! Provides the trace reader and the simulator that runs a whole trace
//! through the MMU.

/// Access trace parsing.
pub mod trace;

/// Run driver.
pub mod simulator;

pub use simulator::Simulator;
pub use trace::{TraceReader, TraceRecord};
