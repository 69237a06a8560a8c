//! # Unit Components
//!
//! Tests grouped by the component they exercise: configuration, the
//! translation core, the trace reader and driver, statistics, and property
//! tests over random traces.
