//! Simulator: owns the configuration and the MMU for one run.
//!
//! Feeds trace records to the MMU strictly in order, hands every resulting
//! event to a caller-supplied sink and produces the final report.

use std::io::BufRead;

use tracing::info;

use crate::common::{ConfigError, Result};
use crate::config::Config;
use crate::core::Mmu;
use crate::core::units::mmu::event::AccessEvent;
use crate::sim::trace::{TraceReader, TraceRecord};
use crate::stats::StatsReport;

/// Top-level simulator for a single address space.
#[derive(Debug)]
pub struct Simulator {
    config: Config,
    /// The translation/eviction engine.
    pub mmu: Mmu,
}

impl Simulator {
    /// Creates a simulator with empty frames and TLB.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` cannot be simulated.
    pub fn new(config: Config) -> std::result::Result<Self, ConfigError> {
        let mmu = Mmu::new(&config)?;
        Ok(Self { config, mmu })
    }

    /// The configuration this run uses.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Processes a single trace record.
    pub fn step(&mut self, record: &TraceRecord) -> Option<AccessEvent> {
        self.mmu.process(record.op, record.addr)
    }

    /// Runs every record of `trace` through the MMU.
    ///
    /// `sink` sees each event as it is produced. Malformed lines are skipped by
    /// the reader.
    ///
    /// # Errors
    ///
    /// Stops at the first I/O error from the trace.
    pub fn run<R, F>(&mut self, trace: &mut TraceReader<R>, mut sink: F) -> Result<StatsReport>
    where
        R: BufRead,
        F: FnMut(&AccessEvent),
    {
        info!(
            algorithm = %self.config.algorithm,
            frames = self.config.num_frames,
            tlb_entries = self.config.tlb_size,
            write_policy = %self.config.write_policy,
            "simulation starting"
        );

        for record in trace.by_ref() {
            if let Some(event) = self.step(&record?) {
                sink(&event);
            }
        }

        info!(
            lines = trace.lines_read(),
            skipped = trace.skipped(),
            accesses = self.mmu.stats.total_accesses(),
            page_faults = self.mmu.stats.page_faults,
            "simulation finished"
        );
        Ok(self.report())
    }

    /// Statistics so far.
    pub fn report(&self) -> StatsReport {
        self.mmu.stats.report(&self.config)
    }
}
