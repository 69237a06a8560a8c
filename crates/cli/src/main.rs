//! Paging simulator CLI.
//!
//! Replays a trace of `R`/`W` accesses through a simulated MMU and TLB and
//! prints, in order:
//! 1. **Per-access report:** TLB probe, hit or page fault, and the frame contents.
//! 2. **Statistics:** Fault and hit rates, TLB figures and write-backs.
//!
//! Settings come from flags, optionally layered over a JSON config file.

use std::path::PathBuf;
use std::process::ExitCode;
use std::{fs, io};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pagesim_core::common::{ConfigError, SimError};
use pagesim_core::config::{Algorithm, Config, ConfigOverrides, WritePolicy};
use pagesim_core::sim::TraceReader;
use pagesim_core::stats::StatsReport;
use pagesim_core::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Trace-driven paging MMU and TLB simulator",
    long_about = "Replay a trace of reads and writes against a paged address space.\n\nEach trace line is `<R|W> <hex-address>`; malformed lines are skipped.\n\nExamples:\n  pagesim -a lru -f 4 trace.txt\n  pagesim -a clock -f 8 -t 4 --wb trace.txt\n  pagesim --config run.json --json trace.txt"
)]
struct Cli {
    /// Replacement algorithm: fifo, lru or clock.
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Number of physical frames (must be > 0).
    #[arg(short, long, allow_negative_numbers = true)]
    frames: Option<i64>,

    /// TLB entries; 0 (or negative) disables the TLB.
    #[arg(short, long, allow_negative_numbers = true)]
    tlb: Option<i64>,

    /// Write policy: wt (write-through) or wb (write-back).
    #[arg(short, long, conflicts_with_all = ["wt", "wb"])]
    write_policy: Option<WritePolicy>,

    /// Shorthand for `--write-policy wt`.
    #[arg(long, conflicts_with = "wb")]
    wt: bool,

    /// Shorthand for `--write-policy wb`.
    #[arg(long)]
    wb: bool,

    /// JSON configuration file; flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Suppress the per-access report.
    #[arg(short, long)]
    quiet: bool,

    /// Print the final statistics as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Trace file to replay.
    trace: PathBuf,
}

impl Cli {
    /// Resolves the run configuration: JSON file (if any), then flags.
    ///
    /// The file is not validated on its own; flags may still replace the
    /// values it carries. Validation runs once on the merged result.
    fn resolve_config(&self) -> Result<Config, SimError> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.clone(),
                    source,
                })?;
                Config::parse_json(&text)?
            }
            None => Config::default(),
        };
        config.apply_overrides(&self.overrides())?;
        Ok(config)
    }

    /// Settings given as flags.
    fn overrides(&self) -> ConfigOverrides {
        let write_policy = self.write_policy.or_else(|| {
            if self.wb {
                Some(WritePolicy::WriteBack)
            } else if self.wt {
                Some(WritePolicy::WriteThrough)
            } else {
                None
            }
        });
        ConfigOverrides {
            algorithm: self.algorithm,
            num_frames: self.frames,
            tlb_size: self.tlb,
            write_policy,
        }
    }
}

/// Renders the final report as pretty-printed JSON.
fn report_json(report: &StatsReport) -> Result<String, SimError> {
    serde_json::to_string_pretty(report).map_err(SimError::Report)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), SimError> {
    let config = cli.resolve_config()?;
    tracing::debug!(?config, "resolved configuration");
    let text = !cli.json;

    if text {
        println!("OS Simulator starting...");
    }
    let mut trace = TraceReader::open(&cli.trace)?;
    if text {
        println!("Reading trace file: {}", cli.trace.display());
    }

    let mut sim = Simulator::new(config)?;
    let show_events = text && !cli.quiet;
    let report = sim.run(&mut trace, |event| {
        if show_events {
            println!("{event}");
        }
    })?;

    if text {
        println!();
        println!("{report}");
        println!("Simulation finished.");
    } else {
        println!("{}", report_json(&report)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            ExitCode::FAILURE
        }
    }
}
