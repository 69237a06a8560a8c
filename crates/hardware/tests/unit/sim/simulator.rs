//! Simulator Driver Tests.
//!
//! Whole-trace runs: event delivery to the sink, skipped lines, report
//! contents and error propagation.

use std::io::{Cursor, Write};

use pagesim_core::common::{ConfigError, SimError, VirtAddr};
use pagesim_core::config::{Algorithm, Config, WritePolicy};
use pagesim_core::core::units::mmu::event::AccessEvent;
use pagesim_core::sim::{Simulator, TraceReader, TraceRecord};
use pretty_assertions::assert_eq;

fn run_text(config: Config, text: &str) -> (Simulator, Vec<AccessEvent>) {
    let mut sim = Simulator::new(config).unwrap();
    let mut reader = TraceReader::new(Cursor::new(text.as_bytes()));
    let mut events = Vec::new();
    let _ = sim.run(&mut reader, |e| events.push(e.clone())).unwrap();
    (sim, events)
}

#[test]
fn rejects_zero_frames() {
    let config = Config {
        num_frames: 0,
        ..Config::default()
    };
    assert!(matches!(
        Simulator::new(config),
        Err(ConfigError::InvalidFrameCount(0))
    ));
}

#[test]
fn runs_trace_file_end_to_end() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "R 1000\nW 1000\nR 2000\nR 3000\nR 4000\n").unwrap();

    let mut sim = Simulator::new(Config::default()).unwrap();
    let mut reader = TraceReader::open(file.path()).unwrap();
    let mut lines = Vec::new();
    let report = sim
        .run(&mut reader, |e| lines.push(e.to_string()))
        .unwrap();

    assert_eq!(report.page_faults, 4);
    assert_eq!(report.reads, 4);
    assert_eq!(report.writes, 1);
    assert_eq!(report.total_accesses, 5);
    assert_eq!(report.write_backs, 0);
    assert!(report.tlb.is_none());
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[4],
        "Operation: R | Address: 0x4000 | VPN: 4 -> PAGE FAULT\nFrames: [ 4 2 3 ]"
    );
}

#[test]
fn malformed_and_unknown_lines_produce_no_events() {
    let (sim, events) = run_text(Config::default(), "R 1000\nbad line here\nX 2000\nR 3000\n");

    assert_eq!(events.len(), 2);
    assert_eq!(sim.mmu.stats.total_accesses(), 2);
    // The unknown op consumed a tick; the malformed line did not.
    assert_eq!(sim.mmu.tick(), 3);
    assert_eq!(events[1].tick, 3);
}

#[test]
fn report_reflects_configuration() {
    let config = Config {
        algorithm: Algorithm::Clock,
        num_frames: 2,
        tlb_size: 2,
        write_policy: WritePolicy::WriteBack,
    };
    let (sim, _) = run_text(config, "W 1000\nR 1000\nR 2000\nR 3000\n");
    let report = sim.report();

    assert_eq!(report.algorithm, Algorithm::Clock);
    assert_eq!(report.write_policy, WritePolicy::WriteBack);
    assert_eq!(report.num_frames, 2);
    assert_eq!(report.page_faults, 3);
    assert_eq!(report.write_backs, 1);

    let tlb = report.tlb.unwrap();
    assert_eq!(tlb.entries, 2);
    assert_eq!(tlb.hits, 1);
    assert_eq!(tlb.misses, 3);
    assert!((tlb.hit_rate.unwrap() - 0.25).abs() < 1e-12);
}

#[test]
fn step_feeds_single_record() {
    let mut sim = Simulator::new(Config::default()).unwrap();
    let record = TraceRecord {
        op: 'W',
        addr: VirtAddr::new(0x7000),
    };
    let event = sim.step(&record).unwrap();
    assert!(event.outcome.is_fault());
    assert_eq!(sim.report().writes, 1);
    assert_eq!(sim.config(), &Config::default());
}

#[test]
fn empty_trace_yields_empty_report() {
    let (sim, events) = run_text(Config::default(), "");
    assert!(events.is_empty());
    let report = sim.report();
    assert_eq!(report.total_accesses, 0);
    assert_eq!(report.hit_rate, None);
}

#[test]
fn read_error_propagates() {
    struct Failing;

    impl std::io::Read for Failing {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk on fire"))
        }
    }

    let mut sim = Simulator::new(Config::default()).unwrap();
    let mut reader = TraceReader::new(std::io::BufReader::new(Failing));
    let err = sim.run(&mut reader, |_| {}).unwrap_err();
    assert!(matches!(err, SimError::Trace(_)));
    assert!(err.to_string().contains("disk on fire"));
}
