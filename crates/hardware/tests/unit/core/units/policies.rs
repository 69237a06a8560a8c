//! Page Replacement Policy Tests.
//!
//! Verifies the victim selection logic for FIFO, LRU and CLOCK in isolation.
//! Each policy implements `ReplacementPolicy::select_victim(&mut FrameTable)`;
//! frame state is prepared directly through `install` and `touch`.

use pagesim_core::common::{AccessType, Vpn};
use pagesim_core::config::{Algorithm, WritePolicy};
use pagesim_core::core::units::mmu::frames::FrameTable;
use pagesim_core::core::units::policies::{
    ClockPolicy, FifoPolicy, LruPolicy, Policy, ReplacementPolicy,
};
use rstest::rstest;

const WT: WritePolicy = WritePolicy::WriteThrough;

/// A full table with page `i + 1` in frame `i`, installed at tick `i + 1`.
fn full_table(n: usize) -> FrameTable {
    let mut table = FrameTable::new(n);
    for i in 0..n {
        table.install(i, Vpn(i as u64 + 1), i as u64 + 1, AccessType::Read, WT);
    }
    table
}

// ══════════════════════════════════════════════════════════
// 1. FIFO Policy
// ══════════════════════════════════════════════════════════

#[test]
fn fifo_rotates_through_frames() {
    let mut table = full_table(3);
    let mut policy = FifoPolicy::new();

    let victims: Vec<usize> = (0..7).map(|_| policy.select_victim(&mut table)).collect();
    assert_eq!(victims, vec![0, 1, 2, 0, 1, 2, 0]);
    assert_eq!(policy.cursor(), 1);
}

#[test]
fn fifo_ignores_recency() {
    let mut table = full_table(3);
    let mut policy = FifoPolicy::new();

    // Frame 0 is the most recently used, yet FIFO still picks it.
    table.touch(0, 100, AccessType::Read, WT);
    assert_eq!(policy.select_victim(&mut table), 0);
}

#[test]
fn fifo_single_frame() {
    let mut table = full_table(1);
    let mut policy = FifoPolicy::new();
    assert_eq!(policy.select_victim(&mut table), 0);
    assert_eq!(policy.select_victim(&mut table), 0);
}

// ══════════════════════════════════════════════════════════
// 2. LRU Policy
// ══════════════════════════════════════════════════════════

#[test]
fn lru_picks_oldest_timestamp() {
    let mut table = full_table(3);
    let mut policy = LruPolicy::new();
    assert_eq!(policy.select_victim(&mut table), 0);

    table.touch(0, 10, AccessType::Read, WT);
    assert_eq!(policy.select_victim(&mut table), 1);

    table.touch(1, 11, AccessType::Read, WT);
    assert_eq!(policy.select_victim(&mut table), 2);
}

#[test]
fn lru_tie_goes_to_lowest_index() {
    let mut table = FrameTable::new(4);
    table.install(0, Vpn(1), 9, AccessType::Read, WT);
    table.install(1, Vpn(2), 4, AccessType::Read, WT);
    table.install(2, Vpn(3), 4, AccessType::Read, WT);
    table.install(3, Vpn(4), 4, AccessType::Read, WT);

    let mut policy = LruPolicy::new();
    assert_eq!(policy.select_victim(&mut table), 1);
}

#[test]
fn lru_selection_does_not_mutate_frames() {
    let mut table = full_table(3);
    let before = table.frames().to_vec();
    let _ = LruPolicy::new().select_victim(&mut table);
    assert_eq!(table.frames(), before.as_slice());
}

// ══════════════════════════════════════════════════════════
// 3. CLOCK Policy
// ══════════════════════════════════════════════════════════

#[test]
fn clock_full_sweep_clears_all_bits() {
    // install sets every reference bit.
    let mut table = full_table(3);
    assert!(table.frames().iter().all(|f| f.referenced));

    let mut policy = ClockPolicy::new();
    let victim = policy.select_victim(&mut table);

    assert_eq!(victim, 0);
    assert_eq!(policy.hand(), 1);
    assert!(table.frames().iter().all(|f| !f.referenced));
}

#[test]
fn clock_skips_referenced_frames() {
    let mut table = full_table(3);
    let mut policy = ClockPolicy::new();
    assert_eq!(policy.select_victim(&mut table), 0);

    // Bits are clear now; re-reference frame 1 only.
    table.touch(1, 10, AccessType::Read, WT);
    assert_eq!(policy.select_victim(&mut table), 2);
    assert_eq!(policy.hand(), 0);
    assert!(!table.frame(1).unwrap().referenced);
}

#[test]
fn clock_hand_wraps() {
    let mut table = full_table(2);
    let mut policy = ClockPolicy::new();
    assert_eq!(policy.select_victim(&mut table), 0);
    assert_eq!(policy.select_victim(&mut table), 1);
    assert_eq!(policy.hand(), 0);
    assert_eq!(policy.select_victim(&mut table), 0);
}

#[test]
fn clock_hand_persists_between_faults() {
    let mut table = full_table(3);
    let mut policy = ClockPolicy::new();
    assert_eq!(policy.select_victim(&mut table), 0);

    // Frame 0 gets a new, referenced page behind the hand.
    table.install(0, Vpn(4), 10, AccessType::Read, WT);

    assert_eq!(policy.select_victim(&mut table), 1);
    assert_eq!(policy.hand(), 2);
    // A hand restarted at frame 0 would have cleared this bit.
    assert!(table.frame(0).unwrap().referenced);
}

// ══════════════════════════════════════════════════════════
// 4. Dispatch
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(Algorithm::Fifo)]
#[case(Algorithm::Lru)]
#[case(Algorithm::Clock)]
fn policy_reports_its_algorithm(#[case] algorithm: Algorithm) {
    assert_eq!(Policy::new(algorithm).algorithm(), algorithm);
}

#[rstest]
#[case(Algorithm::Fifo, 0)]
#[case(Algorithm::Lru, 2)]
#[case(Algorithm::Clock, 1)]
fn policy_dispatches_to_variant(#[case] algorithm: Algorithm, #[case] expected: usize) {
    let mut table = full_table(3);
    table.touch(1, 10, AccessType::Read, WT);
    let _ = ClockPolicy::new().select_victim(&mut table);
    table.touch(0, 11, AccessType::Read, WT);

    // Stamps are [11, 10, 3]; only frame 0 is referenced.
    let mut policy = Policy::new(algorithm);
    assert_eq!(policy.select_victim(&mut table), expected);
}
