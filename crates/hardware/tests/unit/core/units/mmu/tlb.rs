//! TLB Unit Tests.
//!
//! Verifies functionality of the Translation Lookaside Buffer:
//! - Disabled (zero-capacity) behaviour
//! - Basic lookup and insertion
//! - In-place update of an existing mapping
//! - Free-slot allocation and LRU replacement with lowest-index tie-break
//! - Invalidation and flushing

use pagesim_core::common::Vpn;
use pagesim_core::core::units::mmu::tlb::Tlb;

// ══════════════════════════════════════════════════════════
// 1. Disabled TLB
// ══════════════════════════════════════════════════════════

#[test]
fn zero_capacity_is_disabled() {
    let mut tlb = Tlb::new(0);
    assert!(!tlb.is_enabled());
    assert_eq!(tlb.capacity(), 0);

    tlb.insert(Vpn(1), 0, 1);
    assert_eq!(tlb.lookup(Vpn(1), 2), None);
    tlb.invalidate(Vpn(1));
    assert_eq!(tlb.valid_entries().count(), 0);
}

// ══════════════════════════════════════════════════════════
// 2. Basic Operations
// ══════════════════════════════════════════════════════════

#[test]
fn lookup_miss_on_empty() {
    let mut tlb = Tlb::new(4);
    assert!(tlb.is_enabled());
    assert_eq!(tlb.lookup(Vpn(0x100), 1), None);
}

#[test]
fn insert_and_lookup_hit() {
    let mut tlb = Tlb::new(4);
    tlb.insert(Vpn(0xABC), 2, 1);
    assert_eq!(tlb.lookup(Vpn(0xABC), 2), Some(2));
}

#[test]
fn lookup_hit_refreshes_recency() {
    let mut tlb = Tlb::new(4);
    tlb.insert(Vpn(7), 1, 3);
    assert_eq!(tlb.lookup(Vpn(7), 9), Some(1));
    assert_eq!(tlb.entries()[0].last_used, 9);
}

#[test]
fn reinsert_updates_in_place() {
    let mut tlb = Tlb::new(4);
    tlb.insert(Vpn(5), 0, 1);
    tlb.insert(Vpn(6), 1, 2);
    tlb.insert(Vpn(5), 3, 4);

    assert_eq!(tlb.valid_entries().filter(|e| e.vpn == Vpn(5)).count(), 1);
    assert_eq!(tlb.entries()[0].frame, 3);
    assert_eq!(tlb.entries()[0].last_used, 4);
    assert_eq!(tlb.valid_entries().count(), 2);
}

// ══════════════════════════════════════════════════════════
// 3. Slot allocation and replacement
// ══════════════════════════════════════════════════════════

#[test]
fn fills_first_free_slot() {
    let mut tlb = Tlb::new(3);
    tlb.insert(Vpn(1), 0, 1);
    tlb.insert(Vpn(2), 1, 2);
    tlb.insert(Vpn(3), 2, 3);
    tlb.invalidate(Vpn(1));

    // Slot 0 is now free and must be reused before any replacement.
    tlb.insert(Vpn(4), 0, 4);
    assert_eq!(tlb.entries()[0].vpn, Vpn(4));
    assert!(tlb.entries()[0].valid);
    assert_eq!(tlb.lookup(Vpn(2), 5), Some(1));
    assert_eq!(tlb.lookup(Vpn(3), 6), Some(2));
}

#[test]
fn full_tlb_evicts_least_recently_used() {
    let mut tlb = Tlb::new(2);
    tlb.insert(Vpn(1), 0, 1);
    tlb.insert(Vpn(2), 1, 2);
    // Touch VPN 1 so VPN 2 becomes the LRU entry.
    assert_eq!(tlb.lookup(Vpn(1), 3), Some(0));

    tlb.insert(Vpn(3), 2, 4);
    assert_eq!(tlb.lookup(Vpn(2), 5), None);
    assert_eq!(tlb.lookup(Vpn(1), 6), Some(0));
    assert_eq!(tlb.lookup(Vpn(3), 7), Some(2));
}

#[test]
fn lru_tie_goes_to_lowest_index() {
    let mut tlb = Tlb::new(3);
    tlb.insert(Vpn(10), 0, 5);
    tlb.insert(Vpn(11), 1, 5);
    tlb.insert(Vpn(12), 2, 5);

    tlb.insert(Vpn(13), 3, 6);
    assert_eq!(tlb.entries()[0].vpn, Vpn(13));
    assert_eq!(tlb.lookup(Vpn(10), 7), None);
    assert_eq!(tlb.lookup(Vpn(11), 8), Some(1));
}

// ══════════════════════════════════════════════════════════
// 4. Invalidation
// ══════════════════════════════════════════════════════════

#[test]
fn invalidate_removes_mapping() {
    let mut tlb = Tlb::new(4);
    tlb.insert(Vpn(1), 0, 1);
    tlb.insert(Vpn(2), 1, 2);

    tlb.invalidate(Vpn(1));
    assert_eq!(tlb.lookup(Vpn(1), 3), None);
    assert_eq!(tlb.lookup(Vpn(2), 4), Some(1));
}

#[test]
fn invalidate_unknown_vpn_is_noop() {
    let mut tlb = Tlb::new(2);
    tlb.insert(Vpn(1), 0, 1);
    tlb.invalidate(Vpn(99));
    assert_eq!(tlb.valid_entries().count(), 1);
}

#[test]
fn flush_invalidates_everything() {
    let mut tlb = Tlb::new(4);
    for i in 0..4 {
        tlb.insert(Vpn(i), i as usize, i + 1);
    }
    tlb.flush();
    assert_eq!(tlb.valid_entries().count(), 0);
    for i in 0..4 {
        assert_eq!(tlb.lookup(Vpn(i), 10), None);
    }
}
