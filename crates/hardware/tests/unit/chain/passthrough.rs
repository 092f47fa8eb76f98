//! Passthrough (zero-stage) Unit Tests.
//!
//! Verifies that a zero-stage chain:
//!   1. Output follows input immediately — no clock edge required
//!   2. Clock edges evaluate the same combinational path
//!   3. Reset is ignored entirely, in every reset mode
//!   4. Values are masked to the configured width
//!   5. No registers exist — the snapshot is empty

use crate::common::harness::TestContext;
use pipereg_core::config::ResetMode;
use pipereg_core::core::PortSignals;

fn ctx(reset_mode: ResetMode) -> TestContext {
    TestContext::new(8, 0, reset_mode)
}

// ══════════════════════════════════════════════════════════
// 1. Output follows input immediately
// ══════════════════════════════════════════════════════════

#[test]
fn output_follows_input_without_edge() {
    let mut tc = ctx(ResetMode::Async);
    tc.settle(0xAB);
    assert_eq!(tc.q(), 0xAB, "passthrough output follows d on settle");
}

#[test]
fn output_tracks_every_evaluation() {
    let mut tc = ctx(ResetMode::Async);
    for d in [0x01, 0xFE, 0x42, 0x00] {
        tc.settle(d);
        assert_eq!(tc.q(), d);
    }
}

#[test]
fn sampled_sequence_has_zero_latency() {
    let mut tc = ctx(ResetMode::Async);
    let outputs = tc.sample_run(&[1, 2, 3, 4]);
    assert_eq!(outputs, vec![1, 2, 3, 4], "no delay through a 0-stage chain");
}

// ══════════════════════════════════════════════════════════
// 2. Clock edges are combinational too
// ══════════════════════════════════════════════════════════

#[test]
fn edge_evaluates_combinationally() {
    let mut tc = ctx(ResetMode::Async);
    assert_eq!(tc.edge(0x12), 0x12);
    assert_eq!(tc.edge(0x34), 0x34);
}

// ══════════════════════════════════════════════════════════
// 3. Reset is ignored entirely
// ══════════════════════════════════════════════════════════

#[test]
fn asserted_reset_level_is_ignored() {
    let mut tc = ctx(ResetMode::Async);
    tc.sim.settle(PortSignals {
        d: 0x55,
        rst_n: false,
        reset_data: 0xFF,
    });
    assert_eq!(tc.q(), 0x55, "passthrough ignores the reset level");
}

#[test]
fn asserted_reset_at_edge_is_ignored() {
    for mode in [ResetMode::Async, ResetMode::Sync, ResetMode::None] {
        let mut tc = ctx(mode);
        let q = tc.sim.tick(PortSignals {
            d: 0x21,
            rst_n: false,
            reset_data: 0xFF,
        });
        assert_eq!(q, 0x21, "passthrough ignores reset at the edge ({mode:?})");
    }
}

// ══════════════════════════════════════════════════════════
// 4. Width masking
// ══════════════════════════════════════════════════════════

#[test]
fn output_masked_to_width() {
    let mut tc = ctx(ResetMode::None);
    tc.settle(0x1FF);
    assert_eq!(tc.q(), 0xFF, "high bits beyond 8-bit width are dropped");
}

// ══════════════════════════════════════════════════════════
// 5. No registered state
// ══════════════════════════════════════════════════════════

#[test]
fn snapshot_is_empty() {
    let tc = ctx(ResetMode::Async);
    assert!(tc.registers().is_empty(), "0-stage chain holds no registers");
}
