//! Stimulus Unit Tests.
//!
//! Verifies that stimulus programs:
//!   1. Parse from JSON with per-step defaults
//!   2. Report I/O and parse failures distinctly
//!   3. Build from plain value sequences in code
//!   4. Replay end-to-end through a simulator

use std::io::Write;

use pipereg_core::common::error::StimulusError;
use pipereg_core::config::{ChainConfig, ResetMode};
use pipereg_core::sim::{Simulator, Stimulus};

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// ══════════════════════════════════════════════════════════
// 1. JSON schema and defaults
// ══════════════════════════════════════════════════════════

#[test]
fn program_parses_with_defaults() {
    let file = write_temp(
        r#"{"steps": [{"d": 17}, {"d": 34, "rst_n": false, "reset_data": 255}]}"#,
    );
    let stimulus = Stimulus::from_path(file.path()).unwrap();

    assert_eq!(stimulus.len(), 2);
    assert!(stimulus.steps[0].rst_n, "rst_n defaults to deasserted");
    assert_eq!(stimulus.steps[0].reset_data, 0, "reset_data defaults to zero");
    assert_eq!(stimulus.steps[1].d, 34);
    assert!(!stimulus.steps[1].rst_n);
    assert_eq!(stimulus.steps[1].reset_data, 255);
}

#[test]
fn empty_step_list_parses() {
    let file = write_temp(r#"{"steps": []}"#);
    let stimulus = Stimulus::from_path(file.path()).unwrap();
    assert!(stimulus.is_empty());
}

// ══════════════════════════════════════════════════════════
// 2. Error reporting
// ══════════════════════════════════════════════════════════

#[test]
fn missing_file_reports_io_error() {
    let err = Stimulus::from_path("/nonexistent/vectors.json").unwrap_err();
    assert!(matches!(err, StimulusError::Io(_)));
}

#[test]
fn malformed_json_reports_parse_error() {
    let file = write_temp("{steps: nope");
    let err = Stimulus::from_path(file.path()).unwrap_err();
    assert!(matches!(err, StimulusError::Parse(_)));
}

#[test]
fn schema_mismatch_reports_parse_error() {
    let file = write_temp(r#"{"steps": [{"rst_n": true}]}"#);
    let err = Stimulus::from_path(file.path()).unwrap_err();
    assert!(matches!(err, StimulusError::Parse(_)), "missing d is rejected");
}

// ══════════════════════════════════════════════════════════
// 3. In-code construction
// ══════════════════════════════════════════════════════════

#[test]
fn from_values_builds_idle_reset_steps() {
    let stimulus = Stimulus::from_values(&[1, 2, 3]);
    assert_eq!(stimulus.len(), 3);
    assert!(stimulus.steps.iter().all(|s| s.rst_n));
    assert_eq!(stimulus.steps[2].d, 3);
}

// ══════════════════════════════════════════════════════════
// 4. End-to-end replay
// ══════════════════════════════════════════════════════════

#[test]
fn loaded_program_replays_with_reset_and_data() {
    // One reset cycle, then four data cycles through a 2-stage chain.
    let file = write_temp(
        r#"{"steps": [
            {"d": 0, "rst_n": false, "reset_data": 7},
            {"d": 10},
            {"d": 20},
            {"d": 30},
            {"d": 40}
        ]}"#,
    );
    let stimulus = Stimulus::from_path(file.path()).unwrap();

    let config = ChainConfig::new(8, 2, ResetMode::Async).unwrap();
    let mut sim = Simulator::new(&config).unwrap();
    let outputs = sim.run(&stimulus);

    // Cycle 1 samples the asynchronously applied fill; the data sequence then
    // emerges two edges after it was driven.
    assert_eq!(outputs, vec![7, 7, 7, 10, 20]);
}
