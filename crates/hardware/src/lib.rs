//! Pipeline register chain simulator library.
//!
//! This crate implements a cycle-accurate behavioral model of a parameterized
//! pipeline register chain — a clocked delay line that shifts a fixed-width
//! data bus through a configurable number of register stages. It provides:
//! 1. **Core:** The register chain model (passthrough, single-stage, and
//!    multi-stage update rules) and its input-pin sampling types.
//! 2. **Configuration:** Width, depth, and reset-policy parameters with
//!    construction-time validation (defaults, enums, JSON deserialization).
//! 3. **Simulation:** An edge-driven simulator harness and JSON stimulus
//!    replay for test-bench and co-simulation use.
//! 4. **Statistics:** Per-run edge and reset counters with a report printer.

/// Common types and constants (width bounds, word masking, error types).
pub mod common;
/// Chain configuration (defaults, reset-mode enum, validation).
pub mod config;
/// Register chain core (update rules, input-pin signals).
pub mod core;
/// Simulation harness (edge-driven simulator, stimulus programs).
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `ChainConfig::default()` or deserialize from JSON.
pub use crate::config::{ChainConfig, ResetMode};
/// The behavioral model; construct with `RegisterChain::new`.
pub use crate::core::RegisterChain;
/// Edge-driven harness owning a chain and its statistics.
pub use crate::sim::Simulator;
