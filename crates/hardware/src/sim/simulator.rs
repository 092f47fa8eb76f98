//! Simulator: owns both the chain and the run statistics side-by-side.
//!
//! The parent design or test harness supplies the clock and reset stimuli
//! and samples the output; this type plays that role for scripted runs. It
//! performs:
//! 1. **Settles:** Combinational evaluations between edges (passthrough
//!    output, asynchronous reset levels).
//! 2. **Edges:** Rising-edge updates, one call per cycle.
//! 3. **Replay:** Whole stimulus programs, producing the output sequence a
//!    test bench would sample at each edge.

use tracing::trace;

use crate::common::error::ConfigError;
use crate::config::{ChainConfig, ResetMode};
use crate::core::{PortSignals, RegisterChain};
use crate::sim::stimulus::Stimulus;
use crate::stats::SimStats;

/// Top-level simulator: chain state + run statistics.
#[derive(Debug)]
pub struct Simulator {
    /// The behavioral model under simulation.
    pub chain: RegisterChain,
    /// Per-run statistics.
    pub stats: SimStats,
    reset_mode: ResetMode,
    cycle: u64,
}

impl Simulator {
    /// Creates a new simulator for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is not representable.
    pub fn new(config: &ChainConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            chain: RegisterChain::new(config)?,
            stats: SimStats::new(),
            reset_mode: config.reset_mode,
            cycle: 0,
        })
    }

    /// Combinational evaluation between clock edges.
    ///
    /// Passthrough chains follow `d`; in `Async` mode an asserted reset level
    /// applies immediately. No clock edge is consumed.
    ///
    /// # Arguments
    ///
    /// * `pins` - The pin levels driven at this instant.
    pub fn settle(&mut self, pins: PortSignals) {
        self.chain.settle(pins);
        self.stats.settles += 1;
        if self.reset_mode == ResetMode::Async && !pins.rst_n {
            self.stats.resets_level += 1;
        }
        trace!(
            cycle = self.cycle,
            d = pins.d,
            rst_n = pins.rst_n,
            q = self.chain.q(),
            "settle"
        );
    }

    /// Applies one rising clock edge and returns the new output value.
    ///
    /// # Arguments
    ///
    /// * `pins` - The pin levels sampled coincident with the edge.
    ///
    /// # Returns
    ///
    /// The output value after the edge.
    pub fn tick(&mut self, pins: PortSignals) -> u64 {
        let q = self.chain.clock_edge(pins);
        self.cycle += 1;
        self.stats.edges += 1;
        if self.reset_mode.acts_on_edge() && !pins.rst_n {
            self.stats.resets_edge += 1;
        }
        trace!(
            cycle = self.cycle,
            d = pins.d,
            rst_n = pins.rst_n,
            q,
            "edge"
        );
        q
    }

    /// Drives one full clock cycle and returns the output sampled at its edge.
    ///
    /// The pins are driven for the cycle (combinational settle), the output
    /// is sampled at the rising edge as a test bench observes it — the value
    /// the chain drove during the cycle the edge closes — and then the edge
    /// is applied. The post-edge value remains available via `chain.q()`.
    ///
    /// # Arguments
    ///
    /// * `pins` - The pin levels driven for this cycle.
    ///
    /// # Returns
    ///
    /// The output value sampled at the rising edge.
    pub fn step(&mut self, pins: PortSignals) -> u64 {
        self.settle(pins);
        let sampled = self.chain.q();
        let _ = self.tick(pins);
        sampled
    }

    /// Replays a stimulus program, one step per clock cycle.
    ///
    /// # Arguments
    ///
    /// * `stimulus` - The per-cycle pin samples to drive.
    ///
    /// # Returns
    ///
    /// One edge-sampled output value per stimulus step, in order.
    pub fn run(&mut self, stimulus: &Stimulus) -> Vec<u64> {
        stimulus
            .steps
            .iter()
            .map(|step| self.step(step.pins()))
            .collect()
    }

    /// Number of rising edges applied so far.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }
}
