//! Behavioral model of the clocked register chain.
//!
//! This module implements the cycle-accurate semantics of the pipeline
//! register chain. It provides:
//! 1. **Update Rules:** A tagged variant per structural configuration
//!    (passthrough, single-stage, multi-stage), selected once at construction.
//! 2. **Edge Semantics:** Simultaneous-update shifting — every stage reads its
//!    previous-cycle input before any stage's new value is observable.
//! 3. **Reset Semantics:** Level-sensitive, edge-sampled, or ignored reset,
//!    filling every stage and the output in the same evaluation.

use crate::common::error::ConfigError;
use crate::config::{ChainConfig, ResetMode};
use crate::core::signals::PortSignals;

/// Update rule of a chain instance.
///
/// The structural variation driven by the stage count is resolved once when
/// the chain is built; evaluations dispatch on the variant instead of
/// re-branching on raw parameters every edge.
#[derive(Debug, Clone)]
enum UpdateRule {
    /// Zero stages: the output follows the input combinationally. Clock and
    /// reset are ignored entirely so the instance can be optimized away.
    Passthrough,

    /// One stage: the output register is driven directly from the input or
    /// the reset fill each edge. No intermediate sequence is allocated.
    Single {
        /// Reset policy.
        reset: ResetMode,
    },

    /// Two or more stages: the output register plus `stages - 1` shadow
    /// registers form a shift pipeline of the configured depth.
    Shift {
        /// Reset policy.
        reset: ResetMode,
        /// Shadow registers. Index 0 is nearest the output; the highest index
        /// is nearest the input. Never resized after construction.
        shadow: Vec<u64>,
    },
}

/// Parameterized chain of clocked registers delaying a data bus.
///
/// The chain delays its input by exactly `stages` rising clock edges,
/// honoring the configured reset policy. State is privately owned by the
/// instance and mutated only through [`RegisterChain::settle`] and
/// [`RegisterChain::clock_edge`].
#[derive(Debug, Clone)]
pub struct RegisterChain {
    width: u32,
    stages: u32,
    mask: u64,
    rule: UpdateRule,
    q: u64,
}

impl RegisterChain {
    /// Constructs a chain from a validated configuration.
    ///
    /// The power-on register contents are implementation-defined in the
    /// modeled component; this model fixes them at all-zeros until the first
    /// reset or clock edge defines them.
    ///
    /// # Arguments
    ///
    /// * `config` - Static parameters; validated before any state is built.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is not representable.
    pub fn new(config: &ChainConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rule = match config.stages {
            0 => UpdateRule::Passthrough,
            1 => UpdateRule::Single {
                reset: config.reset_mode,
            },
            n => UpdateRule::Shift {
                reset: config.reset_mode,
                shadow: vec![0; (n - 1) as usize],
            },
        };
        Ok(Self {
            width: config.width,
            stages: config.stages,
            mask: config.mask(),
            rule,
            q: 0,
        })
    }

    /// Combinational evaluation between clock edges.
    ///
    /// A passthrough chain drives its output from `d` on every evaluation.
    /// In `Async` mode an asserted reset level loads every stage and the
    /// output with `reset_data` immediately, with no clock edge involved.
    /// All other configurations hold their state.
    ///
    /// # Arguments
    ///
    /// * `pins` - The input-pin sample observed at this instant.
    pub fn settle(&mut self, pins: PortSignals) {
        match &mut self.rule {
            UpdateRule::Passthrough => self.q = pins.d & self.mask,
            UpdateRule::Single {
                reset: ResetMode::Async,
            } if pins.reset_asserted() => {
                self.q = pins.reset_data & self.mask;
            }
            UpdateRule::Shift {
                reset: ResetMode::Async,
                shadow,
            } if pins.reset_asserted() => {
                let fill = pins.reset_data & self.mask;
                shadow.fill(fill);
                self.q = fill;
            }
            _ => {}
        }
    }

    /// Advances the chain by one rising clock edge and returns the new output.
    ///
    /// This is the sole sequential mutator. When reset applies on this edge
    /// (`Async` or `Sync` policy with `rst_n` low), every stage and the
    /// output take `reset_data` simultaneously — the fill is not injected at
    /// the input and left to propagate. Otherwise the chain shifts: all
    /// stages read their previous-cycle inputs before any new value lands.
    ///
    /// # Arguments
    ///
    /// * `pins` - The input-pin sample observed coincident with the edge.
    ///
    /// # Returns
    ///
    /// The output value after the edge.
    pub fn clock_edge(&mut self, pins: PortSignals) -> u64 {
        match &mut self.rule {
            UpdateRule::Passthrough => {
                // No clock dependency: the edge evaluates the same
                // combinational path as a settle.
                self.q = pins.d & self.mask;
            }
            UpdateRule::Single { reset } => {
                let value = if reset.acts_on_edge() && pins.reset_asserted() {
                    pins.reset_data
                } else {
                    pins.d
                };
                self.q = value & self.mask;
            }
            UpdateRule::Shift { reset, shadow } => {
                if reset.acts_on_edge() && pins.reset_asserted() {
                    let fill = pins.reset_data & self.mask;
                    shadow.fill(fill);
                    self.q = fill;
                } else {
                    // Capture the output-side register first, then move each
                    // value one stage toward the output. Reads of the
                    // previous cycle's values all complete before the slot
                    // they came from is overwritten.
                    self.q = shadow[0];
                    shadow.copy_within(1.., 0);
                    let last = shadow.len() - 1;
                    shadow[last] = pins.d & self.mask;
                }
            }
        }
        self.q
    }

    /// Current output value. Read-only; never mutates state.
    pub fn q(&self) -> u64 {
        self.q
    }

    /// Configured datapath width in bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Configured pipeline depth: total input-to-output latency in edges.
    pub fn depth(&self) -> u32 {
        self.stages
    }

    /// Dumps the full register sequence, output side first.
    ///
    /// The first element is the output register; subsequent elements walk
    /// toward the input. A passthrough chain has no registers and returns an
    /// empty sequence. Useful for debugging and for harnesses asserting on
    /// internal state.
    pub fn snapshot(&self) -> Vec<u64> {
        match &self.rule {
            UpdateRule::Passthrough => Vec::new(),
            UpdateRule::Single { .. } => vec![self.q],
            UpdateRule::Shift { shadow, .. } => {
                let mut regs = Vec::with_capacity(shadow.len() + 1);
                regs.push(self.q);
                regs.extend_from_slice(shadow);
                regs
            }
        }
    }
}
