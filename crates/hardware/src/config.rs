//! Configuration system for the register chain simulator.
//!
//! This module defines the static parameters that shape a chain instance.
//! It provides:
//! 1. **Defaults:** Baseline width and depth used when not explicitly set.
//! 2. **Structures:** The `ChainConfig` parameter block with construction-time
//!    validation.
//! 3. **Enums:** The reset-mode policy, including the raw hardware selector
//!    mapping.
//!
//! Configuration is supplied via JSON (CLI `--config` files, harness scripts)
//! or built in code with `ChainConfig::default()` / `ChainConfig::new`.

use serde::Deserialize;

use crate::common::constants::{MAX_WIDTH, RST_MODE_ASYNC, RST_MODE_SYNC};
use crate::common::error::ConfigError;
use crate::common::word;

/// Default configuration constants for the simulator.
mod defaults {
    /// Default datapath width in bits.
    pub const WIDTH: u32 = 8;

    /// Default pipeline depth in register stages.
    pub const STAGES: u32 = 2;
}

/// Reset policy of the register chain.
///
/// Selects when, if ever, an asserted reset loads the static fill value into
/// the chain. The policy is fixed at construction and shapes the update rule
/// once; it is never re-examined per edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ResetMode {
    /// Level-sensitive reset: takes effect immediately whenever the reset
    /// line is asserted, independent of the clock, and also at any clock
    /// edge on which it is still asserted.
    #[default]
    #[serde(alias = "async")]
    Async,

    /// Edge-sampled reset: takes effect only when the reset line is asserted
    /// coincident with a rising clock edge. Assertion between edges has no
    /// observable effect.
    #[serde(alias = "sync")]
    Sync,

    /// Reset line ignored entirely; every rising edge shifts data through the
    /// chain regardless of the reset level.
    #[serde(alias = "none", alias = "Off")]
    None,
}

impl ResetMode {
    /// Maps a raw hardware mode selector to a reset policy.
    ///
    /// Selector `0` is `Async` and `1` is `Sync`. Any other value — including
    /// negative ones — collapses to `None`. The out-of-range fallback is the
    /// component's observed behavior and is preserved rather than rejected.
    ///
    /// # Arguments
    ///
    /// * `raw` - The integer selector as wired at instantiation time.
    ///
    /// # Returns
    ///
    /// The reset policy the selector encodes.
    pub fn from_selector(raw: i64) -> Self {
        match raw {
            RST_MODE_ASYNC => Self::Async,
            RST_MODE_SYNC => Self::Sync,
            _ => Self::None,
        }
    }

    /// Whether an asserted reset is honored at a rising clock edge.
    pub(crate) fn acts_on_edge(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Static parameters of a register chain instance.
///
/// Fixed at construction, immutable thereafter. Validation runs once when the
/// chain is built; see [`ChainConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Datapath width in bits, `1..=64`.
    pub width: u32,

    /// Number of register stages; `0` configures a combinational passthrough.
    pub stages: u32,

    /// Reset policy.
    pub reset_mode: ResetMode,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            width: defaults::WIDTH,
            stages: defaults::STAGES,
            reset_mode: ResetMode::default(),
        }
    }
}

impl ChainConfig {
    /// Builds a validated configuration.
    ///
    /// # Arguments
    ///
    /// * `width` - Datapath width in bits.
    /// * `stages` - Number of register stages (`0` = passthrough).
    /// * `reset_mode` - Reset policy.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `width` is zero or wider than the model's
    /// value domain.
    pub fn new(width: u32, stages: u32, reset_mode: ResetMode) -> Result<Self, ConfigError> {
        let config = Self {
            width,
            stages,
            reset_mode,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the parameter block for representability.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroWidth` for a zero-bit datapath and
    /// `ConfigError::WidthTooLarge` for widths beyond 64 bits. Any stage
    /// count is representable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.width > MAX_WIDTH {
            return Err(ConfigError::WidthTooLarge(self.width));
        }
        Ok(())
    }

    /// Bit mask covering the configured datapath width.
    pub fn mask(&self) -> u64 {
        word::mask(self.width)
    }
}
