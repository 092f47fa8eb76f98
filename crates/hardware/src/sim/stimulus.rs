//! Stimulus programs and loading.
//!
//! A stimulus program is the scripted input side of a test bench: one pin
//! sample per clock cycle, replayed in order by the simulator. This module
//! performs:
//! 1. **Schema:** The `Step`/`Stimulus` structures deserialized from JSON.
//! 2. **Loading:** Reading a program from disk with error reporting.
//! 3. **Construction:** Building simple data-only programs in code.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::StimulusError;
use crate::core::PortSignals;

/// One scripted clock cycle: the pin levels driven for that cycle.
///
/// In JSON, `rst_n` defaults to deasserted (`true`) and `reset_data` to zero,
/// so a plain data sequence is written as `{"d": 17}` per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Step {
    /// Data driven onto the input bus for this cycle.
    pub d: u64,

    /// Active-low reset level for this cycle; deasserted when omitted.
    #[serde(default = "default_rst_n")]
    pub rst_n: bool,

    /// Reset fill value presented for this cycle.
    #[serde(default)]
    pub reset_data: u64,
}

fn default_rst_n() -> bool {
    true
}

impl Step {
    /// The pin sample this step drives.
    pub fn pins(&self) -> PortSignals {
        PortSignals {
            d: self.d,
            rst_n: self.rst_n,
            reset_data: self.reset_data,
        }
    }
}

/// A stimulus program: pin samples replayed one per clock cycle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Stimulus {
    /// The scripted cycles, in replay order.
    pub steps: Vec<Step>,
}

impl Stimulus {
    /// Loads a stimulus program from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the program file.
    ///
    /// # Errors
    ///
    /// Returns `StimulusError::Io` if the file cannot be read and
    /// `StimulusError::Parse` if it does not match the schema.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, StimulusError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Builds a data-only program: one step per value, reset deasserted.
    ///
    /// # Arguments
    ///
    /// * `values` - The data sequence to drive, one value per cycle.
    pub fn from_values(values: &[u64]) -> Self {
        Self {
            steps: values
                .iter()
                .map(|&d| Step {
                    d,
                    rst_n: true,
                    reset_data: 0,
                })
                .collect(),
        }
    }

    /// Number of scripted cycles.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the program scripts no cycles.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
