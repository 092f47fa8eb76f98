//! Input-pin samples for the register chain.
//!
//! The chain is driven by discrete evaluations — combinational settles and
//! rising clock edges — and each evaluation observes one sample of the input
//! pins. The sample carries the data bus, the active-low reset level, and the
//! reset fill value presented at that instant.

/// One sample of the chain's input pins.
///
/// `reset_data` is re-read at every reset application; the chain never stores
/// it between events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortSignals {
    /// Data input bus. Truncated to the configured width on capture.
    pub d: u64,

    /// Active-low reset level; `false` means the reset is asserted.
    pub rst_n: bool,

    /// Fill value loaded into every stage and the output when reset applies.
    pub reset_data: u64,
}

impl Default for PortSignals {
    /// Idle pins: zero data, reset deasserted.
    fn default() -> Self {
        Self {
            d: 0,
            rst_n: true,
            reset_data: 0,
        }
    }
}

impl PortSignals {
    /// Sample driving `d` with reset deasserted.
    pub fn data(d: u64) -> Self {
        Self {
            d,
            ..Self::default()
        }
    }

    /// Sample asserting reset with the given fill value.
    pub fn reset(reset_data: u64) -> Self {
        Self {
            d: 0,
            rst_n: false,
            reset_data,
        }
    }

    /// Whether the active-low reset line is asserted in this sample.
    pub(crate) fn reset_asserted(self) -> bool {
        !self.rst_n
    }
}
