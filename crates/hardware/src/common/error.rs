//! Error definitions for the register chain simulator.
//!
//! This module defines the two failure surfaces of the simulator:
//! 1. **Configuration Errors:** Invalid static parameters, detected once at
//!    construction and never retried.
//! 2. **Stimulus Errors:** I/O or parse failures while loading a stimulus
//!    program from disk.
//!
//! The model itself has no runtime error conditions: once a chain is
//! constructed, every evaluation and clock edge is total.

use thiserror::Error;

use crate::common::constants::MAX_WIDTH;

/// Invalid static configuration, rejected at construction time.
///
/// The parameter space is exhaustively enumerated when a chain is built;
/// a configuration that fails here must not be instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The datapath width was zero; a bus carries at least one bit.
    #[error("invalid configuration: datapath width must be at least 1 bit")]
    ZeroWidth,

    /// The datapath width exceeds the model's `u64` value domain.
    #[error("invalid configuration: width {0} exceeds the {MAX_WIDTH}-bit maximum")]
    WidthTooLarge(u32),
}

/// Failure while loading a stimulus program from disk.
#[derive(Debug, Error)]
pub enum StimulusError {
    /// The stimulus file could not be read.
    #[error("failed to read stimulus file: {0}")]
    Io(#[from] std::io::Error),

    /// The stimulus file is not valid JSON or does not match the schema.
    #[error("malformed stimulus file: {0}")]
    Parse(#[from] serde_json::Error),
}
