//! Register chain core.
//!
//! This module contains the behavioral model of the clocked register chain
//! and the input-pin sampling type used to drive it.

/// The register chain model and its update rules.
pub mod chain;

/// Input-pin samples presented to the chain per evaluation.
pub mod signals;

pub use self::chain::RegisterChain;
pub use self::signals::PortSignals;
