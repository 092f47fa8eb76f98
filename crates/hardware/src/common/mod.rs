//! Common utilities and types used throughout the register chain simulator.
//!
//! This module provides fundamental building blocks shared across all
//! components of the simulator. It includes:
//! 1. **Constants:** Width bounds and reset-mode selector encodings.
//! 2. **Word Handling:** Masking helpers for fixed-width bus values.
//! 3. **Error Handling:** Configuration and stimulus-loading error types.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for configuration and stimulus loading.
pub mod error;

/// Fixed-width word masking helpers.
pub mod word;

pub use constants::{MAX_WIDTH, RST_MODE_ASYNC, RST_MODE_SYNC};
pub use error::{ConfigError, StimulusError};
