//! Constants shared across the register chain simulator.

/// Widest datapath the model can represent.
///
/// Bus values are carried in a `u64`, so a chain may be configured with at
/// most 64 data bits. Wider requests are rejected at construction time.
pub const MAX_WIDTH: u32 = 64;

/// Raw reset-mode selector encoding for the asynchronous (level-sensitive) policy.
pub const RST_MODE_ASYNC: i64 = 0;

/// Raw reset-mode selector encoding for the synchronous (edge-sampled) policy.
pub const RST_MODE_SYNC: i64 = 1;
