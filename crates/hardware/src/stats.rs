//! Simulation statistics collection and reporting.
//!
//! This module tracks activity metrics for a simulation run. It provides:
//! 1. **Activity counters:** Rising edges, combinational settles, and reset
//!    applications split by trigger (level vs. edge).
//! 2. **Derived metrics:** Wall-clock time and edges per second.
//! 3. **Reporting:** A plain-text table printed to stdout.

use std::time::Instant;

/// Statistics for one simulation run.
///
/// Counters are public and incremented by the simulator as it drives the
/// chain; the wall clock starts when the statistics block is created.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,

    /// Rising clock edges applied.
    pub edges: u64,

    /// Combinational settles evaluated between edges.
    pub settles: u64,

    /// Reset applications triggered by an asserted level between edges
    /// (asynchronous policy only).
    pub resets_level: u64,

    /// Reset applications sampled coincident with a rising edge
    /// (asynchronous or synchronous policy).
    pub resets_edge: u64,
}

impl SimStats {
    /// Creates a zeroed statistics block and starts the wall clock.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            edges: 0,
            settles: 0,
            resets_level: 0,
            resets_edge: 0,
        }
    }

    /// Wall-clock seconds since the statistics block was created.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// Simulated rising edges per wall-clock second.
    pub fn edges_per_sec(&self) -> f64 {
        let secs = self.elapsed_secs();
        if secs > 0.0 {
            self.edges as f64 / secs
        } else {
            0.0
        }
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        println!("==========================================================");
        println!("sim_edges                {}", self.edges);
        println!("sim_settles              {}", self.settles);
        println!("sim_resets.level         {}", self.resets_level);
        println!("sim_resets.edge          {}", self.resets_edge);
        println!("sim_seconds              {:.4}", self.elapsed_secs());
        println!("sim_edges_per_sec        {:.2}", self.edges_per_sec());
        println!("==========================================================");
    }
}

impl Default for SimStats {
    fn default() -> Self {
        Self::new()
    }
}
