//! Simulation observer trait for progress reporting and data collection.

use ft_core::Tick;
use ft_perception::Registry;

use crate::sim::SimAgent;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, active: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {active} agents still executing plans");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `active` is the number of agents whose plan was still unfinished and
    /// therefore received a cycle this tick.
    fn on_tick_end(&mut self, _tick: Tick, _active: usize) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`).
    ///
    /// Provides read-only access to the registry and the full agent list so
    /// output writers can record positions and plan progress without the sim
    /// knowing about any specific output format.
    fn on_snapshot(&mut self, _tick: Tick, _registry: &Registry, _agents: &[SimAgent]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
