//! `ft-sim` — tick loop driver for the rust_ft framework.
//!
//! # Per-tick sequence
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Refresh   — on the configured cadence, re-push every agent's
//!                 perceived ally/enemy lists (membership changes refresh
//!                 on their own, inside the registry).
//!   ② Per agent — decay the sound alert, read the combat flag and nearest
//!                 threat from the soldier, then run one Plan::next_cycle
//!                 (skipped once the plan is done) and one navigator step.
//! ```
//!
//! Everything runs on one thread; an agent's cycle sees the registry effects
//! (reservations, broadcasts) of every agent ticked before it in the same
//! frame.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ft_actions::Wander;
//! use ft_perception::CoverBoard;
//! use ft_sim::{NoopObserver, Sim, SoldierSpec};
//!
//! let mut sim = Sim::new(config, CoverBoard::empty(3.0));
//! sim.spawn(spec, None, vec![Box::new(Wander::new(10.0))])?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod error;
pub mod observer;
pub mod sim;
pub mod soldier;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, SimAgent, SoldierSpec};
pub use soldier::Soldier;
