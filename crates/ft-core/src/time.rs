//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter driven by a single
//! logical clock: one tick = one AI cycle for every agent.  There are no
//! per-agent timers; anything that decays (sound alerts, refresh cadence)
//! counts ticks of the shared clock.  Integer ticks keep all cadence
//! arithmetic exact and comparisons O(1).

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64`; at 60 ticks/second a u64 lasts ~9.7 billion years, so
/// overflow is not a practical concern.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built literally by the application (or deserialized from
/// TOML/JSON with the `serde` feature) and handed to the simulation driver.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Re-push perceived ally/enemy lists to every agent every N ticks, on
    /// top of the automatic refresh at membership changes.  Needed when
    /// target priorities churn between registrations.  0 = membership
    /// changes only.
    pub refresh_interval_ticks: u64,

    /// Invoke the observer's snapshot hook every N ticks.  0 = never.
    pub snapshot_interval_ticks: u64,

    /// An agent whose perceived enemy is closer than this is in combat.
    pub engagement_radius: f32,

    /// How many ticks a heard sound keeps an agent alert (and therefore in
    /// combat) after the last notification.
    pub sound_alert_ticks: u32,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }
}
