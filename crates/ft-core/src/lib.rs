//! `ft-core` — foundational types for the `rust_ft` fireteam AI framework.
//!
//! This crate is a dependency of every other `ft-*` crate.  It intentionally
//! has no `ft-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `TargetId`, `TeamId`, `CoverId`                   |
//! | [`vec3`]    | `Vec3`, squared-distance math                     |
//! | [`time`]    | `Tick`, `SimConfig`                               |
//! | [`rng`]     | `AgentRng` (per-agent), `SimRng` (global)         |
//! | [`error`]   | `FtError`, `FtResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vec3;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FtError, FtResult};
pub use ids::{CoverId, TargetId, TeamId};
pub use rng::{AgentRng, SimRng};
pub use time::{SimConfig, Tick};
pub use vec3::Vec3;
