//! `ft-plan` — goals and the plan execution engine.
//!
//! # Crate layout
//!
//! | Module    | Contents                                        |
//! |-----------|-------------------------------------------------|
//! | [`goal`]  | `Goal` — identity-compared objective handle     |
//! | [`plan`]  | `Plan` — ordered actions, one step per tick     |
//! | [`error`] | `PlanError`, `PlanResult<T>`                    |
//!
//! # Execution model
//!
//! A plan is a fixed, ordered sequence of
//! [`Actionable`][ft_behavior::Actionable]s plus a cursor.  The driver calls
//! [`Plan::next_cycle`] once per tick; exactly one action runs per call.
//! The cursor only ever moves forward, one slot per completed action, and a
//! finished plan refuses further cycles with a typed error instead of
//! wrapping or clamping.

pub mod error;
pub mod goal;
pub mod plan;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{PlanError, PlanResult};
pub use goal::Goal;
pub use plan::Plan;
