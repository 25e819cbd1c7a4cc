//! `ft-actions` — stock behaviors for soldier agents.
//!
//! Two behaviors ship with the framework:
//!
//! - [`Wander`] — the idle/combat dual-mode default: amble between random
//!   nearby points while calm, break for cover the moment combat starts.
//! - [`FindCover`] — claim and move to the best available cover position,
//!   static node or dynamic spot.
//!
//! Both are ordinary [`Actionable`][ft_behavior::Actionable] implementations;
//! applications add their own behaviors the same way.

pub mod find_cover;
pub mod wander;

#[cfg(test)]
mod tests;

pub use find_cover::FindCover;
pub use wander::Wander;
