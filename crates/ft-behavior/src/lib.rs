//! `ft-behavior` — the executable-behavior contract and its surroundings.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`actionable`] | `Actionable` trait — one tick of work per call            |
//! | [`context`]    | `ActionContext<'a>` — the mutable per-agent tick context  |
//! | [`nav`]        | `Navigator` trait + `DirectNavigator` reference impl      |
//! | [`hold`]       | `Hold` — a behavior that never completes                  |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                      |
//!
//! # Design notes
//!
//! Behaviors are resumable computations without a suspended call stack:
//! whatever progress a behavior has made lives in its own fields, and each
//! simulation tick hands it one [`ActionContext`] through which it may query
//! the registry, reserve cover, broadcast sounds, and steer the navigator.
//! Returning `true` from `next_cycle` is the one-shot completion signal; the
//! owning plan then fires `on_complete` and moves on.  A behavior abandoned
//! mid-flight gets `on_end` instead and must release anything it holds.

pub mod actionable;
pub mod context;
pub mod error;
pub mod hold;
pub mod nav;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use actionable::Actionable;
pub use context::ActionContext;
pub use error::{BehaviorError, BehaviorResult};
pub use hold::Hold;
pub use nav::{DirectNavigator, Navigator};
