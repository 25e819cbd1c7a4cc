//! `ft-perception` — the shared perception & coordination registry.
//!
//! Every agent in a fireteam simulation registers here.  The registry is the
//! single source of truth for who exists, which team they are on, and where
//! they are; it pushes filtered ally/enemy views to each agent, relays sound
//! events, and arbitrates the use of cover positions.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`target`]   | `Target` record, `TargetBehavior` trait, shared handles  |
//! | [`registry`] | `Registry` — membership, queries, sound broadcast        |
//! | [`cover`]    | `CoverNode`, `CoverBoard` — inventory + reservations     |
//! | [`loader`]   | CSV cover-marker loader                                  |
//! | [`error`]    | `PerceptionError`, `PerceptionResult<T>`                 |
//!
//! # Threading model
//!
//! Strictly single-threaded and cooperative: all registry state is mutated
//! from one simulation thread, one agent at a time, so shared handles are
//! `Rc`/`RefCell` rather than `Arc`/`Mutex`.  The one discipline callers and
//! implementors must keep: the registry never holds a `RefCell` borrow
//! across an endpoint callback, and endpoint callbacks must not call back
//! into the registry.

pub mod cover;
pub mod error;
pub mod loader;
pub mod registry;
pub mod target;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cover::{CoverBoard, CoverNode};
pub use error::{PerceptionError, PerceptionResult};
pub use loader::{load_cover_nodes_csv, load_cover_nodes_reader};
pub use registry::Registry;
pub use target::{BehaviorHandle, SharedPos, Target, TargetBehavior};
