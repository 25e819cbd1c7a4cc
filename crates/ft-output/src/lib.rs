//! `ft-output` — recording simulation runs.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`row`]      | `AgentSnapshotRow`, `TickSummaryRow` plain data rows   |
//! | [`writer`]   | `OutputWriter` backend trait                           |
//! | [`csv`]      | `CsvWriter` — two-file CSV backend                     |
//! | [`observer`] | `SimOutputObserver<W>` — `SimObserver` → writer bridge |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                       |
//!
//! Wire-up: build a writer, wrap it in [`SimOutputObserver`], pass that to
//! `Sim::run`, then check [`SimOutputObserver::take_error`] after the run.

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
