//! The backend trait output observers write through.

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::OutputResult;

/// A sink for simulation output rows.
///
/// Implementations buffer as they see fit; `finish` must flush everything
/// and is idempotent.
pub trait OutputWriter {
    /// Write one tick's batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one tick's summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close.  Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
