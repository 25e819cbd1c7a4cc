//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ft_core::Tick;
use ft_perception::Registry;
use ft_sim::{SimAgent, SimObserver};

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes agent snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer: W,
    last_active: usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_active: 0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, _tick: Tick, active: usize) {
        // Summaries are written with the snapshot so both files share a
        // cadence; remember the latest activity count until then.
        self.last_active = active;
    }

    fn on_snapshot(&mut self, tick: Tick, registry: &Registry, agents: &[SimAgent]) {
        let rows: Vec<AgentSnapshotRow> = agents
            .iter()
            .map(|agent| {
                let pos = agent.position.get();
                AgentSnapshotRow {
                    target_id: agent.id.0,
                    tick: tick.0,
                    team: agent.team.0,
                    x: pos.x,
                    y: pos.y,
                    z: pos.z,
                    in_combat: agent.soldier.borrow().in_combat(),
                    progress_percent: agent.plan.progress_percent(),
                    action: agent.plan.current_action_name().unwrap_or("done"),
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }

        let summary = TickSummaryRow {
            tick: tick.0,
            active_agents: self.last_active as u64,
            registered_targets: registry.len() as u64,
            reserved_spots: registry.reserved_spot_count() as u64,
        };
        let result = self.writer.write_tick_summary(&summary);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
