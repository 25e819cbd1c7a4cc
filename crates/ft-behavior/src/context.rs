//! The mutable per-agent tick context handed to every behavior callback.

use ft_core::{AgentRng, TargetId, Tick, Vec3};
use ft_perception::{Registry, SharedPos};

use crate::nav::Navigator;

/// Everything one agent's current action may touch during one tick.
///
/// Built by the driver immediately before each `Plan::next_cycle` call and
/// torn down right after; the registry borrow makes two agents' cycles
/// impossible to interleave, which is what the advisory cover-reservation
/// protocol relies on.
///
/// Unlike a read-only snapshot, the context is deliberately mutable: actions
/// reserve and release cover spots and broadcast sounds synchronously inside
/// their cycle, and those effects must be visible to the next agent ticked
/// in the same frame.
pub struct ActionContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Identity of the agent being cycled.
    pub agent: TargetId,

    /// The agent's live world position handle.
    pub position: SharedPos,

    /// Position of the nearest perceived enemy, if any — computed by the
    /// driver from the agent's perceived list before the cycle.  Combat
    /// behaviors treat this as "the threat".
    pub threat: Option<Vec3>,

    /// The shared perception & coordination registry.
    pub registry: &'a mut Registry,

    /// The agent's navigation endpoint.
    pub nav: &'a mut dyn Navigator,

    /// The agent's private deterministic RNG stream.
    pub rng: &'a mut AgentRng,
}

impl ActionContext<'_> {
    /// Current world position (reads the live handle).
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position.get()
    }
}
