//! Target records and the behavior-side endpoint trait.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ft_core::{TargetId, TeamId, Vec3};

/// A live, non-owning handle to an agent's world position.
///
/// The world/driver layer owns and mutates the position; the registry and
/// behavior code only read it.  `Rc<Cell<..>>` is sufficient because the
/// whole simulation runs on one thread.
pub type SharedPos = Rc<Cell<Vec3>>;

/// Shared, mutably borrowable handle to a [`TargetBehavior`] endpoint.
pub type BehaviorHandle = Rc<RefCell<dyn TargetBehavior>>;

/// The behavior-side interface of a registered agent.
///
/// The registry pushes perception updates and sound notifications through
/// this trait and reads the agent's team configuration and priority from it.
/// Implementations live with the driver (see `ft-sim`'s `Soldier`) or in
/// application code.
///
/// # Re-entrancy
///
/// Methods are invoked while the registry iterates its own target list.
/// Implementations must not call back into the registry; store what you need
/// and act on it in your next behavior cycle.
pub trait TargetBehavior {
    /// The identity the registry assigned at registration.
    fn unique_id(&self) -> TargetId;

    /// Targeting weight, externally driven and mutable over the agent's life.
    ///
    /// Negative values hide the agent from every targeting query while it
    /// stays registered (it still hears sounds and still counts for
    /// membership bookkeeping).
    fn target_priority(&self) -> f32;

    /// Teams this agent treats as allied.  Read during each list refresh.
    fn ally_teams(&self) -> &[TeamId];

    /// Teams this agent treats as hostile.  Read during each list refresh.
    fn enemy_teams(&self) -> &[TeamId];

    /// Receive this agent's recomputed ally and enemy views.
    ///
    /// Called by the registry after every membership change and on the
    /// driver's refresh cadence.  The lists are snapshots: cheap clones of
    /// the matching `Target` records, valid until the next refresh.
    fn update_perceived_lists(&mut self, allies: Vec<Target>, enemies: Vec<Target>);

    /// A sound reached this agent.  Fire-and-forget; no acknowledgment.
    fn hear_sound(&mut self, position: Vec3);
}

/// One registered agent as the registry sees it.
///
/// Cloning is cheap (two `Rc` bumps) — filtered query results are vectors of
/// cloned records, and perceived lists hold them across ticks.
#[derive(Clone)]
pub struct Target {
    /// Registry-assigned identity; the sole identity key.
    pub id: TargetId,
    /// Externally assigned team, constant for the agent's lifetime.
    pub team: TeamId,
    /// Live world position handle.
    pub position: SharedPos,
    /// The agent's behavior endpoint.
    pub behavior: BehaviorHandle,
}

impl Target {
    /// Current world position (reads the live handle).
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position.get()
    }

    /// Current targeting priority (briefly borrows the endpoint).
    #[inline]
    pub fn priority(&self) -> f32 {
        self.behavior.borrow().target_priority()
    }
}

impl std::fmt::Debug for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Target")
            .field("id", &self.id)
            .field("team", &self.team)
            .field("position", &self.position.get())
            .finish_non_exhaustive()
    }
}
