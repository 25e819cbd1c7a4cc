//! The `Registry` — membership, filtered queries, and sound broadcast.

use ft_core::{TargetId, TeamId, Vec3};

use crate::cover::{CoverBoard, CoverNode};
use crate::target::{BehaviorHandle, SharedPos, Target};

/// Shared perception & coordination registry.
///
/// Owns the set of all registered [`Target`]s and the [`CoverBoard`].
/// Constructed once, before any agent, and passed by `&mut` to whoever needs
/// it (the driver, action contexts) — there is no global instance.
///
/// # Identity
///
/// `TargetId`s are allocated strictly increasing, starting at 1, and never
/// reused.  Removal is always by identity, never by position in the list.
///
/// # Priority filter
///
/// Targets whose `target_priority()` is negative are invisible to every
/// *targeting* query ([`targets_on_teams`][Self::targets_on_teams],
/// [`targets_on_teams_within`][Self::targets_on_teams_within]) but remain
/// registered: they keep hearing sounds and [`all_targets`][Self::all_targets]
/// still returns them.
pub struct Registry {
    targets: Vec<Target>,
    /// Last allocated id; 0 means none handed out yet.
    next_id: u32,
    cover: CoverBoard,
}

impl Registry {
    /// Create a registry over a fixed cover inventory.
    pub fn new(cover: CoverBoard) -> Self {
        Self {
            targets: Vec::new(),
            next_id: 0,
            cover,
        }
    }

    // ── Membership ────────────────────────────────────────────────────────

    /// Register a new agent and return its identity.
    ///
    /// Before returning, every registered agent's perceived lists are
    /// recomputed, so the newcomer is visible to others (and others to it)
    /// by the time the caller proceeds.
    pub fn add_target(
        &mut self,
        team: TeamId,
        position: SharedPos,
        behavior: BehaviorHandle,
    ) -> TargetId {
        self.next_id += 1;
        let id = TargetId(self.next_id);
        self.targets.push(Target { id, team, position, behavior });
        self.refresh_perceived_lists();
        id
    }

    /// Deregister the agent with identity `id`.
    ///
    /// Removal triggers the same full list refresh as registration.  An
    /// unknown (or already removed) id is a silent no-op — callers cannot
    /// distinguish "removed" from "was already absent", by design.
    pub fn remove_target(&mut self, id: TargetId) {
        if let Some(idx) = self.targets.iter().position(|t| t.id == id) {
            self.targets.remove(idx);
            self.refresh_perceived_lists();
        }
    }

    /// Number of registered targets (all priorities).
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    // ── List refresh ──────────────────────────────────────────────────────

    /// Recompute and push every agent's perceived ally and enemy lists.
    ///
    /// This is the synchronization point that keeps each agent's local view
    /// consistent with registry state.  Runs automatically on membership
    /// changes; the driver may also call it on a fixed cadence when target
    /// priorities churn between registrations.  Cost is O(N²) — fine for
    /// squad-sized populations.
    pub fn refresh_perceived_lists(&mut self) {
        for i in 0..self.targets.len() {
            // Copy the team sets out first so no endpoint borrow is held
            // while the filtered queries briefly borrow every endpoint
            // (including this one) for its priority.
            let (ally_ids, enemy_ids) = {
                let behavior = self.targets[i].behavior.borrow();
                (behavior.ally_teams().to_vec(), behavior.enemy_teams().to_vec())
            };
            let allies = self.targets_on_teams(&ally_ids);
            let enemies = self.targets_on_teams(&enemy_ids);
            self.targets[i]
                .behavior
                .borrow_mut()
                .update_perceived_lists(allies, enemies);
        }
    }

    // ── Filtered queries ──────────────────────────────────────────────────

    /// All positive-priority targets whose team is in `teams`.
    ///
    /// Duplicate entries in `teams` are harmless: a target matching several
    /// of them is still returned once.
    pub fn targets_on_teams(&self, teams: &[TeamId]) -> Vec<Target> {
        self.targets
            .iter()
            .filter(|t| teams.contains(&t.team) && t.priority() >= 0.0)
            .cloned()
            .collect()
    }

    /// Like [`targets_on_teams`][Self::targets_on_teams], restricted to
    /// targets strictly inside `radius` of `origin`.
    ///
    /// The boundary is exclusive: a target exactly `radius` away is not
    /// returned.
    pub fn targets_on_teams_within(
        &self,
        teams: &[TeamId],
        radius: f32,
        origin: Vec3,
    ) -> Vec<Target> {
        let radius_sq = radius * radius;
        self.targets
            .iter()
            .filter(|t| {
                teams.contains(&t.team)
                    && t.priority() >= 0.0
                    && t.position().distance_sq(origin) < radius_sq
            })
            .cloned()
            .collect()
    }

    /// Every registered target, regardless of team, priority, or distance.
    ///
    /// The only query that bypasses the priority filter.
    pub fn all_targets(&self) -> &[Target] {
        &self.targets
    }

    // ── Sound propagation ─────────────────────────────────────────────────

    /// Notify every target strictly inside `radius` of a sound at `position`.
    ///
    /// Hearing is not targeting: negative-priority targets are notified like
    /// anyone else.  The broadcast is synchronous and fire-and-forget; all
    /// `hear_sound` callbacks complete before this returns.
    pub fn broadcast_sound(&self, position: Vec3, radius: f32) {
        let radius_sq = radius * radius;
        for target in &self.targets {
            if target.position().distance_sq(position) < radius_sq {
                target.behavior.borrow_mut().hear_sound(position);
            }
        }
    }

    /// Like [`broadcast_sound`][Self::broadcast_sound], but only targets on
    /// one of `teams` are notified.
    ///
    /// A target is notified at most once per call even when several entries
    /// in `teams` match its team.  Priority is still not consulted.
    pub fn broadcast_sound_to_teams(&self, position: Vec3, radius: f32, teams: &[TeamId]) {
        let radius_sq = radius * radius;
        for target in &self.targets {
            if teams.contains(&target.team)
                && target.position().distance_sq(position) < radius_sq
            {
                target.behavior.borrow_mut().hear_sound(position);
            }
        }
    }

    // ── Cover coordination (delegated to the CoverBoard) ──────────────────

    /// True if an existing dynamic reservation lies within the similarity
    /// threshold of `position`.
    pub fn is_spot_reserved(&self, position: Vec3) -> bool {
        self.cover.is_spot_reserved(position)
    }

    /// Record a dynamic cover reservation at `position`.
    ///
    /// Unconditional append: the registry does not enforce exclusivity.
    /// Callers are expected to check [`is_spot_reserved`][Self::is_spot_reserved]
    /// immediately beforehand, within the same tick.
    pub fn reserve_spot(&mut self, position: Vec3) {
        self.cover.reserve(position);
    }

    /// Release one reservation exactly equal to `position`.
    ///
    /// Removes at most one entry even if duplicates exist; an unknown
    /// position is a silent no-op.
    pub fn release_spot(&mut self, position: Vec3) {
        self.cover.release(position);
    }

    /// Number of outstanding dynamic reservations (duplicates counted).
    pub fn reserved_spot_count(&self) -> usize {
        self.cover.reserved_count()
    }

    /// The fixed static cover inventory.
    pub fn cover_nodes(&self) -> &[CoverNode] {
        self.cover.nodes()
    }

    /// Static cover nodes strictly inside `max_range` of `origin`, sorted
    /// ascending by distance.
    pub fn cover_nodes_near(&self, origin: Vec3, max_range: f32) -> Vec<&CoverNode> {
        self.cover.nodes_near(origin, max_range)
    }

    /// The closest static cover node to `origin`, if any exist.
    pub fn nearest_cover_node(&self, origin: Vec3) -> Option<&CoverNode> {
        self.cover.nearest_node(origin)
    }
}
