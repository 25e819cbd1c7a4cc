//! The driver's concrete behavior endpoint.

use ft_core::{TargetId, TeamId, Vec3};
use ft_perception::{Target, TargetBehavior};

/// Registry-facing state for one simulated soldier.
///
/// Stores what the registry pushes at it — perceived ally/enemy lists and
/// sound notifications — and derives the two signals the driver feeds into
/// the plan engine each tick: the combat flag and the nearest threat
/// position.
///
/// A heard sound raises a decaying alert: the soldier counts as in combat
/// for `sound_alert_ticks` ticks after the last notification even with no
/// enemy in engagement range, so agents investigate gunfire they cannot see.
pub struct Soldier {
    id: TargetId,
    priority: f32,
    ally_teams: Vec<TeamId>,
    enemy_teams: Vec<TeamId>,
    allies: Vec<Target>,
    enemies: Vec<Target>,
    /// Ticks of combat alertness left from the last heard sound.
    alert_ticks: u32,
    /// Alert duration granted per heard sound.
    sound_alert_ticks: u32,
    /// Combat flag as of the last `assess` call; read by observers.
    in_combat: bool,
}

impl Soldier {
    pub fn new(
        ally_teams: Vec<TeamId>,
        enemy_teams: Vec<TeamId>,
        priority: f32,
        sound_alert_ticks: u32,
    ) -> Self {
        Self {
            id: TargetId::INVALID,
            priority,
            ally_teams,
            enemy_teams,
            allies: Vec::new(),
            enemies: Vec::new(),
            alert_ticks: 0,
            sound_alert_ticks,
            in_combat: false,
        }
    }

    /// Record the registry-assigned identity.  Called once, right after
    /// registration returns it.
    pub fn set_unique_id(&mut self, id: TargetId) {
        self.id = id;
    }

    /// Externally driven targeting weight; negative hides the soldier from
    /// targeting queries at the next list refresh.
    pub fn set_target_priority(&mut self, priority: f32) {
        self.priority = priority;
    }

    // ── Driver-side tick hooks ────────────────────────────────────────────

    /// Let one tick of sound alertness elapse.
    pub fn decay_alert(&mut self) {
        self.alert_ticks = self.alert_ticks.saturating_sub(1);
    }

    /// Derive this tick's combat flag and threat position.
    ///
    /// In combat iff a perceived enemy stands strictly inside
    /// `engagement_radius` of `own_pos`, or a sound alert is still live.
    /// The threat is the nearest perceived enemy at any range (cover is
    /// taken *from* something even when it is far off); `None` with an
    /// empty enemy list.
    pub fn assess(&mut self, own_pos: Vec3, engagement_radius: f32) -> (bool, Option<Vec3>) {
        let nearest = self
            .enemies
            .iter()
            .map(|t| t.position())
            .min_by(|a, b| {
                a.distance_sq(own_pos)
                    .partial_cmp(&b.distance_sq(own_pos))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        let engaged = nearest
            .map(|p| p.distance_sq(own_pos) < engagement_radius * engagement_radius)
            .unwrap_or(false);

        self.in_combat = engaged || self.alert_ticks > 0;
        (self.in_combat, nearest)
    }

    /// Combat flag as of the last [`assess`][Self::assess] call.
    pub fn in_combat(&self) -> bool {
        self.in_combat
    }

    /// Perceived allies as of the last registry refresh (includes self).
    pub fn allies(&self) -> &[Target] {
        &self.allies
    }

    /// Perceived enemies as of the last registry refresh.
    pub fn enemies(&self) -> &[Target] {
        &self.enemies
    }

    /// Remaining sound-alert ticks.
    pub fn alert_ticks(&self) -> u32 {
        self.alert_ticks
    }
}

impl TargetBehavior for Soldier {
    fn unique_id(&self) -> TargetId {
        self.id
    }

    fn target_priority(&self) -> f32 {
        self.priority
    }

    fn ally_teams(&self) -> &[TeamId] {
        &self.ally_teams
    }

    fn enemy_teams(&self) -> &[TeamId] {
        &self.enemy_teams
    }

    fn update_perceived_lists(&mut self, allies: Vec<Target>, enemies: Vec<Target>) {
        self.allies = allies;
        self.enemies = enemies;
    }

    fn hear_sound(&mut self, _position: Vec3) {
        self.alert_ticks = self.sound_alert_ticks;
    }
}
