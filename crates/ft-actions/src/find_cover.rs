//! Claim a cover position and move to it.

use tracing::debug;

use ft_behavior::{ActionContext, Actionable};
use ft_core::Vec3;

/// How far past the agent a fallback dynamic spot is projected, away from
/// the threat.
const DYNAMIC_FALLBACK_DISTANCE: f32 = 6.0;

/// Random jitter applied to a fallback spot so contending agents spread out
/// instead of re-rolling the same blocked position every tick.
const DYNAMIC_JITTER: f32 = 2.0;

/// Move to the best available cover position, static node or dynamic spot.
///
/// # Selection
///
/// The nearest static cover node within `max_range` whose position is not
/// already claimed wins.  With every node taken (or none authored), the
/// behavior falls back to a dynamic spot: a jittered point projected away
/// from the threat.  Either way the position is claimed through the
/// registry's reservation protocol — checked and reserved back to back,
/// within the same cycle, which is what makes the advisory protocol hold up.
///
/// If even the fallback spot is contended the cycle gives up and retries
/// next tick with a fresh jitter roll.
///
/// # Reservation lifetime
///
/// Completion (arrival) keeps the reservation: the agent now occupies the
/// spot, and releasing it would invite someone else to converge on the same
/// ground.  The reservation is released when the action is ended — which is
/// why owners must route interruption through `Plan::end_action`, and why
/// [`Wander`][crate::Wander] forwards `on_end` to the instance it spawned.
pub struct FindCover {
    threat: Vec3,
    max_range: f32,
    reserved: Option<Vec3>,
    /// Arrival threshold on the navigator's remaining distance.
    arrive_distance: f32,
}

impl FindCover {
    pub fn new(threat: Vec3, max_range: f32) -> Self {
        Self {
            threat,
            max_range,
            reserved: None,
            arrive_distance: 0.5,
        }
    }

    /// Pick and claim a spot, or `None` if everything is contended this tick.
    fn claim_spot(&self, ctx: &mut ActionContext<'_>) -> Option<Vec3> {
        let here = ctx.position();

        // Nearest unclaimed static node first.
        let candidates: Vec<Vec3> = ctx
            .registry
            .cover_nodes_near(here, self.max_range)
            .iter()
            .map(|n| n.position)
            .collect();
        if let Some(pos) = candidates
            .into_iter()
            .find(|p| !ctx.registry.is_spot_reserved(*p))
        {
            ctx.registry.reserve_spot(pos);
            return Some(pos);
        }

        // Fallback: a jittered point away from the threat.  If the agent is
        // standing on the threat the direction is arbitrary.
        let away = (here - self.threat)
            .normalized()
            .unwrap_or(Vec3::new(1.0, 0.0, 0.0));
        let jitter = Vec3::new(
            ctx.rng.gen_range(-DYNAMIC_JITTER..DYNAMIC_JITTER),
            0.0,
            ctx.rng.gen_range(-DYNAMIC_JITTER..DYNAMIC_JITTER),
        );
        let candidate = here + away * DYNAMIC_FALLBACK_DISTANCE + jitter;

        if ctx.registry.is_spot_reserved(candidate) {
            return None;
        }
        ctx.registry.reserve_spot(candidate);
        Some(candidate)
    }
}

impl Actionable for FindCover {
    fn next_cycle(&mut self, _in_combat: bool, ctx: &mut ActionContext<'_>) -> bool {
        match self.reserved {
            None => {
                if let Some(spot) = self.claim_spot(ctx) {
                    debug!(agent = %ctx.agent, spot = %spot, "claimed cover spot");
                    ctx.nav.set_destination(spot);
                    self.reserved = Some(spot);
                }
                false
            }
            Some(_) => {
                !ctx.nav.path_pending() && ctx.nav.remaining_distance() < self.arrive_distance
            }
        }
    }

    fn on_complete(&mut self, ctx: &mut ActionContext<'_>) {
        debug!(agent = %ctx.agent, "reached cover");
    }

    fn on_end(&mut self, ctx: &mut ActionContext<'_>) {
        if let Some(spot) = self.reserved.take() {
            ctx.registry.release_spot(spot);
            debug!(agent = %ctx.agent, spot = %spot, "left cover, reservation released");
        }
    }

    fn name(&self) -> &'static str {
        "find_cover"
    }
}
