//! The idle/combat dual-mode default behavior.

use tracing::debug;

use ft_behavior::{ActionContext, Actionable};
use ft_core::Vec3;

use crate::find_cover::FindCover;

/// Amble between random nearby points while calm; break for cover in combat.
///
/// # Idle path
///
/// Lazily picks a destination uniformly inside the square of side
/// 2 × `wander_distance` centered on the agent's current position (height
/// preserved), then holds it until the path is roughly 90 % walked
/// (remaining distance below `wander_distance / 10` with no path pending),
/// at which point the next cycle picks a fresh destination.  This is an
/// unbounded loop: the idle path never completes the action.
///
/// # Combat path
///
/// Delegates entirely to a privately owned [`FindCover`] sub-action, created
/// on the first combat cycle (aimed at the current threat) and reused on
/// every later one.  Both the combat flag and the completion result pass
/// through, so reaching cover completes the whole `Wander` action.
///
/// The sub-action is never exposed to the plan; `Wander` forwards
/// `on_complete` and `on_end` to it, which is what guarantees a cover
/// reservation taken mid-combat is released when this action is interrupted.
pub struct Wander {
    wander_distance: f32,
    have_wander_point: bool,
    find_cover: Option<FindCover>,
    last_ran_idle: bool,
    first_run: bool,
}

impl Wander {
    pub fn new(wander_distance: f32) -> Self {
        Self {
            wander_distance,
            have_wander_point: false,
            find_cover: None,
            last_ran_idle: false,
            first_run: true,
        }
    }

    fn idle_cycle(&mut self, ctx: &mut ActionContext<'_>) -> bool {
        if !self.have_wander_point {
            let here = ctx.position();
            let dest = Vec3::new(
                here.x + ctx.rng.gen_range(-self.wander_distance..self.wander_distance),
                here.y,
                here.z + ctx.rng.gen_range(-self.wander_distance..self.wander_distance),
            );
            ctx.nav.set_destination(dest);
            self.have_wander_point = true;
        } else if !ctx.nav.path_pending()
            && ctx.nav.remaining_distance() < self.wander_distance / 10.0
        {
            // Close enough: trigger a fresh pick next cycle.
            self.have_wander_point = false;
        }
        false
    }

    fn combat_cycle(&mut self, ctx: &mut ActionContext<'_>) -> bool {
        let find_cover = self.find_cover.get_or_insert_with(|| {
            // No known threat position (pure sound alert): cover from where
            // the agent stands.
            let threat = ctx.threat.unwrap_or_else(|| ctx.position.get());
            FindCover::new(threat, f32::MAX)
        });
        find_cover.next_cycle(true, ctx)
    }
}

impl Actionable for Wander {
    fn next_cycle(&mut self, in_combat: bool, ctx: &mut ActionContext<'_>) -> bool {
        if self.first_run {
            debug!(agent = %ctx.agent, distance = self.wander_distance, "starting to wander");
            self.first_run = false;
            self.last_ran_idle = !in_combat;
        }
        if in_combat {
            if self.last_ran_idle {
                debug!(agent = %ctx.agent, "entered combat while wandering");
            }
            self.last_ran_idle = false;
            self.combat_cycle(ctx)
        } else {
            if !self.last_ran_idle {
                debug!(agent = %ctx.agent, "left combat, wandering again");
            }
            self.last_ran_idle = true;
            self.idle_cycle(ctx)
        }
    }

    fn on_complete(&mut self, ctx: &mut ActionContext<'_>) {
        if let Some(find_cover) = &mut self.find_cover {
            find_cover.on_complete(ctx);
        }
    }

    fn on_end(&mut self, ctx: &mut ActionContext<'_>) {
        // Whatever state the sub-action was in, its reservation must go.
        if let Some(find_cover) = &mut self.find_cover {
            find_cover.on_end(ctx);
        }
    }

    fn name(&self) -> &'static str {
        "wander"
    }
}
