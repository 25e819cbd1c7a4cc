//! Unit tests for the stock behaviors.

use std::cell::Cell;
use std::rc::Rc;

use ft_behavior::{ActionContext, Actionable, DirectNavigator};
use ft_core::{AgentRng, CoverId, TargetId, Tick, Vec3};
use ft_perception::{CoverBoard, CoverNode, Registry, SharedPos};

use crate::{FindCover, Wander};

// ── Test rig ──────────────────────────────────────────────────────────────────

struct Rig {
    registry: Registry,
    nav: DirectNavigator,
    rng: AgentRng,
    pos: SharedPos,
    threat: Option<Vec3>,
}

impl Rig {
    fn new(board: CoverBoard) -> Self {
        let pos: SharedPos = Rc::new(Cell::new(Vec3::ZERO));
        Self {
            registry: Registry::new(board),
            nav: DirectNavigator::new(pos.clone(), 1.0),
            rng: AgentRng::new(7, TargetId(1)),
            pos,
            threat: None,
        }
    }

    fn bare() -> Self {
        Self::new(CoverBoard::empty(3.0))
    }

    fn ctx(&mut self) -> ActionContext<'_> {
        ActionContext {
            tick: Tick::ZERO,
            agent: TargetId(1),
            position: self.pos.clone(),
            threat: self.threat,
            registry: &mut self.registry,
            nav: &mut self.nav,
            rng: &mut self.rng,
        }
    }
}

fn node(id: u32, x: f32, z: f32) -> CoverNode {
    CoverNode {
        id: CoverId(id),
        position: Vec3::new(x, 0.0, z),
        crouch: false,
    }
}

// ── Wander, idle path ─────────────────────────────────────────────────────────

#[cfg(test)]
mod wander_idle {
    use super::*;

    #[test]
    fn picks_point_within_square() {
        let mut rig = Rig::bare();
        rig.pos.set(Vec3::new(100.0, 5.0, -40.0));
        let mut wander = Wander::new(10.0);

        assert!(!wander.next_cycle(false, &mut rig.ctx()));
        let dest = rig.nav.destination().expect("idle cycle must set a destination");
        assert!((dest.x - 100.0).abs() <= 10.0);
        assert!((dest.z + 40.0).abs() <= 10.0);
        assert_eq!(dest.y, 5.0, "height is preserved");
    }

    #[test]
    fn holds_destination_until_ninety_percent_walked() {
        let mut rig = Rig::bare();
        let mut wander = Wander::new(10.0);

        wander.next_cycle(false, &mut rig.ctx());
        let first = rig.nav.destination().unwrap();

        // Far from the destination: the point is held.
        wander.next_cycle(false, &mut rig.ctx());
        assert_eq!(rig.nav.destination().unwrap(), first);

        // Teleport to within a tenth of the wander distance (< 1.0 away):
        // this cycle notices arrival, the next one picks afresh.
        rig.pos.set(first + Vec3::new(0.5, 0.0, 0.0));
        wander.next_cycle(false, &mut rig.ctx());
        wander.next_cycle(false, &mut rig.ctx());
        assert_ne!(rig.nav.destination().unwrap(), first);
    }

    #[test]
    fn idle_never_completes() {
        let mut rig = Rig::bare();
        let mut wander = Wander::new(10.0);
        for _ in 0..200 {
            assert!(!wander.next_cycle(false, &mut rig.ctx()));
        }
    }
}

// ── Wander, combat path ───────────────────────────────────────────────────────

#[cfg(test)]
mod wander_combat {
    use super::*;

    #[test]
    fn combat_delegates_to_cover_seeking() {
        let board = CoverBoard::new(vec![node(0, 8.0, 0.0)], 3.0);
        let mut rig = Rig::new(board);
        rig.threat = Some(Vec3::new(-20.0, 0.0, 0.0));
        let mut wander = Wander::new(10.0);

        // First combat cycle claims the node and heads for it.
        assert!(!wander.next_cycle(true, &mut rig.ctx()));
        let node_pos = Vec3::new(8.0, 0.0, 0.0);
        assert!(rig.registry.is_spot_reserved(node_pos));
        assert_eq!(rig.nav.destination().unwrap(), node_pos);

        // Arrive: the delegated completion bubbles up through Wander.
        rig.pos.set(node_pos);
        assert!(wander.next_cycle(true, &mut rig.ctx()));
    }

    #[test]
    fn sub_action_created_once() {
        let mut rig = Rig::bare();
        rig.threat = Some(Vec3::new(-20.0, 0.0, 0.0));
        let mut wander = Wander::new(10.0);

        wander.next_cycle(true, &mut rig.ctx());
        wander.next_cycle(true, &mut rig.ctx());
        wander.next_cycle(true, &mut rig.ctx());
        // One claim, not one per cycle.
        assert_eq!(rig.registry.reserved_spot_count(), 1);
    }

    #[test]
    fn on_end_releases_delegated_reservation() {
        let mut rig = Rig::bare();
        rig.threat = Some(Vec3::new(-20.0, 0.0, 0.0));
        let mut wander = Wander::new(10.0);

        wander.next_cycle(true, &mut rig.ctx());
        assert_eq!(rig.registry.reserved_spot_count(), 1);

        wander.on_end(&mut rig.ctx());
        assert_eq!(rig.registry.reserved_spot_count(), 0);
    }

    #[test]
    fn on_end_without_combat_history_is_harmless() {
        let mut rig = Rig::bare();
        let mut wander = Wander::new(10.0);
        wander.next_cycle(false, &mut rig.ctx());
        wander.on_end(&mut rig.ctx());
        assert_eq!(rig.registry.reserved_spot_count(), 0);
    }

    #[test]
    fn reservation_survives_a_calm_spell() {
        // Combat, then idle, then interruption: the sub-action is kept
        // across the calm spell and its reservation is still released.
        let mut rig = Rig::bare();
        rig.threat = Some(Vec3::new(-20.0, 0.0, 0.0));
        let mut wander = Wander::new(10.0);

        wander.next_cycle(true, &mut rig.ctx());
        wander.next_cycle(false, &mut rig.ctx());
        wander.next_cycle(false, &mut rig.ctx());
        assert_eq!(rig.registry.reserved_spot_count(), 1);

        wander.on_end(&mut rig.ctx());
        assert_eq!(rig.registry.reserved_spot_count(), 0);
    }
}

// ── FindCover ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod find_cover {
    use super::*;

    #[test]
    fn claims_nearest_free_node() {
        let board = CoverBoard::new(vec![node(0, 20.0, 0.0), node(1, 5.0, 0.0)], 3.0);
        let mut rig = Rig::new(board);
        let mut action = FindCover::new(Vec3::new(-10.0, 0.0, 0.0), 100.0);

        action.next_cycle(true, &mut rig.ctx());
        assert_eq!(rig.nav.destination().unwrap(), Vec3::new(5.0, 0.0, 0.0));
        assert!(rig.registry.is_spot_reserved(Vec3::new(5.0, 0.0, 0.0)));
    }

    #[test]
    fn skips_claimed_node() {
        let board = CoverBoard::new(vec![node(0, 20.0, 0.0), node(1, 5.0, 0.0)], 3.0);
        let mut rig = Rig::new(board);
        rig.registry.reserve_spot(Vec3::new(5.0, 0.0, 0.0));

        let mut action = FindCover::new(Vec3::new(-10.0, 0.0, 0.0), 100.0);
        action.next_cycle(true, &mut rig.ctx());
        assert_eq!(rig.nav.destination().unwrap(), Vec3::new(20.0, 0.0, 0.0));
    }

    #[test]
    fn out_of_range_nodes_fall_back_to_dynamic_spot() {
        let board = CoverBoard::new(vec![node(0, 500.0, 0.0)], 3.0);
        let mut rig = Rig::new(board);
        let mut action = FindCover::new(Vec3::new(-10.0, 0.0, 0.0), 50.0);

        action.next_cycle(true, &mut rig.ctx());
        let dest = rig.nav.destination().expect("fallback spot chosen");
        // Away from a threat at -x means a spot at positive x.
        assert!(dest.x > 0.0);
        assert_eq!(rig.registry.reserved_spot_count(), 1);
    }

    #[test]
    fn contended_ground_retries_next_tick() {
        // A huge similarity radius makes every candidate read as taken.
        let mut rig = Rig::new(CoverBoard::empty(1000.0));
        rig.registry.reserve_spot(Vec3::ZERO);

        let mut action = FindCover::new(Vec3::new(-10.0, 0.0, 0.0), 50.0);
        assert!(!action.next_cycle(true, &mut rig.ctx()));
        assert!(rig.nav.destination().is_none());
        assert_eq!(rig.registry.reserved_spot_count(), 1, "no blind claim");
    }

    #[test]
    fn completes_on_arrival() {
        let board = CoverBoard::new(vec![node(0, 5.0, 0.0)], 3.0);
        let mut rig = Rig::new(board);
        let mut action = FindCover::new(Vec3::new(-10.0, 0.0, 0.0), 100.0);

        assert!(!action.next_cycle(true, &mut rig.ctx()));
        rig.pos.set(Vec3::new(5.0, 0.0, 0.0));
        assert!(action.next_cycle(true, &mut rig.ctx()));
        // Arrival keeps the claim — the spot is occupied now.
        assert!(rig.registry.is_spot_reserved(Vec3::new(5.0, 0.0, 0.0)));
    }

    #[test]
    fn on_end_releases_claim_mid_route() {
        let board = CoverBoard::new(vec![node(0, 5.0, 0.0)], 3.0);
        let mut rig = Rig::new(board);
        let mut action = FindCover::new(Vec3::new(-10.0, 0.0, 0.0), 100.0);

        action.next_cycle(true, &mut rig.ctx());
        action.on_end(&mut rig.ctx());
        assert!(!rig.registry.is_spot_reserved(Vec3::new(5.0, 0.0, 0.0)));

        // A second end must not double-release someone else's claim.
        rig.registry.reserve_spot(Vec3::new(5.0, 0.0, 0.0));
        action.on_end(&mut rig.ctx());
        assert!(rig.registry.is_spot_reserved(Vec3::new(5.0, 0.0, 0.0)));
    }
}
