//! Unit tests for ft-plan.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ft_behavior::{ActionContext, Actionable, DirectNavigator};
use ft_core::{AgentRng, TargetId, Tick, Vec3};
use ft_perception::{CoverBoard, Registry, SharedPos};

use crate::{Goal, Plan, PlanError};

// ── Test rig ──────────────────────────────────────────────────────────────────

/// Owns everything an `ActionContext` borrows.
struct Rig {
    registry: Registry,
    nav: DirectNavigator,
    rng: AgentRng,
    pos: SharedPos,
}

impl Rig {
    fn new() -> Self {
        let pos: SharedPos = Rc::new(Cell::new(Vec3::ZERO));
        Self {
            registry: Registry::new(CoverBoard::empty(3.0)),
            nav: DirectNavigator::new(pos.clone(), 1.0),
            rng: AgentRng::new(0, TargetId(1)),
            pos,
        }
    }

    fn ctx(&mut self) -> ActionContext<'_> {
        ActionContext {
            tick: Tick::ZERO,
            agent: TargetId(1),
            position: self.pos.clone(),
            threat: None,
            registry: &mut self.registry,
            nav: &mut self.nav,
            rng: &mut self.rng,
        }
    }
}

/// Completes after a fixed number of cycles, logging every lifecycle event.
struct Scripted {
    label: &'static str,
    cycles_left: u32,
    log: Rc<RefCell<Vec<String>>>,
}

impl Scripted {
    fn new(label: &'static str, cycles: u32, log: &Rc<RefCell<Vec<String>>>) -> Box<Self> {
        Box::new(Self {
            label,
            cycles_left: cycles,
            log: log.clone(),
        })
    }
}

impl Actionable for Scripted {
    fn next_cycle(&mut self, _in_combat: bool, _ctx: &mut ActionContext<'_>) -> bool {
        self.cycles_left -= 1;
        self.cycles_left == 0
    }

    fn on_complete(&mut self, _ctx: &mut ActionContext<'_>) {
        self.log.borrow_mut().push(format!("{}:complete", self.label));
    }

    fn on_end(&mut self, _ctx: &mut ActionContext<'_>) {
        self.log.borrow_mut().push(format!("{}:end", self.label));
    }

    fn name(&self) -> &'static str {
        self.label
    }
}

fn log() -> Rc<RefCell<Vec<String>>> {
    Rc::new(RefCell::new(Vec::new()))
}

/// Three one-cycle actions labelled a, b, c.
fn three_step(log: &Rc<RefCell<Vec<String>>>) -> Plan {
    Plan::new(
        None,
        vec![
            Scripted::new("a", 1, log),
            Scripted::new("b", 1, log),
            Scripted::new("c", 1, log),
        ],
    )
    .unwrap()
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn empty_action_list_rejected() {
        assert_eq!(Plan::new(None, vec![]).unwrap_err(), PlanError::Empty);
    }

    #[test]
    fn starts_at_zero_percent() {
        let events = log();
        let plan = three_step(&events);
        assert_eq!(plan.progress_percent(), 0);
        assert!(!plan.is_done());
        assert_eq!(plan.current_action_name(), Some("a"));
    }
}

// ── Progress ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod progress {
    use super::*;

    #[test]
    fn three_actions_step_33_66_100() {
        let events = log();
        let mut plan = three_step(&events);
        let mut rig = Rig::new();

        plan.next_cycle(false, &mut rig.ctx()).unwrap();
        assert_eq!(plan.progress_percent(), 33);
        plan.next_cycle(false, &mut rig.ctx()).unwrap();
        assert_eq!(plan.progress_percent(), 66);
        plan.next_cycle(false, &mut rig.ctx()).unwrap();
        assert_eq!(plan.progress_percent(), 100);
        assert!(plan.is_done());
        assert!(plan.current_action_name().is_none());
    }

    #[test]
    fn incomplete_action_holds_the_cursor() {
        let events = log();
        let mut plan = Plan::new(None, vec![Scripted::new("slow", 3, &events)]).unwrap();
        let mut rig = Rig::new();

        plan.next_cycle(false, &mut rig.ctx()).unwrap();
        plan.next_cycle(false, &mut rig.ctx()).unwrap();
        assert_eq!(plan.progress_percent(), 0);
        plan.next_cycle(false, &mut rig.ctx()).unwrap();
        assert_eq!(plan.progress_percent(), 100);
    }

    #[test]
    fn on_complete_fires_once_in_order() {
        let events = log();
        let mut plan = three_step(&events);
        let mut rig = Rig::new();
        for _ in 0..3 {
            plan.next_cycle(false, &mut rig.ctx()).unwrap();
        }
        assert_eq!(
            *events.borrow(),
            vec!["a:complete", "b:complete", "c:complete"]
        );
    }
}

// ── Terminal state ────────────────────────────────────────────────────────────

#[cfg(test)]
mod terminal {
    use super::*;

    #[test]
    fn exhausted_plan_rejects_further_cycles() {
        let events = log();
        let mut plan = Plan::new(None, vec![Scripted::new("only", 1, &events)]).unwrap();
        let mut rig = Rig::new();

        plan.next_cycle(false, &mut rig.ctx()).unwrap();
        assert!(plan.is_done());
        assert_eq!(
            plan.next_cycle(false, &mut rig.ctx()).unwrap_err(),
            PlanError::Exhausted
        );
        // The cursor did not move and no extra hooks fired.
        assert_eq!(*events.borrow(), vec!["only:complete"]);
    }
}

// ── Interruption ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod interruption {
    use super::*;

    #[test]
    fn end_action_hits_current_action_only() {
        let events = log();
        let mut plan = three_step(&events);
        let mut rig = Rig::new();

        // Complete "a"; cursor now on "b" (33%).
        plan.next_cycle(false, &mut rig.ctx()).unwrap();
        assert_eq!(plan.progress_percent(), 33);

        plan.end_action(&mut rig.ctx());
        assert_eq!(*events.borrow(), vec!["a:complete", "b:end"]);
        // No completion, no cursor movement.
        assert_eq!(plan.progress_percent(), 33);
    }

    #[test]
    fn end_action_on_finished_plan_is_noop() {
        let events = log();
        let mut plan = Plan::new(None, vec![Scripted::new("only", 1, &events)]).unwrap();
        let mut rig = Rig::new();

        plan.next_cycle(false, &mut rig.ctx()).unwrap();
        plan.end_action(&mut rig.ctx());
        assert_eq!(*events.borrow(), vec!["only:complete"]);
    }
}

// ── Goal matching ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod goals {
    use super::*;

    #[test]
    fn same_goal_matches() {
        let events = log();
        let goal = Goal::new("take the ridge");
        let plan = Plan::new(Some(goal.clone()), vec![Scripted::new("a", 1, &events)]).unwrap();
        assert!(plan.satisfies(Some(&goal)));
    }

    #[test]
    fn clones_share_identity() {
        let goal = Goal::new("take the ridge");
        let copy = goal.clone();
        assert_eq!(goal, copy);
        assert!(goal.same(&copy));
    }

    #[test]
    fn distinct_goal_with_same_label_does_not_match() {
        let events = log();
        let goal = Goal::new("take the ridge");
        let other = Goal::new("take the ridge");
        let plan = Plan::new(Some(goal), vec![Scripted::new("a", 1, &events)]).unwrap();
        assert!(!plan.satisfies(Some(&other)));
    }

    #[test]
    fn goalless_plan_matches_only_goalless_request() {
        let events = log();
        let plan = Plan::new(None, vec![Scripted::new("a", 1, &events)]).unwrap();
        assert!(plan.satisfies(None));
        assert!(!plan.satisfies(Some(&Goal::new("anything"))));
    }

    #[test]
    fn goal_plan_does_not_match_goalless_request() {
        let events = log();
        let plan =
            Plan::new(Some(Goal::new("g")), vec![Scripted::new("a", 1, &events)]).unwrap();
        assert!(!plan.satisfies(None));
    }
}
