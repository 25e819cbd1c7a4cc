//! The `Plan` state machine: an ordered action sequence with a forward-only
//! cursor.

use std::fmt;

use ft_behavior::{ActionContext, Actionable};

use crate::error::PlanError;
use crate::goal::Goal;

/// A fixed sequence of actions that together satisfy a goal.
///
/// One instance per agent, advanced one action per simulation tick.  The
/// action list is set at construction and never resized; the cursor starts
/// at 0, only increases, and never wraps.  Once every action has completed
/// the plan is *done*: [`progress_percent`][Self::progress_percent] reads
/// 100, [`is_done`][Self::is_done] is true, and any further
/// [`next_cycle`][Self::next_cycle] is rejected with
/// [`PlanError::Exhausted`] — the caller decides what replaces the plan.
///
/// # Interruption
///
/// An owner abandoning a plan early must call [`end_action`][Self::end_action]
/// first.  That is the only path on which the current action's `on_end`
/// cleanup runs; dropping a plan without it leaks whatever the action holds
/// (reserved cover, above all).
pub struct Plan {
    goal: Option<Goal>,
    actions: Vec<Box<dyn Actionable>>,
    cursor: usize,
}

impl Plan {
    /// Build a plan from a goal and a non-empty action sequence.
    pub fn new(goal: Option<Goal>, actions: Vec<Box<dyn Actionable>>) -> Result<Self, PlanError> {
        if actions.is_empty() {
            return Err(PlanError::Empty);
        }
        Ok(Self { goal, actions, cursor: 0 })
    }

    // ── Execution ─────────────────────────────────────────────────────────

    /// Run one tick of the current action.
    ///
    /// If the action reports completion, its `on_complete` hook fires and
    /// the cursor advances.  Whole-plan completion is observed through
    /// [`progress_percent`][Self::progress_percent] /
    /// [`is_done`][Self::is_done], not the return value.
    pub fn next_cycle(
        &mut self,
        in_combat: bool,
        ctx: &mut ActionContext<'_>,
    ) -> Result<(), PlanError> {
        let action = self.actions.get_mut(self.cursor).ok_or(PlanError::Exhausted)?;
        if action.next_cycle(in_combat, ctx) {
            action.on_complete(ctx);
            self.cursor += 1;
        }
        Ok(())
    }

    /// Interrupt the plan: run the current action's `on_end` cleanup.
    ///
    /// Fires `on_end` only — never `on_complete` — and does not advance the
    /// cursor.  On a finished plan nothing is current and nothing is live,
    /// so this is a no-op.
    pub fn end_action(&mut self, ctx: &mut ActionContext<'_>) {
        if let Some(action) = self.actions.get_mut(self.cursor) {
            action.on_end(ctx);
        }
    }

    // ── Inspection ────────────────────────────────────────────────────────

    /// Completed share of the plan: floor(100 × completed ÷ total).
    pub fn progress_percent(&self) -> u32 {
        (100 * self.cursor / self.actions.len()) as u32
    }

    /// True once every action has completed.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.cursor == self.actions.len()
    }

    /// Does this plan serve `goal`?
    ///
    /// Goal matching is handle identity: a plan built for goal G matches G
    /// and its clones, and nothing else.  A goalless plan matches only a
    /// goalless request.
    pub fn satisfies(&self, goal: Option<&Goal>) -> bool {
        match (&self.goal, goal) {
            (Some(own), Some(asked)) => own.same(asked),
            (None, None) => true,
            _ => false,
        }
    }

    /// The goal this plan was built for, if any.
    pub fn goal(&self) -> Option<&Goal> {
        self.goal.as_ref()
    }

    /// Number of actions (fixed at construction).
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Label of the action the cursor points at; `None` once done.
    pub fn current_action_name(&self) -> Option<&'static str> {
        self.actions.get(self.cursor).map(|a| a.name())
    }
}

impl fmt::Debug for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plan")
            .field("goal", &self.goal)
            .field("actions", &self.actions.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "plan[{} actions, {}% done",
            self.actions.len(),
            self.progress_percent()
        )?;
        if let Some(goal) = &self.goal {
            write!(f, ", goal: {goal}")?;
        }
        if let Some(name) = self.current_action_name() {
            write!(f, ", current: {name}")?;
        }
        f.write_str("]")
    }
}
