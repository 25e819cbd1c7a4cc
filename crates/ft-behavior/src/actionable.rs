//! The `Actionable` trait — the main extension point for behavior authors.

use crate::context::ActionContext;

/// One executable step of an agent's plan.
///
/// Implement this trait to define a behavior the plan engine can run.  The
/// engine calls [`next_cycle`][Self::next_cycle] once per simulation tick
/// while the action is current; the action holds its own progress state
/// between calls.
///
/// # Lifecycle contract
///
/// - `next_cycle` returns `true` exactly once, on the tick the action's
///   objective is achieved.  It must be safe to call on every tick,
///   including the first.
/// - `on_complete` is called exactly once, immediately after the `true`
///   return and before the plan advances.  Bookkeeping for *successful*
///   completion only.
/// - `on_end` is called exactly once if and only if the action is abandoned
///   through plan interruption.  It must release every exclusively held
///   external resource — a reserved cover spot above all — no matter which
///   internal state the action was in.
///
/// An action that never returns `true` is legitimate: persistent idle
/// behaviors (see `Wander` in `ft-actions`) run until interrupted.
///
/// # Sub-actions
///
/// An action may own another action as a private sub-behavior.  The parent
/// alone drives the child's `next_cycle` and is responsible for forwarding
/// `on_complete`/`on_end`; the child is never handed to the plan.
pub trait Actionable {
    /// Perform one tick of work.  `in_combat` selects between the behavior's
    /// idle and combat paths, where it distinguishes them.
    fn next_cycle(&mut self, in_combat: bool, ctx: &mut ActionContext<'_>) -> bool;

    /// Successful-completion hook.  Default: nothing to do.
    fn on_complete(&mut self, _ctx: &mut ActionContext<'_>) {}

    /// Interruption hook.  Default: nothing held, nothing to release.
    fn on_end(&mut self, _ctx: &mut ActionContext<'_>) {}

    /// Short label for logs and plan displays.
    fn name(&self) -> &'static str {
        "action"
    }
}
