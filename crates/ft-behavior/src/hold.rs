//! A behavior that stands fast and never completes.

use crate::actionable::Actionable;
use crate::context::ActionContext;

/// Holds the current position indefinitely.
///
/// Never returns `true`, holds no resources, ignores the combat flag.
/// Useful as a terminal plan step ("guard here until told otherwise") and as
/// a placeholder in tests.
#[derive(Default)]
pub struct Hold;

impl Actionable for Hold {
    fn next_cycle(&mut self, _in_combat: bool, _ctx: &mut ActionContext<'_>) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "hold"
    }
}
