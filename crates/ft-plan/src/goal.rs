//! Opaque, identity-compared objectives.

use std::fmt;
use std::rc::Rc;

/// An opaque objective handle used to match plans against requests.
///
/// Two goals are "the same" iff they originate from the same
/// [`Goal::new`] call: equality is handle identity (`Rc::ptr_eq`), never
/// structural.  Cloning preserves identity, so the planner can hand the same
/// goal to several interested parties and a plan built for any clone
/// satisfies all of them.  Two goals with identical labels built separately
/// are distinct.
#[derive(Clone)]
pub struct Goal {
    inner: Rc<GoalInner>,
}

struct GoalInner {
    label: String,
}

impl Goal {
    /// Mint a new, globally distinct goal.  The label is for humans only and
    /// plays no part in equality.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(GoalInner { label: label.into() }),
        }
    }

    /// Human-readable label for logs and displays.
    pub fn label(&self) -> &str {
        &self.inner.label
    }

    /// True iff `other` is a clone of the same minted goal.
    #[inline]
    pub fn same(&self, other: &Goal) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Goal {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for Goal {}

impl fmt::Debug for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Goal({:?} @ {:p})", self.inner.label, Rc::as_ptr(&self.inner))
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.label)
    }
}
