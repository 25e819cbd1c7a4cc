//! Navigation interface and a straight-line reference implementation.
//!
//! # Pluggability
//!
//! Behaviors steer through the [`Navigator`] trait, so the surrounding
//! engine can plug in its real navigation-mesh agent (path queries, steering,
//! avoidance) without the AI core knowing anything about it.  The bundled
//! [`DirectNavigator`] exists for the driver, demos, and tests: it moves the
//! agent's shared position straight toward the destination at a fixed speed.

use ft_core::Vec3;
use ft_perception::SharedPos;

// ── Navigator trait ───────────────────────────────────────────────────────────

/// The navigation endpoint a behavior steers through.
///
/// Mirrors the engine-side agent surface: request a destination, then poll
/// progress.  `remaining_distance` is only meaningful while a destination is
/// set and `path_pending` is false.
pub trait Navigator {
    /// Request movement toward `destination`.  Replaces any prior request.
    fn set_destination(&mut self, destination: Vec3);

    /// True while the underlying path computation has not finished yet.
    /// Implementations with synchronous (or no) path planning return false.
    fn path_pending(&self) -> bool;

    /// Straight-line distance left to the current destination.
    /// 0.0 when there is no destination.
    fn remaining_distance(&self) -> f32;
}

// ── DirectNavigator ───────────────────────────────────────────────────────────

/// Straight-line movement at a fixed speed per tick.
///
/// Owns a clone of the agent's [`SharedPos`] handle and advances it when the
/// driver calls [`advance`][Self::advance] once per tick.  There is no path
/// planning, so [`path_pending`][Navigator::path_pending] is always false.
pub struct DirectNavigator {
    position: SharedPos,
    destination: Option<Vec3>,
    /// World units moved per tick.
    pub speed: f32,
}

impl DirectNavigator {
    pub fn new(position: SharedPos, speed: f32) -> Self {
        Self {
            position,
            destination: None,
            speed,
        }
    }

    /// Move one tick's worth toward the destination, snapping onto it when
    /// the remaining distance is within one step.  Driver-side; behaviors
    /// only see the [`Navigator`] surface.
    pub fn advance(&mut self) {
        let Some(dest) = self.destination else {
            return;
        };
        let here = self.position.get();
        let offset = dest - here;
        let dist = offset.length();
        if dist <= self.speed {
            self.position.set(dest);
            return;
        }
        // dist > speed > 0, so the direction is well-defined.
        let step = offset * (self.speed / dist);
        self.position.set(here + step);
    }

    /// The currently requested destination, if any.
    pub fn destination(&self) -> Option<Vec3> {
        self.destination
    }
}

impl Navigator for DirectNavigator {
    fn set_destination(&mut self, destination: Vec3) {
        self.destination = Some(destination);
    }

    fn path_pending(&self) -> bool {
        false
    }

    fn remaining_distance(&self) -> f32 {
        match self.destination {
            Some(dest) => self.position.get().distance_sq(dest).sqrt(),
            None => 0.0,
        }
    }
}
