//! Core rotation model.
//!
//! A [`Rotator`] turns pointer positions, given relative to the center of the
//! rotated element with y pointing up, into a continuous angle in degrees.
//! Angles start at the positive x-axis and grow counter-clockwise.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::f64::consts::PI;

use yew::Callback;

use crate::state::GestureState;

/// Angle-change listener. Removal compares callbacks by identity.
pub type RotationListener = Callback<f64>;

/// Pointer angle of `(x, y)` in degrees, not yet reduced into `[0, 360)`.
///
/// Zero counts as positive on both axes, so `(0, y)` resolves through the
/// right-hand branches. Division by a zero `x` yields an infinite ratio, which
/// `atan` maps to ±90°. Finite results lie in `[-90, 360]`: `x == -0.0` with a
/// positive `y` gives -90, and a tiny negative `y` with positive `x` rounds up
/// to exactly 360. The origin, or any infinite coordinate pair, gives NaN.
pub fn calc_alpha(x: f64, y: f64) -> f64 {
    let mut a = 180.0 * (y / x).atan() / PI;
    if !is_pos(x) && !is_pos(y) {
        a += 180.0;
    } else if !is_pos(x) && is_pos(y) {
        a += 180.0;
    } else if is_pos(x) && !is_pos(y) {
        a += 360.0;
    }
    a
}

fn is_pos(num: f64) -> bool {
    num == num.abs()
}

/// Reduce an angle into `[0, 360)`, including negative inputs.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let r = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if r >= 360.0 { 0.0 } else { r }
}

/// Stateful angle tracker for a single element.
#[derive(Debug, Default)]
pub struct Rotator {
    current_alpha: f64,
    gesture: GestureState,
    rotation_handlers: Vec<RotationListener>,
}

impl Rotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A rotator already turned to `alpha` degrees.
    pub fn with_alpha(alpha: f64) -> Self {
        Self {
            current_alpha: normalize_degrees(alpha),
            ..Self::default()
        }
    }

    pub fn current_alpha(&self) -> f64 {
        self.current_alpha
    }

    pub fn is_rotating(&self) -> bool {
        self.gesture.is_rotating()
    }

    pub fn rotation_start_angle(&self) -> f64 {
        self.gesture.rotation_start()
    }

    pub fn user_rotation_start_angle(&self) -> f64 {
        self.gesture.user_rotation_start()
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    /// Begin a rotation gesture at `(x, y)`. Calling it again while rotating
    /// re-snapshots both start angles.
    ///
    /// At the exact center the pointer angle is undefined; the snapshot is
    /// then taken at the first move away from it.
    pub fn rotate_start(&mut self, x: f64, y: f64) {
        let pointer = calc_alpha(x, y);
        self.gesture = GestureState::Rotating {
            rotation_start: self.current_alpha,
            user_rotation_start: (!pointer.is_nan()).then_some(pointer),
        };
        log::debug!(
            "rotate start at ({x:.1}, {y:.1}), alpha {:.2}",
            self.current_alpha
        );
    }

    /// Rotate by the pointer's angular travel since [`Rotator::rotate_start`]
    /// and notify every listener in registration order. Ignored while idle
    /// and for positions whose angle is undefined.
    ///
    /// Listeners run while the caller holds `&mut self`; a listener that
    /// panics unwinds straight through this call.
    pub fn rotate_move(&mut self, x: f64, y: f64) {
        let GestureState::Rotating {
            rotation_start,
            user_rotation_start,
        } = self.gesture
        else {
            return;
        };
        let pointer = calc_alpha(x, y);
        if pointer.is_nan() {
            return;
        }
        let Some(user_rotation_start) = user_rotation_start else {
            // grabbed at the center: this move becomes the grab point
            self.gesture = GestureState::Rotating {
                rotation_start,
                user_rotation_start: Some(pointer),
            };
            return;
        };
        self.current_alpha = normalize_degrees(pointer - user_rotation_start + rotation_start);
        for handler in &self.rotation_handlers {
            handler.emit(self.current_alpha);
        }
    }

    /// End the current gesture. Idempotent; listeners are not notified.
    pub fn rotate_stop(&mut self) {
        if self.gesture.is_rotating() {
            log::debug!("rotate stop, alpha {:.2}", self.current_alpha);
        }
        self.gesture = GestureState::Idle;
    }

    /// Append a listener. The same callback may be registered more than once.
    pub fn add_listener(&mut self, listener: RotationListener) {
        self.rotation_handlers.push(listener);
    }

    /// Remove the first registration of `listener`, if any.
    pub fn remove_listener(&mut self, listener: &RotationListener) {
        if let Some(index) = self.rotation_handlers.iter().position(|h| h == listener) {
            self.rotation_handlers.remove(index);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.rotation_handlers.len()
    }
}
