//! Per-pendulum dynamical state.

use serde::{Deserialize, Serialize};

/// One double pendulum's state: two angles and two angular velocities.
///
/// Angles are radians from the downward vertical and are left unbounded —
/// no wraparound or normalization is ever applied. Four doubles, `Copy`,
/// stored contiguously in the ensemble for cache locality.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PendulumState {
    /// Angle of the first arm (rad).
    pub theta1: f64,
    /// Angle of the second arm (rad).
    pub theta2: f64,
    /// Angular velocity of the first arm (rad per step).
    pub omega1: f64,
    /// Angular velocity of the second arm (rad per step).
    pub omega2: f64,
}

impl PendulumState {
    /// State at the given angles (radians) with zero velocities.
    pub fn new(theta1: f64, theta2: f64) -> Self {
        Self {
            theta1,
            theta2,
            omega1: 0.0,
            omega2: 0.0,
        }
    }

    /// State at the given angles in degrees with zero velocities.
    pub fn from_degrees(theta1_deg: f64, theta2_deg: f64) -> Self {
        Self::new(deg_to_rad(theta1_deg), deg_to_rad(theta2_deg))
    }

    /// Hanging straight down, at rest.
    pub fn at_rest() -> Self {
        Self::default()
    }
}

/// Degrees to radians, `deg * PI / 180`.
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_degrees_converts() {
        let s = PendulumState::from_degrees(90.0, 180.0);
        assert_eq!(s.theta1, 90.0 * std::f64::consts::PI / 180.0);
        assert_eq!(s.theta2, 180.0 * std::f64::consts::PI / 180.0);
        assert_eq!(s.omega1, 0.0);
        assert_eq!(s.omega2, 0.0);
    }

    #[test]
    fn at_rest_is_all_zero() {
        assert_eq!(PendulumState::at_rest(), PendulumState::new(0.0, 0.0));
    }
}
