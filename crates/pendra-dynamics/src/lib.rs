//! Integration kernel for the pendra pendulum engine.
//!
//! One function, [`step_pendulum`], advances a single double pendulum by one
//! discrete step of a damped semi-implicit Euler scheme and returns the two
//! joint endpoint positions. The scheme trades accuracy for speed and visual
//! plausibility; it is not energy-conserving and never guards against
//! divergence under extreme parameters.

use nalgebra as na;

use pendra_model::{ArmParams, PendulumState, WorldParams};

/// 2D vector alias.
pub type Vec2 = na::Vector2<f64>;

/// Cartesian endpoints of the two arms, y pointing up, origin at the pivot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JointPositions {
    /// End of the first arm.
    pub x1: f64,
    pub y1: f64,
    /// End of the second arm.
    pub x2: f64,
    pub y2: f64,
}

impl JointPositions {
    /// Endpoint of the first arm (the elbow).
    pub fn elbow(&self) -> Vec2 {
        Vec2::new(self.x1, self.y1)
    }

    /// Endpoint of the second arm (the free tip).
    pub fn tip(&self) -> Vec2 {
        Vec2::new(self.x2, self.y2)
    }
}

/// Advance one pendulum by one step and return its joint endpoints.
///
/// Coupled double-pendulum equations of motion (Lagrangian derivation) with
/// `mu = 1 + m1/m2`, integrated semi-implicitly: velocities first, then
/// angles from the already-updated velocities. Friction is applied twice per
/// tick, once to the accelerations and once to the velocities; both passes
/// together set the observed damping rate, so neither may be removed without
/// changing every trajectory.
///
/// The returned endpoints are computed from the angles as they were at the
/// start of the step, one step behind the state. Downstream consumers depend
/// on that lag, so it is preserved.
///
/// Precondition: masses and lengths are positive. The denominator
/// `l * (mu - cos²Δ)` only approaches zero when `m1 → 0` and `Δ → 0`
/// together, which positive masses rule out; no guard is applied here and a
/// divergent state keeps integrating.
pub fn step_pendulum(
    arms: &ArmParams,
    world: &WorldParams,
    state: &mut PendulumState,
) -> JointPositions {
    let mu = 1.0 + arms.m1 / arms.m2;

    let theta1 = state.theta1;
    let theta2 = state.theta2;

    let theta_diff = theta1 - theta2;
    let cos_diff = theta_diff.cos();
    let sin_diff = theta_diff.sin();

    let sin_theta1 = theta1.sin();
    let sin_theta2 = theta2.sin();
    let cos_theta1 = theta1.cos();
    let cos_theta2 = theta2.cos();

    let denom = mu - cos_diff * cos_diff;

    let mut acc1 = (world.g * (sin_theta2 * cos_diff - mu * sin_theta1)
        - (arms.l2 * state.omega2 * state.omega2
            + arms.l1 * state.omega1 * state.omega1 * cos_diff)
            * sin_diff)
        / (arms.l1 * denom);

    let mut acc2 = (mu * world.g * (sin_theta1 * cos_diff - sin_theta2)
        + (mu * arms.l1 * state.omega1 * state.omega1
            + arms.l2 * state.omega2 * state.omega2 * cos_diff)
            * sin_diff)
        / (arms.l2 * denom);

    // First damping pass, on the accelerations.
    acc1 -= acc1 * world.friction;
    acc2 -= acc2 * world.friction;

    // Semi-implicit Euler: velocities first...
    state.omega1 += acc1 * world.speed;
    state.omega2 += acc2 * world.speed;

    // ...second damping pass, on the just-updated velocities...
    state.omega1 -= state.omega1 * world.friction;
    state.omega2 -= state.omega2 * world.friction;

    // ...then angles from the updated velocities.
    state.theta1 += state.omega1 * world.speed;
    state.theta2 += state.omega2 * world.speed;

    // Endpoints from the pre-step angles captured above.
    let x1 = arms.l1 * sin_theta1;
    let y1 = -arms.l1 * cos_theta1;
    JointPositions {
        x1,
        y1,
        x2: x1 + arms.l2 * sin_theta2,
        y2: y1 - arms.l2 * cos_theta2,
    }
}
