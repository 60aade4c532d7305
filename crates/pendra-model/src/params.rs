//! Simulation parameters.
//!
//! `WorldParams` is shared by every pendulum in a batch. `ArmParams` is
//! either shared too or carried per pendulum, depending on the
//! [`ArmLayout`](crate::ArmLayout) of the ensemble.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::GRAVITY;

/// Masses and lengths of the two pendulum arms.
///
/// All four values must be finite and strictly positive: the equations of
/// motion divide by `l1 * (mu - cos²Δ)` and `l2 * (mu - cos²Δ)`, and the
/// denominator only approaches zero when `m1 → 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmParams {
    /// Mass of the first (upper) arm (kg).
    pub m1: f64,
    /// Mass of the second (lower) arm (kg).
    pub m2: f64,
    /// Length of the first arm (m).
    pub l1: f64,
    /// Length of the second arm (m).
    pub l2: f64,
}

impl ArmParams {
    pub fn new(m1: f64, m2: f64, l1: f64, l2: f64) -> Self {
        Self { m1, m2, l1, l2 }
    }

    /// Check that every mass and length is finite and positive.
    pub fn validate(&self) -> Result<()> {
        check_positive("m1", self.m1)?;
        check_positive("m2", self.m2)?;
        check_positive("l1", self.l1)?;
        check_positive("l2", self.l2)?;
        Ok(())
    }
}

impl Default for ArmParams {
    fn default() -> Self {
        Self {
            m1: 10.0,
            m2: 10.0,
            l1: 15.0,
            l2: 15.0,
        }
    }
}

/// Batch-wide integration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldParams {
    /// Gravitational acceleration (m/s²).
    pub g: f64,
    /// Effective timestep multiplier applied to both integrations.
    pub speed: f64,
    /// Per-step proportional damping coefficient.
    pub friction: f64,
}

impl WorldParams {
    pub fn new(g: f64, speed: f64, friction: f64) -> Self {
        Self { g, speed, friction }
    }

    /// Check that gravity and speed are finite positive and friction is
    /// finite non-negative.
    pub fn validate(&self) -> Result<()> {
        check_positive("g", self.g)?;
        check_positive("speed", self.speed)?;
        if !self.friction.is_finite() {
            return Err(ModelError::NonFiniteParameter { name: "friction" });
        }
        if self.friction < 0.0 {
            return Err(ModelError::NonPositiveParameter {
                name: "friction",
                value: self.friction,
            });
        }
        Ok(())
    }
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            g: GRAVITY,
            speed: 0.05,
            friction: 0.0002,
        }
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ModelError::NonFiniteParameter { name });
    }
    if value <= 0.0 {
        return Err(ModelError::NonPositiveParameter { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        ArmParams::default().validate().unwrap();
        WorldParams::default().validate().unwrap();
    }

    #[test]
    fn rejects_non_positive_mass() {
        let arms = ArmParams::new(0.0, 10.0, 15.0, 15.0);
        assert!(matches!(
            arms.validate(),
            Err(ModelError::NonPositiveParameter { name: "m1", .. })
        ));
    }

    #[test]
    fn rejects_nan_length() {
        let arms = ArmParams::new(10.0, 10.0, f64::NAN, 15.0);
        assert!(matches!(
            arms.validate(),
            Err(ModelError::NonFiniteParameter { name: "l1" })
        ));
    }

    #[test]
    fn zero_friction_is_allowed() {
        WorldParams::new(9.81, 0.05, 0.0).validate().unwrap();
    }

    #[test]
    fn negative_friction_is_rejected() {
        assert!(WorldParams::new(9.81, 0.05, -0.1).validate().is_err());
    }
}
