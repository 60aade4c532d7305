//! Batch of independent pendulums and its builder.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::params::{ArmParams, WorldParams};
use crate::state::PendulumState;
use crate::{DEFAULT_COUNT, DEFAULT_THETA1_DEG, DEFAULT_THETA2_DEG};

/// Where each pendulum's arm parameters come from.
///
/// `Uniform` is the simple variant: one `ArmParams` shared by the whole
/// batch. `PerPendulum` embeds masses and lengths per instance; its length
/// must equal the ensemble size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArmLayout {
    Uniform(ArmParams),
    PerPendulum(Vec<ArmParams>),
}

impl ArmLayout {
    /// Arm parameters in effect for pendulum `i`.
    ///
    /// Panics if `i` is out of range for the `PerPendulum` variant; the
    /// builder guarantees the vector matches the ensemble size, and callers
    /// that mutate the pub fields afterwards re-check with
    /// [`Ensemble::validate`].
    pub fn for_pendulum(&self, i: usize) -> &ArmParams {
        match self {
            ArmLayout::Uniform(arms) => arms,
            ArmLayout::PerPendulum(arms) => &arms[i],
        }
    }

    fn validate(&self, count: usize) -> Result<()> {
        match self {
            ArmLayout::Uniform(arms) => arms.validate(),
            ArmLayout::PerPendulum(arms) => {
                if arms.len() != count {
                    return Err(ModelError::ArmCountMismatch {
                        expected: count,
                        got: arms.len(),
                    });
                }
                for arms in arms {
                    arms.validate()?;
                }
                Ok(())
            }
        }
    }
}

/// A batch of independent double pendulums sharing one set of world
/// parameters.
///
/// The ensemble exclusively owns its states; consumers only ever see
/// derived endpoint coordinates.
///
/// Invariant: a `PerPendulum` arm layout has exactly one `ArmParams` per
/// state, and every parameter passes validation. [`EnsembleBuilder::build`]
/// establishes this; the fields are public, so code that mutates them — or
/// obtains an ensemble through `Deserialize`, which does not run the
/// builder — must call [`Ensemble::validate`] before stepping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ensemble {
    /// Per-pendulum dynamical state, mutated in place once per step.
    pub states: Vec<PendulumState>,
    /// Arm masses and lengths, uniform or per instance.
    pub arms: ArmLayout,
    /// Batch-wide gravity, speed, and friction.
    pub world: WorldParams,
}

impl Ensemble {
    /// Fan-out batch with default parameters: instance `i` starts at
    /// `(base + i/n)` degrees on both arms, zero velocities.
    ///
    /// The `i/n` spread gives every pendulum a minutely different initial
    /// condition so chaotic divergence fans the batch out over time. Same
    /// inputs always produce the same batch.
    pub fn fan_out(count: usize, theta1_deg: f64, theta2_deg: f64) -> Result<Self> {
        EnsembleBuilder::new()
            .count(count)
            .base_angles_deg(theta1_deg, theta2_deg)
            .build()
    }

    /// Number of pendulums in the batch.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Arm parameters in effect for pendulum `i`.
    pub fn arms_for(&self, i: usize) -> &ArmParams {
        self.arms.for_pendulum(i)
    }

    /// Re-check the construction invariant.
    ///
    /// Use after mutating the pub fields or deserializing: confirms the
    /// batch is non-empty, world and arm parameters pass validation, and a
    /// `PerPendulum` layout matches the state count.
    pub fn validate(&self) -> Result<()> {
        if self.states.is_empty() {
            return Err(ModelError::InvalidCount);
        }
        self.world.validate()?;
        self.arms.validate(self.states.len())
    }
}

/// Chainable ensemble construction with fail-fast validation.
#[derive(Debug, Clone)]
pub struct EnsembleBuilder {
    count: usize,
    theta1_deg: f64,
    theta2_deg: f64,
    world: WorldParams,
    arms: ArmLayout,
}

impl EnsembleBuilder {
    pub fn new() -> Self {
        Self {
            count: DEFAULT_COUNT,
            theta1_deg: DEFAULT_THETA1_DEG,
            theta2_deg: DEFAULT_THETA2_DEG,
            world: WorldParams::default(),
            arms: ArmLayout::Uniform(ArmParams::default()),
        }
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Base angles of both arms, in degrees.
    pub fn base_angles_deg(mut self, theta1_deg: f64, theta2_deg: f64) -> Self {
        self.theta1_deg = theta1_deg;
        self.theta2_deg = theta2_deg;
        self
    }

    pub fn world(mut self, world: WorldParams) -> Self {
        self.world = world;
        self
    }

    /// One set of arm parameters shared by the whole batch.
    pub fn uniform_arms(mut self, arms: ArmParams) -> Self {
        self.arms = ArmLayout::Uniform(arms);
        self
    }

    /// Per-pendulum arm parameters; the vector length must equal the count.
    pub fn per_pendulum_arms(mut self, arms: Vec<ArmParams>) -> Self {
        self.arms = ArmLayout::PerPendulum(arms);
        self
    }

    /// Validate and build the ensemble.
    pub fn build(self) -> Result<Ensemble> {
        if self.count == 0 {
            return Err(ModelError::InvalidCount);
        }
        if !self.theta1_deg.is_finite() {
            return Err(ModelError::NonFiniteParameter { name: "theta1_deg" });
        }
        if !self.theta2_deg.is_finite() {
            return Err(ModelError::NonFiniteParameter { name: "theta2_deg" });
        }
        self.world.validate()?;
        self.arms.validate(self.count)?;

        let spread = 1.0 / self.count as f64;
        let states = (0..self.count)
            .map(|i| {
                let offset = i as f64 * spread;
                PendulumState::from_degrees(self.theta1_deg + offset, self.theta2_deg + offset)
            })
            .collect();

        Ok(Ensemble {
            states,
            arms: self.arms,
            world: self.world,
        })
    }
}

impl Default for EnsembleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
