//! Model and state types for the pendra pendulum engine.
//!
//! `Ensemble` is a batch of independent double-pendulum states plus the
//! parameters that govern them. `PendulumState` is the mutable per-pendulum
//! simulation state (angles, angular velocities).

pub mod ensemble;
pub mod error;
pub mod params;
pub mod state;

pub use ensemble::{ArmLayout, Ensemble, EnsembleBuilder};
pub use error::{ModelError, Result};
pub use params::{ArmParams, WorldParams};
pub use state::PendulumState;

/// Standard gravity (m/s²).
pub const GRAVITY: f64 = 9.81;

/// Default base angle of the first arm (degrees).
pub const DEFAULT_THETA1_DEG: f64 = 80.0;

/// Default base angle of the second arm (degrees).
pub const DEFAULT_THETA2_DEG: f64 = 90.0;

/// Default ensemble size.
pub const DEFAULT_COUNT: usize = 10_000;
