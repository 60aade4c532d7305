//! pendra — batched double-pendulum simulation engine.
//!
//! Tens of thousands of independent double pendulums advanced once per
//! frame by a damped semi-implicit Euler kernel, with endpoint coordinates
//! written into a flat renderer buffer. This umbrella crate provides the
//! `Simulator` and re-exports core types from sub-crates.

use rayon::prelude::*;

pub use pendra_dynamics::{self, step_pendulum, JointPositions, Vec2};
pub use pendra_model::{
    self, ArmLayout, ArmParams, Ensemble, EnsembleBuilder, ModelError, PendulumState, WorldParams,
    GRAVITY,
};
pub use pendra_world::{self, layout, FramePair, SegmentBuffer, TrajectoryRecorder};

/// Pluggable per-pendulum stepping scheme.
///
/// Implementations advance one pendulum by one step and return its joint
/// endpoints. `Sync` so that batch stepping can shard across threads.
pub trait Solver: Sync {
    /// Advance `state` by one step. Reads the parameters in effect for that
    /// pendulum and returns its pre-step joint endpoints.
    fn step_one(
        &self,
        arms: &ArmParams,
        world: &WorldParams,
        state: &mut PendulumState,
    ) -> JointPositions;
}

/// Damped semi-implicit Euler, the default stepping scheme.
pub struct DampedEulerSolver;

impl Solver for DampedEulerSolver {
    fn step_one(
        &self,
        arms: &ArmParams,
        world: &WorldParams,
        state: &mut PendulumState,
    ) -> JointPositions {
        step_pendulum(arms, world, state)
    }
}

/// Main simulation driver.
pub struct Simulator {
    solver: Box<dyn Solver>,
}

impl Simulator {
    /// Create a simulator with the default damped semi-implicit Euler solver.
    pub fn new() -> Self {
        Self {
            solver: Box::new(DampedEulerSolver),
        }
    }

    /// Create a simulator with a custom solver.
    pub fn with_solver(solver: Box<dyn Solver>) -> Self {
        Self { solver }
    }

    /// Advance every pendulum by one step, discarding endpoints.
    pub fn step(&self, ensemble: &mut Ensemble) {
        let Ensemble {
            states,
            arms,
            world,
        } = ensemble;
        for (i, state) in states.iter_mut().enumerate() {
            self.solver.step_one(arms.for_pendulum(i), world, state);
        }
    }

    /// Advance every pendulum by one step and write its endpoints into
    /// `out` at that pendulum's 12-float block (see [`layout`]).
    ///
    /// Only the six endpoint slots of each block are written; the pivot and
    /// z slots keep whatever the caller seeded them with. Panics before any
    /// state is mutated if `out` cannot hold `12 * len` floats.
    pub fn step_into(&self, ensemble: &mut Ensemble, out: &mut [f64]) {
        let needed = ensemble.len() * layout::STRIDE;
        assert!(
            out.len() >= needed,
            "output buffer holds {} floats but {} pendulums need {needed}",
            out.len(),
            ensemble.len(),
        );
        let Ensemble {
            states,
            arms,
            world,
        } = ensemble;
        for (i, (state, block)) in states
            .iter_mut()
            .zip(out.chunks_exact_mut(layout::STRIDE))
            .enumerate()
        {
            let pos = self.solver.step_one(arms.for_pendulum(i), world, state);
            layout::write_block(block, &pos);
        }
    }

    /// [`step_into`](Simulator::step_into) sharded across the rayon pool.
    ///
    /// Pendulums are independent within a tick, so each shard reads and
    /// writes only its own states and blocks; the join is the only
    /// synchronization. Produces the same result as the sequential path.
    pub fn step_into_par(&self, ensemble: &mut Ensemble, out: &mut [f64]) {
        let needed = ensemble.len() * layout::STRIDE;
        assert!(
            out.len() >= needed,
            "output buffer holds {} floats but {} pendulums need {needed}",
            out.len(),
            ensemble.len(),
        );
        let Ensemble {
            states,
            arms,
            world,
        } = ensemble;
        let arms = &*arms;
        let world = &*world;
        states
            .par_iter_mut()
            .enumerate()
            .zip(out[..needed].par_chunks_exact_mut(layout::STRIDE))
            .for_each(|((i, state), block)| {
                let pos = self.solver.step_one(arms.for_pendulum(i), world, state);
                layout::write_block(block, &pos);
            });
    }

    /// Run the simulation for `n` steps without producing output.
    pub fn simulate(&self, ensemble: &mut Ensemble, n: usize) {
        for _ in 0..n {
            self.step(ensemble);
        }
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
