//! WebAssembly bindings for the pendra pendulum engine.
//!
//! A browser host constructs a [`Swarm`], calls [`Swarm::step`] once per
//! animation frame, and views the segment buffer as a `Float64Array` over
//! wasm memory via the pointer/length accessors — the buffer is written in
//! place and read without copying.

use wasm_bindgen::prelude::*;

use pendra_dynamics::step_pendulum;
use pendra_model::Ensemble;
use pendra_world::{layout, SegmentBuffer};

/// A pendulum batch plus its seeded segment buffer.
#[wasm_bindgen]
pub struct Swarm {
    ensemble: Ensemble,
    buffer: SegmentBuffer,
}

#[wasm_bindgen]
impl Swarm {
    /// Fan-out batch of `count` pendulums from the given base angles
    /// (degrees), with default world and arm parameters.
    #[wasm_bindgen(constructor)]
    pub fn new(count: usize, theta1_deg: f64, theta2_deg: f64) -> Result<Swarm, JsError> {
        let ensemble = Ensemble::fan_out(count, theta1_deg, theta2_deg)
            .map_err(|e| JsError::new(&e.to_string()))?;
        let mut buffer = SegmentBuffer::new(count);
        buffer.seed();
        Ok(Swarm { ensemble, buffer })
    }

    /// Advance every pendulum one step and rewrite the endpoint slots of
    /// the segment buffer.
    pub fn step(&mut self) {
        let Ensemble {
            states,
            arms,
            world,
        } = &mut self.ensemble;
        for (i, (state, block)) in states
            .iter_mut()
            .zip(self.buffer.as_mut_slice().chunks_exact_mut(layout::STRIDE))
            .enumerate()
        {
            let pos = step_pendulum(arms.for_pendulum(i), world, state);
            layout::write_block(block, &pos);
        }
    }

    /// Step and return the wall-clock milliseconds it took.
    pub fn step_timed(&mut self) -> f64 {
        let start = js_sys::Date::now();
        self.step();
        js_sys::Date::now() - start
    }

    /// Number of pendulums.
    pub fn count(&self) -> usize {
        self.ensemble.len()
    }

    /// Pointer to the segment buffer, for a zero-copy `Float64Array` view.
    pub fn positions_ptr(&self) -> *const f64 {
        self.buffer.as_slice().as_ptr()
    }

    /// Length of the segment buffer in floats (`12 * count`).
    pub fn positions_len(&self) -> usize {
        self.buffer.as_slice().len()
    }
}
