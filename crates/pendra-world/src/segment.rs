//! Owned segment buffer with one-time seeding of the invariant slots.

use crate::layout::{self, STRIDE};

/// A flat buffer of `12 * count` floats laid out per [`crate::layout`].
///
/// [`SegmentBuffer::seed`] writes the slots the per-step writer never
/// touches: the pivot vertex of every pendulum and the depth coordinate
/// `z = i / count` repeated on all four vertices. Renderers use the depth to
/// spread the batch along z and index a color map.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentBuffer {
    data: Vec<f64>,
    count: usize,
}

impl SegmentBuffer {
    /// Zeroed buffer for `count` pendulums.
    pub fn new(count: usize) -> Self {
        Self {
            data: vec![0.0; count * STRIDE],
            count,
        }
    }

    /// Number of pendulum blocks.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Write the invariant slots: pivot at the origin and `z = i / count`
    /// on every vertex of block `i`. Call once before the first step.
    pub fn seed(&mut self) {
        let count = self.count as f64;
        for (i, block) in self.data.chunks_exact_mut(STRIDE).enumerate() {
            let z = i as f64 / count;
            block[0] = 0.0;
            block[1] = 0.0;
            for offset in layout::Z_OFFSETS {
                block[offset] = z;
            }
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}
