//! Double-buffered frame handoff between the integrator and a reader.

use crate::segment::SegmentBuffer;

/// Two segment buffers, one being written and one being read.
///
/// The integrator writes into [`back_mut`](FramePair::back_mut) and calls
/// [`publish`](FramePair::publish) when the frame is complete; readers only
/// ever see [`front`](FramePair::front), so a half-written frame is never
/// observable. A caller moving frames across a thread boundary wraps the
/// pair in its own lock or channel; within one thread the swap alone is the
/// fence.
#[derive(Debug, Clone)]
pub struct FramePair {
    front: SegmentBuffer,
    back: SegmentBuffer,
}

impl FramePair {
    /// Two seeded buffers for `count` pendulums.
    pub fn new(count: usize) -> Self {
        let mut front = SegmentBuffer::new(count);
        front.seed();
        let back = front.clone();
        Self { front, back }
    }

    /// The buffer currently safe to read.
    pub fn front(&self) -> &SegmentBuffer {
        &self.front
    }

    /// The buffer the next frame should be written into.
    pub fn back_mut(&mut self) -> &mut SegmentBuffer {
        &mut self.back
    }

    /// Make the just-written back buffer the readable front.
    pub fn publish(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::STRIDE;
    use approx::assert_abs_diff_eq;

    #[test]
    fn publish_swaps_buffers() {
        let mut pair = FramePair::new(2);
        pair.back_mut().as_mut_slice()[3] = 42.0;
        assert_eq!(pair.front().as_slice()[3], 0.0);

        pair.publish();
        assert_eq!(pair.front().as_slice()[3], 42.0);
    }

    #[test]
    fn both_buffers_are_seeded() {
        let mut pair = FramePair::new(3);
        assert_abs_diff_eq!(pair.front().as_slice()[STRIDE + 2], 1.0 / 3.0);
        assert_abs_diff_eq!(pair.back_mut().as_slice()[STRIDE + 2], 1.0 / 3.0);
    }
}
