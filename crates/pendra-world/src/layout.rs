//! Flat segment-buffer layout shared with the renderer.
//!
//! Each pendulum owns a block of 12 floats: four xyz vertices forming two
//! line segments, pivot→elbow and elbow→tip:
//!
//! ```text
//! [0..3)   pivot   (0, 0, z)    written once at seed time
//! [3..6)   elbow   (x1, y1, z)
//! [6..9)   elbow   (x1, y1, z)  repeated as the second segment's start
//! [9..12)  tip     (x2, y2, z)
//! ```
//!
//! The per-step writer touches only the six x/y slots at offsets 3, 4, 6, 7,
//! 9, 10; the pivot and every z slot are invariant after seeding. This
//! stride and these offsets are a contract with the renderer and must not
//! change.

use pendra_dynamics::JointPositions;

/// Floats per pendulum block.
pub const STRIDE: usize = 12;

/// Offsets of the six per-step slots within a block.
pub const ELBOW_X: usize = 3;
pub const ELBOW_Y: usize = 4;
pub const ELBOW_X_REPEAT: usize = 6;
pub const ELBOW_Y_REPEAT: usize = 7;
pub const TIP_X: usize = 9;
pub const TIP_Y: usize = 10;

/// Offsets of the z slots within a block.
pub const Z_OFFSETS: [usize; 4] = [2, 5, 8, 11];

/// Write one pendulum's endpoints into its 12-float block.
#[inline]
pub fn write_block(block: &mut [f64], pos: &JointPositions) {
    block[ELBOW_X] = pos.x1;
    block[ELBOW_Y] = pos.y1;
    block[ELBOW_X_REPEAT] = pos.x1;
    block[ELBOW_Y_REPEAT] = pos.y1;
    block[TIP_X] = pos.x2;
    block[TIP_Y] = pos.y2;
}
