//! Output side of the pendra pendulum engine.
//!
//! Owns the flat segment-buffer layout consumed by the renderer, a
//! double-buffered frame handoff, and a trajectory recorder for offline
//! analysis.

pub mod frame;
pub mod layout;
pub mod segment;
pub mod trajectory;

pub use frame::FramePair;
pub use segment::SegmentBuffer;
pub use trajectory::TrajectoryRecorder;
