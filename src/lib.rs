//! Decoding and rolling history for a streamed motion-capture skeleton.
pub mod mocap;
pub use mocap::*;
