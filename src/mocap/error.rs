use thiserror::Error;
use crate::mocap::types::{BodyPart, BODY_PART_COUNT};
#[derive(Debug, Error)]
pub enum MocapError {
    #[error("history capacity must be greater than zero")]
    InvalidCapacity,
    #[error("joint count must be within 1..={}, got {actual}", BODY_PART_COUNT)]
    InvalidJointCount { actual: usize },
    #[error("source frequency must be a positive number of hertz, got {0}")]
    InvalidSourceFrequency(f64),
    #[error("tracked joint {part:?} is outside the configured {joint_count} joints")]
    TrackedPartOutOfRange { part: BodyPart, joint_count: usize },
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse engine config: {0}")]
    Config(#[from] serde_json::Error),
}
