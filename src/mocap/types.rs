// src/mocap/types.rs
use serde::{Deserialize, Serialize};

/// Number of joints in the skeleton enumeration.
pub const BODY_PART_COUNT: usize = 18;

/// Tracked skeletal joints, in stream order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyPart {
    Hips,
    RightUpLeg,
    RightLeg,
    RightFoot,
    LeftUpLeg,
    LeftLeg,
    LeftFoot,
    Spine,
    Spine1,
    Spine2,
    Spine3,
    Neck,
    Head,
    RightShoulder,
    RightArm,
    RightForeArm,
    RightHand,
    RightHandThumb1,
}

impl BodyPart {
    pub const ALL: [BodyPart; BODY_PART_COUNT] = [
        BodyPart::Hips,
        BodyPart::RightUpLeg,
        BodyPart::RightLeg,
        BodyPart::RightFoot,
        BodyPart::LeftUpLeg,
        BodyPart::LeftLeg,
        BodyPart::LeftFoot,
        BodyPart::Spine,
        BodyPart::Spine1,
        BodyPart::Spine2,
        BodyPart::Spine3,
        BodyPart::Neck,
        BodyPart::Head,
        BodyPart::RightShoulder,
        BodyPart::RightArm,
        BodyPart::RightForeArm,
        BodyPart::RightHand,
        BodyPart::RightHandThumb1,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Measurement categories carried for every joint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParameterKind {
    Position,
    Quaternion,
    Velocity,
    Gyro,
    AcceleratedVelocity,
}

impl ParameterKind {
    pub const ALL: [ParameterKind; 5] = [
        ParameterKind::Position,
        ParameterKind::Quaternion,
        ParameterKind::Velocity,
        ParameterKind::Gyro,
        ParameterKind::AcceleratedVelocity,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Scalar components stored for this kind.
    pub fn arity(self) -> usize {
        match self {
            ParameterKind::Quaternion => 4,
            _ => 3,
        }
    }
}

/// Planar position of the tracked joint, refreshed on every decode.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FootState {
    pub x: f64,
    pub y: f64,
}
