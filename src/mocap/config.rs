use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::mocap::error::MocapError;
use crate::mocap::layout;
use crate::mocap::types::{BodyPart, BODY_PART_COUNT};

/// Fixed engine parameters, chosen once at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Frames kept in the rolling history.
    pub capacity: usize,
    /// Joints carried by each frame, counted from `Hips`.
    pub joint_count: usize,
    /// Rate at which frames arrive.
    pub source_frequency_hz: f64,
    /// Joint whose planar position feeds the foot state.
    pub tracked_part: BodyPart,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            joint_count: BODY_PART_COUNT,
            source_frequency_hz: 120.0,
            tracked_part: BodyPart::RightHandThumb1,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, MocapError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, MocapError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), MocapError> {
        if self.capacity == 0 {
            return Err(MocapError::InvalidCapacity);
        }
        if self.joint_count == 0 || self.joint_count > BODY_PART_COUNT {
            return Err(MocapError::InvalidJointCount {
                actual: self.joint_count,
            });
        }
        if !self.source_frequency_hz.is_finite() || self.source_frequency_hz <= 0.0 {
            return Err(MocapError::InvalidSourceFrequency(self.source_frequency_hz));
        }
        if self.tracked_part.index() >= self.joint_count {
            return Err(MocapError::TrackedPartOutOfRange {
                part: self.tracked_part,
                joint_count: self.joint_count,
            });
        }
        Ok(())
    }

    pub fn frame_width(&self) -> usize {
        layout::frame_width(self.joint_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn defaults_cover_the_full_skeleton() {
        let config = EngineConfig::default();
        config.validate().unwrap();
        assert_eq!(config.frame_width(), 288);
    }
    #[test]
    fn partial_json_keeps_defaults() {
        let config = EngineConfig::from_json_str(
            r#"{"capacity": 50, "joint_count": 2, "tracked_part": "RightUpLeg"}"#,
        )
        .unwrap();
        assert_eq!(config.capacity, 50);
        assert_eq!(config.frame_width(), 32);
        assert_eq!(config.source_frequency_hz, 120.0);
    }
    #[test]
    fn invalid_values_are_rejected() {
        let base = EngineConfig::default();
        let cases = [
            EngineConfig { capacity: 0, ..base.clone() },
            EngineConfig { joint_count: 19, ..base.clone() },
            EngineConfig { source_frequency_hz: 0.0, ..base.clone() },
            EngineConfig { source_frequency_hz: f64::NAN, ..base.clone() },
            EngineConfig { joint_count: 3, ..base.clone() },
        ];
        for config in cases {
            assert!(config.validate().is_err(), "{config:?}");
        }
        assert!(matches!(
            EngineConfig::from_json_str("{\"capacity\": \"lots\"}"),
            Err(MocapError::Config(_))
        ));
    }
}
