// src/mocap/engine.rs
use std::time::Instant;
use log::{debug, warn};
use nalgebra::{Matrix3, Quaternion, UnitQuaternion, Vector3};
use ndarray::{Array1, Array2};
use crate::mocap::buffer::{HistoryBuffer, GRAVITY};
use crate::mocap::config::EngineConfig;
use crate::mocap::decoder::{DecodeReport, FrameDecoder};
use crate::mocap::error::MocapError;
use crate::mocap::layout;
use crate::mocap::types::{BodyPart, FootState, ParameterKind};

/// Position and orientation of one joint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vector3<f64>,
    /// Transpose of the joint's body-to-world rotation.
    pub rotation: Matrix3<f64>,
}

/// Angular and linear velocity of one joint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionVector {
    pub angular: Vector3<f64>,
    pub linear: Vector3<f64>,
}

/// Decodes the incoming frame stream and answers joint queries.
///
/// Every frame goes through [`MocapEngine::decode`], which replaces the
/// current frame and appends it to the history. Queries read whichever
/// frame was decoded last.
pub struct MocapEngine {
    config: EngineConfig,
    decoder: FrameDecoder,
    current: Array1<f64>,
    history: HistoryBuffer,
    foot_state: FootState,
    frames_decoded: u64,
}

impl MocapEngine {
    pub fn new(config: EngineConfig) -> Result<Self, MocapError> {
        config.validate()?;
        let width = config.frame_width();
        Ok(Self {
            decoder: FrameDecoder::new(width),
            current: Array1::zeros(width),
            history: HistoryBuffer::new(config.capacity, width),
            foot_state: FootState::default(),
            frames_decoded: 0,
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn current_frame(&self) -> &Array1<f64> {
        &self.current
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn foot_state(&self) -> FootState {
        self.foot_state
    }

    pub fn frames_decoded(&self) -> u64 {
        self.frames_decoded
    }

    /// Ingests one raw text frame. Corrupt or missing values never abort the
    /// frame; they are reported in the returned diagnostics instead.
    pub fn decode(&mut self, raw: &str) -> DecodeReport {
        let started = Instant::now();
        let report = self.decoder.decode(raw, &self.current);
        self.current = report.frame.clone();
        let tracked = self.coordinate(self.config.tracked_part, ParameterKind::Position);
        self.foot_state = FootState {
            x: tracked.x,
            y: tracked.y,
        };
        self.history.append(&self.current);
        self.frames_decoded += 1;
        debug!(
            "decoded frame {} in {:?} ({} degraded slots)",
            self.frames_decoded,
            started.elapsed(),
            report.diagnostics.len()
        );
        report
    }

    pub fn contains(&self, part: BodyPart) -> bool {
        part.index() < self.config.joint_count
    }

    /// Raw values of `kind` for `part` from the current frame.
    ///
    /// Joints outside the configured set read as zeros of the right arity.
    pub fn parameters(&self, part: BodyPart, kind: ParameterKind) -> Array1<f64> {
        if !self.contains(part) {
            warn!(
                "requested {part:?} {kind:?} but only {} joints are streamed",
                self.config.joint_count
            );
            return Array1::zeros(kind.arity());
        }
        let seg = layout::segment(part, kind);
        self.current.slice(ndarray::s![seg.range()]).to_owned()
    }

    /// Three-component view of `kind`. Acceleration is returned in m/s² with
    /// gravity removed and the sign flipped; a quaternion yields its vector part.
    pub fn coordinate(&self, part: BodyPart, kind: ParameterKind) -> Vector3<f64> {
        let p = self.parameters(part, kind);
        let mut out = match kind {
            ParameterKind::Quaternion => Vector3::new(p[1], p[2], p[3]),
            _ => Vector3::new(p[0], p[1], p[2]),
        };
        if kind == ParameterKind::AcceleratedVelocity {
            out.z -= 1.0;
            out *= -GRAVITY;
        }
        out
    }

    /// Orientation stored as `(w, x, y, z)`.
    pub fn quaternion(&self, part: BodyPart) -> Quaternion<f64> {
        let p = self.parameters(part, ParameterKind::Quaternion);
        Quaternion::new(p[0], p[1], p[2], p[3])
    }

    pub fn pose(&self, part: BodyPart) -> Pose {
        let rotation = match UnitQuaternion::try_new(self.quaternion(part), f64::EPSILON) {
            Some(unit) => unit.to_rotation_matrix().into_inner().transpose(),
            None => {
                warn!("{part:?} has a degenerate orientation; using identity");
                Matrix3::identity()
            }
        };
        Pose {
            position: self.coordinate(part, ParameterKind::Position),
            rotation,
        }
    }

    pub fn velocity(&self, part: BodyPart) -> MotionVector {
        MotionVector {
            angular: self.coordinate(part, ParameterKind::Gyro),
            linear: self.coordinate(part, ParameterKind::Velocity),
        }
    }

    /// Raw accelerometer output, still in gravity units.
    pub fn linear_acceleration(&self, part: BodyPart) -> Vector3<f64> {
        let p = self.parameters(part, ParameterKind::AcceleratedVelocity);
        Vector3::new(p[0], p[1], p[2])
    }

    pub fn decimation_ratio(&self, target_hz: f64) -> usize {
        self.history
            .decimation_ratio(self.config.source_frequency_hz, target_hz)
    }

    /// Last `size` samples of `kind` for `part`, resampled to `target_hz`.
    /// Rows are components, columns are samples with the newest last.
    pub fn sequence(
        &self,
        part: BodyPart,
        kind: ParameterKind,
        size: usize,
        target_hz: f64,
    ) -> Array2<f64> {
        if !self.contains(part) {
            warn!(
                "requested history of {part:?} but only {} joints are streamed",
                self.config.joint_count
            );
            return Array2::zeros((kind.arity(), 0));
        }
        self.history.window(
            part,
            kind,
            size,
            self.config.source_frequency_hz,
            target_hz,
        )
    }
}
