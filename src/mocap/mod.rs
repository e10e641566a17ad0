// src/mocap/mod.rs
pub mod buffer;
pub mod config;
pub mod decoder;
pub mod engine;
pub mod error;
pub mod fft;
pub mod layout;
pub mod pipeline;
pub mod recorder;
pub mod source;
pub mod types;
#[cfg(test)]
mod test_support;
pub use buffer::{HistoryBuffer, GRAVITY};
pub use config::EngineConfig;
pub use decoder::{DecodeReport, FrameDecoder, SlotDiagnostic, SlotIssue};
pub use engine::{MocapEngine, MotionVector, Pose};
pub use error::MocapError;
pub use fft::{FrequencySpectrum, SpectrumBuilder};
pub use layout::{segment, Segment, BLOCK_WIDTH};
pub use pipeline::{FramePipeline, PumpSummary};
pub use recorder::FrameRecorder;
pub use source::{FrameSource, LineSource, ManualSource};
pub use types::{BodyPart, FootState, ParameterKind, BODY_PART_COUNT};
