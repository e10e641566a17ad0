use crate::mocap::decoder::DecodeReport;
use crate::mocap::error::MocapError;
use crate::mocap::fft::{FrequencySpectrum, SpectrumBuilder};
use crate::mocap::recorder::FrameRecorder;
use crate::mocap::source::FrameSource;
use crate::mocap::types::{BodyPart, ParameterKind};
use crate::mocap::MocapEngine;

/// Totals from draining a source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PumpSummary {
    pub frames: usize,
    pub degraded_frames: usize,
    pub degraded_slots: usize,
}

/// Pulls frames from a source into the engine, optionally recording them.
pub struct FramePipeline<S: FrameSource> {
    source: S,
    engine: MocapEngine,
    recorder: Option<FrameRecorder>,
}

impl<S: FrameSource> FramePipeline<S> {
    pub fn new(source: S, engine: MocapEngine) -> Self {
        Self {
            source,
            engine,
            recorder: None,
        }
    }

    pub fn with_recorder(mut self, recorder: FrameRecorder) -> Self {
        self.recorder = Some(recorder);
        self
    }

    pub fn engine(&self) -> &MocapEngine {
        &self.engine
    }

    pub fn into_engine(self) -> MocapEngine {
        self.engine
    }

    pub fn pump_once(&mut self) -> Result<Option<DecodeReport>, MocapError> {
        let Some(raw) = self.source.next_frame()? else {
            return Ok(None);
        };
        let report = self.engine.decode(&raw);
        if let Some(recorder) = self.recorder.as_mut() {
            recorder.write_frame(&report.frame)?;
        }
        Ok(Some(report))
    }

    pub fn drain(&mut self) -> Result<PumpSummary, MocapError> {
        let mut summary = PumpSummary::default();
        while let Some(report) = self.pump_once()? {
            summary.frames += 1;
            if !report.is_clean() {
                summary.degraded_frames += 1;
                summary.degraded_slots += report.diagnostics.len();
            }
        }
        if let Some(recorder) = self.recorder.as_mut() {
            recorder.flush()?;
        }
        Ok(summary)
    }

    /// Spectrum of a resampled history window.
    pub fn latest_spectrum(
        &self,
        part: BodyPart,
        kind: ParameterKind,
        target_hz: f64,
        fft_size: usize,
    ) -> FrequencySpectrum {
        let sequence = self.engine.sequence(part, kind, fft_size, target_hz);
        let sample_rate = self.engine.config().source_frequency_hz
            / self.engine.decimation_ratio(target_hz) as f64;
        SpectrumBuilder::with_size(fft_size).compute(&sequence, sample_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocap::source::ManualSource;
    use crate::mocap::test_support::frame_text;
    use crate::mocap::EngineConfig;

    fn engine() -> MocapEngine {
        MocapEngine::new(EngineConfig {
            capacity: 64,
            joint_count: 1,
            source_frequency_hz: 64.0,
            tracked_part: BodyPart::Hips,
        })
        .unwrap()
    }

    #[test]
    fn drain_counts_degraded_frames() {
        let clean = frame_text(&[1.0; 16]);
        let mut broken: Vec<String> = (0..16).map(|_| "2".to_string()).collect();
        broken[0] = "?".into();
        broken[9] = "--".into();
        let source = ManualSource::new(vec![clean.clone(), broken.join(" "), clean]);
        let mut pipeline = FramePipeline::new(source, engine());
        let summary = pipeline.drain().unwrap();
        assert_eq!(
            summary,
            PumpSummary {
                frames: 3,
                degraded_frames: 1,
                degraded_slots: 2,
            }
        );
        assert_eq!(pipeline.engine().frames_decoded(), 3);
        assert!(pipeline.pump_once().unwrap().is_none());
    }

    #[test]
    fn pipeline_buffers_and_computes_fft() {
        let frames: Vec<String> = (0..64)
            .map(|i| {
                let x = (2.0 * std::f64::consts::PI * 4.0 * i as f64 / 64.0).sin();
                let mut values = vec![0.0; 16];
                values[0] = x;
                frame_text(&values)
            })
            .collect();
        let mut pipeline = FramePipeline::new(ManualSource::new(frames), engine());
        pipeline.drain().unwrap();
        let spectrum = pipeline.latest_spectrum(BodyPart::Hips, ParameterKind::Position, 64.0, 64);
        assert_eq!(spectrum.magnitudes.len(), 3);
        assert_eq!(spectrum.frequencies_hz.len(), 32);
        assert_eq!(spectrum.sample_rate_hz, 64.0);
    }
}
