use ndarray::Array2;
use rustfft::{num_complex::Complex64, FftPlanner};

/// Magnitude spectrum for each component of a resampled sequence.
#[derive(Clone, Debug)]
pub struct FrequencySpectrum {
    pub sample_rate_hz: f64,
    pub frequencies_hz: Vec<f64>,
    pub magnitudes: Vec<Vec<f64>>, // component -> bins
}

/// Computes FFTs of `sequence` output for a given window size.
pub struct SpectrumBuilder {
    fft_size: usize,
}

impl SpectrumBuilder {
    pub fn with_size(fft_size: usize) -> Self {
        Self {
            fft_size: fft_size.max(1),
        }
    }

    /// `sequence` is components x samples with the newest sample last; the
    /// most recent `fft_size` samples are used and shorter input is zero padded.
    pub fn compute(&self, sequence: &Array2<f64>, sample_rate_hz: f64) -> FrequencySpectrum {
        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(self.fft_size);
        let bins = self.fft_size / 2;
        let frequencies_hz: Vec<f64> = (0..bins)
            .map(|k| k as f64 * sample_rate_hz / self.fft_size as f64)
            .collect();
        let skip = sequence.ncols().saturating_sub(self.fft_size);
        let magnitudes: Vec<Vec<f64>> = sequence
            .rows()
            .into_iter()
            .map(|component| {
                let mut buffer: Vec<Complex64> = component
                    .iter()
                    .skip(skip)
                    .map(|v| Complex64::new(*v, 0.0))
                    .collect();
                buffer.resize(self.fft_size, Complex64::new(0.0, 0.0));
                fft.process(&mut buffer);
                buffer
                    .iter()
                    .take(bins)
                    .map(|c| c.norm() / self.fft_size as f64)
                    .collect()
            })
            .collect();
        FrequencySpectrum {
            sample_rate_hz,
            frequencies_hz,
            magnitudes,
        }
    }
}
