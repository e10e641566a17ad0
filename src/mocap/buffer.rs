use ndarray::{s, Array1, Array2, ArrayView1};
use crate::mocap::layout::{self, Segment};
use crate::mocap::types::{BodyPart, ParameterKind};

/// Standard gravity used to turn normalized accelerometer output into m/s².
pub const GRAVITY: f64 = 9.8;

/// Rolling window of decoded frames, oldest row first.
///
/// Appending shifts every row up by one and writes the new frame into the
/// last row, so the newest frame is always `rows[capacity - 1]`.
pub struct HistoryBuffer {
    rows: Array2<f64>,
}

impl HistoryBuffer {
    /// Panics if `capacity` is zero; the newest row must always exist.
    pub fn new(capacity: usize, width: usize) -> Self {
        assert!(capacity > 0, "history capacity must be greater than zero");
        Self {
            rows: Array2::zeros((capacity, width)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.rows.nrows()
    }

    pub fn width(&self) -> usize {
        self.rows.ncols()
    }

    pub fn rows(&self) -> &Array2<f64> {
        &self.rows
    }

    pub fn newest(&self) -> ArrayView1<'_, f64> {
        self.rows.row(self.capacity() - 1)
    }

    pub fn oldest(&self) -> ArrayView1<'_, f64> {
        self.rows.row(0)
    }

    pub fn append(&mut self, frame: &Array1<f64>) {
        let width = self.width();
        let capacity = self.capacity();
        match self.rows.as_slice_mut() {
            Some(flat) => flat.copy_within(width.., 0),
            None => {
                for i in 1..capacity {
                    let row = self.rows.row(i).to_owned();
                    self.rows.row_mut(i - 1).assign(&row);
                }
            }
        }
        let take = width.min(frame.len());
        self.rows
            .slice_mut(s![capacity - 1, ..take])
            .assign(&frame.slice(s![..take]));
    }

    /// Stride between kept rows when resampling to `target_hz`.
    pub fn decimation_ratio(&self, source_hz: f64, target_hz: f64) -> usize {
        let capacity = self.capacity();
        if target_hz.is_nan() || target_hz <= 0.0 {
            return capacity;
        }
        let target_hz = target_hz.min(source_hz);
        ((source_hz / target_hz) as usize).clamp(1, capacity)
    }

    /// Recent history of one parameter resampled to `target_hz`.
    ///
    /// The result has one row per component and one column per sample, with
    /// the newest sample in the last column. Acceleration is converted from
    /// gravity units to m/s² with the resting 1 g removed from axis 2.
    pub fn window(
        &self,
        part: BodyPart,
        kind: ParameterKind,
        size: usize,
        source_hz: f64,
        target_hz: f64,
    ) -> Array2<f64> {
        let seg = layout::segment(part, kind);
        let ratio = self.decimation_ratio(source_hz, target_hz);
        let size = size.min(self.capacity() / ratio);
        if seg.end() > self.width() {
            return Array2::zeros((seg.len, 0));
        }
        let mut block = self.tail(seg, size * ratio);
        if kind == ParameterKind::AcceleratedVelocity {
            block.column_mut(2).mapv_inplace(|v| v - 1.0);
            block.mapv_inplace(|v| v * GRAVITY);
        }
        let newest = block.nrows();
        let mut out = Array2::zeros((seg.len, size));
        for j in 0..size {
            out.column_mut(size - 1 - j)
                .assign(&block.row(newest - 1 - j * ratio));
        }
        out
    }

    fn tail(&self, seg: Segment, rows: usize) -> Array2<f64> {
        let start = self.capacity() - rows;
        self.rows.slice(s![start.., seg.range()]).to_owned()
    }
}
