use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use log::info;
use ndarray::Array1;
use crate::mocap::MocapError;

/// Writes decoded frames as CSV rows: elapsed seconds, then one column per slot.
pub struct FrameRecorder {
    writer: Box<dyn Write>,
    started: Instant,
    rows: usize,
}

impl FrameRecorder {
    pub fn create(path: impl AsRef<Path>, width: usize) -> Result<Self, MocapError> {
        let file = File::create(path.as_ref())?;
        info!("recording frames to {}", path.as_ref().display());
        Self::from_writer(BufWriter::new(file), width)
    }

    pub fn from_writer(writer: impl Write + 'static, width: usize) -> Result<Self, MocapError> {
        let mut writer: Box<dyn Write> = Box::new(writer);
        write!(writer, "Timestamp")?;
        for slot in 0..width {
            write!(writer, ",S{slot}")?;
        }
        writeln!(writer)?;
        Ok(Self {
            writer,
            started: Instant::now(),
            rows: 0,
        })
    }

    pub fn write_frame(&mut self, frame: &Array1<f64>) -> Result<(), MocapError> {
        write!(self.writer, "{:.4}", self.started.elapsed().as_secs_f64())?;
        for value in frame {
            write!(self.writer, ",{value}")?;
        }
        writeln!(self.writer)?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn flush(&mut self) -> Result<(), MocapError> {
        self.writer.flush()?;
        Ok(())
    }
}
