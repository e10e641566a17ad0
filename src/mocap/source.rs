use std::collections::VecDeque;
use std::io::BufRead;
use crate::mocap::MocapError;

/// Supplies raw text frames one at a time; `Ok(None)` marks the end of the stream.
pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<String>, MocapError>;
}

/// Replays a fixed list of frames held in memory.
pub struct ManualSource {
    queue: VecDeque<String>,
}

impl ManualSource {
    pub fn new<T: Into<String>>(frames: impl IntoIterator<Item = T>) -> Self {
        Self {
            queue: frames.into_iter().map(Into::into).collect(),
        }
    }
}

impl FrameSource for ManualSource {
    fn next_frame(&mut self) -> Result<Option<String>, MocapError> {
        Ok(self.queue.pop_front())
    }
}

/// One frame per line from any buffered reader (file, stdin, socket).
/// Blank lines are skipped.
pub struct LineSource<R: BufRead> {
    reader: R,
    line: String,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }
}

impl<R: BufRead> FrameSource for LineSource<R> {
    fn next_frame(&mut self) -> Result<Option<String>, MocapError> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            let frame = self.line.trim();
            if !frame.is_empty() {
                return Ok(Some(frame.to_owned()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    #[test]
    fn line_source_skips_blank_lines() {
        let mut source = LineSource::new(Cursor::new("1 2 3\n\n  \n4 5 6\r\n"));
        assert_eq!(source.next_frame().unwrap().as_deref(), Some("1 2 3"));
        assert_eq!(source.next_frame().unwrap().as_deref(), Some("4 5 6"));
        assert_eq!(source.next_frame().unwrap(), None);
    }
    #[test]
    fn manual_source_drains_in_order() {
        let mut source = ManualSource::new(["a", "b"]);
        assert_eq!(source.next_frame().unwrap().as_deref(), Some("a"));
        assert_eq!(source.next_frame().unwrap().as_deref(), Some("b"));
        assert!(source.next_frame().unwrap().is_none());
    }
}
