//! Landmark sample input
//!
//! The pose-estimation service writes one JSON value per frame:
//!
//! ```text
//! {"x": 0.51, "y": 0.47}
//! {"x": 0.50, "y": 0.46, "confidence": 0.93}
//! null
//! ```
//!
//! `null` means the landmark was not detected in that frame. Blank or
//! unparseable lines are reported as unavailable frames and skipped by the
//! runner.

use headsurf_core::Position;
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// One frame from the source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    /// Landmark found at this position
    Detected(Position),
    /// Frame processed, landmark not found (or below confidence)
    NotDetected,
    /// End of stream
    Closed,
}

impl Frame {
    /// The sample carried by this frame, if any
    pub fn sample(&self) -> Option<Position> {
        match self {
            Frame::Detected(p) => Some(*p),
            Frame::NotDetected | Frame::Closed => None,
        }
    }
}

/// Errors from reading a frame
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Frame unavailable: {0}")]
    FrameUnavailable(String),
}

/// A blocking, per-frame supplier of landmark samples
pub trait SampleSource {
    /// Block until the next frame is available
    fn next_frame(&mut self) -> Result<Frame, SourceError>;
}

#[derive(Debug, Deserialize)]
struct RawSample {
    x: f64,
    y: f64,
    #[serde(default)]
    confidence: Option<f64>,
}

/// Newline-delimited JSON samples from any buffered reader
pub struct JsonLinesSource<R> {
    reader: R,
    line: String,
    line_no: u64,
    mirror: bool,
    min_confidence: f64,
}

impl<R: BufRead> JsonLinesSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_no: 0,
            mirror: false,
            min_confidence: 0.0,
        }
    }

    /// Mirror x coordinates (`x → 1 − x`)
    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    /// Treat samples with a lower reported confidence as not detected
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }
}

impl<R: BufRead> SampleSource for JsonLinesSource<R> {
    fn next_frame(&mut self) -> Result<Frame, SourceError> {
        self.line.clear();
        let read = self
            .reader
            .read_line(&mut self.line)
            .map_err(|e| SourceError::FrameUnavailable(format!("read failed: {e}")))?;
        if read == 0 {
            return Ok(Frame::Closed);
        }
        self.line_no += 1;

        parse_line(&self.line, self.mirror, self.min_confidence)
            .map_err(|e| SourceError::FrameUnavailable(format!("line {}: {e}", self.line_no)))
    }
}

/// Parse a single input line into a frame
pub fn parse_line(line: &str, mirror: bool, min_confidence: f64) -> Result<Frame, String> {
    let line = line.trim();
    if line.is_empty() {
        return Err("empty line".to_string());
    }

    let raw: Option<RawSample> = serde_json::from_str(line).map_err(|e| e.to_string())?;
    let Some(raw) = raw else {
        return Ok(Frame::NotDetected);
    };

    if raw.confidence.is_some_and(|c| c < min_confidence) {
        return Ok(Frame::NotDetected);
    }

    let position = Position::new(raw.x, raw.y);
    Ok(Frame::Detected(if mirror {
        position.mirrored()
    } else {
        position
    }))
}

/// Open `path` for reading, or stdin when `path` is `None` or `-`
pub fn open_input(path: Option<&Path>) -> io::Result<Box<dyn BufRead>> {
    match path {
        None => Ok(Box::new(io::stdin().lock())),
        Some(p) if p == Path::new("-") => Ok(Box::new(io::stdin().lock())),
        Some(p) => Ok(Box::new(BufReader::new(File::open(p)?))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_detected() {
        let frame = parse_line(r#"{"x": 0.25, "y": 0.5}"#, false, 0.5).unwrap();
        assert_eq!(frame, Frame::Detected(Position::new(0.25, 0.5)));
    }

    #[test]
    fn test_parse_null_is_not_detected() {
        assert_eq!(parse_line("null\n", false, 0.5).unwrap(), Frame::NotDetected);
    }

    #[test]
    fn test_low_confidence_is_not_detected() {
        let line = r#"{"x": 0.5, "y": 0.5, "confidence": 0.3}"#;
        assert_eq!(parse_line(line, false, 0.5).unwrap(), Frame::NotDetected);
        assert!(matches!(
            parse_line(line, false, 0.2).unwrap(),
            Frame::Detected(_)
        ));
    }

    #[test]
    fn test_mirror() {
        let frame = parse_line(r#"{"x": 0.25, "y": 0.5}"#, true, 0.0).unwrap();
        assert_eq!(frame, Frame::Detected(Position::new(0.75, 0.5)));
    }

    #[test]
    fn test_out_of_range_passes_through() {
        let frame = parse_line(r#"{"x": -0.2, "y": 1.4}"#, false, 0.0).unwrap();
        assert_eq!(frame.sample(), Some(Position::new(-0.2, 1.4)));
    }

    #[test]
    fn test_malformed_lines() {
        assert!(parse_line("", false, 0.0).is_err());
        assert!(parse_line("   ", false, 0.0).is_err());
        assert!(parse_line("{\"x\": 0.5}", false, 0.0).is_err());
        assert!(parse_line("0.5 0.5", false, 0.0).is_err());
    }

    #[test]
    fn test_source_sequence() {
        let input = "{\"x\":0.5,\"y\":0.5}\nnull\ngarbage\n\n{\"x\":0.6,\"y\":0.4}";
        let mut source = JsonLinesSource::new(Cursor::new(input));

        assert_eq!(
            source.next_frame().unwrap(),
            Frame::Detected(Position::new(0.5, 0.5))
        );
        assert_eq!(source.next_frame().unwrap(), Frame::NotDetected);

        let err = source.next_frame().unwrap_err();
        assert!(err.to_string().contains("line 3"));
        assert!(source.next_frame().is_err());

        // Last line without trailing newline still parses
        assert_eq!(
            source.next_frame().unwrap(),
            Frame::Detected(Position::new(0.6, 0.4))
        );
        assert_eq!(source.next_frame().unwrap(), Frame::Closed);
        assert_eq!(source.next_frame().unwrap(), Frame::Closed);
    }
}
