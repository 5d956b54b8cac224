//! JSON-lines landmark streams.
//!
//! Each input line is one [`FrameInput`]; each processed frame produces one
//! JSON [`FrameReport`] line. A line that does not parse is logged and
//! skipped, and the stream carries on.

use crate::landmarks::ArmLandmarks;
use crate::pipeline::{FrameReport, PostureAnalyzer};
use crate::Result;
use log::{info, warn};
use serde::Deserialize;
use std::io::{BufRead, Write};

/// One input line: a landmark frame plus an optional calibration request
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FrameInput {
    #[serde(flatten)]
    pub landmarks: ArmLandmarks,
    /// Adopt this frame's elbow angle as the reference once it is processed
    #[serde(default)]
    pub set_reference: bool,
}

impl FrameInput {
    /// Parse a single JSON line
    pub fn parse(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }
}

/// Counters for one pass over a stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    pub frames: u64,
    pub skipped_lines: u64,
    pub calibrations: u64,
}

/// Run every line of `reader` through `analyzer`, writing reports to `out`.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if reading the input or writing a report fails.
pub fn process_stream<R: BufRead, W: Write>(
    analyzer: &mut PostureAnalyzer,
    reader: R,
    out: &mut W,
) -> Result<StreamSummary> {
    let mut summary = StreamSummary::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let input = match FrameInput::parse(&line) {
            Ok(input) => input,
            Err(e) => {
                warn!("Skipping line {}: {}", line_no + 1, e);
                summary.skipped_lines += 1;
                continue;
            }
        };

        let report = analyzer.process(&input.landmarks);
        write_report(out, &report)?;
        summary.frames += 1;

        if input.set_reference {
            match analyzer.set_reference() {
                Ok(angle) => {
                    info!("Frame {}: reference angle set to {:.1}°", report.frame_index, angle);
                    summary.calibrations += 1;
                }
                Err(e) => warn!("Frame {}: {}", report.frame_index, e),
            }
        }
    }

    out.flush()?;
    Ok(summary)
}

fn write_report<W: Write>(out: &mut W, report: &FrameReport) -> Result<()> {
    serde_json::to_writer(&mut *out, report).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}
