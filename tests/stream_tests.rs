//! Tests for JSON-lines stream processing as driven by the command-line tool

use bowing_posture::{config::Config, pipeline::PostureAnalyzer, stream::process_stream};
use std::io::Cursor;

const EXTENDED: &str = r#""shoulder":{"x":0.5,"y":0.3},"elbow":{"x":0.5,"y":0.45},"wrist":{"x":0.52,"y":0.6}"#;

fn run(input: &str) -> (Vec<serde_json::Value>, bowing_posture::stream::StreamSummary, PostureAnalyzer) {
    let mut analyzer = PostureAnalyzer::new(&Config::default()).unwrap();
    let mut out = Vec::new();
    let summary = process_stream(&mut analyzer, Cursor::new(input), &mut out).unwrap();

    let reports = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    (reports, summary, analyzer)
}

#[test]
fn test_one_report_per_frame() {
    let input = format!("{{{EXTENDED}}}\n{{{EXTENDED}}}\n");
    let (reports, summary, _) = run(&input);

    assert_eq!(reports.len(), 2);
    assert_eq!(summary.frames, 2);
    assert_eq!(reports[0]["frame_index"], 0);
    assert_eq!(reports[1]["frame_index"], 1);
    assert_eq!(reports[1]["hint"], "extend_arm");
}

#[test]
fn test_malformed_and_blank_lines_are_skipped() {
    let input = format!("{{{EXTENDED}}}\nnot json\n\n{{\"shoulder\":{{\"x\":\"left\"}}}}\n{{{EXTENDED}}}\n");
    let (reports, summary, _) = run(&input);

    assert_eq!(summary.frames, 2);
    assert_eq!(summary.skipped_lines, 2);
    // Frame indices stay contiguous across skipped lines
    assert_eq!(reports[1]["frame_index"], 1);
}

#[test]
fn test_set_reference_applies_after_its_frame() {
    let input = format!("{{{EXTENDED},\"set_reference\":true}}\n{{{EXTENDED}}}\n");
    let (reports, summary, analyzer) = run(&input);

    assert_eq!(summary.calibrations, 1);
    // The calibrating frame itself is still judged against the default reference
    assert_eq!(reports[0]["raw_verdict"]["detail"]["angle_deviated"], true);
    // The next frame sees the new reference
    assert_eq!(reports[1]["raw_verdict"]["detail"]["angle_deviated"], false);
    assert!((analyzer.baseline().reference_angle() - 172.0).abs() < 1.0);
}

#[test]
fn test_set_reference_on_empty_frame_is_refused() {
    let (reports, summary, analyzer) = run("{\"set_reference\":true}\n");

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["hint"], "no_arm_detected");
    assert_eq!(summary.calibrations, 0);
    assert_eq!(analyzer.baseline().reference_angle(), 150.0);
}
