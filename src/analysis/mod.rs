//! Per-scan aggregation: turns one raw detection batch into a report.
//!
//! Pure given its inputs; the timestamp comes from the caller so the clock
//! read stays at the edge.

use std::collections::HashMap;

use crate::core::{
    ConfidenceStats, Detection, DetectionRow, ScanReport, ScanSummary, SeverityBreakdown,
};

/// Aggregate one scan's detections into the full report.
///
/// The threshold is recorded for audit only; the detector has already
/// applied it.
pub fn analyze_scan(detections: &[Detection], threshold: f64, timestamp: String) -> ScanReport {
    let rows: Vec<DetectionRow> = detections
        .iter()
        .enumerate()
        .map(|(idx, detection)| DetectionRow {
            id: idx + 1,
            class_name: detection.class_name.clone(),
            confidence: detection.confidence,
            severity: detection.severity(),
        })
        .collect();

    let severity_breakdown = rows
        .iter()
        .fold(SeverityBreakdown::default(), |mut acc, row| {
            acc.record(row.severity);
            acc
        });

    let confidences: Vec<f64> = detections.iter().map(|d| d.confidence).collect();

    ScanReport {
        summary: ScanSummary::new(timestamp, detections.len(), threshold),
        rows,
        class_counts: count_classes(detections),
        severity_breakdown,
        confidence_stats: ConfidenceStats::compute(&confidences),
    }
}

/// Count detections per class over one scan
pub fn count_classes(detections: &[Detection]) -> HashMap<String, usize> {
    detections.iter().fold(HashMap::new(), |mut acc, detection| {
        *acc.entry(detection.class_name.clone()).or_default() += 1;
        acc
    })
}
