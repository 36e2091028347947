//! Common type definitions used across the codebase

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::stats::ConfidenceStats;

/// Severity tiers for a single detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,    // confidence <= 0.4
    Medium, // 0.4 < confidence <= 0.7
    High,   // confidence > 0.7
}

impl Severity {
    /// Classify a confidence score in [0, 1] into a severity tier.
    ///
    /// Total over [0, 1]; values outside that range are a detector contract
    /// violation and are not validated here.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 0.7 {
            Severity::High
        } else if confidence > 0.4 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    /// Get the display name for this severity
    pub fn display_name(&self) -> &str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Overall verdict for one scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScanStatus {
    Safe,
    Critical,
}

impl ScanStatus {
    /// Any detection at all marks the scan Critical, regardless of severity
    pub fn from_detection_count(count: usize) -> Self {
        if count > 0 {
            ScanStatus::Critical
        } else {
            ScanStatus::Safe
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            ScanStatus::Safe => "Safe",
            ScanStatus::Critical => "Critical",
        }
    }
}

/// One object instance reported by the external detector.
///
/// Invariant (detector contract): confidence in [0, 1], class_name non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub class_name: String,
    pub confidence: f64,
}

impl Detection {
    pub fn new(class_name: impl Into<String>, confidence: f64) -> Self {
        Self {
            class_name: class_name.into(),
            confidence,
        }
    }

    pub fn severity(&self) -> Severity {
        Severity::from_confidence(self.confidence)
    }
}

/// One row of the per-detection table, in input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRow {
    /// 1-based sequential ID
    pub id: usize,
    pub class_name: String,
    pub confidence: f64,
    pub severity: Severity,
}

/// Immutable record of one completed scan, owned by the history ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Wall-clock time of scan completion, "%Y-%m-%d %H:%M:%S"
    pub timestamp: String,
    pub detection_count: usize,
    /// Threshold configured for the scan, recorded for audit
    pub confidence_threshold: f64,
    pub status: ScanStatus,
}

impl ScanSummary {
    pub fn new(timestamp: String, detection_count: usize, confidence_threshold: f64) -> Self {
        Self {
            timestamp,
            detection_count,
            confidence_threshold,
            status: ScanStatus::from_detection_count(detection_count),
        }
    }
}

/// Detection counts per severity tier for one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityBreakdown {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityBreakdown {
    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// Everything the per-scan aggregation produces for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub summary: ScanSummary,
    pub rows: Vec<DetectionRow>,
    pub class_counts: HashMap<String, usize>,
    pub severity_breakdown: SeverityBreakdown,
    /// None for empty scans; the stats block is skipped, not zeroed
    pub confidence_stats: Option<ConfidenceStats>,
}

impl ScanReport {
    /// Number of distinct detected classes in this scan
    pub fn distinct_classes(&self) -> usize {
        self.class_counts.len()
    }
}
