//! Bounded, most-recent-first ledger of past scan summaries

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::ScanSummary;

pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Fixed-capacity scan history. Insertion is always at the front; once the
/// ledger is full, each insertion evicts the oldest entry. Eviction is the
/// defined behavior, never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryLedger {
    entries: Vector<ScanSummary>,
    capacity: usize,
}

impl Default for HistoryLedger {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryLedger {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vector::new(),
            capacity: capacity.max(1),
        }
    }

    /// Insert a completed scan at the front, evicting the oldest entry when
    /// the ledger is over capacity. At most one eviction per append.
    pub fn append(&mut self, summary: ScanSummary) {
        self.entries.push_front(summary);
        if self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    /// The min(n, len) most recent entries, most-recent-first
    pub fn recent(&self, n: usize) -> Vec<&ScanSummary> {
        self.entries.iter().take(n).collect()
    }

    /// All retained entries, most-recent-first
    pub fn entries(&self) -> &Vector<ScanSummary> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Cumulative statistics over the retained history, in chronological
    /// order. Only meaningful from two scans on; None before that.
    pub fn trend_stats(&self) -> Option<TrendStats> {
        if self.entries.len() < 2 {
            return None;
        }

        let scans_total = self.entries.len();
        let total_detections: usize = self.entries.iter().map(|s| s.detection_count).sum();
        let scans_with_defects = self
            .entries
            .iter()
            .filter(|s| s.detection_count > 0)
            .count();

        // entries is most-recent-first; the trend reads oldest-first
        let points = self
            .entries
            .iter()
            .rev()
            .enumerate()
            .map(|(idx, summary)| TrendPoint {
                scan_number: idx + 1,
                timestamp: summary.timestamp.clone(),
                detection_count: summary.detection_count,
            })
            .collect();

        Some(TrendStats {
            total_detections,
            average_per_scan: total_detections as f64 / scans_total as f64,
            scans_with_defects,
            scans_total,
            points,
        })
    }
}

/// One chronological sample for trend plotting; scan_number is 1-based scan
/// order, not wall-clock spacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub scan_number: usize,
    pub timestamp: String,
    pub detection_count: usize,
}

/// Cumulative statistics over the retained scan history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendStats {
    pub total_detections: usize,
    pub average_per_scan: f64,
    pub scans_with_defects: usize,
    pub scans_total: usize,
    pub points: Vec<TrendPoint>,
}

impl TrendStats {
    /// "k/n" form used by the metrics panel
    pub fn defect_ratio_label(&self) -> String {
        format!("{}/{}", self.scans_with_defects, self.scans_total)
    }
}
