//! Session-scoped state: running counters and the context that owns them.
//!
//! One SessionContext per user session, constructed fresh and discarded at
//! session end. Sessions never share state.

use serde::{Deserialize, Serialize};

use crate::core::{ScanReport, ScanSummary};
use crate::history::{HistoryLedger, TrendStats, DEFAULT_HISTORY_CAPACITY};

/// Monotonic running totals for one session. No decrement path exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCounters {
    pub total_scans: u64,
    pub total_defects: u64,
}

impl SessionCounters {
    /// One call per completed scan
    pub fn record_scan(&mut self, detection_count: usize) {
        self.total_scans += 1;
        self.total_defects += detection_count as u64;
    }

    /// Defects per scan; None until the first scan completes
    pub fn detection_rate(&self) -> Option<f64> {
        (self.total_scans > 0).then(|| self.total_defects as f64 / self.total_scans as f64)
    }
}

/// Owns all mutable per-session state
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub counters: SessionCounters,
    pub ledger: HistoryLedger,
}

impl SessionContext {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            counters: SessionCounters::default(),
            ledger: HistoryLedger::new(history_capacity),
        }
    }

    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }

    /// Post-scan bookkeeping: exactly one counters update and one ledger
    /// append per completed scan
    pub fn record(&mut self, report: &ScanReport) {
        self.counters.record_scan(report.summary.detection_count);
        self.ledger.append(report.summary.clone());
    }
}

/// Session counters in presentation form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionMetrics {
    pub total_scans: u64,
    pub total_defects: u64,
    /// None until the first scan completes; the panel omits the metric
    pub detection_rate: Option<f64>,
}

impl From<&SessionCounters> for SessionMetrics {
    fn from(counters: &SessionCounters) -> Self {
        Self {
            total_scans: counters.total_scans,
            total_defects: counters.total_defects,
            detection_rate: counters.detection_rate(),
        }
    }
}

/// Everything one session hands to the presentation layer, in display order
#[derive(Debug, Clone, Serialize)]
pub struct SessionOutput {
    pub generated_at: String,
    pub scans: Vec<ScanReport>,
    /// Retained history, most-recent-first, possibly trimmed for display
    pub history: Vec<ScanSummary>,
    pub trend: Option<TrendStats>,
    pub session: SessionMetrics,
}

impl SessionOutput {
    pub fn new(
        generated_at: String,
        scans: Vec<ScanReport>,
        context: &SessionContext,
        recent_limit: Option<usize>,
    ) -> Self {
        let history = context
            .ledger
            .recent(recent_limit.unwrap_or(usize::MAX))
            .into_iter()
            .cloned()
            .collect();

        Self {
            generated_at,
            scans,
            history,
            trend: context.ledger.trend_stats(),
            session: SessionMetrics::from(&context.counters),
        }
    }
}
