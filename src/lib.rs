// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod detector;
pub mod formatting;
pub mod history;
pub mod io;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfidenceStats, Detection, DetectionRow, ScanReport, ScanStatus, ScanSummary, SentryxError,
    SentryxResult, Severity, SeverityBreakdown,
};

pub use crate::analysis::{analyze_scan, count_classes};

pub use crate::detector::{current_timestamp, Detector, JsonDetector};

pub use crate::history::{HistoryLedger, TrendPoint, TrendStats, DEFAULT_HISTORY_CAPACITY};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::session::{SessionContext, SessionCounters, SessionMetrics, SessionOutput};
