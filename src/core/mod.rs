pub mod errors;
pub mod stats;
pub mod types;

pub use errors::{SentryxError, SentryxResult};
pub use stats::ConfidenceStats;
pub use types::{
    Detection, DetectionRow, ScanReport, ScanStatus, ScanSummary, Severity, SeverityBreakdown,
};
