//! External collaborator seams: the detector and the clock.
//!
//! Model inference itself is out of scope; the CLI consumes detection
//! batches the model runner exported as JSON, one file per scan.

use serde::Deserialize;
use std::path::Path;

use crate::core::{Detection, SentryxError, SentryxResult};

/// One detection run over one image source, reported in model output order
/// and filtered at or above the given confidence threshold.
pub trait Detector {
    fn detect(&self, source: &Path, threshold: f64) -> SentryxResult<Vec<Detection>>;
}

/// Shapes a detection export can take: a bare array of detections, or the
/// runner's envelope with a `detections` field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DetectionExport {
    Envelope { detections: Vec<Detection> },
    Bare(Vec<Detection>),
}

/// Reads detection batches exported as JSON by the model runner
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDetector;

impl Detector for JsonDetector {
    fn detect(&self, source: &Path, threshold: f64) -> SentryxResult<Vec<Detection>> {
        let contents = std::fs::read_to_string(source)?;
        let export: DetectionExport = serde_json::from_str(&contents)
            .map_err(|e| SentryxError::Parse(format!("{}: {e}", source.display())))?;

        let detections = match export {
            DetectionExport::Envelope { detections } => detections,
            DetectionExport::Bare(detections) => detections,
        };

        // The model applies the confidence cut at predict time; exports may
        // carry everything, so the cut is reproduced at this seam.
        Ok(detections
            .into_iter()
            .filter(|d| d.confidence >= threshold)
            .collect())
    }
}

/// Current wall-clock time in the fixed human-sortable form used everywhere
pub fn current_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
