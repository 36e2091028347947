use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;

use crate::analysis::analyze_scan;
use crate::config::{validate_threshold, SentryxConfig};
use crate::detector::{current_timestamp, Detector, JsonDetector};
use crate::formatting::FormattingConfig;
use crate::io::output::{create_file_writer, create_writer, OutputFormat};
use crate::session::{SessionContext, SessionOutput};

#[derive(Debug)]
pub struct ScanConfig {
    pub inputs: Vec<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub threshold: Option<f64>,
    pub config_path: Option<PathBuf>,
    pub recent: Option<usize>,
    pub plain: bool,
}

/// Process each detection export as one scan, in order, within one fresh
/// session. One scan is fully recorded before the next begins.
pub fn handle_scan(config: ScanConfig) -> Result<()> {
    let settings = SentryxConfig::load(config.config_path.as_deref())?;

    let threshold = config
        .threshold
        .unwrap_or(settings.detection.confidence_threshold);
    validate_threshold(threshold).map_err(|e| anyhow::anyhow!(e))?;

    let formatting = if config.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };

    let detector = JsonDetector;
    let mut session = SessionContext::new(settings.history.capacity);
    let mut scans = Vec::with_capacity(config.inputs.len());

    for input in &config.inputs {
        info!("scanning {}", input.display());
        let detections = detector
            .detect(input, threshold)
            .with_context(|| format!("failed to read detections from {}", input.display()))?;
        debug!("{} detections above threshold", detections.len());

        let report = analyze_scan(&detections, threshold, current_timestamp());
        session.record(&report);
        scans.push(report);
    }

    let output = SessionOutput::new(current_timestamp(), scans, &session, config.recent);

    let mut writer = match &config.output {
        Some(path) => create_file_writer(config.format, path)?,
        None => create_writer(config.format, formatting),
    };
    writer.write_session(&output)
}
