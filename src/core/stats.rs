//! Pure statistics helpers over confidence scores

use serde::{Deserialize, Serialize};

pub fn calculate_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.iter().sum::<f64>() / values.len() as f64
}

pub fn find_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

pub fn find_min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Population standard deviation (divides by N, not N-1)
pub fn calculate_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mean = calculate_mean(values);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Aggregate confidence statistics for one scan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceStats {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub std_dev: f64,
}

impl ConfidenceStats {
    /// Compute the stats block for a scan's confidences.
    ///
    /// Returns None for an empty scan; the block is skipped rather than
    /// computed over an empty set.
    pub fn compute(confidences: &[f64]) -> Option<Self> {
        if confidences.is_empty() {
            return None;
        }

        Some(Self {
            mean: calculate_mean(confidences),
            max: find_max(confidences),
            min: find_min(confidences),
            std_dev: calculate_std_dev(confidences),
        })
    }
}
