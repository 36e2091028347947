use pretty_assertions::assert_eq;
use sentryx::{analyze_scan, count_classes, Detection, ScanStatus, Severity};

fn sample_detections() -> Vec<Detection> {
    vec![
        Detection::new("crack", 0.85),
        Detection::new("crack", 0.5),
        Detection::new("spall", 0.3),
    ]
}

#[test]
fn test_scenario_crack_and_spall() {
    let report = analyze_scan(&sample_detections(), 0.25, "2026-08-24 10:00:00".to_string());

    assert_eq!(report.rows.len(), 3);
    let severities: Vec<Severity> = report.rows.iter().map(|r| r.severity).collect();
    assert_eq!(
        severities,
        vec![Severity::High, Severity::Medium, Severity::Low]
    );

    assert_eq!(report.class_counts["crack"], 2);
    assert_eq!(report.class_counts["spall"], 1);
    assert_eq!(report.distinct_classes(), 2);

    let stats = report.confidence_stats.expect("non-empty scan has stats");
    assert!((stats.mean - 0.55).abs() < 1e-9);

    assert_eq!(report.summary.status, ScanStatus::Critical);
    assert_eq!(report.summary.detection_count, 3);
}

#[test]
fn test_rows_keep_input_order_with_one_based_ids() {
    let report = analyze_scan(&sample_detections(), 0.25, String::new());

    let ids: Vec<usize> = report.rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(report.rows[0].class_name, "crack");
    assert_eq!(report.rows[2].class_name, "spall");
    assert_eq!(report.rows[0].confidence, 0.85);
}

#[test]
fn test_confidence_stats_values() {
    let report = analyze_scan(&sample_detections(), 0.25, String::new());
    let stats = report.confidence_stats.unwrap();

    assert!((stats.max - 0.85).abs() < 1e-9);
    assert!((stats.min - 0.3).abs() < 1e-9);
    // population std dev of [0.85, 0.5, 0.3]
    let expected = (0.155f64 / 3.0).sqrt();
    assert!((stats.std_dev - expected).abs() < 1e-9);
}

#[test]
fn test_severity_breakdown_counts() {
    let report = analyze_scan(&sample_detections(), 0.25, String::new());

    assert_eq!(report.severity_breakdown.high, 1);
    assert_eq!(report.severity_breakdown.medium, 1);
    assert_eq!(report.severity_breakdown.low, 1);
    assert_eq!(report.severity_breakdown.total(), 3);
}

#[test]
fn test_empty_scan_is_safe_with_no_stats() {
    let report = analyze_scan(&[], 0.25, "2026-08-24 10:00:00".to_string());

    assert_eq!(report.summary.status, ScanStatus::Safe);
    assert_eq!(report.summary.detection_count, 0);
    assert!(report.rows.is_empty());
    assert!(report.class_counts.is_empty());
    assert!(report.confidence_stats.is_none());
    assert_eq!(report.severity_breakdown.total(), 0);
}

#[test]
fn test_threshold_and_timestamp_recorded_verbatim() {
    let report = analyze_scan(&sample_detections(), 0.33, "2026-01-02 03:04:05".to_string());

    assert_eq!(report.summary.confidence_threshold, 0.33);
    assert_eq!(report.summary.timestamp, "2026-01-02 03:04:05");
}

#[test]
fn test_status_ignores_confidence_magnitude() {
    // A single barely-over-threshold detection is still Critical
    let report = analyze_scan(&[Detection::new("crack", 0.26)], 0.25, String::new());
    assert_eq!(report.summary.status, ScanStatus::Critical);
}

#[test]
fn test_count_classes_over_single_scan_only() {
    let counts = count_classes(&sample_detections());
    assert_eq!(counts.len(), 2);
    assert_eq!(counts["crack"], 2);

    let counts = count_classes(&[]);
    assert!(counts.is_empty());
}
