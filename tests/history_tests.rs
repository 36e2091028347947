use sentryx::{HistoryLedger, ScanStatus, ScanSummary, DEFAULT_HISTORY_CAPACITY};

fn summary(n: usize, detections: usize) -> ScanSummary {
    ScanSummary::new(format!("2026-08-24 10:00:{n:02}"), detections, 0.25)
}

#[test]
fn test_append_inserts_at_front() {
    let mut ledger = HistoryLedger::default();
    ledger.append(summary(1, 0));
    ledger.append(summary(2, 3));

    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.entries()[0].timestamp, "2026-08-24 10:00:02");
    assert_eq!(ledger.entries()[1].timestamp, "2026-08-24 10:00:01");
}

#[test]
fn test_capacity_never_exceeded() {
    let mut ledger = HistoryLedger::default();
    assert_eq!(ledger.capacity(), DEFAULT_HISTORY_CAPACITY);

    for n in 0..25 {
        ledger.append(summary(n, 1));
        assert!(ledger.len() <= DEFAULT_HISTORY_CAPACITY);
    }
    assert_eq!(ledger.len(), DEFAULT_HISTORY_CAPACITY);
}

#[test]
fn test_eleventh_append_evicts_first_scan() {
    let mut ledger = HistoryLedger::new(10);
    for n in 1..=11 {
        ledger.append(summary(n, 1));
    }

    assert_eq!(ledger.len(), 10);
    // most recent first, the very first scan is gone
    assert_eq!(ledger.entries()[0].timestamp, "2026-08-24 10:00:11");
    assert!(ledger
        .entries()
        .iter()
        .all(|s| s.timestamp != "2026-08-24 10:00:01"));
    assert_eq!(
        ledger.entries().iter().last().unwrap().timestamp,
        "2026-08-24 10:00:02"
    );
}

#[test]
fn test_recent_returns_min_of_n_and_len() {
    let mut ledger = HistoryLedger::default();
    for n in 1..=4 {
        ledger.append(summary(n, n));
    }

    let recent = ledger.recent(2);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].detection_count, 4);
    assert_eq!(recent[1].detection_count, 3);

    assert_eq!(ledger.recent(100).len(), 4);
    assert_eq!(ledger.len(), 4); // non-mutating
}

#[test]
fn test_trend_stats_requires_two_entries() {
    let mut ledger = HistoryLedger::default();
    assert!(ledger.trend_stats().is_none());

    ledger.append(summary(1, 5));
    assert!(ledger.trend_stats().is_none());

    ledger.append(summary(2, 3));
    assert!(ledger.trend_stats().is_some());
}

#[test]
fn test_trend_stats_totals_and_average() {
    let mut ledger = HistoryLedger::default();
    ledger.append(summary(1, 3));
    ledger.append(summary(2, 0));
    ledger.append(summary(3, 5));

    let trend = ledger.trend_stats().unwrap();
    assert_eq!(trend.total_detections, 8);
    assert_eq!(trend.scans_total, 3);
    assert!((trend.average_per_scan * trend.scans_total as f64 - 8.0).abs() < 1e-9);
    assert_eq!(trend.scans_with_defects, 2);
    assert_eq!(trend.defect_ratio_label(), "2/3");
}

#[test]
fn test_trend_points_are_chronological_and_one_based() {
    let mut ledger = HistoryLedger::default();
    ledger.append(summary(1, 3));
    ledger.append(summary(2, 0));
    ledger.append(summary(3, 5));

    let trend = ledger.trend_stats().unwrap();
    let numbers: Vec<usize> = trend.points.iter().map(|p| p.scan_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    let counts: Vec<usize> = trend.points.iter().map(|p| p.detection_count).collect();
    assert_eq!(counts, vec![3, 0, 5]);
    assert_eq!(trend.points[0].timestamp, "2026-08-24 10:00:01");
}

#[test]
fn test_trend_stats_cover_only_retained_entries() {
    let mut ledger = HistoryLedger::new(3);
    for n in 1..=5 {
        ledger.append(summary(n, n));
    }

    let trend = ledger.trend_stats().unwrap();
    // entries 1 and 2 were evicted
    assert_eq!(trend.scans_total, 3);
    assert_eq!(trend.total_detections, 3 + 4 + 5);
}

#[test]
fn test_safe_entries_are_retained_like_any_other() {
    let mut ledger = HistoryLedger::default();
    ledger.append(summary(1, 0));

    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.entries()[0].status, ScanStatus::Safe);
    assert_eq!(ledger.entries()[0].detection_count, 0);
}
