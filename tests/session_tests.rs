use sentryx::{
    analyze_scan, Detection, ScanStatus, SessionContext, SessionCounters, SessionOutput,
};

#[test]
fn test_counters_are_additive() {
    let mut counters = SessionCounters::default();
    for count in [3, 0, 5] {
        counters.record_scan(count);
    }

    assert_eq!(counters.total_scans, 3);
    assert_eq!(counters.total_defects, 8);
}

#[test]
fn test_detection_rate_unavailable_before_first_scan() {
    let counters = SessionCounters::default();
    assert!(counters.detection_rate().is_none());
}

#[test]
fn test_detection_rate_is_defects_per_scan() {
    let mut counters = SessionCounters::default();
    counters.record_scan(3);
    counters.record_scan(0);
    counters.record_scan(5);

    let rate = counters.detection_rate().unwrap();
    assert!((rate - 8.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_context_records_counters_and_ledger_together() {
    let mut context = SessionContext::with_default_capacity();

    let report = analyze_scan(
        &[Detection::new("crack", 0.8), Detection::new("spall", 0.3)],
        0.25,
        "2026-08-24 10:00:00".to_string(),
    );
    context.record(&report);

    assert_eq!(context.counters.total_scans, 1);
    assert_eq!(context.counters.total_defects, 2);
    assert_eq!(context.ledger.len(), 1);
    assert_eq!(context.ledger.entries()[0].status, ScanStatus::Critical);
}

#[test]
fn test_counters_survive_ledger_eviction() {
    let mut context = SessionContext::new(10);

    for n in 0..12 {
        let report = analyze_scan(
            &[Detection::new("crack", 0.9)],
            0.25,
            format!("2026-08-24 10:00:{n:02}"),
        );
        context.record(&report);
    }

    // ledger is bounded, counters are not
    assert_eq!(context.ledger.len(), 10);
    assert_eq!(context.counters.total_scans, 12);
    assert_eq!(context.counters.total_defects, 12);
}

#[test]
fn test_fresh_contexts_share_nothing() {
    let mut first = SessionContext::with_default_capacity();
    let report = analyze_scan(&[Detection::new("crack", 0.9)], 0.25, String::new());
    first.record(&report);

    let second = SessionContext::with_default_capacity();
    assert_eq!(second.counters.total_scans, 0);
    assert!(second.ledger.is_empty());
}

#[test]
fn test_session_output_trims_history_to_recent_limit() {
    let mut context = SessionContext::with_default_capacity();
    for n in 0..6 {
        let report = analyze_scan(
            &[Detection::new("crack", 0.9)],
            0.25,
            format!("2026-08-24 10:00:{n:02}"),
        );
        context.record(&report);
    }

    let output = SessionOutput::new("now".to_string(), vec![], &context, Some(2));
    assert_eq!(output.history.len(), 2);
    assert_eq!(output.history[0].timestamp, "2026-08-24 10:00:05");

    let full = SessionOutput::new("now".to_string(), vec![], &context, None);
    assert_eq!(full.history.len(), 6);
    assert!(full.trend.is_some());
    assert_eq!(full.session.total_scans, 6);
}

#[test]
fn test_session_output_omits_trend_for_single_scan() {
    let mut context = SessionContext::with_default_capacity();
    let report = analyze_scan(&[], 0.25, String::new());
    context.record(&report);

    let output = SessionOutput::new("now".to_string(), vec![report], &context, None);
    assert!(output.trend.is_none());
    assert_eq!(output.session.total_defects, 0);
    assert!(output.session.detection_rate.is_some());
}
