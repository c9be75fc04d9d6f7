mod common;
use babylog::core::aggregate::AggregateLogic;
use babylog::core::diagnostics::{CollectingSink, Severity};
use babylog::core::report::{format_all_rows, format_daily_counts, format_last_occurrences};
use common::{append_raw_line, day, rec, setup_test_log, store_with, ts};

#[test]
fn test_last_feed_is_latest_one() {
    let log = setup_test_log("last_feed");
    let store = store_with(
        &log,
        &[
            rec("08:00:00 2024-01-01", "123", "feed", Some("sx")),
            rec("08:05:00 2024-01-01", "123", "feed", Some("dx")),
        ],
    );
    let sink = CollectingSink::new();

    let last = AggregateLogic::last_occurrences(&store, &sink).unwrap();

    assert_eq!(
        last.get("feed").unwrap().as_tuple(),
        (
            "08:05:00 2024-01-01".to_string(),
            "dx".to_string(),
            "123".to_string()
        )
    );
    assert!(sink.is_empty());
}

#[test]
fn test_equal_timestamps_keep_first_seen() {
    let log = setup_test_log("tie_break");
    let store = store_with(
        &log,
        &[
            rec("08:00:00 2024-01-01", "anna", "feed", Some("sx")),
            rec("08:00:00 2024-01-01", "marco", "feed", Some("dx")),
        ],
    );

    let last = AggregateLogic::last_occurrences(&store, &CollectingSink::new()).unwrap();

    let feed = last.get("feed").unwrap();
    assert_eq!(feed.data, "sx");
    assert_eq!(feed.logging_user, "anna");
}

#[test]
fn test_backfilled_earlier_row_does_not_replace() {
    let log = setup_test_log("backfill");
    let store = store_with(
        &log,
        &[
            rec("10:00:00 2024-01-02", "a", "sleep", None),
            rec("23:30:00 2024-01-01", "a", "sleep", Some("late")),
            rec("09:00:00 2024-01-02", "a", "wakeup", None),
        ],
    );

    let last = AggregateLogic::last_occurrences(&store, &CollectingSink::new()).unwrap();

    assert_eq!(last.get("sleep").unwrap().timestamp, ts("10:00:00 2024-01-02"));
    assert_eq!(last.kinds().collect::<Vec<_>>(), vec!["sleep", "wakeup"]);
}

#[test]
fn test_malformed_row_is_skipped_and_reported() {
    let log = setup_test_log("malformed");
    let store = store_with(&log, &[rec("07:00:00 2024-01-01", "a", "feed", Some("sx"))]);
    append_raw_line(&log, "not a time,a,feed,dx");
    append_raw_line(&log, "25:99:00 2024-01-01,a,poop,");
    store
        .append(&rec("07:30:00 2024-01-01", "a", "feed", Some("dx")))
        .unwrap();
    let sink = CollectingSink::new();

    let last = AggregateLogic::last_occurrences(&store, &sink).unwrap();

    assert_eq!(last.get("feed").unwrap().timestamp, ts("07:30:00 2024-01-01"));
    assert!(!last.contains_key("poop"));
    let reports = sink.reports();
    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|(sev, _)| *sev == Severity::Error));
    assert!(reports[0].1.contains("not a time"));
}

#[test]
fn test_malformed_first_row_does_not_poison_kind() {
    let log = setup_test_log("malformed_first");
    let store = store_with(&log, &[]);
    append_raw_line(&log, "garbage,a,pee,");
    store
        .append(&rec("11:00:00 2024-01-01", "a", "pee", None))
        .unwrap();

    let last = AggregateLogic::last_occurrences(&store, &CollectingSink::new()).unwrap();
    assert_eq!(last.get("pee").unwrap().timestamp, ts("11:00:00 2024-01-01"));
}

#[test]
fn test_daily_counts_exclude_comments() {
    let log = setup_test_log("counts_comment");
    let store = store_with(
        &log,
        &[
            rec("09:00:00 2024-05-10", "a", "comment", Some("all good")),
            rec("09:10:00 2024-05-10", "a", "poop", None),
        ],
    );

    let counts =
        AggregateLogic::daily_counts_on(&store, day("2024-05-10"), &CollectingSink::new()).unwrap();

    assert_eq!(counts.get("poop"), Some(&1));
    assert!(!counts.contains_key("comment"));
    assert_eq!(counts.len(), 1);
}

#[test]
fn test_daily_counts_ignore_other_days() {
    let log = setup_test_log("counts_days");
    let store = store_with(
        &log,
        &[
            rec("23:59:59 2024-05-09", "a", "feed", Some("sx")),
            rec("00:00:00 2024-05-10", "a", "feed", Some("dx")),
            rec("06:00:00 2024-05-10", "b", "feed", Some("sx")),
            rec("06:30:00 2024-05-10", "b", "pee", None),
        ],
    );

    let counts =
        AggregateLogic::daily_counts_on(&store, day("2024-05-10"), &CollectingSink::new()).unwrap();

    assert_eq!(counts.get("feed"), Some(&2));
    assert_eq!(counts.get("pee"), Some(&1));
    assert_eq!(counts.kinds().collect::<Vec<_>>(), vec!["feed", "pee"]);
}

#[test]
fn test_daily_counts_today() {
    let log = setup_test_log("counts_today");
    let store = store_with(&log, &[]);
    store.append_now("comment", Some("hello".into()), "a").unwrap();
    store.append_now("poop", None, "a").unwrap();

    let counts = AggregateLogic::daily_counts(&store, &CollectingSink::new()).unwrap();

    assert_eq!(counts.get("poop"), Some(&1));
    assert!(!counts.contains_key("comment"));
}

#[test]
fn test_format_last_occurrences_elapsed() {
    let log = setup_test_log("format_last");
    let store = store_with(
        &log,
        &[
            rec("08:05:00 2024-01-01", "123", "feed", Some("dx")),
            rec("09:00:30 2024-01-01", "456", "poop", None),
        ],
    );
    let last = AggregateLogic::last_occurrences(&store, &CollectingSink::new()).unwrap();

    let text = format_last_occurrences(&last, ts("10:20:00 2024-01-01"));

    assert!(text.starts_with("Last occurrences:\n\n"));
    assert!(text.contains(" - feed (dx):      123   2h 15m ago (08:05)"));
    // 79.5 minutes floors to 79
    assert!(text.contains(" - poop:           456   1h 19m ago (09:00)"));
}

#[test]
fn test_format_last_occurrences_future_is_zero() {
    let log = setup_test_log("format_future");
    let store = store_with(&log, &[rec("12:00:00 2024-01-01", "a", "sleep", None)]);
    let last = AggregateLogic::last_occurrences(&store, &CollectingSink::new()).unwrap();

    let text = format_last_occurrences(&last, ts("11:00:00 2024-01-01"));
    assert!(text.contains("0h 0m ago (12:00)"));
}

#[test]
fn test_format_daily_counts() {
    let log = setup_test_log("format_counts");
    let store = store_with(&log, &[rec("06:30:00 2024-05-10", "b", "pee", None)]);
    let counts =
        AggregateLogic::daily_counts_on(&store, day("2024-05-10"), &CollectingSink::new()).unwrap();

    let text = format_daily_counts(&counts);
    assert_eq!(text, "Daily counts:\n\n - pee:        1\n");
}

#[test]
fn test_format_all_rows_skips_bad_row() {
    let log = setup_test_log("format_all");
    let store = store_with(&log, &[rec("06:30:00 2024-05-10", "b", "pee", None)]);
    append_raw_line(&log, "??,b,feed,sx");
    store
        .append(&rec("07:45:10 2024-05-10", "b", "feed", Some("sx")))
        .unwrap();
    let sink = CollectingSink::new();

    let text = format_all_rows(&store, &sink).unwrap();

    assert!(text.starts_with("All entries:\n\n"));
    assert!(text.contains(" - pee:            b     (06:30)"));
    assert!(text.contains(" - feed (sx):      b     (07:45)"));
    assert!(!text.contains("ago"));
    assert_eq!(sink.len(), 1);
}
