mod common;
use babylog::core::add::{AddLogic, split_activity};
use babylog::errors::AppError;
use babylog::utils::time::{backdate, parse_hour_minute};
use chrono::NaiveTime;
use common::{setup_test_log, store_with, ts};

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_parse_with_data_and_dash() {
    let req = AddLogic::parse("feed/sx-10:25").unwrap();
    assert_eq!(req.event, "feed");
    assert_eq!(req.data.as_deref(), Some("sx"));
    assert_eq!(req.time, hm(10, 25));
    assert_eq!(req.activity, "feed/sx");
}

#[test]
fn test_parse_space_and_dot_separators() {
    let req = AddLogic::parse("poop 10.40").unwrap();
    assert_eq!(req.event, "poop");
    assert_eq!(req.data, None);
    assert_eq!(req.time, hm(10, 40));

    let req = AddLogic::parse("wakeup-00:45").unwrap();
    assert_eq!(req.time, hm(0, 45));
}

#[test]
fn test_parse_rejects_bad_input() {
    for bad in ["", "feed", "feed-10", "feed-ab:cd", "feed-25:00", "a-b-10:00", "-10:00"] {
        assert!(
            matches!(AddLogic::parse(bad), Err(AppError::InvalidEventString(_))),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn test_split_activity() {
    assert_eq!(split_activity("feed/dx"), ("feed".into(), Some("dx".into())));
    assert_eq!(split_activity("sleep"), ("sleep".into(), None));
    assert_eq!(split_activity("feed/"), ("feed".into(), None));
}

#[test]
fn test_parse_hour_minute() {
    assert_eq!(parse_hour_minute("7:05").unwrap(), hm(7, 5));
    assert_eq!(parse_hour_minute("23.59").unwrap(), hm(23, 59));
    assert!(parse_hour_minute("2359").is_err());
}

#[test]
fn test_backdate_same_day_when_not_later() {
    let now = ts("12:00:00 2024-06-15");
    assert_eq!(backdate(hm(11, 30), now), ts("11:30:00 2024-06-15"));
    assert_eq!(backdate(hm(12, 0), now), ts("12:00:00 2024-06-15"));
}

#[test]
fn test_backdate_crosses_month_and_year() {
    assert_eq!(
        backdate(hm(23, 0), ts("01:00:00 2024-03-01")),
        ts("23:00:00 2024-02-29")
    );
    assert_eq!(
        backdate(hm(22, 15), ts("06:00:00 2025-01-01")),
        ts("22:15:00 2024-12-31")
    );
}

#[test]
fn test_apply_appends_backdated_record() {
    let log = setup_test_log("add_apply");
    let store = store_with(&log, &[]);

    let record = AddLogic::apply(&store, "feed/dx-23:10", "anna", ts("00:20:00 2024-08-01")).unwrap();

    assert_eq!(record.timestamp, ts("23:10:00 2024-07-31"));
    let row = store.read_all().unwrap().next().unwrap().unwrap();
    assert_eq!(row.timestamp, "23:10:00 2024-07-31");
    assert_eq!(row.logging_user, "anna");
    assert_eq!(row.event, "feed");
    assert_eq!(row.data, "dx");
}

#[test]
fn test_apply_bad_input_logs_nothing() {
    let log = setup_test_log("add_bad");
    let store = store_with(&log, &[]);

    assert!(AddLogic::apply(&store, "feed at noon", "anna", ts("12:00:00 2024-08-01")).is_err());
    assert_eq!(store.read_all().unwrap().count(), 0);
}
