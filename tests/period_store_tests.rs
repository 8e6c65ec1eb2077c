mod common;
use common::{clock, date};

use rbiweekly::core::{PERIOD_DAYS, PeriodStore};
use rbiweekly::errors::AppError;
use rbiweekly::models::day_record::DayRecord;
use rbiweekly::models::inclusion::InclusionRule;
use rbiweekly::models::settings::Settings;

fn store_at(anchor: chrono::NaiveDate) -> PeriodStore {
    PeriodStore::new(
        Settings::new(20.0, anchor, InclusionRule::Worked),
        DayRecord::default(),
    )
    .unwrap()
}

#[test]
fn test_visible_dates_cross_year_boundary() {
    let store = store_at(date(2023, 12, 25));
    let dates = store.visible_dates();

    assert_eq!(dates.len(), PERIOD_DAYS as usize);
    assert_eq!(dates[0], date(2023, 12, 25));
    assert_eq!(dates[13], date(2024, 1, 7));
    for w in dates.windows(2) {
        assert_eq!(w[1], w[0].succ_opt().unwrap());
    }
}

#[test]
fn test_visible_dates_cross_leap_february() {
    let store = store_at(date(2024, 2, 20));
    let dates = store.visible_dates();
    assert!(dates.contains(&date(2024, 2, 29)));
    assert_eq!(dates[13], date(2024, 3, 4));
}

#[test]
fn test_shift_period_moves_by_fourteen_days() {
    let mut store = store_at(date(2024, 1, 1));

    assert_eq!(store.shift_period(1).unwrap(), date(2024, 1, 15));
    assert_eq!(store.shift_period(-2).unwrap(), date(2023, 12, 18));
    assert_eq!(store.shift_period(0).unwrap(), date(2023, 12, 18));
}

#[test]
fn test_shift_period_composes() {
    let deltas = [-7i64, -1, 0, 1, 3, 26];

    for d1 in deltas {
        for d2 in deltas {
            let mut a = store_at(date(2024, 6, 3));
            a.shift_period(d1).unwrap();
            a.shift_period(d2).unwrap();

            let mut b = store_at(date(2024, 6, 3));
            b.shift_period(d1 + d2).unwrap();

            assert_eq!(a.anchor(), b.anchor(), "d1={d1} d2={d2}");
        }
    }
}

#[test]
fn test_shift_period_out_of_calendar_range() {
    let mut store = store_at(chrono::NaiveDate::MAX);
    let err = store.shift_period(1).unwrap_err();
    assert!(matches!(err, AppError::DateOutOfRange(_)));
    assert_eq!(store.anchor(), chrono::NaiveDate::MAX);

    let mut store = store_at(date(2024, 1, 1));
    assert!(matches!(
        store.shift_period(i64::MAX),
        Err(AppError::DateOutOfRange(_))
    ));
    assert!(matches!(
        store.shift_period(i64::MIN),
        Err(AppError::DateOutOfRange(_))
    ));
    assert_eq!(store.anchor(), date(2024, 1, 1));
}

#[test]
fn test_set_anchor_replaces_anchor() {
    let mut store = store_at(date(2024, 1, 1));
    store.set_anchor(date(2025, 7, 9));
    assert_eq!(store.anchor(), date(2025, 7, 9));
    assert_eq!(store.visible_dates()[0], date(2025, 7, 9));
}

#[test]
fn test_ensure_record_creates_defaults() {
    let mut store = store_at(date(2024, 1, 1));
    let rec = *store.ensure_record(date(2024, 1, 3));

    assert!(!rec.worked);
    assert_eq!(rec.start, clock(8, 0));
    assert_eq!(rec.end, clock(16, 0));
    assert_eq!(store.record_count(), 1);
}

#[test]
fn test_ensure_record_is_idempotent() {
    let mut store = store_at(date(2024, 1, 1));
    let d = date(2024, 1, 2);

    store.ensure_record(d);
    store.toggle_worked(d).unwrap();
    store.set_times(d, clock(9, 30), clock(12, 0)).unwrap();

    let again = *store.ensure_record(d);
    assert!(again.worked);
    assert_eq!(again.start, clock(9, 30));
    assert_eq!(again.end, clock(12, 0));
    assert_eq!(store.record_count(), 1);
}

#[test]
fn test_mutations_require_existing_record() {
    let mut store = store_at(date(2024, 1, 1));
    let d = date(2024, 1, 5);

    assert!(matches!(store.toggle_worked(d), Err(AppError::RecordNotFound(x)) if x == d));
    assert!(matches!(
        store.set_times(d, clock(8, 0), clock(9, 0)),
        Err(AppError::RecordNotFound(_))
    ));
    assert!(matches!(store.get_record(d), Err(AppError::RecordNotFound(_))));
    assert!(matches!(store.set_worked(d, true), Err(AppError::RecordNotFound(_))));

    // nothing was created on the failing paths
    assert_eq!(store.record_count(), 0);
}

#[test]
fn test_toggle_worked_flips_flag() {
    let mut store = store_at(date(2024, 1, 1));
    let d = date(2024, 1, 1);
    store.ensure_record(d);

    assert!(store.toggle_worked(d).unwrap());
    assert!(store.get_record(d).unwrap().worked);
    assert!(!store.toggle_worked(d).unwrap());
    assert!(!store.get_record(d).unwrap().worked);
}

#[test]
fn test_set_times_accepts_inverted_pair() {
    let mut store = store_at(date(2024, 1, 1));
    let d = date(2024, 1, 1);
    store.ensure_record(d);

    store.set_times(d, clock(16, 0), clock(8, 0)).unwrap();
    let rec = store.get_record(d).unwrap();
    assert_eq!(rec.start, clock(16, 0));
    assert_eq!(rec.end, clock(8, 0));
}

#[test]
fn test_set_hourly_pay_rejects_negative() {
    let mut store = store_at(date(2024, 1, 1));

    store.set_hourly_pay(32.5).unwrap();
    assert_eq!(store.hourly_pay(), 32.5);

    assert!(matches!(store.set_hourly_pay(-1.0), Err(AppError::InvalidRate(_))));
    assert!(matches!(store.set_hourly_pay(f64::NAN), Err(AppError::InvalidRate(_))));
    assert_eq!(store.hourly_pay(), 32.5);

    store.set_hourly_pay(0.0).unwrap();
    assert_eq!(store.hourly_pay(), 0.0);
}

#[test]
fn test_new_store_rejects_negative_rate() {
    let res = PeriodStore::new(
        Settings::new(-3.0, date(2024, 1, 1), InclusionRule::Worked),
        DayRecord::default(),
    );
    assert!(matches!(res, Err(AppError::InvalidRate(_))));
}

#[test]
fn test_edits_survive_navigation() {
    let mut store = store_at(date(2024, 1, 1));
    store.ensure_window();
    let d = date(2024, 1, 4);
    store.toggle_worked(d).unwrap();
    store.set_times(d, clock(10, 0), clock(14, 0)).unwrap();

    store.shift_period(1).unwrap();
    store.ensure_window();
    store.shift_period(3).unwrap();
    store.ensure_window();
    store.shift_period(-4).unwrap();
    store.ensure_window();

    let rec = store.get_record(d).unwrap();
    assert!(rec.worked);
    assert_eq!(rec.start, clock(10, 0));
    assert_eq!(store.record_count(), 14 * 3);
}

#[test]
fn test_included_follows_rule() {
    let mut store = store_at(date(2024, 1, 1));
    store.ensure_window();
    store.toggle_worked(date(2024, 1, 10)).unwrap();
    store.toggle_worked(date(2024, 1, 2)).unwrap();

    let included = store.included();
    let dates: Vec<_> = included.iter().map(|(d, _)| *d).collect();
    assert_eq!(dates, vec![date(2024, 1, 2), date(2024, 1, 10)]);

    store.set_rule(InclusionRule::EveryDay);
    assert_eq!(store.included().len(), 14);
}

#[test]
fn test_included_ignores_records_outside_window() {
    let mut store = store_at(date(2024, 1, 1));
    store.ensure_window();
    store.toggle_worked(date(2024, 1, 1)).unwrap();

    store.shift_period(1).unwrap();
    assert!(store.included().is_empty());
}
