//! Integration tests for `BusinessDayResolver`.
//!
//! Exercise the month-end decision over weekends, all-day holidays and timed
//! holidays, plus property checks over arbitrary months.

use chrono::{DateTime, FixedOffset, Weekday};
use proptest::prelude::*;

use eom_time::date::days_in_month;
use eom_time::{BusinessDayResolver, Calendar, Date, HolidayInterval};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn instant(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

/// Every day of the month containing `d`, in order.
fn days_of_month(d: Date) -> Vec<Date> {
    let mut out = Vec::new();
    let mut day = d.start_of_month();
    while day <= d.end_of_month() {
        out.push(day);
        day += 1;
    }
    out
}

// ─── Scenarios ────────────────────────────────────────────────────────────────

#[test]
fn weekday_month_end_without_holidays() {
    // 2024-07-31 is a Wednesday.
    let r = BusinessDayResolver::new([]);
    assert!(r.is_last_business_day(date(2024, 7, 31)));
    assert!(!r.is_last_business_day(date(2024, 7, 30)));
}

#[test]
fn saturday_month_end_falls_back_to_friday() {
    // 2024-08-31 is a Saturday.
    let r = BusinessDayResolver::new([]);
    assert!(r.is_last_business_day(date(2024, 8, 30)));
    assert!(!r.is_last_business_day(date(2024, 8, 31)));
}

#[test]
fn all_day_holiday_on_month_end() {
    let r = BusinessDayResolver::new([HolidayInterval::all_day(date(2024, 7, 31))]);
    assert!(r.is_last_business_day(date(2024, 7, 30)));
    assert!(!r.is_last_business_day(date(2024, 7, 31)));
}

#[test]
fn timed_holiday_on_month_end() {
    // Same shape as a provider returning only a start instant.
    let r = BusinessDayResolver::new([HolidayInterval::starting_at(&instant(
        "2024-07-31T00:00:00Z",
    ))]);
    assert!(r.is_last_business_day(date(2024, 7, 30)));
    assert!(!r.is_last_business_day(date(2024, 7, 31)));
}

#[test]
fn timed_holiday_before_weekend_month_end() {
    // 2024-08-31 is a Saturday and Friday the 30th is a holiday.
    let r = BusinessDayResolver::new([HolidayInterval::starting_at(&instant(
        "2024-08-30T00:00:00Z",
    ))]);
    assert!(r.is_last_business_day(date(2024, 8, 29)));
    assert!(!r.is_last_business_day(date(2024, 8, 30)));
    assert!(!r.is_last_business_day(date(2024, 8, 31)));
}

#[test]
fn one_day_timed_span_before_weekend_month_end() {
    let span = HolidayInterval::timed(
        &instant("2024-08-30T00:00:00+09:00"),
        &instant("2024-08-31T00:00:00+09:00"),
    )
    .unwrap();
    let r = BusinessDayResolver::new([span]);
    assert_eq!(r.last_business_day_of_month(date(2024, 8, 1)), date(2024, 8, 29));
}

#[test]
fn working_hours_holiday_before_weekend_month_end() {
    // 10:00–18:00 Tokyo on Friday the 30th; the 31st is a Saturday.
    let span = HolidayInterval::timed(
        &instant("2024-08-30T10:00:00+09:00"),
        &instant("2024-08-30T18:00:00+09:00"),
    )
    .unwrap();
    let r = BusinessDayResolver::new([span]);
    assert!(r.is_last_business_day(date(2024, 8, 29)));
    assert!(!r.is_last_business_day(date(2024, 8, 30)));
    assert!(!r.is_last_business_day(date(2024, 8, 31)));
}

#[test]
fn thirty_day_month_ending_on_monday() {
    // September 2024 has 30 days and ends on a Monday.
    let r = BusinessDayResolver::new([]);
    assert_eq!(date(2024, 9, 30).weekday(), Weekday::Mon);
    assert!(r.is_last_business_day(date(2024, 9, 30)));
    assert!(!r.is_last_business_day(date(2024, 9, 27)));
}

#[test]
fn leap_february() {
    // 2024-02-29 is a Thursday, 2023-02-28 a Tuesday.
    let r = BusinessDayResolver::new([]);
    assert!(r.is_last_business_day(date(2024, 2, 29)));
    assert!(!r.is_last_business_day(date(2024, 2, 28)));
    assert!(r.is_last_business_day(date(2023, 2, 28)));
}

#[test]
fn multi_day_span_pushes_through_weekend() {
    // Holiday block 2024-11-27..2024-11-29 (Wed–Fri); 30th is a Saturday.
    let span = HolidayInterval::timed(
        &instant("2024-11-27T00:00:00+09:00"),
        &instant("2024-11-30T00:00:00+09:00"),
    )
    .unwrap();
    let r = BusinessDayResolver::new([span]);
    assert_eq!(r.last_business_day_of_month(date(2024, 11, 10)), date(2024, 11, 26));
}

#[test]
fn holidays_outside_the_month_are_ignored() {
    let r = BusinessDayResolver::new([
        HolidayInterval::all_day(date(2024, 6, 28)),
        HolidayInterval::all_day(date(2024, 8, 30)),
    ]);
    assert!(r.is_last_business_day(date(2024, 7, 31)));
}

#[test]
fn order_and_duplicates_do_not_matter() {
    let a = HolidayInterval::all_day(date(2024, 10, 31));
    let b = HolidayInterval::all_day(date(2024, 10, 30));
    let forward = BusinessDayResolver::new([a, b, a]);
    let backward = BusinessDayResolver::new([b, a]);
    assert_eq!(
        forward.last_business_day_of_month(date(2024, 10, 1)),
        backward.last_business_day_of_month(date(2024, 10, 1)),
    );
    assert_eq!(forward.last_business_day_of_month(date(2024, 10, 1)), date(2024, 10, 29));
}

#[test]
fn resolver_is_shareable_across_threads() {
    let r = std::sync::Arc::new(BusinessDayResolver::new([HolidayInterval::all_day(date(
        2024, 7, 31,
    ))]));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let r = std::sync::Arc::clone(&r);
            std::thread::spawn(move || r.is_last_business_day(date(2024, 7, 30)))
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn weekday_month_end_is_the_only_last_business_day(year in 1990i32..2100, month in 1u32..=12) {
        let eom = date(year, month, days_in_month(year, month));
        let r = BusinessDayResolver::new([]);
        prop_assume!(!r.is_weekend(eom));
        for d in days_of_month(eom) {
            prop_assert_eq!(r.is_last_business_day(d), d == eom, "{}", d);
        }
    }

    #[test]
    fn weekend_month_end_moves_to_preceding_weekday(year in 1990i32..2100, month in 1u32..=12) {
        let eom = date(year, month, days_in_month(year, month));
        let r = BusinessDayResolver::new([]);
        let last = r.last_business_day_of_month(eom);
        prop_assert!(last <= eom);
        prop_assert!(!r.is_weekend(last));
        prop_assert!(eom - last <= 2);
        let mut d = last + 1;
        while d <= eom {
            prop_assert!(r.is_weekend(d));
            d += 1;
        }
    }

    #[test]
    fn month_end_holiday_shifts_to_previous_business_day(year in 1990i32..2100, month in 1u32..=12) {
        let plain = BusinessDayResolver::new([]);
        let anchor = date(year, month, 1);
        let before = plain.last_business_day_of_month(anchor);
        let with_holiday = BusinessDayResolver::new([HolidayInterval::all_day(before)]);
        let after = with_holiday.last_business_day_of_month(anchor);
        prop_assert!(after < before);
        prop_assert!(plain.is_business_day(after));
        let mut d = after + 1;
        while d < before {
            prop_assert!(plain.is_weekend(d));
            d += 1;
        }
    }

    #[test]
    fn query_is_idempotent(year in 1990i32..2100, month in 1u32..=12, day in 1u32..=28) {
        let d = date(year, month, day);
        let r = BusinessDayResolver::new([HolidayInterval::all_day(d)]);
        prop_assert_eq!(r.is_last_business_day(d), r.is_last_business_day(d));
        prop_assert_eq!(r.last_business_day_of_month(d), r.last_business_day_of_month(d));
    }
}
