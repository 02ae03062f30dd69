//! `Calendar` trait.
//!
//! A calendar knows which dates are business days. The month-end queries
//! ([`Calendar::end_of_month`] and [`Calendar::is_end_of_month`]) are
//! provided on top of [`Calendar::is_business_day`].

use chrono::Weekday;

use crate::date::Date;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a non-business day (weekend or holiday).
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` falls on a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Return the last business day of the month containing `date`.
    ///
    /// Starts from the last calendar day of the month and steps back one day
    /// at a time while the candidate is a holiday. A month made entirely of
    /// holidays walks into the previous month.
    fn end_of_month(&self, date: Date) -> Date {
        let mut d = date.end_of_month();
        while self.is_holiday(d) {
            d -= 1;
        }
        d
    }

    /// Return `true` if `date` is the last business day of its month.
    fn is_end_of_month(&self, date: Date) -> bool {
        date == self.end_of_month(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[derive(Debug)]
    struct Closed(Vec<Date>);

    impl Calendar for Closed {
        fn is_business_day(&self, date: Date) -> bool {
            !self.is_weekend(date) && !self.0.contains(&date)
        }
    }

    #[test]
    fn weekend_detection() {
        let cal = Closed(Vec::new());
        // 2023-09-02 is a Saturday
        assert!(cal.is_weekend(date(2023, 9, 2)));
        assert!(cal.is_holiday(date(2023, 9, 3)));
        assert!(cal.is_business_day(date(2023, 9, 4)));
    }

    #[test]
    fn end_of_month_skips_weekend() {
        let cal = Closed(Vec::new());
        // 2023-09-30 is a Saturday
        assert_eq!(cal.end_of_month(date(2023, 9, 15)), date(2023, 9, 29));
        assert!(cal.is_end_of_month(date(2023, 9, 29)));
        assert!(!cal.is_end_of_month(date(2023, 9, 30)));
    }

    #[test]
    fn end_of_month_skips_listed_days() {
        // 2023-10-31 is a Tuesday; close it and the Monday before.
        let cal = Closed(vec![date(2023, 10, 31), date(2023, 10, 30)]);
        assert_eq!(cal.end_of_month(date(2023, 10, 1)), date(2023, 10, 27));
    }
}
