//! Display formatting helpers shared by the summary and notification
//! builders.

use chrono::NaiveDate;

/// Formats an integer with comma thousands separators.
///
/// Negative values keep their sign: `-1234` becomes `"-1,234"`.
#[must_use]
pub fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Rounds half-up to one decimal place.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Long date used in the summary block: `Tuesday 05 January`.
#[must_use]
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A %d %B").to_string()
}

/// Date used in the notification title: `Tuesday 5 January`.
#[must_use]
pub fn title_date(date: NaiveDate) -> String {
    date.format("%A %-d %B").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_groups_by_three() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1_000), "1,000");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn thousands_keeps_negative_sign() {
        assert_eq!(thousands(-1_234), "-1,234");
        assert_eq!(thousands(-7), "-7");
    }

    #[test]
    fn round1_rounds_half_up() {
        assert!((round1(4.25) - 4.3).abs() < f64::EPSILON);
        assert!((round1(4.24) - 4.2).abs() < f64::EPSILON);
        assert!((round1(0.0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn date_formats() {
        let date = NaiveDate::from_ymd_opt(2021, 1, 5).unwrap();
        assert_eq!(long_date(date), "Tuesday 05 January");
        assert_eq!(title_date(date), "Tuesday 5 January");
    }
}
