//! Calendar helpers for daily bars.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Month};

use crate::ValidationError;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Result<Date, ValidationError> {
    Date::parse(input.trim(), ISO_DATE).map_err(|_| ValidationError::InvalidDate {
        value: input.to_owned(),
    })
}

/// Step back `months` calendar months, clamping the day to the target month's length.
///
/// Saturates at [`Date::MIN`] when the result falls outside the supported calendar.
pub fn shift_months_back(date: Date, months: u32) -> Date {
    let months = i32::try_from(months).unwrap_or(i32::MAX);
    let index = (date.year() * 12 + i32::from(u8::from(date.month())) - 1).saturating_sub(months);
    let year = index.div_euclid(12);
    let Ok(month) = Month::try_from(index.rem_euclid(12) as u8 + 1) else {
        return Date::MIN;
    };

    let mut day = date.day();
    loop {
        match Date::from_calendar_date(year, month, day) {
            Ok(shifted) => return shifted,
            Err(_) if day > 28 => day -= 1,
            Err(_) => return Date::MIN,
        }
    }
}

/// Serde adapter writing dates as `YYYY-MM-DD` strings.
pub mod iso {
    use serde::de::Error as DeError;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(date)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        super::parse_date(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn parses_iso_date() {
        assert_eq!(parse_date("2024-02-29").expect("valid"), date!(2024 - 02 - 29));
    }

    #[test]
    fn rejects_non_iso_date() {
        let err = parse_date("02/29/2024").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDate { .. }));
    }

    #[test]
    fn month_shift_clamps_to_month_end() {
        assert_eq!(shift_months_back(date!(2024 - 03 - 31), 1), date!(2024 - 02 - 29));
        assert_eq!(shift_months_back(date!(2023 - 05 - 31), 3), date!(2023 - 02 - 28));
    }

    #[test]
    fn month_shift_crosses_year_boundary() {
        assert_eq!(shift_months_back(date!(2025 - 01 - 15), 1), date!(2024 - 12 - 15));
        assert_eq!(shift_months_back(date!(2025 - 02 - 10), 6), date!(2024 - 08 - 10));
    }

    #[test]
    fn year_shift_from_leap_day() {
        assert_eq!(shift_months_back(date!(2024 - 02 - 29), 12), date!(2023 - 02 - 28));
        assert_eq!(shift_months_back(date!(2024 - 02 - 29), 60), date!(2019 - 02 - 28));
    }
}
