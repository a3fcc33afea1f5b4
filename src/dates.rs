use chrono::{Datelike, Duration, NaiveDate};

/// Parses a contract date written as `MM/DD/YY`.
///
/// The two-digit year always lands in the 2000s. Month and day are not
/// range-checked: values past the end of the calendar roll over into the
/// following month or year, the way a lenient calendar constructor does.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = text.trim().split('/').collect();
    if parts.len() != 3 {
        return None;
    }

    let month = parse_number(parts[0])?;
    let day = parse_number(parts[1])?;
    if parts[2].len() > 2 {
        return None;
    }
    let year = 2000 + parse_number(parts[2])?;

    rollover_date(year, month, day)
}

/// Same as [`parse_date`] for the optional date fields on a record.
pub fn parse_optional(text: Option<&str>) -> Option<NaiveDate> {
    text.and_then(parse_date)
}

/// Parses the `YYYY-MM-DD` value produced by a date picker.
pub fn parse_input_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

pub fn is_same_date(left: NaiveDate, right: NaiveDate) -> bool {
    left.year() == right.year() && left.month() == right.month() && left.day() == right.day()
}

/// Converts a contract date into picker form, or an empty string when it does not parse.
pub fn to_input_date(text: &str) -> String {
    parse_date(text)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn parse_number(part: &str) -> Option<i64> {
    if part.is_empty() || !part.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

fn rollover_date(year: i64, month: i64, day: i64) -> Option<NaiveDate> {
    let months_from_january = month - 1;
    let year = year + months_from_january.div_euclid(12);
    let month = months_from_january.rem_euclid(12) + 1;

    let first_of_month =
        NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, u32::try_from(month).ok()?, 1)?;
    first_of_month.checked_add_signed(Duration::try_days(day - 1)?)
}
