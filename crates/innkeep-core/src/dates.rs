// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Calendar-date text forms used at the engine's boundaries.
//!
//! Dates are whole calendar days; no time-of-day or timezone component
//! participates anywhere in the engine. Three text forms exist:
//!
//! - the wire form `DD-MM-YYYY` used by availability queries,
//! - the day-key form `D-MM-YYYY` (no leading zero on the day) used as a
//!   stable map key across session serialization boundaries,
//! - the display form `DD-Mon-YYYY` used in notification messages.

use chrono::NaiveDate;

const WIRE_FORMAT: &str = "%d-%m-%Y";
const DISPLAY_FORMAT: &str = "%d-%b-%Y";

/// Parse a `DD-MM-YYYY` wire-form date.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), WIRE_FORMAT).ok()
}

/// Format a date in the `DD-MM-YYYY` wire form.
pub fn format_day(d: NaiveDate) -> String {
    d.format(WIRE_FORMAT).to_string()
}

/// The stable day-key form used for calendar maps: day without a leading
/// zero, then zero-padded month and year (`2-01-2026`).
pub fn day_key(d: NaiveDate) -> String {
    d.format("%-d-%m-%Y").to_string()
}

/// Parse a day-key back into a date. Accepts both padded and unpadded days.
pub fn parse_day_key(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, WIRE_FORMAT).ok()
}

/// Format a date for human-facing text (`11-Oct-2021`).
pub fn format_display(d: NaiveDate) -> String {
    d.format(DISPLAY_FORMAT).to_string()
}

/// First day of the given month.
pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Last day of the given month.
pub fn last_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let first = first_of_month(year, month)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    next.pred_opt().filter(|last| *last >= first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_form_round_trips() {
        let d = parse_day("11-10-2021").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2021, 10, 11).unwrap());
        assert_eq!(format_day(d), "11-10-2021");
    }

    #[test]
    fn parse_day_rejects_garbage() {
        assert!(parse_day("2021-10-11").is_none());
        assert!(parse_day("not a date").is_none());
        assert!(parse_day("32-01-2021").is_none());
    }

    #[test]
    fn day_key_drops_leading_zero_on_day() {
        let d = NaiveDate::from_ymd_opt(2021, 10, 2).unwrap();
        assert_eq!(day_key(d), "2-10-2021");
        assert_eq!(parse_day_key("2-10-2021").unwrap(), d);
        assert_eq!(parse_day_key(&day_key(d)).unwrap(), d);
    }

    #[test]
    fn display_form_uses_month_abbreviation() {
        let d = NaiveDate::from_ymd_opt(2021, 10, 11).unwrap();
        assert_eq!(format_display(d), "11-Oct-2021");
    }

    #[test]
    fn month_bounds() {
        assert_eq!(
            first_of_month(2021, 2).unwrap(),
            NaiveDate::from_ymd_opt(2021, 2, 1).unwrap()
        );
        assert_eq!(
            last_of_month(2021, 2).unwrap(),
            NaiveDate::from_ymd_opt(2021, 2, 28).unwrap()
        );
        assert_eq!(
            last_of_month(2020, 2).unwrap(),
            NaiveDate::from_ymd_opt(2020, 2, 29).unwrap()
        );
        assert_eq!(
            last_of_month(2021, 12).unwrap(),
            NaiveDate::from_ymd_opt(2021, 12, 31).unwrap()
        );
        assert!(first_of_month(2021, 13).is_none());
    }
}
