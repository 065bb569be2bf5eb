// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed query modules, one per table.
//!
//! Dates are stored as ISO `YYYY-MM-DD` text; conversion to and from
//! `chrono::NaiveDate` happens at this boundary only.

use chrono::NaiveDate;

pub mod reservations;
pub mod restrictions;
pub mod rooms;

const DB_DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn to_db_date(d: NaiveDate) -> String {
    d.format(DB_DATE_FORMAT).to_string()
}

pub(crate) fn from_db_date(s: &str, column: usize) -> Result<NaiveDate, rusqlite::Error> {
    NaiveDate::parse_from_str(s, DB_DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            column,
            rusqlite::types::Type::Text,
            Box::new(e),
        )
    })
}
