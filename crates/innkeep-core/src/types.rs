// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Innkeep workspace.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A bookable room. Immutable reference data, seeded out of band and
/// read-only to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub name: String,
}

/// What an occupancy interval represents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RestrictionKind {
    /// The interval belongs to a guest reservation.
    Reservation,
    /// An owner-imposed hold with no guest attached.
    Block,
}

/// An occupancy interval for one room. Bounds are inclusive calendar
/// dates with `start_date <= end_date`. For a fixed room, no two
/// intervals may overlap; the availability resolver is the gate that
/// keeps this true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRestriction {
    pub id: i64,
    pub room_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Present and positive when the interval is a guest reservation;
    /// `None` for administrator blocks.
    pub reservation_id: Option<i64>,
    pub kind: RestrictionKind,
}

/// A restriction not yet assigned an id by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestriction {
    pub room_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reservation_id: Option<i64>,
    pub kind: RestrictionKind,
}

/// A persisted guest reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub room_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Flipped by an idempotent admin action; defaults to false.
    pub processed: bool,
    pub created_at: String,
}

/// A reservation before `id`/`processed` exist, as handed to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReservation {
    pub room_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// An outbound notification message handed to the sink. The engine never
/// inspects the delivery result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailData {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub content: String,
}

/// Field-level validation messages, collected rather than short-circuited.
/// Keyed by the submitted field name; each field keeps its first message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field. The first message wins; later rules
    /// for the same field do not overwrite it.
    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    /// The message for a field, or `None` when the field is clean.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn restriction_kind_round_trips_as_string() {
        assert_eq!(RestrictionKind::Reservation.to_string(), "reservation");
        assert_eq!(RestrictionKind::Block.to_string(), "block");
        assert_eq!(
            RestrictionKind::from_str("block").unwrap(),
            RestrictionKind::Block
        );
    }

    #[test]
    fn field_errors_keep_first_message_per_field() {
        let mut errors = FieldErrors::new();
        errors.add("email", "this field cannot be blank");
        errors.add("email", "invalid email address");
        assert_eq!(errors.get("email"), Some("this field cannot be blank"));
        assert_eq!(errors.len(), 1);
        assert!(errors.get("phone").is_none());
    }
}
