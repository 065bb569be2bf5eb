// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session-carried booking draft.
//!
//! A draft moves through stages as the visitor progresses:
//! Empty -> DatesChosen -> RoomChosen -> DetailsSubmitted -> Committed.
//! "Empty" is the absence of a draft in the session. Abandoning a draft at
//! any stage has no side effects; nothing is durable before Committed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stages of the booking draft, derived from which fields are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftStage {
    /// No draft exists in the session.
    Empty,
    /// A date-range search succeeded; only the dates are held.
    DatesChosen,
    /// The visitor picked a room from the free set.
    RoomChosen,
    /// Guest fields collected and validated; not yet durable.
    DetailsSubmitted,
    /// The commit pipeline succeeded; the draft now mirrors the
    /// persisted reservation for the summary view.
    Committed,
}

impl std::fmt::Display for DraftStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftStage::Empty => write!(f, "empty"),
            DraftStage::DatesChosen => write!(f, "dates_chosen"),
            DraftStage::RoomChosen => write!(f, "room_chosen"),
            DraftStage::DetailsSubmitted => write!(f, "details_submitted"),
            DraftStage::Committed => write!(f, "committed"),
        }
    }
}

/// Guest contact fields collected at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// An in-progress booking, owned by exactly one visitor session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftReservation {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub room_id: Option<i64>,
    /// Display name of the chosen room, attached once the room is resolved.
    pub room_name: Option<String>,
    pub guest: Option<GuestDetails>,
    /// Set once the commit pipeline has persisted the reservation.
    pub reservation_id: Option<i64>,
}

impl DraftReservation {
    /// Start a draft from a successful date-range search.
    pub fn for_dates(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            room_id: None,
            room_name: None,
            guest: None,
            reservation_id: None,
        }
    }

    /// Start a draft directly from a "book now" deep link, skipping the
    /// search step.
    pub fn for_room(
        room_id: i64,
        room_name: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            room_id: Some(room_id),
            room_name: Some(room_name),
            ..Self::for_dates(start_date, end_date)
        }
    }

    /// The visitor selected a room from the free set.
    pub fn choose_room(&mut self, room_id: i64) {
        self.room_id = Some(room_id);
    }

    /// Attach the resolved room's display name.
    pub fn set_room_name(&mut self, name: String) {
        self.room_name = Some(name);
    }

    /// Guest fields collected; the draft is ready for the commit pipeline.
    pub fn submit_details(&mut self, details: GuestDetails) {
        self.guest = Some(details);
    }

    /// The commit pipeline persisted the reservation.
    pub fn mark_committed(&mut self, reservation_id: i64) {
        self.reservation_id = Some(reservation_id);
    }

    pub fn stage(&self) -> DraftStage {
        if self.reservation_id.is_some() {
            DraftStage::Committed
        } else if self.guest.is_some() {
            DraftStage::DetailsSubmitted
        } else if self.room_id.is_some() {
            DraftStage::RoomChosen
        } else {
            DraftStage::DatesChosen
        }
    }
}
