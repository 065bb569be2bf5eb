// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Availability resolver: which rooms are free over a date range.
//!
//! An interval occupies every day of its inclusive `[start, end]` span;
//! two intervals overlap when `existing.start <= end && start <= existing.end`.
//! The resolver is the gate that keeps per-room intervals disjoint: a new
//! interval is only written after the resolver reports the room free.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use innkeep_core::{dates, BookingStore, InnkeepError, Room};

/// Resolves room availability against the restriction store.
pub struct AvailabilityResolver {
    store: Arc<dyn BookingStore>,
}

impl AvailabilityResolver {
    pub fn new(store: Arc<dyn BookingStore>) -> Self {
        Self { store }
    }

    /// True iff no existing restriction for the room overlaps
    /// `[start, end]`. `start == end` is a valid one-night query;
    /// `start > end` is the caller's error to prevent upstream.
    pub async fn is_room_free(
        &self,
        room_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<bool, InnkeepError> {
        let overlapping = self
            .store
            .restrictions_for_room_in_range(room_id, start, end)
            .await?;
        Ok(overlapping.is_empty())
    }

    /// Every room with no restriction overlapping `[start, end]`.
    ///
    /// An empty result is a valid answer, not an error; errors surface
    /// only when the store itself fails.
    pub async fn free_rooms_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Room>, InnkeepError> {
        let mut free = Vec::new();
        for room in self.store.all_rooms().await? {
            if self.is_room_free(room.id, start, end).await? {
                free.push(room);
            }
        }
        debug!(
            start = %start,
            end = %end,
            free_rooms = free.len(),
            "availability search resolved"
        );
        Ok(free)
    }
}

/// JSON shape of a single-room availability answer, matched by the
/// transport layer's responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub ok: bool,
    pub message: String,
    pub room_id: String,
    pub start_date: String,
    pub end_date: String,
}

impl AvailabilityResponse {
    /// Answer for a resolved query: dates echo back in wire form.
    pub fn resolved(ok: bool, room_id: i64, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            ok,
            message: String::new(),
            room_id: room_id.to_string(),
            start_date: dates::format_day(start),
            end_date: dates::format_day(end),
        }
    }

    /// Failure answer carrying only a message.
    pub fn error(message: &str) -> Self {
        Self {
            ok: false,
            message: message.to_string(),
            room_id: String::new(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}
