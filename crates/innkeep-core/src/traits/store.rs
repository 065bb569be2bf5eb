// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistence contract for rooms, reservations, and restrictions.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::InnkeepError;
use crate::types::{NewReservation, NewRestriction, Reservation, Room, RoomRestriction};

/// Narrow repository contract consumed by the engine.
///
/// Pure CRUD plus range queries; no business logic lives behind this
/// trait. Implementations: the SQLite store in `innkeep-storage` and the
/// in-memory fake in `innkeep-test-utils`. Every write fails with
/// [`InnkeepError::Storage`] on backend failure; the engine never retries.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Fetch a room by id. Unknown ids are [`InnkeepError::NotFound`].
    async fn room_by_id(&self, id: i64) -> Result<Room, InnkeepError>;

    /// All rooms, ordered by id.
    async fn all_rooms(&self) -> Result<Vec<Room>, InnkeepError>;

    /// Insert a reservation and return its assigned id.
    async fn insert_reservation(&self, res: &NewReservation) -> Result<i64, InnkeepError>;

    /// Insert an occupancy interval and return its assigned id.
    async fn insert_restriction(&self, restriction: &NewRestriction) -> Result<i64, InnkeepError>;

    /// All restrictions for a room whose inclusive interval overlaps
    /// `[start, end]`, ordered by start date.
    async fn restrictions_for_room_in_range(
        &self,
        room_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RoomRestriction>, InnkeepError>;

    /// Delete one restriction by id. Deleting a missing id is not an error.
    async fn delete_restriction(&self, id: i64) -> Result<(), InnkeepError>;

    /// Convenience insert of a single-day owner block (no reservation
    /// attached). Returns the new restriction's id.
    async fn insert_block(&self, room_id: i64, day: NaiveDate) -> Result<i64, InnkeepError>;

    /// Fetch a reservation by id. Unknown ids are [`InnkeepError::NotFound`].
    async fn reservation_by_id(&self, id: i64) -> Result<Reservation, InnkeepError>;

    /// Update a reservation's guest fields.
    async fn update_reservation(&self, res: &Reservation) -> Result<(), InnkeepError>;

    /// Delete one reservation by id. Linked restrictions stay behind with
    /// their link cleared; cascading is the caller's decision.
    async fn delete_reservation(&self, id: i64) -> Result<(), InnkeepError>;

    /// Delete every restriction linked to the given reservation.
    async fn delete_restrictions_for_reservation(
        &self,
        reservation_id: i64,
    ) -> Result<(), InnkeepError>;

    /// Set the processed flag on a reservation.
    async fn set_processed(&self, id: i64, processed: bool) -> Result<(), InnkeepError>;

    /// All reservations, newest start date first.
    async fn all_reservations(&self) -> Result<Vec<Reservation>, InnkeepError>;

    /// Reservations not yet marked processed, newest start date first.
    async fn unprocessed_reservations(&self) -> Result<Vec<Reservation>, InnkeepError>;
}
