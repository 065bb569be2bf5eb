// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory implementation of the BookingStore trait.
//!
//! Behaves like the SQLite store for everything the engine observes, with
//! switches to script storage failures for deterministic error-path tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use innkeep_core::{
    BookingStore, InnkeepError, NewReservation, NewRestriction, Reservation, Room,
    RoomRestriction,
};

#[derive(Debug, Default)]
struct Inner {
    rooms: Vec<Room>,
    reservations: Vec<Reservation>,
    restrictions: Vec<RoomRestriction>,
    next_reservation_id: i64,
    next_restriction_id: i64,
    fail_reservation_inserts: bool,
    fail_restriction_inserts: bool,
    fail_reads: bool,
}

/// In-memory booking store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

fn scripted_failure(what: &str) -> InnkeepError {
    InnkeepError::Storage {
        source: format!("scripted {what} failure").into(),
    }
}

impl MemoryStore {
    /// An empty store with no rooms.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with the two standard rooms.
    pub fn seeded() -> Self {
        Self::with_rooms(vec![
            Room {
                id: 1,
                name: "General's Quarters".to_string(),
            },
            Room {
                id: 2,
                name: "Major's Suite".to_string(),
            },
        ])
    }

    pub fn with_rooms(rooms: Vec<Room>) -> Self {
        let store = Self::new();
        store.inner.lock().unwrap().rooms = rooms;
        store
    }

    /// Script every `insert_reservation` call to fail.
    pub fn fail_reservation_inserts(&self, fail: bool) {
        self.inner.lock().unwrap().fail_reservation_inserts = fail;
    }

    /// Script every `insert_restriction` / `insert_block` call to fail.
    pub fn fail_restriction_inserts(&self, fail: bool) {
        self.inner.lock().unwrap().fail_restriction_inserts = fail;
    }

    /// Script every read operation to fail.
    pub fn fail_reads(&self, fail: bool) {
        self.inner.lock().unwrap().fail_reads = fail;
    }

    pub fn reservation_count(&self) -> usize {
        self.inner.lock().unwrap().reservations.len()
    }

    pub fn restriction_count(&self) -> usize {
        self.inner.lock().unwrap().restrictions.len()
    }

    /// Restrictions for a room regardless of dates, for assertions.
    pub fn restrictions_for_room(&self, room_id: i64) -> Vec<RoomRestriction> {
        self.inner
            .lock()
            .unwrap()
            .restrictions
            .iter()
            .filter(|x| x.room_id == room_id)
            .cloned()
            .collect()
    }

    /// Insert a pre-built restriction directly, bypassing the engine gate.
    pub fn put_restriction(&self, restriction: RoomRestriction) {
        let mut inner = self.inner.lock().unwrap();
        inner.next_restriction_id = inner.next_restriction_id.max(restriction.id);
        inner.restrictions.push(restriction);
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn room_by_id(&self, id: i64) -> Result<Room, InnkeepError> {
        let inner = self.inner.lock().unwrap();
        if inner.fail_reads {
            return Err(scripted_failure("read"));
        }
        inner
            .rooms
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(InnkeepError::NotFound { entity: "room", id })
    }

    async fn all_rooms(&self) -> Result<Vec<Room>, InnkeepError> {
        let inner = self.inner.lock().unwrap();
        if inner.fail_reads {
            return Err(scripted_failure("read"));
        }
        Ok(inner.rooms.clone())
    }

    async fn insert_reservation(&self, res: &NewReservation) -> Result<i64, InnkeepError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_reservation_inserts {
            return Err(scripted_failure("reservation insert"));
        }
        inner.next_reservation_id += 1;
        let id = inner.next_reservation_id;
        inner.reservations.push(Reservation {
            id,
            room_id: res.room_id,
            start_date: res.start_date,
            end_date: res.end_date,
            first_name: res.first_name.clone(),
            last_name: res.last_name.clone(),
            email: res.email.clone(),
            phone: res.phone.clone(),
            processed: false,
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
        });
        Ok(id)
    }

    async fn insert_restriction(
        &self,
        restriction: &NewRestriction,
    ) -> Result<i64, InnkeepError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_restriction_inserts {
            return Err(scripted_failure("restriction insert"));
        }
        inner.next_restriction_id += 1;
        let id = inner.next_restriction_id;
        inner.restrictions.push(RoomRestriction {
            id,
            room_id: restriction.room_id,
            start_date: restriction.start_date,
            end_date: restriction.end_date,
            reservation_id: restriction.reservation_id,
            kind: restriction.kind,
        });
        Ok(id)
    }

    async fn restrictions_for_room_in_range(
        &self,
        room_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RoomRestriction>, InnkeepError> {
        let inner = self.inner.lock().unwrap();
        if inner.fail_reads {
            return Err(scripted_failure("read"));
        }
        let mut hits: Vec<RoomRestriction> = inner
            .restrictions
            .iter()
            .filter(|x| x.room_id == room_id && x.start_date <= end && start <= x.end_date)
            .cloned()
            .collect();
        hits.sort_by_key(|x| x.start_date);
        Ok(hits)
    }

    async fn delete_restriction(&self, id: i64) -> Result<(), InnkeepError> {
        let mut inner = self.inner.lock().unwrap();
        inner.restrictions.retain(|x| x.id != id);
        Ok(())
    }

    async fn insert_block(&self, room_id: i64, day: NaiveDate) -> Result<i64, InnkeepError> {
        self.insert_restriction(&NewRestriction {
            room_id,
            start_date: day,
            end_date: day,
            reservation_id: None,
            kind: innkeep_core::RestrictionKind::Block,
        })
        .await
    }

    async fn reservation_by_id(&self, id: i64) -> Result<Reservation, InnkeepError> {
        let inner = self.inner.lock().unwrap();
        if inner.fail_reads {
            return Err(scripted_failure("read"));
        }
        inner
            .reservations
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(InnkeepError::NotFound {
                entity: "reservation",
                id,
            })
    }

    async fn update_reservation(&self, res: &Reservation) -> Result<(), InnkeepError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(existing) = inner.reservations.iter_mut().find(|r| r.id == res.id) {
            existing.first_name = res.first_name.clone();
            existing.last_name = res.last_name.clone();
            existing.email = res.email.clone();
            existing.phone = res.phone.clone();
        }
        Ok(())
    }

    async fn delete_reservation(&self, id: i64) -> Result<(), InnkeepError> {
        let mut inner = self.inner.lock().unwrap();
        inner.reservations.retain(|r| r.id != id);
        // Mirrors the ON DELETE SET NULL behavior of the SQLite schema.
        for restriction in &mut inner.restrictions {
            if restriction.reservation_id == Some(id) {
                restriction.reservation_id = None;
            }
        }
        Ok(())
    }

    async fn delete_restrictions_for_reservation(
        &self,
        reservation_id: i64,
    ) -> Result<(), InnkeepError> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .restrictions
            .retain(|x| x.reservation_id != Some(reservation_id));
        Ok(())
    }

    async fn set_processed(&self, id: i64, processed: bool) -> Result<(), InnkeepError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(existing) = inner.reservations.iter_mut().find(|r| r.id == id) {
            existing.processed = processed;
        }
        Ok(())
    }

    async fn all_reservations(&self) -> Result<Vec<Reservation>, InnkeepError> {
        let inner = self.inner.lock().unwrap();
        if inner.fail_reads {
            return Err(scripted_failure("read"));
        }
        let mut reservations = inner.reservations.clone();
        reservations.sort_by(|a, b| b.start_date.cmp(&a.start_date).then(b.id.cmp(&a.id)));
        Ok(reservations)
    }

    async fn unprocessed_reservations(&self) -> Result<Vec<Reservation>, InnkeepError> {
        let mut reservations = self.all_reservations().await?;
        reservations.retain(|r| !r.processed);
        Ok(reservations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn seeded_store_has_two_rooms() {
        let store = MemoryStore::seeded();
        let rooms = store.all_rooms().await.unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].name, "General's Quarters");
    }

    #[tokio::test]
    async fn range_filter_matches_inclusive_overlap() {
        let store = MemoryStore::seeded();
        store.insert_block(1, date(2021, 10, 11)).await.unwrap();

        let hits = store
            .restrictions_for_room_in_range(1, date(2021, 10, 11), date(2021, 10, 11))
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);

        let misses = store
            .restrictions_for_room_in_range(1, date(2021, 10, 12), date(2021, 10, 12))
            .await
            .unwrap();
        assert!(misses.is_empty());
    }

    #[tokio::test]
    async fn scripted_failures_surface_as_storage_errors() {
        let store = MemoryStore::seeded();
        store.fail_reservation_inserts(true);

        let err = store
            .insert_reservation(&NewReservation {
                room_id: 1,
                start_date: date(2021, 10, 11),
                end_date: date(2021, 10, 12),
                first_name: "John".into(),
                last_name: "Smith".into(),
                email: "john@smith.com".into(),
                phone: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, InnkeepError::Storage { .. }));
        assert_eq!(store.reservation_count(), 0);
    }
}
