// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the BookingStore trait.

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use innkeep_config::StorageConfig;
use innkeep_core::{
    BookingStore, InnkeepError, NewReservation, NewRestriction, Reservation, Room,
    RoomRestriction,
};

use crate::database::Database;
use crate::queries;

/// SQLite-backed booking store.
///
/// Wraps a [`Database`] handle and delegates all query operations to the
/// typed query modules under `queries/`.
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    /// Open the database at the configured path, running migrations.
    pub async fn open(config: &StorageConfig) -> Result<Self, InnkeepError> {
        let db = Database::open(&config.database_path).await?;
        debug!(path = %config.database_path, "SQLite booking store ready");
        Ok(Self { db })
    }

    /// Checkpoint and release the database.
    pub async fn close(&self) -> Result<(), InnkeepError> {
        self.db.close().await
    }
}

#[async_trait]
impl BookingStore for SqliteStore {
    async fn room_by_id(&self, id: i64) -> Result<Room, InnkeepError> {
        queries::rooms::room_by_id(&self.db, id)
            .await?
            .ok_or(InnkeepError::NotFound { entity: "room", id })
    }

    async fn all_rooms(&self) -> Result<Vec<Room>, InnkeepError> {
        queries::rooms::all_rooms(&self.db).await
    }

    async fn insert_reservation(&self, res: &NewReservation) -> Result<i64, InnkeepError> {
        queries::reservations::insert_reservation(&self.db, res).await
    }

    async fn insert_restriction(
        &self,
        restriction: &NewRestriction,
    ) -> Result<i64, InnkeepError> {
        queries::restrictions::insert_restriction(&self.db, restriction).await
    }

    async fn restrictions_for_room_in_range(
        &self,
        room_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RoomRestriction>, InnkeepError> {
        queries::restrictions::restrictions_for_room_in_range(&self.db, room_id, start, end).await
    }

    async fn delete_restriction(&self, id: i64) -> Result<(), InnkeepError> {
        queries::restrictions::delete_restriction(&self.db, id).await
    }

    async fn insert_block(&self, room_id: i64, day: NaiveDate) -> Result<i64, InnkeepError> {
        queries::restrictions::insert_block(&self.db, room_id, day).await
    }

    async fn reservation_by_id(&self, id: i64) -> Result<Reservation, InnkeepError> {
        queries::reservations::reservation_by_id(&self.db, id)
            .await?
            .ok_or(InnkeepError::NotFound {
                entity: "reservation",
                id,
            })
    }

    async fn update_reservation(&self, res: &Reservation) -> Result<(), InnkeepError> {
        queries::reservations::update_reservation(&self.db, res).await
    }

    async fn delete_reservation(&self, id: i64) -> Result<(), InnkeepError> {
        queries::reservations::delete_reservation(&self.db, id).await
    }

    async fn delete_restrictions_for_reservation(
        &self,
        reservation_id: i64,
    ) -> Result<(), InnkeepError> {
        queries::restrictions::delete_restrictions_for_reservation(&self.db, reservation_id).await
    }

    async fn set_processed(&self, id: i64, processed: bool) -> Result<(), InnkeepError> {
        queries::reservations::set_processed(&self.db, id, processed).await
    }

    async fn all_reservations(&self) -> Result<Vec<Reservation>, InnkeepError> {
        queries::reservations::all_reservations(&self.db).await
    }

    async fn unprocessed_reservations(&self) -> Result<Vec<Reservation>, InnkeepError> {
        queries::reservations::unprocessed_reservations(&self.db).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use innkeep_core::RestrictionKind;
    use tempfile::tempdir;

    async fn open_store() -> (SqliteStore, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let config = StorageConfig {
            database_path: dir.path().join("store.db").to_str().unwrap().to_string(),
        };
        let store = SqliteStore::open(&config).await.unwrap();
        (store, dir)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn unknown_room_maps_to_not_found() {
        let (store, _dir) = open_store().await;
        let err = store.room_by_id(999).await.unwrap_err();
        assert!(matches!(
            err,
            InnkeepError::NotFound { entity: "room", id: 999 }
        ));
        store.close().await.unwrap();
    }

    #[tokio::test]
    async fn reservation_and_restriction_insert_through_trait() {
        let (store, _dir) = open_store().await;
        let store: &dyn BookingStore = &store;

        let reservation_id = store
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
            .unwrap();

        store
            .insert_restriction(&NewRestriction {
                room_id: 1,
                start_date: date(2021, 10, 11),
                end_date: date(2021, 10, 12),
                reservation_id: Some(reservation_id),
                kind: RestrictionKind::Reservation,
            })
            .await
            .unwrap();

        let restrictions = store
            .restrictions_for_room_in_range(1, date(2021, 10, 1), date(2021, 10, 31))
            .await
            .unwrap();
        assert_eq!(restrictions.len(), 1);
        assert_eq!(restrictions[0].reservation_id, Some(reservation_id));

        let fetched = store.reservation_by_id(reservation_id).await.unwrap();
        assert_eq!(fetched.first_name, "John");
    }
}
