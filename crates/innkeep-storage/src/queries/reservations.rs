// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reservation CRUD operations.

use innkeep_core::{InnkeepError, NewReservation, Reservation};
use rusqlite::params;

use crate::database::Database;
use crate::queries::{from_db_date, to_db_date};

fn row_to_reservation(row: &rusqlite::Row<'_>) -> Result<Reservation, rusqlite::Error> {
    let start: String = row.get(3)?;
    let end: String = row.get(4)?;
    Ok(Reservation {
        id: row.get(0)?,
        room_id: row.get(1)?,
        first_name: row.get(2)?,
        start_date: from_db_date(&start, 3)?,
        end_date: from_db_date(&end, 4)?,
        last_name: row.get(5)?,
        email: row.get(6)?,
        phone: row.get(7)?,
        processed: row.get(8)?,
        created_at: row.get(9)?,
    })
}

const RESERVATION_COLUMNS: &str = "id, room_id, first_name, start_date, end_date, \
                                   last_name, email, phone, processed, created_at";

/// Insert a reservation and return the auto-generated id.
pub async fn insert_reservation(
    db: &Database,
    res: &NewReservation,
) -> Result<i64, InnkeepError> {
    let res = res.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO reservations
                     (first_name, last_name, email, phone, start_date, end_date, room_id)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    res.first_name,
                    res.last_name,
                    res.email,
                    res.phone,
                    to_db_date(res.start_date),
                    to_db_date(res.end_date),
                    res.room_id,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Get a reservation by id, or `None` when no such reservation exists.
pub async fn reservation_by_id(
    db: &Database,
    id: i64,
) -> Result<Option<Reservation>, InnkeepError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {RESERVATION_COLUMNS} FROM reservations WHERE id = ?1"
            ))?;
            let result = stmt.query_row(params![id], row_to_reservation);
            match result {
                Ok(res) => Ok(Some(res)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Update a reservation's guest fields.
pub async fn update_reservation(db: &Database, res: &Reservation) -> Result<(), InnkeepError> {
    let res = res.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "UPDATE reservations
                 SET first_name = ?1, last_name = ?2, email = ?3, phone = ?4,
                     updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 WHERE id = ?5",
                params![res.first_name, res.last_name, res.email, res.phone, res.id],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Delete one reservation by id. Linked restrictions stay behind with
/// `reservation_id` cleared by the schema's `ON DELETE SET NULL`.
pub async fn delete_reservation(db: &Database, id: i64) -> Result<(), InnkeepError> {
    db.connection()
        .call(move |conn| {
            conn.execute("DELETE FROM reservations WHERE id = ?1", params![id])?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Set the processed flag on a reservation.
pub async fn set_processed(db: &Database, id: i64, processed: bool) -> Result<(), InnkeepError> {
    db.connection()
        .call(move |conn| {
            conn.execute(
                "UPDATE reservations
                 SET processed = ?1, updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 WHERE id = ?2",
                params![processed, id],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// All reservations, newest start date first.
pub async fn all_reservations(db: &Database) -> Result<Vec<Reservation>, InnkeepError> {
    list_reservations(db, false).await
}

/// Reservations not yet marked processed, newest start date first.
pub async fn unprocessed_reservations(db: &Database) -> Result<Vec<Reservation>, InnkeepError> {
    list_reservations(db, true).await
}

async fn list_reservations(
    db: &Database,
    unprocessed_only: bool,
) -> Result<Vec<Reservation>, InnkeepError> {
    db.connection()
        .call(move |conn| {
            let filter = if unprocessed_only {
                "WHERE processed = 0"
            } else {
                ""
            };
            let mut stmt = conn.prepare(&format!(
                "SELECT {RESERVATION_COLUMNS} FROM reservations {filter}
                 ORDER BY start_date DESC, id DESC"
            ))?;
            let rows = stmt.query_map([], row_to_reservation)?;
            let mut reservations = Vec::new();
            for row in rows {
                reservations.push(row?);
            }
            Ok(reservations)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    fn make_reservation(first_name: &str) -> NewReservation {
        NewReservation {
            room_id: 1,
            start_date: NaiveDate::from_ymd_opt(2021, 10, 11).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2021, 10, 12).unwrap(),
            first_name: first_name.to_string(),
            last_name: "Smith".to_string(),
            email: "john@smith.com".to_string(),
            phone: String::new(),
        }
    }

    #[tokio::test]
    async fn insert_and_get_round_trips_dates() {
        let (db, _dir) = setup_db().await;

        let id = insert_reservation(&db, &make_reservation("John")).await.unwrap();
        assert!(id > 0);

        let res = reservation_by_id(&db, id).await.unwrap().unwrap();
        assert_eq!(res.first_name, "John");
        assert_eq!(res.start_date, NaiveDate::from_ymd_opt(2021, 10, 11).unwrap());
        assert_eq!(res.end_date, NaiveDate::from_ymd_opt(2021, 10, 12).unwrap());
        assert!(!res.processed);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn missing_reservation_returns_none() {
        let (db, _dir) = setup_db().await;
        assert!(reservation_by_id(&db, 123).await.unwrap().is_none());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn update_changes_guest_fields_only() {
        let (db, _dir) = setup_db().await;
        let id = insert_reservation(&db, &make_reservation("John")).await.unwrap();

        let mut res = reservation_by_id(&db, id).await.unwrap().unwrap();
        res.first_name = "Jane".to_string();
        res.email = "jane@smith.com".to_string();
        update_reservation(&db, &res).await.unwrap();

        let updated = reservation_by_id(&db, id).await.unwrap().unwrap();
        assert_eq!(updated.first_name, "Jane");
        assert_eq!(updated.email, "jane@smith.com");
        assert_eq!(updated.start_date, res.start_date);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn processed_flag_filters_unprocessed_listing() {
        let (db, _dir) = setup_db().await;
        let first = insert_reservation(&db, &make_reservation("John")).await.unwrap();
        let second = insert_reservation(&db, &make_reservation("Jane")).await.unwrap();

        set_processed(&db, first, true).await.unwrap();

        let all = all_reservations(&db).await.unwrap();
        assert_eq!(all.len(), 2);

        let unprocessed = unprocessed_reservations(&db).await.unwrap();
        assert_eq!(unprocessed.len(), 1);
        assert_eq!(unprocessed[0].id, second);

        // Idempotent flip.
        set_processed(&db, first, true).await.unwrap();
        assert!(reservation_by_id(&db, first).await.unwrap().unwrap().processed);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn delete_removes_only_the_reservation_row() {
        let (db, _dir) = setup_db().await;
        let id = insert_reservation(&db, &make_reservation("John")).await.unwrap();

        delete_reservation(&db, id).await.unwrap();
        assert!(reservation_by_id(&db, id).await.unwrap().is_none());

        db.close().await.unwrap();
    }
}
