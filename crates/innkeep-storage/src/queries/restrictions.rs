// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Occupancy interval (restriction) operations.

use std::str::FromStr;

use chrono::NaiveDate;
use innkeep_core::{InnkeepError, NewRestriction, RestrictionKind, RoomRestriction};
use rusqlite::params;

use crate::database::Database;
use crate::queries::{from_db_date, to_db_date};

fn row_to_restriction(row: &rusqlite::Row<'_>) -> Result<RoomRestriction, rusqlite::Error> {
    let start: String = row.get(2)?;
    let end: String = row.get(3)?;
    let kind: String = row.get(5)?;
    Ok(RoomRestriction {
        id: row.get(0)?,
        room_id: row.get(1)?,
        start_date: from_db_date(&start, 2)?,
        end_date: from_db_date(&end, 3)?,
        reservation_id: row.get(4)?,
        kind: RestrictionKind::from_str(&kind).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                5,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })?,
    })
}

/// Insert a restriction and return the auto-generated id.
pub async fn insert_restriction(
    db: &Database,
    restriction: &NewRestriction,
) -> Result<i64, InnkeepError> {
    let restriction = restriction.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO room_restrictions
                     (start_date, end_date, room_id, reservation_id, kind)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    to_db_date(restriction.start_date),
                    to_db_date(restriction.end_date),
                    restriction.room_id,
                    restriction.reservation_id,
                    restriction.kind.to_string(),
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// All restrictions for a room whose inclusive interval overlaps
/// `[start, end]`, ordered by start date.
pub async fn restrictions_for_room_in_range(
    db: &Database,
    room_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<RoomRestriction>, InnkeepError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, room_id, start_date, end_date, reservation_id, kind
                 FROM room_restrictions
                 WHERE room_id = ?1 AND start_date <= ?2 AND ?3 <= end_date
                 ORDER BY start_date",
            )?;
            let rows = stmt.query_map(
                params![room_id, to_db_date(end), to_db_date(start)],
                row_to_restriction,
            )?;
            let mut restrictions = Vec::new();
            for row in rows {
                restrictions.push(row?);
            }
            Ok(restrictions)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Delete one restriction by id. Deleting a missing id is a no-op.
pub async fn delete_restriction(db: &Database, id: i64) -> Result<(), InnkeepError> {
    db.connection()
        .call(move |conn| {
            conn.execute("DELETE FROM room_restrictions WHERE id = ?1", params![id])?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Insert a single-day owner block for a room, returning its id.
pub async fn insert_block(db: &Database, room_id: i64, day: NaiveDate) -> Result<i64, InnkeepError> {
    let restriction = NewRestriction {
        room_id,
        start_date: day,
        end_date: day,
        reservation_id: None,
        kind: RestrictionKind::Block,
    };
    insert_restriction(db, &restriction).await
}

/// Delete every restriction linked to the given reservation.
pub async fn delete_restrictions_for_reservation(
    db: &Database,
    reservation_id: i64,
) -> Result<(), InnkeepError> {
    db.connection()
        .call(move |conn| {
            conn.execute(
                "DELETE FROM room_restrictions WHERE reservation_id = ?1",
                params![reservation_id],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reservation_interval(room_id: i64, start: NaiveDate, end: NaiveDate) -> NewRestriction {
        NewRestriction {
            room_id,
            start_date: start,
            end_date: end,
            reservation_id: Some(1),
            kind: RestrictionKind::Reservation,
        }
    }

    #[tokio::test]
    async fn range_query_uses_inclusive_overlap() {
        let (db, _dir) = setup_db().await;
        let id = insert_restriction(
            &db,
            &reservation_interval(1, date(2021, 10, 11), date(2021, 10, 13)),
        )
        .await
        .unwrap();

        // Query window touching only the last day still overlaps.
        let hits = restrictions_for_room_in_range(&db, 1, date(2021, 10, 13), date(2021, 10, 20))
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, id);
        assert_eq!(hits[0].kind, RestrictionKind::Reservation);

        // Disjoint window sees nothing.
        let misses =
            restrictions_for_room_in_range(&db, 1, date(2021, 10, 14), date(2021, 10, 20))
                .await
                .unwrap();
        assert!(misses.is_empty());

        // Another room sees nothing.
        let other = restrictions_for_room_in_range(&db, 2, date(2021, 10, 11), date(2021, 10, 13))
            .await
            .unwrap();
        assert!(other.is_empty());

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn results_are_ordered_by_start_date() {
        let (db, _dir) = setup_db().await;
        insert_restriction(
            &db,
            &reservation_interval(1, date(2021, 10, 20), date(2021, 10, 22)),
        )
        .await
        .unwrap();
        insert_restriction(
            &db,
            &reservation_interval(1, date(2021, 10, 5), date(2021, 10, 7)),
        )
        .await
        .unwrap();

        let hits = restrictions_for_room_in_range(&db, 1, date(2021, 10, 1), date(2021, 10, 31))
            .await
            .unwrap();
        assert_eq!(hits.len(), 2);
        assert!(hits[0].start_date < hits[1].start_date);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn blocks_are_single_day_without_reservation() {
        let (db, _dir) = setup_db().await;
        insert_block(&db, 1, date(2021, 10, 11)).await.unwrap();

        let hits = restrictions_for_room_in_range(&db, 1, date(2021, 10, 1), date(2021, 10, 31))
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, RestrictionKind::Block);
        assert_eq!(hits[0].reservation_id, None);
        assert_eq!(hits[0].start_date, hits[0].end_date);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn delete_by_id_and_by_reservation() {
        let (db, _dir) = setup_db().await;
        let block_id = insert_restriction(
            &db,
            &NewRestriction {
                room_id: 1,
                start_date: date(2021, 10, 11),
                end_date: date(2021, 10, 11),
                reservation_id: None,
                kind: RestrictionKind::Block,
            },
        )
        .await
        .unwrap();
        insert_restriction(
            &db,
            &reservation_interval(1, date(2021, 10, 15), date(2021, 10, 17)),
        )
        .await
        .unwrap();

        delete_restriction(&db, block_id).await.unwrap();
        delete_restrictions_for_reservation(&db, 1).await.unwrap();

        let hits = restrictions_for_room_in_range(&db, 1, date(2021, 10, 1), date(2021, 10, 31))
            .await
            .unwrap();
        assert!(hits.is_empty());

        // Deleting an already-missing id is not an error.
        delete_restriction(&db, block_id).await.unwrap();

        db.close().await.unwrap();
    }
}
