// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Room lookups. Rooms are reference data; there are no write operations.

use innkeep_core::{InnkeepError, Room};
use rusqlite::params;

use crate::database::Database;

/// Get a room by id, or `None` when no such room exists.
pub async fn room_by_id(db: &Database, id: i64) -> Result<Option<Room>, InnkeepError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare("SELECT id, room_name FROM rooms WHERE id = ?1")?;
            let result = stmt.query_row(params![id], |row| {
                Ok(Room {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            });
            match result {
                Ok(room) => Ok(Some(room)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// All rooms ordered by id.
pub async fn all_rooms(db: &Database) -> Result<Vec<Room>, InnkeepError> {
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare("SELECT id, room_name FROM rooms ORDER BY id")?;
            let rows = stmt.query_map([], |row| {
                Ok(Room {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?;
            let mut rooms = Vec::new();
            for row in rows {
                rooms.push(row?);
            }
            Ok(rooms)
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

    #[tokio::test]
    async fn seeded_rooms_are_readable() {
        let (db, _dir) = setup_db().await;

        let rooms = all_rooms(&db).await.unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].name, "General's Quarters");
        assert_eq!(rooms[1].name, "Major's Suite");

        let room = room_by_id(&db, rooms[0].id).await.unwrap().unwrap();
        assert_eq!(room.name, "General's Quarters");

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn missing_room_returns_none() {
        let (db, _dir) = setup_db().await;
        assert!(room_by_id(&db, 999).await.unwrap().is_none());
        db.close().await.unwrap();
    }
}
