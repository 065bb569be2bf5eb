// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All writes are serialized through tokio-rusqlite's single background
//! thread. Do NOT create additional Connection instances for writes.

use innkeep_core::InnkeepError;
use tracing::debug;

/// Convert a tokio-rusqlite error into InnkeepError::Storage.
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error<rusqlite::Error>) -> InnkeepError {
    InnkeepError::Storage {
        source: Box::new(e),
    }
}

/// Handle to the SQLite database behind tokio-rusqlite's worker thread.
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Open (or create) the database at `path`, apply PRAGMAs, and run
    /// pending migrations.
    pub async fn open(path: &str) -> Result<Self, InnkeepError> {
        let conn = tokio_rusqlite::Connection::open(path.to_owned())
            .await
            .map_err(|e| InnkeepError::Storage {
                source: Box::new(e),
            })?;

        conn.call(|conn| -> Result<(), rusqlite::Error> {
            conn.execute_batch(
                "PRAGMA journal_mode = WAL;
                 PRAGMA foreign_keys = ON;
                 PRAGMA busy_timeout = 5000;",
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;

        conn.call(|conn| crate::migrations::run_migrations(conn))
            .await
            .map_err(|e| InnkeepError::Storage {
                source: Box::new(e),
            })?;

        debug!(path = %path, "database opened, migrations applied");
        Ok(Self { conn })
    }

    /// The underlying tokio-rusqlite connection.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Checkpoint the WAL before shutdown.
    pub async fn close(&self) -> Result<(), InnkeepError> {
        self.conn
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        debug!("WAL checkpoint complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn open_creates_file_and_seeds_rooms() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("open.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        assert!(db_path.exists());

        let count: i64 = db
            .connection()
            .call(|conn| {
                conn.query_row("SELECT COUNT(*) FROM rooms", [], |row| row.get(0))
            })
            .await
            .unwrap();
        assert_eq!(count, 2, "migration seeds two rooms");

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn open_is_idempotent_across_restarts() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("reopen.db");
        let path = db_path.to_str().unwrap();

        let db = Database::open(path).await.unwrap();
        db.close().await.unwrap();
        drop(db);

        // Second open must not re-run the seed migration.
        let db = Database::open(path).await.unwrap();
        let count: i64 = db
            .connection()
            .call(|conn| {
                conn.query_row("SELECT COUNT(*) FROM rooms", [], |row| row.get(0))
            })
            .await
            .unwrap();
        assert_eq!(count, 2);
        db.close().await.unwrap();
    }
}
