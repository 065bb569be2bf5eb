// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Innkeep booking engine.

use thiserror::Error;

use crate::types::FieldErrors;

/// The primary error type used across the Innkeep storage contract and
/// engine operations.
#[derive(Debug, Error)]
pub enum InnkeepError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database connection, query failure, serialization).
    ///
    /// Never retried by the engine; the caller redirects to a safe entry point.
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A room or reservation lookup came back empty.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// Guest-submitted input failed validation. No store mutation occurred.
    #[error("validation failed on {} field(s)", errors.len())]
    Validation { errors: FieldErrors },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl InnkeepError {
    /// Wrap an arbitrary error as a storage failure.
    pub fn storage<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        InnkeepError::Storage {
            source: Box::new(source),
        }
    }
}
