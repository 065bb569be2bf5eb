// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed per-visitor session state.
//!
//! The transport layer owns session identity and lifetime (cookie, expiry);
//! the engine receives one [`SessionBag`] per request. Values are kept as
//! JSON under string keys; the typed accessors return `None` on an absent
//! key **or** a value of the wrong shape -- never a panic.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::calendar::BlockSnapshot;
use crate::draft::DraftReservation;

/// Session key holding the in-progress booking draft.
pub const DRAFT_KEY: &str = "reservation";

/// Session key holding one room's calendar block snapshot.
pub fn block_map_key(room_id: i64) -> String {
    format!("block_map_{room_id}")
}

/// Keyed value store scoped to one visitor.
#[derive(Debug, Clone, Default)]
pub struct SessionBag {
    values: HashMap<String, serde_json::Value>,
}

impl SessionBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Typed read. Absent key or wrong shape both come back as `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.values.get(key)?;
        serde_json::from_value(value.clone()).ok()
    }

    pub fn put<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(json) => {
                self.values.insert(key.to_string(), json);
            }
            Err(e) => warn!(key = key, error = %e, "dropping unserializable session value"),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    // --- Typed accessors for the engine's two session-carried values ---

    /// The in-progress booking draft, if one exists.
    pub fn draft(&self) -> Option<DraftReservation> {
        self.get(DRAFT_KEY)
    }

    pub fn put_draft(&mut self, draft: &DraftReservation) {
        self.put(DRAFT_KEY, draft);
    }

    /// Read and clear the draft in one step (summary-view consumption).
    pub fn take_draft(&mut self) -> Option<DraftReservation> {
        let draft = self.draft();
        self.remove(DRAFT_KEY);
        draft
    }

    /// One room's calendar snapshot from the last rendered month view.
    pub fn block_snapshot(&self, room_id: i64) -> Option<BlockSnapshot> {
        self.get(&block_map_key(room_id))
    }

    pub fn put_block_snapshot(&mut self, room_id: i64, snapshot: &BlockSnapshot) {
        self.put(&block_map_key(room_id), snapshot);
    }
}
