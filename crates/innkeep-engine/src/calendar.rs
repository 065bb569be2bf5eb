// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Month-grid projection and the owner's block editor.
//!
//! `month_view` projects the restriction store onto per-room day maps for
//! one calendar month and captures each room's block map into the session.
//! `apply_edits` later diffs the posted editor form against that snapshot:
//! checkbox forms only carry the boxes that are checked, so a block's
//! absence from the post is the delete signal.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use innkeep_core::{dates, BookingStore, InnkeepError, RestrictionKind, Room};

use crate::session::SessionBag;

/// Day-key -> restriction (or reservation) id; 0 means the day is clear.
pub type DayMap = BTreeMap<String, i64>;

/// One room's block map as captured at render time, held in the session
/// for the editor diff.
pub type BlockSnapshot = BTreeMap<String, i64>;

/// One room's projection for the month.
#[derive(Debug, Clone)]
pub struct RoomMonth {
    pub room: Room,
    /// Day-key -> reservation id for days spanned by a reservation.
    pub reservation_map: DayMap,
    /// Day-key -> restriction id for owner-blocked days.
    pub block_map: DayMap,
}

/// A rendered month: per-room day maps plus navigation values.
#[derive(Debug, Clone)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    pub first: NaiveDate,
    pub last: NaiveDate,
    pub prev_year: i32,
    pub prev_month: u32,
    pub next_year: i32,
    pub next_month: u32,
    pub rooms: Vec<RoomMonth>,
}

/// Posted field name marking a snapshot block the owner wants to keep.
pub fn keep_block_marker(room_id: i64, day: NaiveDate) -> String {
    format!("keep_block_{room_id}_{}", dates::day_key(day))
}

/// Posted field name requesting a new block on a day.
pub fn add_block_marker(room_id: i64, day: NaiveDate) -> String {
    format!("add_block_{room_id}_{}", dates::day_key(day))
}

/// Projects months and applies block-editor posts against the store.
pub struct CalendarService {
    store: Arc<dyn BookingStore>,
}

impl CalendarService {
    pub fn new(store: Arc<dyn BookingStore>) -> Self {
        Self { store }
    }

    /// Project one month for every room, capturing each room's block map
    /// into the session for a later [`CalendarService::apply_edits`].
    pub async fn month_view(
        &self,
        year: i32,
        month: u32,
        bag: &mut SessionBag,
    ) -> Result<MonthView, InnkeepError> {
        let first = dates::first_of_month(year, month)
            .ok_or_else(|| InnkeepError::Internal(format!("invalid month {year}-{month}")))?;
        let last = dates::last_of_month(year, month)
            .ok_or_else(|| InnkeepError::Internal(format!("invalid month {year}-{month}")))?;

        let mut rooms = Vec::new();
        for room in self.store.all_rooms().await? {
            let mut reservation_map = DayMap::new();
            let mut block_map = DayMap::new();
            for day in first.iter_days().take_while(|d| *d <= last) {
                let key = dates::day_key(day);
                reservation_map.insert(key.clone(), 0);
                block_map.insert(key, 0);
            }

            for restriction in self
                .store
                .restrictions_for_room_in_range(room.id, first, last)
                .await?
            {
                match restriction.kind {
                    RestrictionKind::Reservation => {
                        // Paint every spanned day, clamped to the month.
                        let from = restriction.start_date.max(first);
                        let to = restriction.end_date.min(last);
                        for day in from.iter_days().take_while(|d| *d <= to) {
                            reservation_map.insert(
                                dates::day_key(day),
                                restriction.reservation_id.unwrap_or(0),
                            );
                        }
                    }
                    RestrictionKind::Block => {
                        if restriction.start_date >= first && restriction.start_date <= last {
                            block_map
                                .insert(dates::day_key(restriction.start_date), restriction.id);
                        }
                    }
                }
            }

            bag.put_block_snapshot(room.id, &block_map);
            rooms.push(RoomMonth {
                room,
                reservation_map,
                block_map,
            });
        }

        let (prev_year, prev_month) = if month == 1 {
            (year - 1, 12)
        } else {
            (year, month - 1)
        };
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };

        debug!(year = year, month = month, rooms = rooms.len(), "month projected");
        Ok(MonthView {
            year,
            month,
            days_in_month: last.day(),
            first,
            last,
            prev_year,
            prev_month,
            next_year,
            next_month,
            rooms,
        })
    }

    /// Apply a posted block-editor form against the session snapshots.
    ///
    /// Pass 1 deletes every snapshot block whose keep marker is missing
    /// from the post. Pass 2 inserts a block for every add marker, except
    /// on a day whose existing block was kept in pass 1. A room without a
    /// snapshot aborts the whole edit; per-item storage failures are
    /// logged and skipped.
    pub async fn apply_edits(
        &self,
        posted: &HashSet<String>,
        bag: &mut SessionBag,
    ) -> Result<(), InnkeepError> {
        for room in self.store.all_rooms().await? {
            let snapshot = bag.block_snapshot(room.id).ok_or_else(|| {
                InnkeepError::Internal(format!("no calendar snapshot for room {}", room.id))
            })?;

            let mut kept_days = HashSet::new();
            for (day_key, &restriction_id) in &snapshot {
                if restriction_id == 0 {
                    continue;
                }
                if posted.contains(&format!("keep_block_{}_{day_key}", room.id)) {
                    kept_days.insert(day_key.clone());
                } else if let Err(e) = self.store.delete_restriction(restriction_id).await {
                    warn!(
                        room_id = room.id,
                        restriction_id = restriction_id,
                        error = %e,
                        "failed to delete block, skipping"
                    );
                }
            }

            let add_prefix = format!("add_block_{}_", room.id);
            for name in posted {
                let Some(day_key) = name.strip_prefix(&add_prefix) else {
                    continue;
                };
                if kept_days.contains(day_key) {
                    continue;
                }
                let Some(day) = dates::parse_day_key(day_key) else {
                    warn!(room_id = room.id, day_key = day_key, "unparseable day in post, skipping");
                    continue;
                };
                if let Err(e) = self.store.insert_block(room.id, day).await {
                    warn!(
                        room_id = room.id,
                        day = %day,
                        error = %e,
                        "failed to insert block, skipping"
                    );
                }
            }
        }
        Ok(())
    }
}
