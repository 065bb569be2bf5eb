// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end booking flow: search, choose a room, commit, view the
//! summary once, and find the draft gone afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;

use innkeep_config::{BookingConfig, MailConfig};
use innkeep_core::dates;
use innkeep_engine::{
    AvailabilityResolver, BookingDesk, CommitOutcome, DraftStage, SessionBag,
};
use innkeep_test_utils::{MemoryStore, RecordingSink};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn search_choose_commit_summary_clears_draft() {
    let store = Arc::new(MemoryStore::seeded());
    let sink = Arc::new(RecordingSink::new());
    let resolver = AvailabilityResolver::new(store.clone());
    let desk = BookingDesk::new(
        store.clone(),
        sink.clone(),
        MailConfig::default(),
        BookingConfig::default(),
    );

    let mut bag = SessionBag::new();
    let start = dates::parse_day("11-10-2021").unwrap();
    let end = dates::parse_day("12-10-2021").unwrap();

    // Search: both rooms are free for the range.
    let free = resolver.free_rooms_in_range(start, end).await.unwrap();
    assert_eq!(free.len(), 2);
    let mut draft = innkeep_engine::DraftReservation::for_dates(start, end);
    bag.put_draft(&draft);

    // Choose room 1; the draft picks up its display name.
    let room = &free[0];
    draft = bag.draft().unwrap();
    draft.choose_room(room.id);
    draft.set_room_name(room.name.clone());
    bag.put_draft(&draft);
    assert_eq!(draft.stage(), DraftStage::RoomChosen);

    // Submit guest details and commit.
    let submission: HashMap<String, String> = [
        ("first_name", "John"),
        ("last_name", "Smith"),
        ("email", "john@smith.com"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    draft = bag.draft().unwrap();
    let outcome = desk.commit(draft.clone(), submission).await.unwrap();
    let reservation = match outcome {
        CommitOutcome::Booked(r) => r,
        other => panic!("expected Booked, got {other:?}"),
    };
    draft.submit_details(innkeep_engine::GuestDetails {
        first_name: reservation.first_name.clone(),
        last_name: reservation.last_name.clone(),
        email: reservation.email.clone(),
        phone: reservation.phone.clone(),
    });
    draft.mark_committed(reservation.id);
    bag.put_draft(&draft);

    // The booking is durable and both notifications went out.
    assert_eq!(store.reservation_count(), 1);
    assert_eq!(store.restriction_count(), 1);
    assert_eq!(sink.sent_count(), 2);
    assert!(!resolver.is_room_free(room.id, start, end).await.unwrap());

    // Summary view consumes the draft.
    let summary = bag.take_draft().unwrap();
    assert_eq!(summary.stage(), DraftStage::Committed);
    assert_eq!(summary.start_date, date(2021, 10, 11));
    assert_eq!(summary.end_date, date(2021, 10, 12));
    assert_eq!(summary.room_name.as_deref(), Some("General's Quarters"));
    assert_eq!(summary.guest.unwrap().first_name, "John");

    // A refresh of the summary finds nothing.
    assert!(bag.draft().is_none());
}
