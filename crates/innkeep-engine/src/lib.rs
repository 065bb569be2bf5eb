// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Booking engine: availability resolution, the session-carried booking
//! draft, the reservation commit pipeline, and the calendar projection
//! with its block editor.
//!
//! The engine is transport-agnostic. A web layer owns HTTP, cookies, and
//! templates; it hands the engine a [`SessionBag`] per request and renders
//! whatever comes back. All persistence goes through the
//! [`innkeep_core::BookingStore`] trait, all mail through
//! [`innkeep_core::NotificationSink`].

pub mod availability;
pub mod booking;
pub mod calendar;
pub mod draft;
pub mod forms;
pub mod session;

pub use availability::{AvailabilityResolver, AvailabilityResponse};
pub use booking::{BookingDesk, CommitOutcome};
pub use calendar::{BlockSnapshot, CalendarService, MonthView, RoomMonth};
pub use draft::{DraftReservation, DraftStage, GuestDetails};
pub use forms::Form;
pub use session::SessionBag;
