// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Innkeep booking engine.
//!
//! This crate provides the persistence and notification contracts, the
//! error taxonomy, and the domain types used throughout the workspace.
//! It carries no business logic of its own.

pub mod dates;
pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::InnkeepError;
pub use traits::{BookingStore, NotificationSink};
pub use types::{
    FieldErrors, MailData, NewReservation, NewRestriction, Reservation, RestrictionKind, Room,
    RoomRestriction,
};
