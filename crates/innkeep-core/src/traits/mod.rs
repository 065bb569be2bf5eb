// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait contracts implemented by the storage and notification crates.

pub mod mailer;
pub mod store;

pub use mailer::NotificationSink;
pub use store::BookingStore;
