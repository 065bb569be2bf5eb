// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outbound notification contract.

use crate::types::MailData;

/// Fire-and-forget message sink for guest and owner notifications.
///
/// `send` hands the message off and returns immediately. A full queue or
/// a delivery failure must never block or fail the calling operation, so
/// the method is infallible; implementations log and drop on error.
pub trait NotificationSink: Send + Sync {
    fn send(&self, message: MailData);
}
