// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recording notification sink for assertions in tests.

use std::sync::Mutex;

use innkeep_core::{MailData, NotificationSink};

/// Captures every message sent through it.
#[derive(Debug, Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<MailData>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything sent so far.
    pub fn sent(&self) -> Vec<MailData> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl NotificationSink for RecordingSink {
    fn send(&self, message: MailData) {
        self.sent.lock().unwrap().push(message);
    }
}
