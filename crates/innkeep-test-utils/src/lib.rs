// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test doubles for the Innkeep booking engine: an in-memory
//! [`MemoryStore`] with scripted failure switches and a
//! [`RecordingSink`] that captures outbound notifications.

pub mod memory_store;
pub mod mock_sink;

pub use memory_store::MemoryStore;
pub use mock_sink::RecordingSink;
