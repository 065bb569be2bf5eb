// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration for the Innkeep booking engine.

pub mod loader;
pub mod model;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{BookingConfig, InnkeepConfig, MailConfig, SessionConfig, StorageConfig};
