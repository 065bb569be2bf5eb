// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Innkeep booking engine.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Innkeep configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct InnkeepConfig {
    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Outbound notification settings.
    #[serde(default)]
    pub mail: MailConfig,

    /// Visitor session settings.
    #[serde(default)]
    pub session: SessionConfig,

    /// Booking policy settings.
    #[serde(default)]
    pub booking: BookingConfig,
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

fn default_database_path() -> String {
    "innkeep.db".to_string()
}

/// Outbound notification configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MailConfig {
    /// When false, messages are logged instead of delivered over SMTP.
    #[serde(default)]
    pub smtp_enabled: bool,

    /// SMTP relay host.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// SMTP relay port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// Optional SMTP credentials.
    #[serde(default)]
    pub smtp_username: Option<String>,

    #[serde(default)]
    pub smtp_password: Option<String>,

    /// Sender address on outbound notifications.
    #[serde(default = "default_from_address")]
    pub from_address: String,

    /// Owner address receiving booking notifications.
    #[serde(default = "default_owner_address")]
    pub owner_address: String,

    /// Capacity of the outbound queue. A full queue drops messages.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_enabled: false,
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: None,
            smtp_password: None,
            from_address: default_from_address(),
            owner_address: default_owner_address(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    1025
}

fn default_from_address() -> String {
    "desk@innkeep.local".to_string()
}

fn default_owner_address() -> String {
    "owner@innkeep.local".to_string()
}

fn default_queue_capacity() -> usize {
    100
}

/// Visitor session configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Session lifetime in hours; drafts abandoned past this are discarded
    /// by the transport layer.
    #[serde(default = "default_lifetime_hours")]
    pub lifetime_hours: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            lifetime_hours: default_lifetime_hours(),
        }
    }
}

fn default_lifetime_hours() -> u64 {
    24
}

/// Booking policy configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BookingConfig {
    /// When true, deleting a reservation also deletes its linked
    /// restrictions. When false, only the reservation row is removed and
    /// its occupancy interval stays behind.
    #[serde(default)]
    pub cascade_delete_restrictions: bool,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            cascade_delete_restrictions: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_deserialize_independently() {
        let mail: MailConfig = toml::from_str("smtp_port = 2525").unwrap();
        assert_eq!(mail.smtp_port, 2525);
        assert_eq!(mail.smtp_host, "localhost");

        let booking: BookingConfig =
            toml::from_str("cascade_delete_restrictions = true").unwrap();
        assert!(booking.cascade_delete_restrictions);
    }

    #[test]
    fn unknown_section_key_is_rejected() {
        let result = toml::from_str::<StorageConfig>("databse_path = \"typo.db\"");
        assert!(result.is_err());
    }
}
