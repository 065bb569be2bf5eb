// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Guest form validation.
//!
//! Rules are evaluated independently and all violations are collected, so
//! the caller can annotate every offending field at once. The submitted
//! values ride along with the form; a failed validation never drops the
//! visitor's input.

use std::collections::HashMap;
use std::sync::OnceLock;

use innkeep_core::FieldErrors;
use regex::Regex;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid regex")
    })
}

/// A submitted form: raw field values plus accumulated validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    values: HashMap<String, String>,
    pub errors: FieldErrors,
}

impl Form {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self {
            values,
            errors: FieldErrors::new(),
        }
    }

    /// The submitted value for a field, or the empty string.
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// True when the field was submitted with a non-blank value.
    pub fn has(&self, field: &str) -> bool {
        !self.get(field).trim().is_empty()
    }

    /// Each listed field must be present and non-blank.
    pub fn required(&mut self, fields: &[&str]) {
        for field in fields {
            if self.get(field).trim().is_empty() {
                self.errors.add(field, "this field cannot be blank");
            }
        }
    }

    /// The field's value must be at least `min` characters long. A missing
    /// field fails the check.
    pub fn min_length(&mut self, field: &str, min: usize) {
        if self.get(field).chars().count() < min {
            self.errors.add(
                field,
                &format!("this field must be at least {min} characters long"),
            );
        }
    }

    /// The field must hold a standard mailbox address. A missing field
    /// fails the check.
    pub fn is_email(&mut self, field: &str) {
        if !email_regex().is_match(self.get(field)) {
            self.errors.add(field, "invalid email address");
        }
    }

    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }
}
