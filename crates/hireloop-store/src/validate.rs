// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Input checks run before a write reaches the backend.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Minimum number of digits in a phone number.
pub const MIN_PHONE_DIGITS: usize = 10;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// At least ten digits once punctuation and spaces are dropped.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}
