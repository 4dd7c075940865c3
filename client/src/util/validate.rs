//! Local input validation for the login/signup form.
//!
//! Failures return the message shown inline; no network call is made for
//! input that fails here.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::OnceLock;

use regex::Regex;

pub const INVALID_EMAIL: &str = "Invalid email format.";
pub const INVALID_CONTACT: &str = "Invalid contact number. Must be 10 digits starting with 6-9.";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static CONTACT_REGEX: OnceLock<Regex> = OnceLock::new();

pub fn is_valid_email(email: &str) -> bool {
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
    });
    regex.is_match(email)
}

/// Ten digits, leading digit 6-9.
pub fn is_valid_contact_number(number: &str) -> bool {
    let regex = CONTACT_REGEX.get_or_init(|| Regex::new(r"^[6-9][0-9]{9}$").expect("contact pattern compiles"));
    regex.is_match(number)
}

pub fn check_email(email: &str) -> Result<(), &'static str> {
    if is_valid_email(email) { Ok(()) } else { Err(INVALID_EMAIL) }
}

pub fn check_contact_number(number: &str) -> Result<(), &'static str> {
    if is_valid_contact_number(number) { Ok(()) } else { Err(INVALID_CONTACT) }
}
