//! Field validation for employee records.
//!
//! Rules run in a fixed order and the first failure wins:
//! name, email, phone, gender, position, id.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::Employee;
use crate::error::ValidationError;

/// Length of an employee id under the default rule.
pub const EMPLOYEE_ID_DIGITS: usize = 13;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*@([A-Za-z0-9_-]+\.)+[A-Za-z]{2,7}$")
        .expect("Invalid email regex")
});

static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("Invalid digits regex"));

/// `local@domain.tld`: word/hyphen runs joined by dots, one or more
/// dot-terminated domain labels, and a 2-7 letter top-level label.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Non-empty and ASCII digits only.
pub fn is_all_digits(value: &str) -> bool {
    DIGITS_RE.is_match(value)
}

/// Non-empty, digits only, and exactly `length` digits long.
pub fn is_valid_employee_id(id: &str, length: usize) -> bool {
    id.len() == length && is_all_digits(id)
}

/// How employee ids are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdRule {
    /// Digits only, exactly this many of them.
    ExactDigits(usize),
    /// Digits only, any length.
    DigitsOnly,
}

impl Default for IdRule {
    fn default() -> Self {
        IdRule::ExactDigits(EMPLOYEE_ID_DIGITS)
    }
}

impl IdRule {
    fn check(self, id: &str) -> Result<(), ValidationError> {
        match self {
            IdRule::ExactDigits(expected) if !is_valid_employee_id(id, expected) => {
                Err(ValidationError::InvalidIdLength { expected })
            }
            IdRule::DigitsOnly if !is_all_digits(id) => Err(ValidationError::IdNotNumeric),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    id_rule: IdRule,
}

impl Validator {
    pub fn new(id_rule: IdRule) -> Self {
        Self { id_rule }
    }

    /// Returns the first failing rule, or `Ok(())` when the record is valid.
    pub fn validate(&self, employee: &Employee) -> Result<(), ValidationError> {
        if employee.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if !is_valid_email(&employee.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !is_all_digits(&employee.phone) {
            return Err(ValidationError::InvalidPhone);
        }
        if employee.gender.is_none() {
            return Err(ValidationError::MissingGender);
        }
        if employee.position.is_empty() {
            return Err(ValidationError::MissingPosition);
        }
        self.id_rule.check(&employee.id)
    }
}

/// Validates with the default 13-digit id rule.
#[cfg(test)]
pub fn validate(employee: &Employee) -> Result<(), ValidationError> {
    Validator::default().validate(employee)
}
