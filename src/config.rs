//! Runtime settings, read from the environment with sensible defaults.

use crate::error::ConfigError;
use crate::validation::{IdRule, EMPLOYEE_ID_DIGITS};

pub const MAILBOX_SIZE_VAR: &str = "ROSTER_MAILBOX_SIZE";
pub const ID_LENGTH_VAR: &str = "ROSTER_ID_LENGTH";
pub const LOG_VAR: &str = "ROSTER_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Capacity of the roster actor's mailbox.
    pub mailbox_size: usize,
    pub id_rule: IdRule,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            mailbox_size: 32,
            id_rule: IdRule::ExactDigits(EMPLOYEE_ID_DIGITS),
            log_filter: "info".to_string(),
        }
    }
}

impl RosterConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(MAILBOX_SIZE_VAR) {
            config.mailbox_size = match value.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => return Err(ConfigError::Invalid { key: MAILBOX_SIZE_VAR, value }),
            };
        }

        if let Some(value) = lookup(ID_LENGTH_VAR) {
            config.id_rule = parse_id_rule(&value)
                .ok_or(ConfigError::Invalid { key: ID_LENGTH_VAR, value })?;
        }

        if let Some(value) = lookup(LOG_VAR) {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid { key: LOG_VAR, value });
            }
            config.log_filter = value;
        }

        Ok(config)
    }
}

fn parse_id_rule(value: &str) -> Option<IdRule> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("any") {
        return Some(IdRule::DigitsOnly);
    }
    match value.parse::<usize>() {
        Ok(length) if length > 0 => Some(IdRule::ExactDigits(length)),
        _ => None,
    }
}
