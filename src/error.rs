use thiserror::Error;

/// Field-level rejection produced by the validator. The display text is the
/// message shown inline next to the form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Phone number should contain digits only.")]
    InvalidPhone,
    #[error("Gender is required.")]
    MissingGender,
    #[error("Position is required.")]
    MissingPosition,
    #[error("ID should be exactly {expected} digits.")]
    InvalidIdLength { expected: usize },
    #[error("ID should contain digits only.")]
    IdNotNumeric,
}

/// Errors surfaced by roster operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Duplicate detected: an employee with ID {0} already exists")]
    DuplicateId(String),
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

/// Invalid runtime configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Failures of the text console. Parse errors are reported and the session
/// continues; the rest end the session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Unknown command: {0} (try `help`)")]
    UnknownCommand(String),
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("Unknown field: {0} (expected name, email, phone, gender, position, id or image)")]
    UnknownField(String),
    #[error("Unknown gender: {0} (expected male or female)")]
    UnknownGender(String),
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error("Failed to encode roster: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConsoleError {
    /// Whether the session can carry on after reporting this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ConsoleError::UnknownCommand(_)
                | ConsoleError::MissingArgument { .. }
                | ConsoleError::UnknownField(_)
                | ConsoleError::UnknownGender(_)
        )
    }
}
