//! The form's state machine: draft buffer, mode, inline error, and the
//! record store it mutates.

use tracing::{debug, info, warn};

use crate::domain::{DraftEdit, Employee};
use crate::error::{RosterError, ValidationError};
use crate::store::RecordStore;
use crate::validation::Validator;

/// Whether the form is composing a new record or editing an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Adding,
    /// `active_id` is the id the record had when editing started; it is the
    /// key used to replace the record on submit.
    Editing { active_id: String },
}

impl Mode {
    pub fn heading(&self) -> &'static str {
        match self {
            Mode::Adding => "Add Employee",
            Mode::Editing { .. } => "Edit Employee",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Mode::Adding => "Add Employee",
            Mode::Editing { .. } => "Update Employee",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added { id: String },
    Updated { active_id: String, id: String },
}

/// Snapshot of what the form currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub mode: Mode,
    pub draft: Employee,
    pub error: Option<ValidationError>,
    pub record_count: usize,
}

#[derive(Debug, Default)]
pub struct RosterController {
    store: RecordStore<Employee>,
    draft: Employee,
    mode: Mode,
    error: Option<ValidationError>,
    validator: Validator,
}

impl RosterController {
    pub fn new(validator: Validator) -> Self {
        Self {
            validator,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &Employee {
        &self.draft
    }

    pub fn view(&self) -> FormView {
        FormView {
            mode: self.mode.clone(),
            draft: self.draft.clone(),
            error: self.error.clone(),
            record_count: self.store.len(),
        }
    }

    pub fn edit_draft(&mut self, edit: DraftEdit) {
        debug!(field = ?edit.field(), "Draft field changed");
        edit.apply(&mut self.draft);
    }

    /// Validates the draft and either adds it or writes it back over the
    /// record being edited.
    ///
    /// A validation failure is also kept as the inline error. A duplicate id
    /// on add is reported only through the returned error, never inline, and
    /// leaves the draft untouched.
    pub fn submit(&mut self) -> Result<SubmitOutcome, RosterError> {
        if let Err(e) = self.validator.validate(&self.draft) {
            warn!(error = %e, mode = ?self.mode, "Draft failed validation");
            self.error = Some(e.clone());
            return Err(e.into());
        }
        self.error = None;

        let draft = std::mem::take(&mut self.draft);
        let outcome = match std::mem::take(&mut self.mode) {
            Mode::Adding => {
                let id = draft.id.clone();
                if let Err(rejected) = self.store.insert(draft) {
                    warn!(employee_id = %id, "Duplicate detected");
                    self.draft = rejected;
                    return Err(RosterError::DuplicateId(id));
                }
                info!(employee_id = %id, "Employee added");
                SubmitOutcome::Added { id }
            }
            Mode::Editing { active_id } => {
                let id = draft.id.clone();
                if id != active_id && self.store.contains(&id) {
                    // Update skips the duplicate check; two records now share this id.
                    warn!(employee_id = %id, active_id = %active_id, "Edited id collides with another employee");
                }
                if self.store.replace(&active_id, draft) {
                    info!(employee_id = %id, active_id = %active_id, "Employee updated");
                } else {
                    warn!(active_id = %active_id, "Employee being edited no longer exists");
                }
                SubmitOutcome::Updated { active_id, id }
            }
        };

        Ok(outcome)
    }

    /// Loads `record` into the draft and switches to editing it.
    pub fn edit(&mut self, record: Employee) {
        info!(employee_id = %record.id, "Editing employee");
        self.mode = Mode::Editing {
            active_id: record.id.clone(),
        };
        self.draft = record;
        self.error = None;
    }

    /// Removes the record with `id`; a missing id is not an error.
    pub fn delete(&mut self, id: &str) -> Option<Employee> {
        let removed = self.store.remove(&id.to_string());
        match &removed {
            Some(_) => info!(employee_id = %id, "Employee deleted"),
            None => debug!(employee_id = %id, "Nothing to delete"),
        }
        removed
    }

    pub fn cancel(&mut self) {
        debug!(mode = ?self.mode, had_draft = !self.draft.is_blank(), "Draft cancelled");
        self.draft = Employee::default();
        self.mode = Mode::Adding;
        self.error = None;
    }

    pub fn search(&self, query: &str) -> Vec<Employee> {
        let results = self.store.filter(|employee| employee.matches(query));
        debug!(query, matches = results.len(), "Search finished");
        results
    }

    pub fn get(&self, id: &str) -> Option<Employee> {
        self.store.get(&id.to_string()).cloned()
    }

    pub fn list(&self) -> Vec<Employee> {
        self.store.iter().cloned().collect()
    }
}

#[cfg(test)]
impl RosterController {
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn store(&self) -> &RecordStore<Employee> {
        &self.store
    }
}
