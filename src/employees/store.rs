// src/employees/store.rs
//! In-memory employee records and the form controller around them.
//!
//! Rows are addressed by position. Editing a row removes it from the store
//! and loads it into the draft; submitting appends it again at the tail.

use super::models::{Employee, EmployeeField, StoredEmployee};
use super::validators::validate_employee;
use crate::common::{generate_employee_id, safe_email_log, ApiError, ValidationResult};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

// ============================================================================
// Record Store
// ============================================================================

/// Ordered sequence of accepted records
#[derive(Debug, Default)]
pub struct EmployeeStore {
    records: Vec<StoredEmployee>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[StoredEmployee] {
        &self.records
    }

    /// Appends at the tail and returns the stored copy
    pub fn append(&mut self, employee: Employee) -> &StoredEmployee {
        let index = self.records.len();
        self.records.push(StoredEmployee {
            id: generate_employee_id(),
            employee,
        });
        &self.records[index]
    }

    pub fn remove(&mut self, index: usize) -> Result<StoredEmployee, ApiError> {
        if index >= self.records.len() {
            return Err(ApiError::NotFound(format!(
                "No employee at position {} (have {})",
                index,
                self.records.len()
            )));
        }
        Ok(self.records.remove(index))
    }

    /// Records whose name contains `query`, ignoring case, paired with their
    /// position in the store. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<(usize, &StoredEmployee)> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.employee.name.to_lowercase().contains(&needle))
            .collect()
    }
}

// ============================================================================
// Form Controller
// ============================================================================

/// The form as a whole: stored records, the pending draft, and the errors
/// currently displayed beside the inputs.
#[derive(Debug, Default)]
pub struct EmployeeForm {
    store: EmployeeStore,
    draft: Employee,
    errors: ValidationResult,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &EmployeeStore {
        &self.store
    }

    pub fn draft(&self) -> &Employee {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    /// Updates one draft field. Displayed errors stay until the next submit.
    pub fn set_field(&mut self, field: EmployeeField, value: String) {
        debug!(field = %field, "Draft field updated");
        self.draft.set(field, value);
    }

    pub fn update_draft<I>(&mut self, changes: I)
    where
        I: IntoIterator<Item = (EmployeeField, String)>,
    {
        for (field, value) in changes {
            self.set_field(field, value);
        }
    }

    pub fn submit(&mut self) -> Result<StoredEmployee, ApiError> {
        self.submit_at(Utc::now())
    }

    /// Validates the draft against `now`. On failure the store and draft are
    /// untouched and the errors are kept for display; on success the draft is
    /// appended and reset and the errors cleared.
    pub fn submit_at(&mut self, now: DateTime<Utc>) -> Result<StoredEmployee, ApiError> {
        let result = validate_employee(&self.draft, now);
        if !result.is_valid {
            let fields: Vec<&str> = result.errors.iter().map(|e| e.field.as_str()).collect();
            warn!(fields = ?fields, "Employee submission rejected");
            self.errors = result.clone();
            return Err(ApiError::InvalidFields(result));
        }

        let employee = std::mem::take(&mut self.draft);
        self.errors = ValidationResult::new();
        let stored = self.store.append(employee).clone();

        info!(
            id = %stored.id,
            email = %safe_email_log(&stored.employee.email),
            total = self.store.len(),
            "Employee saved"
        );

        Ok(stored)
    }

    /// Moves the record at `index` into the draft, replacing whatever the
    /// draft held, and removes it from the store until it is resubmitted.
    pub fn edit(&mut self, index: usize) -> Result<&Employee, ApiError> {
        let record = self.store.remove(index)?;
        if !self.draft.is_blank() {
            debug!("Unsaved draft replaced by edit");
        }
        info!(id = %record.id, index, "Employee loaded for editing");
        self.draft = record.employee;
        Ok(&self.draft)
    }

    pub fn delete(&mut self, index: usize) -> Result<StoredEmployee, ApiError> {
        let record = self.store.remove(index)?;
        info!(id = %record.id, index, total = self.store.len(), "Employee deleted");
        Ok(record)
    }

    pub fn search(&self, query: &str) -> Vec<(usize, &StoredEmployee)> {
        self.store.search(query)
    }
}
