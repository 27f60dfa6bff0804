// Application state shared across all modules

use crate::employees::store::EmployeeForm;

/// Application state holding the in-memory employee form.
/// Lives for the lifetime of the process; nothing is persisted.
#[derive(Debug, Default)]
pub struct AppState {
    pub employees: EmployeeForm,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
