//! View state held by the employee screen.

use crate::model::employee::{Employee, NewEmployee};

/// The two free-text inputs of the add form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub salary: String,
}

impl FormState {
    /// Builds the create payload from current inputs, unvalidated.
    pub fn to_new_employee(&self) -> NewEmployee {
        NewEmployee {
            name: self.name.clone(),
            salary: self.salary.clone(),
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.salary.clear();
    }
}

/// Everything the render routine reads.
///
/// # Invariants
/// - `employees` is a wholesale copy of the last successful fetch.
/// - `error_message` holds the most recent failure text and is never reset
///   by a success path; an empty string means no failure has happened yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenState {
    pub employees: Vec<Employee>,
    pub form: FormState,
    pub is_loading: bool,
    pub error_message: String,
}

impl ScreenState {
    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }
}
