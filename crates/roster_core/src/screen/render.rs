//! Pure state-to-view mapping for the employee screen.
//!
//! # Invariants
//! - While loading, nothing but the loading indicator is rendered.
//! - The error banner appears only for a non-empty error message.
//! - Rows follow list order and carry the id their delete action targets.

use super::state::ScreenState;
use crate::model::employee::{Employee, EmployeeId};

pub const LOADING_LABEL: &str = "Loading...";
pub const NAME_PLACEHOLDER: &str = "Employee Name";
pub const SALARY_PLACEHOLDER: &str = "Employee Salary";
pub const ADD_ACTION_LABEL: &str = "Add Employee";
pub const DELETE_ACTION_LABEL: &str = "Delete";

/// Keyboard hint a shell should use for one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardHint {
    Text,
    Numeric,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub placeholder: &'static str,
    pub value: String,
    pub keyboard: KeyboardHint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub name: InputView,
    pub salary: InputView,
    pub submit_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    pub id: EmployeeId,
    pub name: String,
    /// Already formatted as `Salary: {value}`.
    pub salary_line: String,
    pub delete_label: &'static str,
}

impl From<&Employee> for EmployeeRow {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.clone(),
            name: employee.employee_name.clone(),
            salary_line: format!("Salary: {}", employee.employee_salary),
            delete_label: DELETE_ACTION_LABEL,
        }
    }
}

/// Rendered screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    Loading {
        label: &'static str,
    },
    Ready {
        error_banner: Option<String>,
        form: FormView,
        rows: Vec<EmployeeRow>,
    },
}

impl ScreenView {
    pub fn rows(&self) -> &[EmployeeRow] {
        match self {
            Self::Loading { .. } => &[],
            Self::Ready { rows, .. } => rows,
        }
    }

    pub fn error_banner(&self) -> Option<&str> {
        match self {
            Self::Loading { .. } => None,
            Self::Ready { error_banner, .. } => error_banner.as_deref(),
        }
    }

    /// Plain-text rendering for terminal shells.
    pub fn to_text(&self) -> String {
        let (error_banner, form, rows) = match self {
            Self::Loading { label } => return format!("{label}\n"),
            Self::Ready {
                error_banner,
                form,
                rows,
            } => (error_banner, form, rows),
        };

        let mut lines = Vec::with_capacity(4 + rows.len() * 3);
        if let Some(banner) = error_banner {
            lines.push(format!("! {banner}"));
        }
        lines.push(input_line(&form.name));
        lines.push(input_line(&form.salary));
        lines.push(format!("[{}]", form.submit_label));
        for row in rows {
            lines.push(format!("- {}", row.name));
            lines.push(format!("  {}", row.salary_line));
            lines.push(format!("  [{} #{}]", row.delete_label, row.id));
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

/// Maps screen state to its view.
pub fn render(state: &ScreenState) -> ScreenView {
    if state.is_loading {
        return ScreenView::Loading {
            label: LOADING_LABEL,
        };
    }

    ScreenView::Ready {
        error_banner: state
            .has_error()
            .then(|| state.error_message.clone()),
        form: FormView {
            name: InputView {
                placeholder: NAME_PLACEHOLDER,
                value: state.form.name.clone(),
                keyboard: KeyboardHint::Text,
            },
            salary: InputView {
                placeholder: SALARY_PLACEHOLDER,
                value: state.form.salary.clone(),
                keyboard: KeyboardHint::Numeric,
            },
            submit_label: ADD_ACTION_LABEL,
        },
        rows: state.employees.iter().map(EmployeeRow::from).collect(),
    }
}

fn input_line(input: &InputView) -> String {
    format!("{}: {}", input.placeholder, input.value)
}
