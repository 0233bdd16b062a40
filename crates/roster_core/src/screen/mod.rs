//! Single-screen employee roster: state holder, routines and render.
//!
//! # Responsibility
//! - Hold the employee list, form inputs, loading flag and error message.
//! - Run fetch/create/delete against an [`crate::api::EmployeeApi`].
//! - Map state to a shell-agnostic view.
//!
//! # Invariants
//! - Every failure collapses into one of three static user-facing strings.
//! - `is_loading` is true strictly while a routine is running.
//! - A success path never clears a previous error message.

pub mod controller;
pub mod render;
pub mod state;

pub use controller::{EmployeeScreen, StateListener};
pub use render::{render, EmployeeRow, FormView, InputView, KeyboardHint, ScreenView};
pub use state::{FormState, ScreenState};

pub const FETCH_EMPLOYEES_ERROR: &str = "Error fetching employees.";
pub const ADD_EMPLOYEE_ERROR: &str = "Error adding employee.";
pub const DELETE_EMPLOYEE_ERROR: &str = "Error deleting employee.";
