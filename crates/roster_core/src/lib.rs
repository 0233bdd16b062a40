//! Core domain logic for the employee roster screen.
//! This crate is the single source of truth for screen behavior; shells only
//! forward input and draw the rendered view.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod screen;

pub use api::{ApiError, ApiResult, EmployeeApi, HttpEmployeeApi, WriteOutcome};
pub use config::{
    ApiConfig, ConfigError, ConfigResult, API_BASE_URL_ENV, API_TIMEOUT_ENV, DEFAULT_API_BASE_URL,
};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::employee::{
    Employee, EmployeeId, EmployeeListEnvelope, NewEmployee, StatusEnvelope, SUCCESS_MARKER,
};
pub use screen::{
    render, EmployeeRow, EmployeeScreen, FormState, ScreenState, ScreenView, StateListener,
    ADD_EMPLOYEE_ERROR, DELETE_EMPLOYEE_ERROR, FETCH_EMPLOYEES_ERROR,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
