//! Roster API client contracts and HTTP implementation.
//!
//! # Responsibility
//! - Define the three remote calls the roster screen depends on.
//! - Keep transport and payload decoding details out of screen logic.
//!
//! # Invariants
//! - List responses are not gated on HTTP status; the body decides.
//! - Write calls report declared failures as [`WriteOutcome::Rejected`],
//!   never as [`ApiError`].

use crate::model::employee::{Employee, EmployeeId, NewEmployee, StatusEnvelope};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

mod http;

pub use http::HttpEmployeeApi;

pub type ApiResult<T> = Result<T, ApiError>;

/// Transport or payload failure while talking to the roster API.
#[derive(Debug)]
pub enum ApiError {
    Transport(reqwest::Error),
    Decode(serde_json::Error),
    InvalidEndpoint(String),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "request failed: {err}"),
            Self::Decode(err) => write!(f, "malformed response payload: {err}"),
            Self::InvalidEndpoint(details) => write!(f, "invalid endpoint: {details}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::InvalidEndpoint(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// Declared result of a create/delete call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Response `status` equals the success marker.
    Accepted,
    /// Any other declared status, including a missing one.
    Rejected(Option<String>),
}

impl From<StatusEnvelope> for WriteOutcome {
    fn from(value: StatusEnvelope) -> Self {
        if value.is_success() {
            Self::Accepted
        } else {
            Self::Rejected(value.status)
        }
    }
}

/// Remote roster operations used by the employee screen.
pub trait EmployeeApi {
    /// Fetches the full employee collection in server order.
    fn list_employees(&self) -> ApiResult<Vec<Employee>>;
    /// Submits one new employee.
    fn create_employee(&self, employee: &NewEmployee) -> ApiResult<WriteOutcome>;
    /// Deletes one employee by id.
    fn delete_employee(&self, id: &EmployeeId) -> ApiResult<WriteOutcome>;
}

impl<T: EmployeeApi + ?Sized> EmployeeApi for &T {
    fn list_employees(&self) -> ApiResult<Vec<Employee>> {
        (**self).list_employees()
    }

    fn create_employee(&self, employee: &NewEmployee) -> ApiResult<WriteOutcome> {
        (**self).create_employee(employee)
    }

    fn delete_employee(&self, id: &EmployeeId) -> ApiResult<WriteOutcome> {
        (**self).delete_employee(id)
    }
}

impl<T: EmployeeApi + ?Sized> EmployeeApi for Arc<T> {
    fn list_employees(&self) -> ApiResult<Vec<Employee>> {
        (**self).list_employees()
    }

    fn create_employee(&self, employee: &NewEmployee) -> ApiResult<WriteOutcome> {
        (**self).create_employee(employee)
    }

    fn delete_employee(&self, id: &EmployeeId) -> ApiResult<WriteOutcome> {
        (**self).delete_employee(id)
    }
}
