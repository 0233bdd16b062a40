//! Employee screen state holder and its three remote routines.

use super::render::{render, ScreenView};
use super::state::ScreenState;
use super::{ADD_EMPLOYEE_ERROR, DELETE_EMPLOYEE_ERROR, FETCH_EMPLOYEES_ERROR};
use crate::api::{EmployeeApi, WriteOutcome};
use crate::model::employee::EmployeeId;
use log::{info, warn};

/// Callback invoked after every state mutation, in mutation order.
pub type StateListener = Box<dyn FnMut(&ScreenState) + Send>;

/// Single-screen roster controller.
///
/// Owns the view state and the API handle. Every routine runs to completion
/// on the calling thread; `&mut self` is the only synchronization.
pub struct EmployeeScreen<A: EmployeeApi> {
    api: A,
    state: ScreenState,
    mounted: bool,
    listener: Option<StateListener>,
}

impl<A: EmployeeApi> EmployeeScreen<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ScreenState::default(),
            mounted: false,
            listener: None,
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    /// Renders the current state.
    pub fn view(&self) -> ScreenView {
        render(&self.state)
    }

    /// Replaces the change listener.
    pub fn set_listener(&mut self, listener: StateListener) {
        self.listener = Some(listener);
    }

    /// Runs the initial load once per screen instance.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        info!("event=screen_mount module=screen status=ok");
        self.fetch_all();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.update(|state| state.form.name = name);
    }

    pub fn set_salary(&mut self, salary: impl Into<String>) {
        let salary = salary.into();
        self.update(|state| state.form.salary = salary);
    }

    /// Replaces the held list with the remote collection.
    ///
    /// On failure the list is kept and the fetch error text is set.
    pub fn fetch_all(&mut self) {
        self.begin_request();
        self.refresh_list();
        self.end_request();
    }

    /// Submits the form as a new employee.
    ///
    /// On the success marker the form is cleared and the list re-fetched;
    /// anything else sets the add error text and leaves list and form alone.
    pub fn add_employee(&mut self) {
        self.begin_request();
        let payload = self.state.form.to_new_employee();
        match self.api.create_employee(&payload) {
            Ok(WriteOutcome::Accepted) => {
                info!("event=employee_create module=screen status=ok");
                self.update(|state| state.form.clear());
                self.refresh_list();
            }
            Ok(WriteOutcome::Rejected(status)) => {
                warn!(
                    "event=employee_create module=screen status=rejected api_status={}",
                    status.as_deref().unwrap_or("<missing>")
                );
                self.fail(ADD_EMPLOYEE_ERROR);
            }
            Err(err) => {
                warn!("event=employee_create module=screen status=error error={err}");
                self.fail(ADD_EMPLOYEE_ERROR);
            }
        }
        self.end_request();
    }

    /// Deletes one employee, then re-fetches on the success marker.
    ///
    /// The row stays in the list until the re-fetch replaces it.
    pub fn delete_employee(&mut self, id: &EmployeeId) {
        self.begin_request();
        match self.api.delete_employee(id) {
            Ok(WriteOutcome::Accepted) => {
                info!("event=employee_delete module=screen status=ok id={id}");
                self.refresh_list();
            }
            Ok(WriteOutcome::Rejected(status)) => {
                warn!(
                    "event=employee_delete module=screen status=rejected id={} api_status={}",
                    id,
                    status.as_deref().unwrap_or("<missing>")
                );
                self.fail(DELETE_EMPLOYEE_ERROR);
            }
            Err(err) => {
                warn!("event=employee_delete module=screen status=error id={id} error={err}");
                self.fail(DELETE_EMPLOYEE_ERROR);
            }
        }
        self.end_request();
    }

    // Runs inside the caller's loading interval.
    fn refresh_list(&mut self) {
        match self.api.list_employees() {
            Ok(employees) => {
                info!(
                    "event=employees_fetch module=screen status=ok count={}",
                    employees.len()
                );
                self.update(|state| state.employees = employees);
            }
            Err(err) => {
                warn!("event=employees_fetch module=screen status=error error={err}");
                self.fail(FETCH_EMPLOYEES_ERROR);
            }
        }
    }

    fn begin_request(&mut self) {
        self.update(|state| state.is_loading = true);
    }

    fn end_request(&mut self) {
        self.update(|state| state.is_loading = false);
    }

    fn fail(&mut self, message: &str) {
        self.update(|state| state.error_message = message.to_string());
    }

    fn update(&mut self, mutate: impl FnOnce(&mut ScreenState)) {
        mutate(&mut self.state);
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.state);
        }
    }
}
