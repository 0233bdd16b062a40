//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the roster screen to Dart via FRB as flat, owned view models.
//! - Own the single process-wide screen instance.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Screen-level failures surface in `RosterViewModel::error_message`;
//!   `RosterResponse::ok == false` only reports FFI-level problems.
//! - The API base URL is resolved once per process.
//! - Network-bound calls run on the FRB worker pool; `roster_view` is sync and
//!   reads the latest published snapshot without waiting on a request.

use roster_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    render, ApiConfig, EmployeeId, EmployeeRow, EmployeeScreen, HttpEmployeeApi, ScreenState,
    ScreenView,
};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

type RosterScreen = EmployeeScreen<HttpEmployeeApi>;

static ROSTER: OnceLock<RosterHandle> = OnceLock::new();

// `screen` is held for a whole routine; `latest` only for a copy.
struct RosterHandle {
    screen: Mutex<RosterScreen>,
    latest: Arc<Mutex<RosterViewModel>>,
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One employee row ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    /// Opaque id to pass back to `roster_delete`.
    pub id: String,
    pub name: String,
    /// Formatted as `Salary: {value}`.
    pub salary_line: String,
}

/// Flat snapshot of the roster screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterViewModel {
    /// When true the shell shows only the loading indicator.
    pub is_loading: bool,
    /// Empty when no failure has been recorded.
    pub error_message: String,
    pub name_input: String,
    pub salary_input: String,
    /// Rows in server order; empty while loading.
    pub rows: Vec<RosterRow>,
}

/// Response envelope for every roster call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterResponse {
    pub ok: bool,
    /// Diagnostics for FFI-level failures; empty on success.
    pub message: String,
    pub view: Option<RosterViewModel>,
}

impl RosterResponse {
    fn success(view: RosterViewModel) -> Self {
        Self {
            ok: true,
            message: String::new(),
            view: Some(view),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            view: None,
        }
    }
}

/// Opens the roster screen and runs its initial load.
///
/// Input semantics:
/// - `base_url`: optional API base URL; blank or `None` falls back to
///   `ROSTER_API_BASE_URL`, then the built-in default.
///
/// # FFI contract
/// - Async call (FRB worker pool), network-bound on first open.
/// - The screen is published before the initial load, so `roster_view`
///   reports `is_loading == true` while that load runs.
/// - Later calls reuse the open screen and ignore `base_url`.
/// - Never panics.
pub fn roster_open(base_url: Option<String>) -> RosterResponse {
    if ROSTER.get().is_none() {
        let handle = match build_handle(base_url.as_deref()) {
            Ok(handle) => handle,
            Err(err) => return RosterResponse::failure(format!("roster_open failed: {err}")),
        };
        // A racing open may win; its screen is used instead.
        let _ = ROSTER.set(handle);
    }

    with_screen("roster_open", |screen| screen.mount())
}

/// Returns the latest published view without touching the network.
///
/// # FFI contract
/// - Sync call, non-blocking; never waits for an in-flight request.
/// - Mid-request snapshots carry `is_loading == true`.
#[flutter_rust_bridge::frb(sync)]
pub fn roster_view() -> RosterResponse {
    match ROSTER.get() {
        Some(handle) => RosterResponse::success(lock_or_recover(&handle.latest).clone()),
        None => not_open("roster_view"),
    }
}

/// Re-fetches the employee list.
///
/// # FFI contract
/// - Async call, network-bound.
pub fn roster_refresh() -> RosterResponse {
    with_screen("roster_refresh", |screen| screen.fetch_all())
}

/// Overwrites the name input.
///
/// Async so a keystroke during a request queues instead of blocking the UI.
pub fn roster_set_name(text: String) -> RosterResponse {
    with_screen("roster_set_name", |screen| screen.set_name(text))
}

/// Overwrites the salary input.
pub fn roster_set_salary(text: String) -> RosterResponse {
    with_screen("roster_set_salary", |screen| screen.set_salary(text))
}

/// Submits the current inputs as a new employee.
///
/// # FFI contract
/// - Async call, network-bound.
/// - Inputs are sent as-is, including empty strings.
pub fn roster_add() -> RosterResponse {
    with_screen("roster_add", |screen| screen.add_employee())
}

/// Deletes one employee by the id shown in its row.
///
/// # FFI contract
/// - Async call, network-bound.
/// - The row stays visible until the follow-up fetch replaces the list.
pub fn roster_delete(id: String) -> RosterResponse {
    let id = EmployeeId::new(id);
    with_screen("roster_delete", |screen| screen.delete_employee(&id))
}

fn build_handle(base_url: Option<&str>) -> Result<RosterHandle, String> {
    let config = ApiConfig::resolve(base_url).map_err(|err| err.to_string())?;
    let api = HttpEmployeeApi::new(&config).map_err(|err| err.to_string())?;
    log::info!(
        "event=roster_open module=ffi status=ok base_url={}",
        config.base_url
    );

    let mut screen = EmployeeScreen::new(api);
    let latest = Arc::new(Mutex::new(to_view_model(screen.state(), &screen.view())));
    let published = Arc::clone(&latest);
    screen.set_listener(Box::new(move |state: &ScreenState| {
        *lock_or_recover(&published) = to_view_model(state, &render(state));
    }));

    Ok(RosterHandle {
        screen: Mutex::new(screen),
        latest,
    })
}

fn with_screen(call: &str, f: impl FnOnce(&mut RosterScreen)) -> RosterResponse {
    let Some(handle) = ROSTER.get() else {
        return not_open(call);
    };
    let mut screen = lock_or_recover(&handle.screen);
    f(&mut screen);
    RosterResponse::success(to_view_model(screen.state(), &screen.view()))
}

fn not_open(call: &str) -> RosterResponse {
    RosterResponse::failure(format!("{call} failed: roster screen is not open"))
}

// A panic while holding a lock leaves plain data behind; keep serving it.
fn lock_or_recover<T>(cell: &Mutex<T>) -> MutexGuard<'_, T> {
    cell.lock().unwrap_or_else(|poisoned| {
        log::warn!("event=roster_lock module=ffi status=recovered");
        poisoned.into_inner()
    })
}

fn to_view_model(state: &ScreenState, view: &ScreenView) -> RosterViewModel {
    RosterViewModel {
        is_loading: state.is_loading,
        error_message: state.error_message.clone(),
        name_input: state.form.name.clone(),
        salary_input: state.form.salary.clone(),
        rows: view.rows().iter().map(to_roster_row).collect(),
    }
}

fn to_roster_row(row: &EmployeeRow) -> RosterRow {
    RosterRow {
        id: row.id.to_string(),
        name: row.name.clone(),
        salary_line: row.salary_line.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::{core_version, init_logging, ping, roster_add, roster_view, to_view_model};
    use roster_core::{render, Employee, ScreenState};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn calls_before_open_report_not_open() {
        let view = roster_view();
        assert!(!view.ok);
        assert!(view.message.contains("not open"));
        assert_eq!(view.view, None);

        let add = roster_add();
        assert!(!add.ok);
        assert!(add.message.starts_with("roster_add failed"));
    }

    #[test]
    fn view_model_copies_form_error_and_rows() {
        let mut state = ScreenState {
            employees: vec![Employee::new("1", "Ann", "1000")],
            error_message: "Error adding employee.".to_string(),
            ..ScreenState::default()
        };
        state.form.name = "Bo".to_string();

        let model = to_view_model(&state, &render(&state));
        assert!(!model.is_loading);
        assert_eq!(model.error_message, "Error adding employee.");
        assert_eq!(model.name_input, "Bo");
        assert_eq!(model.rows.len(), 1);
        assert_eq!(model.rows[0].id, "1");
        assert_eq!(model.rows[0].salary_line, "Salary: 1000");
    }
}
