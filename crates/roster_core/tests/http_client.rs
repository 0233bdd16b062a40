use httpmock::Method::{DELETE, GET, POST};
use httpmock::MockServer;
use roster_core::{
    ApiConfig, ApiError, Employee, EmployeeApi, EmployeeId, EmployeeScreen, HttpEmployeeApi,
    NewEmployee, WriteOutcome, DELETE_EMPLOYEE_ERROR,
};
use serde_json::json;
use std::time::Duration;

fn client_for(server: &MockServer) -> HttpEmployeeApi {
    let config = ApiConfig::new(&server.url("/api/v1/")).unwrap();
    HttpEmployeeApi::new(&config).unwrap()
}

#[test]
fn list_reads_nested_data_array_in_order() {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path("/api/v1/employees");
        then.status(200).json_body(json!({
            "status": "success",
            "data": [
                {"id": 1, "employee_name": "Ann", "employee_salary": "1000", "employee_age": 30},
                {"id": "b-2", "employee_name": "Bo", "employee_salary": 2000}
            ]
        }));
    });

    let employees = client_for(&server).list_employees().unwrap();

    list.assert();
    assert_eq!(
        employees,
        vec![
            Employee::new("1", "Ann", "1000"),
            Employee::new("b-2", "Bo", "2000"),
        ]
    );
}

#[test]
fn list_keeps_rows_with_null_name_or_salary() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/employees");
        then.status(200).json_body(json!({
            "data": [
                {"id": 1, "employee_name": "Ann", "employee_salary": "1000"},
                {"id": 2, "employee_name": null, "employee_salary": "2000"},
                {"id": 3, "employee_name": "Cy", "employee_salary": null}
            ]
        }));
    });

    let mut screen = EmployeeScreen::new(client_for(&server));
    screen.mount();

    let view = screen.view();
    assert_eq!(view.error_banner(), None);
    assert_eq!(view.rows().len(), 3);
    assert_eq!(view.rows()[1].name, "");
    assert_eq!(view.rows()[1].salary_line, "Salary: 2000");
    assert_eq!(view.rows()[2].salary_line, "Salary: ");
}

#[test]
fn list_decodes_body_regardless_of_http_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/employees");
        then.status(503)
            .json_body(json!({"data": [{"id": 4, "employee_name": "Di", "employee_salary": "4"}]}));
    });

    let employees = client_for(&server).list_employees().unwrap();
    assert_eq!(employees.len(), 1);
}

#[test]
fn list_without_data_array_is_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/employees");
        then.status(429).body("Too Many Requests");
    });

    let error = client_for(&server).list_employees().unwrap_err();
    assert!(matches!(error, ApiError::Decode(_)), "{error}");
}

#[test]
fn create_posts_json_body_and_reads_status() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/create")
            .header("content-type", "application/json")
            .json_body(json!({"name": "Bo", "salary": "2000"}));
        then.status(200)
            .json_body(json!({"status": "success", "data": {"id": 25}}));
    });

    let outcome = client_for(&server)
        .create_employee(&NewEmployee {
            name: "Bo".to_string(),
            salary: "2000".to_string(),
        })
        .unwrap();

    create.assert();
    assert_eq!(outcome, WriteOutcome::Accepted);
}

#[test]
fn delete_templates_id_into_path_and_reports_rejection() {
    let server = MockServer::start();
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/delete/1");
        then.status(200)
            .json_body(json!({"status": "fail", "message": "not found"}));
    });

    let outcome = client_for(&server)
        .delete_employee(&EmployeeId::new("1"))
        .unwrap();

    delete.assert();
    assert_eq!(outcome, WriteOutcome::Rejected(Some("fail".to_string())));
}

#[test]
fn unreachable_server_is_transport_error() {
    let config = ApiConfig::new("http://127.0.0.1:9/api/v1").unwrap();
    let api = HttpEmployeeApi::new(&config).unwrap();

    let error = api.list_employees().unwrap_err();
    assert!(matches!(error, ApiError::Transport(_)), "{error}");
}

#[test]
fn delete_percent_encodes_reserved_characters_in_id() {
    let server = MockServer::start();
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/delete/a%2Fb");
        then.status(200).json_body(json!({"status": "success"}));
    });

    let outcome = client_for(&server)
        .delete_employee(&EmployeeId::new("a/b"))
        .unwrap();

    delete.assert();
    assert_eq!(outcome, WriteOutcome::Accepted);
}

#[test]
fn configured_timeout_turns_slow_response_into_transport_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/employees");
        then.status(200)
            .delay(Duration::from_millis(500))
            .json_body(json!({"data": []}));
    });
    let config = ApiConfig::new(&server.url("/api/v1"))
        .unwrap()
        .with_timeout(Duration::from_millis(50));
    let api = HttpEmployeeApi::new(&config).unwrap();

    let error = api.list_employees().unwrap_err();
    assert!(matches!(error, ApiError::Transport(_)), "{error}");
}

#[test]
fn screen_over_http_keeps_row_after_failed_delete() {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path("/api/v1/employees");
        then.status(200).json_body(json!({
            "data": [{"id": 1, "employee_name": "Ann", "employee_salary": "1000"}]
        }));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/delete/1");
        then.status(200).json_body(json!({"status": "fail"}));
    });

    let mut screen = EmployeeScreen::new(client_for(&server));
    screen.mount();
    screen.delete_employee(&EmployeeId::new("1"));

    list.assert_hits(1);
    let view = screen.view();
    assert_eq!(view.error_banner(), Some(DELETE_EMPLOYEE_ERROR));
    assert_eq!(view.rows().len(), 1);
    assert_eq!(view.rows()[0].name, "Ann");
}
