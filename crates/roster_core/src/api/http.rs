//! Blocking `reqwest` implementation of [`EmployeeApi`].

use super::{ApiError, ApiResult, EmployeeApi, WriteOutcome};
use crate::config::ApiConfig;
use crate::model::employee::{
    Employee, EmployeeId, EmployeeListEnvelope, NewEmployee, StatusEnvelope,
};
use log::debug;
use reqwest::blocking::{Client, Response};
use reqwest::Url;
use serde::de::DeserializeOwned;

/// HTTP client bound to one roster API base URL.
#[derive(Debug, Clone)]
pub struct HttpEmployeeApi {
    client: Client,
    base_url: Url,
}

impl HttpEmployeeApi {
    /// Builds a client from resolved configuration.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    // Each segment is percent-encoded, so an id never adds path levels.
    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidEndpoint(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl EmployeeApi for HttpEmployeeApi {
    fn list_employees(&self) -> ApiResult<Vec<Employee>> {
        let url = self.endpoint(&["employees"])?;
        let response = self.client.get(url).send()?;
        let envelope: EmployeeListEnvelope = decode_body("employees_list", response)?;
        Ok(envelope.data)
    }

    fn create_employee(&self, employee: &NewEmployee) -> ApiResult<WriteOutcome> {
        let url = self.endpoint(&["create"])?;
        let response = self.client.post(url).json(employee).send()?;
        let envelope: StatusEnvelope = decode_body("employee_create", response)?;
        Ok(envelope.into())
    }

    fn delete_employee(&self, id: &EmployeeId) -> ApiResult<WriteOutcome> {
        let url = self.endpoint(&["delete", id.as_str()])?;
        let response = self.client.delete(url).send()?;
        let envelope: StatusEnvelope = decode_body("employee_delete", response)?;
        Ok(envelope.into())
    }
}

// HTTP status is logged but never gates decoding.
fn decode_body<T: DeserializeOwned>(call: &str, response: Response) -> ApiResult<T> {
    let status = response.status().as_u16();
    let body = response.text()?;
    debug!(
        "event=api_response module=api call={} http_status={} bytes={}",
        call,
        status,
        body.len()
    );
    Ok(serde_json::from_str(&body)?)
}
