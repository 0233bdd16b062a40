//! Employee domain model and API wire envelopes.
//!
//! # Responsibility
//! - Define the employee record exactly as the remote roster API exposes it.
//! - Define request/response envelopes for list, create and delete calls.
//!
//! # Invariants
//! - `id` is opaque and externally assigned; core never fabricates one.
//! - `employee_salary` is kept as text, numeric wire values are stringified.
//! - The only recognized write success signal is [`SUCCESS_MARKER`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Literal status value the roster API returns for a completed write.
pub const SUCCESS_MARKER: &str = "success";

/// Opaque employee identifier assigned by the remote service.
///
/// The public API sends numbers, other deployments send strings. Both are
/// held as text so the id can be templated into paths unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for EmployeeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Serialize for EmployeeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EmployeeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        text_or_number(deserializer).map(Self)
    }
}

/// One employee row as returned by `GET /employees`.
///
/// Unknown fields (`employee_age`, `profile_image`) are ignored. A missing or
/// `null` name or salary decodes as empty text so one sparse row never
/// discards the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(default, deserialize_with = "nullable_text")]
    pub employee_name: String,
    /// Numeric-as-text; `1000` and `"1000"` both decode to `"1000"`.
    #[serde(default, deserialize_with = "nullable_text_or_number")]
    pub employee_salary: String,
}

impl Employee {
    pub fn new(
        id: impl Into<EmployeeId>,
        employee_name: impl Into<String>,
        employee_salary: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            employee_name: employee_name.into(),
            employee_salary: employee_salary.into(),
        }
    }
}

/// Body of `POST /create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub salary: String,
}

/// Response of `GET /employees`.
///
/// A payload without a `data` array is a decode failure, not an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmployeeListEnvelope {
    pub data: Vec<Employee>,
}

/// Response of `POST /create` and `DELETE /delete/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatusEnvelope {
    #[serde(default)]
    pub status: Option<String>,
}

impl StatusEnvelope {
    /// Returns whether the declared status equals [`SUCCESS_MARKER`] exactly.
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(SUCCESS_MARKER)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl From<TextOrNumber> for String {
    fn from(value: TextOrNumber) -> Self {
        match value {
            TextOrNumber::Text(value) => value,
            TextOrNumber::Number(value) => value.to_string(),
        }
    }
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    TextOrNumber::deserialize(deserializer).map(String::from)
}

fn nullable_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_text_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    Ok(Option::<TextOrNumber>::deserialize(deserializer)?
        .map(String::from)
        .unwrap_or_default())
}
