//! Patient record types
//!
//! `NewPatient` is what a client submits; `Patient` is what the store hands
//! back once an id has been assigned.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;

use super::ValidationError;

/// Required fields, in the order they are reported when missing.
const REQUIRED_FIELDS: [&str; 3] = ["name", "age", "diagnosis"];

/// Patient record as stored, including the storage-assigned id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Patient {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub diagnosis: String,
}

/// Patient record eligible for persistence (no id yet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub name: String,
    pub age: i32,
    pub diagnosis: String,
}

impl NewPatient {
    pub fn new(name: impl Into<String>, age: i32, diagnosis: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            diagnosis: diagnosis.into(),
        }
    }

    /// Parse a create-request body.
    ///
    /// Absent and `null` fields are both reported as missing, all at once.
    /// Beyond presence only the JSON type is checked: no range checks on
    /// `age`, empty strings are accepted. `age` may also arrive as a numeric
    /// string.
    ///
    /// # Example
    /// ```
    /// use patients_server::models::NewPatient;
    /// use serde_json::json;
    ///
    /// let body = json!({"name": "Jane Doe", "age": 34, "diagnosis": "Hypertension"});
    /// let patient = NewPatient::from_json(&body).unwrap();
    /// assert_eq!(patient.age, 34);
    ///
    /// assert!(NewPatient::from_json(&json!({"name": "X"})).is_err());
    /// ```
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let obj = body.as_object().ok_or(ValidationError::NotAnObject)?;

        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .into_iter()
            .filter(|field| obj.get(*field).map_or(true, Value::is_null))
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields { fields: missing });
        }

        Ok(Self {
            name: string_field(obj, "name")?,
            age: int_field(obj, "age")?,
            diagnosis: string_field(obj, "diagnosis")?,
        })
    }

    /// Attach the id assigned by the store.
    pub fn with_id(self, id: i32) -> Patient {
        Patient {
            id,
            name: self.name,
            age: self.age,
            diagnosis: self.diagnosis,
        }
    }
}

fn string_field(obj: &Map<String, Value>, field: &'static str) -> Result<String, ValidationError> {
    obj.get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(ValidationError::InvalidType {
            field,
            expected: "a string",
        })
}

/// Integers, or strings holding one (`"34"`), the way PostgreSQL casts text
/// into an INTEGER column.
fn int_field(obj: &Map<String, Value>, field: &'static str) -> Result<i32, ValidationError> {
    let parsed = match obj.get(field) {
        Some(Value::Number(n)) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse::<i32>().ok(),
        _ => None,
    };

    parsed.ok_or(ValidationError::InvalidType {
        field,
        expected: "a 32-bit integer",
    })
}
