use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A single student record.
///
/// Seed records carry many more fields upstream (`username`, `email`, ...);
/// only `id` and `name` are kept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
}

/// Partial student as sent by clients on create. Both fields are required
/// but modelled as optional so a missing field surfaces as a validation
/// error instead of a decode failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInput {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

impl StudentInput {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self { id: Some(id), name: Some(name.into()) }
    }

    /// Reject missing or falsy fields: an empty name or an id of `0`.
    pub fn validate(&self) -> Result<(), ModelError> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => {}
            _ => return Err(ModelError::Validation("name is required".into())),
        }
        match self.id {
            Some(id) if id != 0 => Ok(()),
            _ => Err(ModelError::Validation("id is required".into())),
        }
    }

    /// Validate and convert into a full record; the name is stored as sent.
    pub fn into_student(self) -> Result<Student, ModelError> {
        self.validate()?;
        match (self.id, self.name) {
            (Some(id), Some(name)) => Ok(Student { id, name }),
            _ => Err(ModelError::Validation("incomplete student".into())),
        }
    }
}
