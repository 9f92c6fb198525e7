use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::patient::Patient;

/// A hospital and the patients currently admitted to it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    /// Server-assigned identifier; absent until first persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,

    /// Unique human-readable name, also used as a lookup key
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patients: Vec<Patient>,
}

impl Hospital {
    pub fn new(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            patients: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }
}

/// Wrapper object the hospital-name listing endpoint responds with
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HospitalNames {
    pub names: HashSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hospital_deserializes_without_patients() {
        let json = r#"{"id": 3, "name": "Napa"}"#;
        let hospital: Hospital = serde_json::from_str(json).unwrap();

        assert_eq!(hospital.id, Some(3));
        assert_eq!(hospital.name, "Napa");
        assert!(hospital.patients.is_empty());
    }

    #[test]
    fn unpersisted_hospital_serializes_without_id() {
        let hospital = Hospital::new("Atascadero");
        let json = serde_json::to_value(&hospital).unwrap();

        assert_eq!(json, serde_json::json!({"name": "Atascadero"}));
    }
}
