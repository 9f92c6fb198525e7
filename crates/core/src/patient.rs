use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// A patient as exchanged with the admissions service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Server-assigned exactly once, at creation; absent beforehand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    pub name: String,

    /// Hospitals this patient must never be admitted to
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    pub disallow_admission_to: HashSet<String>,

    /// The name of the hospital this patient is admitted to, or none if
    /// they are new or on the waitlist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admitted_to: Option<String>,
}

impl Patient {
    pub fn new(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            disallow_admission_to: HashSet::new(),
            admitted_to: None,
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_disallowed_hospitals(mut self, hospitals: HashSet<String>) -> Self {
        self.disallow_admission_to = hospitals;
        self
    }

    pub fn is_admitted(&self) -> bool {
        self.admitted_to.is_some()
    }
}

/// Lifecycle stage of a patient, independent of hospital assignment.
///
/// Only these two stages exist today; the enum is left open so later
/// stages can be added without reworking every caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum AdmissionStatus {
    New,
    OnWaitlist,
}

impl fmt::Display for AdmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "new patient"),
            Self::OnWaitlist => write!(f, "on waitlist"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_patient_serializes_to_the_create_request_shape() {
        let patient = Patient::new("John Doe")
            .with_disallowed_hospitals(HashSet::from(["Napa".to_string()]));
        let json = serde_json::to_value(&patient).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"name": "John Doe", "disallowAdmissionTo": ["Napa"]})
        );
    }

    #[test]
    fn patient_deserializes_from_camel_case_wire_fields() {
        let json = r#"{
            "id": "7c3a0573-b4a7-48cc-8f63-7a09bbaf0871",
            "name": "Jane Doe",
            "disallowAdmissionTo": ["Coalinga"],
            "admittedTo": "Atascadero"
        }"#;
        let patient: Patient = serde_json::from_str(json).unwrap();

        assert!(patient.id.is_some());
        assert!(patient.is_admitted());
        assert!(patient.disallow_admission_to.contains("Coalinga"));
    }

    #[test]
    fn waitlisted_patient_deserializes_without_an_assignment() {
        let json = r#"{"id": "7c3a0573-b4a7-48cc-8f63-7a09bbaf0871", "name": "Jane Doe"}"#;
        let patient: Patient = serde_json::from_str(json).unwrap();

        assert!(!patient.is_admitted());
        assert!(patient.disallow_admission_to.is_empty());
    }

    #[test]
    fn admission_status_displays_a_readable_tag() {
        assert_eq!(AdmissionStatus::New.to_string(), "new patient");
        assert_eq!(AdmissionStatus::OnWaitlist.to_string(), "on waitlist");
    }
}
