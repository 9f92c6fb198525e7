//! Mapping from the staff-facing create-patient form to a domain patient

use crate::patient::Patient;

/// One row of the "allowed hospitals" checklist. Never sent to the
/// service directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HospitalAllowance {
    pub hospital_name: String,
    pub is_allowed: bool,
}

/// Staff-entered form for adding a patient to the waitlist
#[derive(Debug, Clone, Default)]
pub struct CreatePatientForm {
    pub patient_name: String,
    pub allowed_hospitals: Vec<HospitalAllowance>,
}

impl CreatePatientForm {
    /// Inverts the allow checklist into the patient's disallow set.
    ///
    /// Hospitals missing from the checklist stay allowed, and the
    /// resulting patient has neither an id nor a hospital assignment.
    pub fn to_patient(&self) -> Patient {
        let disallowed = self
            .allowed_hospitals
            .iter()
            .filter(|h| !h.is_allowed)
            .map(|h| h.hospital_name.clone())
            .collect();

        Patient::new(&self.patient_name).with_disallowed_hospitals(disallowed)
    }
}
