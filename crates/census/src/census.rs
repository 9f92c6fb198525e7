//! Census tallying over fetched hospital data

use std::collections::BTreeMap;
use std::fmt;

use admission_core::Hospital;

/// Patients-per-hospital counts for one census pass.
///
/// Counts are keyed by hospital name in lexicographic order, matching
/// the hospital display ordering, so repeated runs print identically.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CensusReport {
    patients_per_hospital: BTreeMap<String, usize>,
    total_patients: usize,
}

impl CensusReport {
    /// Count every admitted patient in the given hospitals
    pub fn tally(hospitals: &[Hospital]) -> Self {
        let mut report = Self::default();
        for hospital in hospitals {
            for _patient in &hospital.patients {
                report.count(&hospital.name);
            }
        }
        report
    }

    pub fn total_patients(&self) -> usize {
        self.total_patients
    }

    fn count(&mut self, hospital: &str) {
        *self
            .patients_per_hospital
            .entry(hospital.to_string())
            .or_insert(0) += 1;
        self.total_patients += 1;
    }
}

impl fmt::Display for CensusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hospital Patient Census")?;
        for (hospital, patients) in &self.patients_per_hospital {
            writeln!(f, " * {hospital:10}: {patients}")?;
        }
        write!(f, "Total: {}", self.total_patients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admission_core::Patient;

    fn hospital_with_patients(name: &str, patient_names: &[&str]) -> Hospital {
        let mut hospital = Hospital::new(name);
        hospital.patients = patient_names
            .iter()
            .map(|p| {
                let mut patient = Patient::new(p);
                patient.admitted_to = Some(name.to_string());
                patient
            })
            .collect();
        hospital
    }

    #[test]
    fn tally_counts_patients_per_hospital_and_in_total() {
        let hospitals = vec![
            hospital_with_patients("Napa", &["a", "b"]),
            hospital_with_patients("Atascadero", &["c"]),
            hospital_with_patients("Coalinga", &[]),
        ];
        let report = CensusReport::tally(&hospitals);

        assert_eq!(report.patients_per_hospital.get("Napa"), Some(&2));
        assert_eq!(report.patients_per_hospital.get("Atascadero"), Some(&1));
        assert_eq!(report.patients_per_hospital.get("Coalinga"), None);
        assert_eq!(report.total_patients(), 3);
    }

    #[test]
    fn report_lists_hospitals_in_display_order() {
        let hospitals = vec![
            hospital_with_patients("Napa", &["a"]),
            hospital_with_patients("Atascadero", &["b"]),
        ];
        let rendered = CensusReport::tally(&hospitals).to_string();

        let napa = rendered.find("Napa").unwrap();
        let atascadero = rendered.find("Atascadero").unwrap();
        assert!(atascadero < napa);
        assert!(rendered.ends_with("Total: 2"));
    }

    #[test]
    fn empty_fetch_yields_an_empty_report() {
        let report = CensusReport::tally(&[]);

        assert_eq!(report.total_patients(), 0);
    }
}
