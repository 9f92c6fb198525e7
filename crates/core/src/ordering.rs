//! Display ordering for hospitals and patients.
//!
//! The service does not guarantee response order, and identifiers are
//! opaque UUIDs, so views sort with these comparators (via a stable
//! sort such as `slice::sort_by`) to stay deterministic across fetches.

use std::cmp::Ordering;

use crate::hospital::Hospital;
use crate::patient::Patient;

/// Lexicographic hospital order for the hospital listing view
pub fn by_hospital_name(a: &Hospital, b: &Hospital) -> Ordering {
    a.name.cmp(&b.name)
}

/// Patients without an id sort before all patients with one; ids compare
/// by their string form. Id-less pairs are equal, so a stable sort keeps
/// their fetched order.
pub fn by_patient_id(a: &Patient, b: &Patient) -> Ordering {
    match (&a.id, &b.id) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.to_string().cmp(&b.to_string()),
    }
}

/// Name order for the waitlist view
pub fn by_patient_name(a: &Patient, b: &Patient) -> Ordering {
    a.name.cmp(&b.name)
}
