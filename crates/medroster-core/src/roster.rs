//! Client-side roster cache.
//!
//! Holds the authoritative client-visible list of records between
//! service calls. Mutations are applied only after the corresponding
//! service call succeeds (replace-on-success); on failure the caller
//! simply never calls `apply_*`, leaving the snapshot untouched. The
//! recovery path after a failed mutation is an explicit
//! [`Roster::replace_all`] from a fresh `list_all`.

use crate::models::Patient;
use crate::search;

/// In-memory mirror of the server-side patient list.
#[derive(Debug, Default)]
pub struct Roster {
    patients: Vec<Patient>,
}

impl Roster {
    /// Empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Roster seeded from an initial listing.
    pub fn from_listing(patients: Vec<Patient>) -> Self {
        Self { patients }
    }

    /// The current snapshot, in listing order.
    pub fn get_all(&self) -> &[Patient] {
        &self.patients
    }

    /// Replace the whole snapshot (full reload from the service).
    pub fn replace_all(&mut self, patients: Vec<Patient>) {
        self.patients = patients;
    }

    /// Append a record returned by a successful create.
    pub fn apply_created(&mut self, patient: Patient) {
        self.patients.push(patient);
    }

    /// Replace the entry with the same admin number. Unknown admin
    /// numbers are a no-op.
    pub fn apply_updated(&mut self, patient: Patient) {
        if let Some(slot) = self
            .patients
            .iter_mut()
            .find(|p| p.admin_no == patient.admin_no)
        {
            *slot = patient;
        }
    }

    /// Splice out the entry with the given admin number. Unknown admin
    /// numbers are a no-op.
    pub fn apply_deleted(&mut self, admin_no: &str) {
        self.patients.retain(|p| p.admin_no != admin_no);
    }

    /// Filter the snapshot through the search predicate engine.
    pub fn search(&self, query: &str) -> Vec<&Patient> {
        self.patients
            .iter()
            .filter(|p| search::matches(p, query))
            .collect()
    }
}
