//! Record service: CRUD over the patient store.
//!
//! Assigns admin numbers and timestamps on create, refreshes timestamps
//! on update. The internal mutex serializes in-process calls, which also
//! serializes identifier assignment; see [`crate::admin_no`] for the
//! cross-process caveat.

use std::cmp::Ordering;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use thiserror::Error;

use crate::admin_no::{admin_suffix, next_admin_no};
use crate::db::{Database, DbError};
use crate::models::{NewPatient, Patient, PatientUpdate};

/// Service-level errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Patient not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Lock poisoned: {0}")]
    Lock(String),
}

impl<T> From<std::sync::PoisonError<T>> for ServiceError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        ServiceError::Lock(e.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Thread-safe patient record service.
#[derive(Clone)]
pub struct RecordService {
    db: Arc<Mutex<Database>>,
}

impl RecordService {
    /// Wrap an opened database.
    pub fn new(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    /// All records, ordered by admin-number suffix ascending.
    ///
    /// Identifiers without a parseable suffix sort last, lexicographically.
    pub fn list_all(&self) -> ServiceResult<Vec<Patient>> {
        let db = self.db.lock()?;
        let mut patients = db.list_patients()?;
        patients.sort_by(|a, b| {
            match (admin_suffix(&a.admin_no), admin_suffix(&b.admin_no)) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => a.admin_no.cmp(&b.admin_no),
            }
        });
        Ok(patients)
    }

    /// Create a record: assign the next admin number from current store
    /// state, stamp created/updated, persist, return the stored record.
    pub fn create(&self, input: NewPatient) -> ServiceResult<Patient> {
        if input.name.trim().is_empty() {
            return Err(ServiceError::InvalidInput("name must not be empty".into()));
        }

        let db = self.db.lock()?;
        let existing = db.admin_nos()?;
        let admin_no = next_admin_no(existing.iter().map(String::as_str));

        let patient = Patient::from_new(input, admin_no, Utc::now());
        db.insert_patient(&patient)?;
        Ok(patient)
    }

    /// Fetch one record by admin number.
    pub fn read(&self, admin_no: &str) -> ServiceResult<Patient> {
        let db = self.db.lock()?;
        db.get_patient(admin_no)?
            .ok_or_else(|| ServiceError::NotFound(admin_no.to_string()))
    }

    /// Merge supplied fields onto an existing record and persist it.
    ///
    /// `admin_no` and `created_at` never change; `updated_at` is refreshed.
    pub fn update(&self, admin_no: &str, update: PatientUpdate) -> ServiceResult<Patient> {
        let db = self.db.lock()?;
        let mut patient = db
            .get_patient(admin_no)?
            .ok_or_else(|| ServiceError::NotFound(admin_no.to_string()))?;

        patient.apply_update(update, Utc::now());
        if !db.update_patient(&patient)? {
            return Err(ServiceError::NotFound(admin_no.to_string()));
        }
        Ok(patient)
    }

    /// Remove a record.
    pub fn delete(&self, admin_no: &str) -> ServiceResult<()> {
        let db = self.db.lock()?;
        if !db.delete_patient(admin_no)? {
            return Err(ServiceError::NotFound(admin_no.to_string()));
        }
        Ok(())
    }
}
