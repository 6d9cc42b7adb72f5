//! Patient database operations.
//!
//! The store is reached only through single-record operations: insert,
//! find-all, find-by-id, update-by-id, delete-by-id.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::Patient;

const PATIENT_COLUMNS: &str = "admin_no, name, age, gender, blood_group, contact_no, address, \
     height, weight, sugar_level, blood_pressure, health_issue, health_description, \
     created_at, updated_at";

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        admin_no: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        gender: row.get(3)?,
        blood_group: row.get(4)?,
        contact_no: row.get(5)?,
        address: row.get(6)?,
        height: row.get(7)?,
        weight: row.get(8)?,
        sugar_level: row.get(9)?,
        blood_pressure: row.get(10)?,
        health_issue: row.get(11)?,
        health_description: row.get(12)?,
        created_at: row.get(13)?,
        updated_at: row.get(14)?,
    })
}

impl Database {
    /// Insert a new patient.
    pub fn insert_patient(&self, patient: &Patient) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO patients (
                admin_no, name, age, gender, blood_group, contact_no, address,
                height, weight, sugar_level, blood_pressure, health_issue,
                health_description, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
            "#,
            params![
                patient.admin_no,
                patient.name,
                patient.age,
                patient.gender,
                patient.blood_group,
                patient.contact_no,
                patient.address,
                patient.height,
                patient.weight,
                patient.sugar_level,
                patient.blood_pressure,
                patient.health_issue,
                patient.health_description,
                patient.created_at,
                patient.updated_at,
            ],
        )?;
        Ok(())
    }

    /// Overwrite an existing patient row. `admin_no` and `created_at` are
    /// keyed/immutable; the caller merges fields before calling this.
    pub fn update_patient(&self, patient: &Patient) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            r#"
            UPDATE patients SET
                name = ?2,
                age = ?3,
                gender = ?4,
                blood_group = ?5,
                contact_no = ?6,
                address = ?7,
                height = ?8,
                weight = ?9,
                sugar_level = ?10,
                blood_pressure = ?11,
                health_issue = ?12,
                health_description = ?13,
                updated_at = ?14
            WHERE admin_no = ?1
            "#,
            params![
                patient.admin_no,
                patient.name,
                patient.age,
                patient.gender,
                patient.blood_group,
                patient.contact_no,
                patient.address,
                patient.height,
                patient.weight,
                patient.sugar_level,
                patient.blood_pressure,
                patient.health_issue,
                patient.health_description,
                patient.updated_at,
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Get a patient by admin number.
    pub fn get_patient(&self, admin_no: &str) -> DbResult<Option<Patient>> {
        self.conn
            .query_row(
                &format!("SELECT {PATIENT_COLUMNS} FROM patients WHERE admin_no = ?"),
                [admin_no],
                patient_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all patients. Ordering is left to the service layer, which
    /// sorts by numeric admin-number suffix.
    pub fn list_patients(&self) -> DbResult<Vec<Patient>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {PATIENT_COLUMNS} FROM patients"))?;

        let rows = stmt.query_map([], patient_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// All admin numbers currently in the store, for identifier assignment.
    pub fn admin_nos(&self) -> DbResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT admin_no FROM patients")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Delete a patient.
    pub fn delete_patient(&self, admin_no: &str) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM patients WHERE admin_no = ?", [admin_no])?;
        Ok(rows_affected > 0)
    }
}
