//! Patient models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored patient record.
///
/// `admin_no`, `created_at` and `updated_at` are assigned by the record
/// service and never supplied by callers. Wire format is camelCase JSON;
/// optional metrics are omitted entirely when not recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Admin number, e.g. "ADM001". Unique, immutable.
    pub admin_no: String,
    /// Patient name
    pub name: String,
    /// Age in years (expected 1-120, not enforced)
    pub age: u32,
    /// "Male" | "Female" | "Other" (stored as free string)
    pub gender: String,
    /// Blood group, e.g. "A+", "AB-" (stored as free string)
    pub blood_group: String,
    /// Contact number (expected 10 digits, not enforced)
    pub contact_no: String,
    /// Free-text address
    pub address: String,
    /// Height in cm; None means not recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Weight in kg; None means not recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Blood sugar in mg/dL; None means not recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugar_level: Option<f64>,
    /// Blood pressure, e.g. "120/80"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<String>,
    /// "general" | "diabetes" | "other"
    pub health_issue: String,
    /// Free-text description, used when health_issue is "other"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_description: Option<String>,
    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, refreshed on every update
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a patient: everything except the generated fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub blood_group: String,
    pub contact_no: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar_level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<String>,
    pub health_issue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_description: Option<String>,
}

/// Partial update for a patient.
///
/// Fields left as None keep their stored values. There are no `admin_no`
/// or `created_at` fields here, so those keys in an update body are
/// silently ignored rather than mutated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub blood_group: Option<String>,
    pub contact_no: Option<String>,
    pub address: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub sugar_level: Option<f64>,
    pub blood_pressure: Option<String>,
    pub health_issue: Option<String>,
    pub health_description: Option<String>,
}

impl Patient {
    /// Build a stored record from create input plus the generated fields.
    pub fn from_new(input: NewPatient, admin_no: String, now: DateTime<Utc>) -> Self {
        Self {
            admin_no,
            name: input.name,
            age: input.age,
            gender: input.gender,
            blood_group: input.blood_group,
            contact_no: input.contact_no,
            address: input.address,
            height: input.height,
            weight: input.weight,
            sugar_level: input.sugar_level,
            blood_pressure: input.blood_pressure,
            health_issue: input.health_issue,
            health_description: input.health_description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge an update onto this record, refreshing `updated_at`.
    ///
    /// `admin_no` and `created_at` are untouchable.
    pub fn apply_update(&mut self, update: PatientUpdate, now: DateTime<Utc>) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(gender) = update.gender {
            self.gender = gender;
        }
        if let Some(blood_group) = update.blood_group {
            self.blood_group = blood_group;
        }
        if let Some(contact_no) = update.contact_no {
            self.contact_no = contact_no;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(height) = update.height {
            self.height = Some(height);
        }
        if let Some(weight) = update.weight {
            self.weight = Some(weight);
        }
        if let Some(sugar_level) = update.sugar_level {
            self.sugar_level = Some(sugar_level);
        }
        if let Some(blood_pressure) = update.blood_pressure {
            self.blood_pressure = Some(blood_pressure);
        }
        if let Some(health_issue) = update.health_issue {
            self.health_issue = health_issue;
        }
        if let Some(health_description) = update.health_description {
            self.health_description = Some(health_description);
        }
        self.updated_at = now;
    }
}
