//! SQLite schema definition.

/// Complete database schema for medroster.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Patients
-- ============================================================================

CREATE TABLE IF NOT EXISTS patients (
    admin_no TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    gender TEXT NOT NULL,
    blood_group TEXT NOT NULL,
    contact_no TEXT NOT NULL,
    address TEXT NOT NULL,
    height REAL,
    weight REAL,
    sugar_level REAL,
    blood_pressure TEXT,
    health_issue TEXT NOT NULL,
    health_description TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_patients_name ON patients(name);
"#;
