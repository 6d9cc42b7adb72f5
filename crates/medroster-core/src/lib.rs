//! Medroster Core Library
//!
//! Patient-records management: a SQLite-backed record service plus the
//! client-side pieces an admin UI sits on.
//!
//! # Architecture
//!
//! ```text
//!  UI / REST client
//!        │
//!        ▼
//!  RecordService ──── admin_no (next identifier from current store state)
//!        │
//!        ▼
//!    Database (SQLite: insert / find-all / find-by-id / update / delete)
//!
//!  Roster (client cache) ──── search (token predicate over the snapshot)
//! ```
//!
//! # Modules
//!
//! - [`db`]: SQLite store with single-record operations
//! - [`models`]: domain types (Patient, NewPatient, PatientUpdate)
//! - [`admin_no`]: sequential admin-number assignment
//! - [`search`]: smart search predicate over cached records
//! - [`service`]: CRUD service assigning identifiers and timestamps
//! - [`roster`]: client-side cache with replace-on-success mutations

pub mod admin_no;
pub mod db;
pub mod models;
pub mod roster;
pub mod search;
pub mod service;

// Re-export commonly used types
pub use admin_no::next_admin_no;
pub use db::Database;
pub use models::{NewPatient, Patient, PatientUpdate};
pub use roster::Roster;
pub use search::matches;
pub use service::{RecordService, ServiceError, ServiceResult};
