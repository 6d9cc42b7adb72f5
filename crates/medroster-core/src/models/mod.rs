//! Domain models for the medroster system.

mod patient;

pub use patient::*;
