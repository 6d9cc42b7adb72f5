//! Smart search over the in-memory patient roster.
//!
//! A query is a comma-separated list of tokens; a record matches when
//! every token matches. Each token is classified once (age range, year
//! range, date range, exact date, or literal) and then evaluated against
//! the record. Literal tokens fan out across name, admin number, gender,
//! age, blood group, contact number and address, including the
//! single-letter gender and blood-group shortcuts.

mod predicate;
mod token;

pub use predicate::*;
pub use token::*;
