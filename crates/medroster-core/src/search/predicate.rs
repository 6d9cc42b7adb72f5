//! Query evaluation against a single patient record.

use chrono::Datelike;

use super::token::{classify, TokenKind};
use crate::models::Patient;

/// Does `patient` satisfy every comma-separated token of `query`?
///
/// An empty or whitespace-only query matches every record. Comparisons
/// are case-insensitive; the record itself is never modified.
pub fn matches(patient: &Patient, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }

    query
        .split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .all(|token| token_matches(patient, &token))
}

fn token_matches(patient: &Patient, token: &str) -> bool {
    match classify(token) {
        TokenKind::AgeRange { min, max } => min <= patient.age && patient.age <= max,
        TokenKind::YearRange { start, end } => {
            let year = patient.created_at.year();
            start <= year && year <= end
        }
        TokenKind::DateRange { start, end } => {
            let date = patient.created_at.date_naive();
            start <= date && date <= end
        }
        TokenKind::ExactDate(date) => patient.created_at.date_naive() == date,
        TokenKind::Literal(token) => literal_matches(patient, &token),
    }
}

/// Fallback matching: OR across every comparable field and shortcut.
///
/// Shortcut tokens (`m`/`f`/`o`/`a`/`b`/`ab`) are category matches, never
/// free-text substrings: "m" means gender Male, not "anything containing
/// an m" (every admin number contains one). A token can qualify as both a
/// gender shortcut and a blood-group shortcut ("o" in particular); either
/// interpretation matching is enough.
fn literal_matches(patient: &Patient, token: &str) -> bool {
    let gender = patient.gender.to_lowercase();
    let blood_group = patient.blood_group.to_lowercase();

    let as_gender = gender_shortcut(token);
    let as_blood = blood_group_shortcut(token);
    if as_gender.is_some() || as_blood.is_some() {
        return as_gender.is_some_and(|g| gender == g)
            || as_blood.is_some_and(|groups| groups.contains(&blood_group.as_str()));
    }

    patient.name.to_lowercase().contains(token)
        || patient.admin_no.to_lowercase().contains(token)
        || gender == token
        || patient.age.to_string() == token
        || blood_group == token
        || patient.contact_no.contains(token)
        || patient.address.to_lowercase().contains(token)
}

fn gender_shortcut(token: &str) -> Option<&'static str> {
    match token {
        "m" => Some("male"),
        "f" => Some("female"),
        "o" => Some("other"),
        _ => None,
    }
}

fn blood_group_shortcut(token: &str) -> Option<[&'static str; 2]> {
    match token {
        "o" => Some(["o+", "o-"]),
        "a" => Some(["a+", "a-"]),
        "b" => Some(["b+", "b-"]),
        "ab" => Some(["ab+", "ab-"]),
        _ => None,
    }
}
