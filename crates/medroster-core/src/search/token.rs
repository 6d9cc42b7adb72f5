//! Token classification.
//!
//! Classifiers are tried in a fixed order; the first that recognizes the
//! token's shape wins. A token that looks date-like but fails calendar
//! parsing (e.g. `31/02/2024`) is not an error: it falls through to a
//! literal token, matching nothing unless some field happens to contain it.

use chrono::NaiveDate;

/// The interpretation assigned to one search token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// `18-65`: inclusive age bounds
    AgeRange { min: u32, max: u32 },
    /// `2023-2024`: inclusive creation-year bounds
    YearRange { start: i32, end: i32 },
    /// `01/06/2024-30/06/2024`: inclusive creation-date bounds
    DateRange { start: NaiveDate, end: NaiveDate },
    /// `10/03/2024`: exact creation date
    ExactDate(NaiveDate),
    /// Anything else: substring/shortcut matching
    Literal(String),
}

/// Ordered classifiers, most specific first.
const CLASSIFIERS: &[fn(&str) -> Option<TokenKind>] = &[
    parse_age_range,
    parse_year_range,
    parse_date_range,
    parse_exact_date,
];

/// Classify a trimmed, lower-cased token.
pub fn classify(token: &str) -> TokenKind {
    CLASSIFIERS
        .iter()
        .find_map(|parse| parse(token))
        .unwrap_or_else(|| TokenKind::Literal(token.to_string()))
}

/// Up-to-three-digit run, e.g. "65". Longer runs are years, not ages.
fn parse_short_number(part: &str) -> Option<u32> {
    let part = part.trim();
    if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Exactly-four-digit run, e.g. "2024".
fn parse_year(part: &str) -> Option<i32> {
    let part = part.trim();
    if part.len() != 4 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// `day/month/year` calendar date.
fn parse_date(part: &str) -> Option<NaiveDate> {
    let mut pieces = part.split('/');
    let day: u32 = pieces.next()?.trim().parse().ok()?;
    let month: u32 = pieces.next()?.trim().parse().ok()?;
    let year: i32 = pieces.next()?.trim().parse().ok()?;
    if pieces.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_age_range(token: &str) -> Option<TokenKind> {
    let (lo, hi) = token.split_once('-')?;
    let min = parse_short_number(lo)?;
    let max = parse_short_number(hi)?;
    Some(TokenKind::AgeRange { min, max })
}

fn parse_year_range(token: &str) -> Option<TokenKind> {
    let (lo, hi) = token.split_once('-')?;
    let start = parse_year(lo)?;
    let end = parse_year(hi)?;
    Some(TokenKind::YearRange { start, end })
}

fn parse_date_range(token: &str) -> Option<TokenKind> {
    if !token.contains('-') || !token.contains('/') {
        return None;
    }
    let (lo, hi) = token.split_once('-')?;
    let start = parse_date(lo.trim())?;
    let end = parse_date(hi.trim())?;
    Some(TokenKind::DateRange { start, end })
}

fn parse_exact_date(token: &str) -> Option<TokenKind> {
    parse_date(token).map(TokenKind::ExactDate)
}
