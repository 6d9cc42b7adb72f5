//! Sequential admin-number assignment.
//!
//! Admin numbers look like `ADM001`: the fixed prefix plus a numeric
//! suffix zero-padded to at least three digits. The next number is always
//! derived from the store's *current* identifiers, never from a held
//! counter, so out-of-band inserts and deletions are tolerated. Two
//! writers reading the same maximum can still race to the same number;
//! the in-process service mutex serializes that, the cross-process case
//! is an accepted limitation of the single-admin usage model.

/// Prefix shared by every admin number.
pub const ADMIN_PREFIX: &str = "ADM";

/// Parse the numeric suffix of an admin number.
///
/// Returns None unless the identifier is exactly the prefix followed by
/// one or more ASCII digits.
pub fn admin_suffix(id: &str) -> Option<u64> {
    let digits = id.strip_prefix(ADMIN_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Derive the next admin number from the identifiers currently in use.
///
/// The maximum existing suffix plus one, zero-padded to three digits.
/// Padding never truncates: the record after `ADM999` is `ADM1000`.
pub fn next_admin_no<'a, I>(existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let max = existing
        .into_iter()
        .filter_map(admin_suffix)
        .max()
        .unwrap_or(0);
    format!("{ADMIN_PREFIX}{:03}", max + 1)
}
