//! Canonical identifier extraction.
//!
//! A netid is the local part of an institutional email address: 2-3 letters
//! followed by 1-5 digits. Addresses that do not fit the shape (aliases,
//! staff accounts, external guests) have no gradebook counterpart and are
//! rejected.

use std::sync::OnceLock;

use regex::Regex;

const NETID_PATTERN: &str = r"^([a-z]{2,3}[0-9]{1,5})@cornell\.edu$";

fn netid_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NETID_PATTERN).unwrap())
}

/// Extract the netid from a raw email address.
///
/// The address is trimmed and lowercased before matching, so extraction is
/// case-insensitive. Returns `None` when the address does not fit the
/// institutional pattern.
pub fn extract_netid(email: &str) -> Option<String> {
    let normalized = email.trim().to_lowercase();
    netid_re()
        .captures(&normalized)
        .map(|caps| caps[1].to_string())
}
