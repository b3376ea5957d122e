//! Poll-export loader.

use crate::error::MergeError;
use crate::model::{Engagement, EngagementEntry, EngagementLoad};
use crate::netid::extract_netid;

const INPUT: &str = "poll export";

const COL_EMAIL: &str = "Email";
const COL_TOTAL_ANSWERED: &str = "Total answered";

/// Load the poll-export table, keyed by netid.
///
/// Rows with an empty `Email` are skipped and their line numbers collected.
/// An email that does not fit the netid pattern aborts the whole load; there
/// is no per-row best-effort mode. A duplicate netid overwrites the earlier
/// row.
pub fn load_engagement(csv_data: &str) -> Result<EngagementLoad, MergeError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_data.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| MergeError::Csv { input: INPUT, message: e.to_string() })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let idx = |name: &'static str| -> Result<usize, MergeError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(MergeError::MissingColumn { input: INPUT, column: name })
    };

    let email_idx = idx(COL_EMAIL)?;
    let count_idx = idx(COL_TOTAL_ANSWERED)?;

    let mut engagement = Engagement::default();
    let mut skipped = Vec::new();

    for record in reader.records() {
        let record =
            record.map_err(|e| MergeError::Csv { input: INPUT, message: e.to_string() })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let email = record.get(email_idx).unwrap_or("");
        if email.trim().is_empty() {
            skipped.push(line);
            continue;
        }

        let netid = extract_netid(email).ok_or_else(|| MergeError::IdentityFormat {
            line,
            email: email.trim().to_string(),
        })?;

        let raw_count = record.get(count_idx).unwrap_or("");
        let total_answered: u32 =
            raw_count.trim().parse().map_err(|_| MergeError::CountParse {
                line,
                value: raw_count.to_string(),
            })?;

        engagement.insert(EngagementEntry { netid, total_answered });
    }

    Ok(EngagementLoad { engagement, skipped })
}
