//! Gradebook loader.

use crate::error::MergeError;
use crate::model::{Roster, RosterEntry, RosterLoad};

const INPUT: &str = "gradebook";

const COL_STUDENT: &str = "Student";
const COL_ID: &str = "ID";
const COL_SIS_USER_ID: &str = "SIS User ID";
const COL_SIS_LOGIN_ID: &str = "SIS Login ID";
const COL_SECTION: &str = "Section";

/// Load the gradebook table, keyed by login id.
///
/// Rows with an empty `SIS Login ID` are skipped and their line numbers
/// collected (gradebook exports carry points-possible and test-student rows
/// with no login). A duplicate login id overwrites the earlier row.
pub fn load_roster(csv_data: &str) -> Result<RosterLoad, MergeError> {
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

    let student_idx = idx(COL_STUDENT)?;
    let id_idx = idx(COL_ID)?;
    let sis_user_id_idx = idx(COL_SIS_USER_ID)?;
    let sis_login_id_idx = idx(COL_SIS_LOGIN_ID)?;
    let section_idx = idx(COL_SECTION)?;

    let mut roster = Roster::default();
    let mut skipped = Vec::new();

    for record in reader.records() {
        let record =
            record.map_err(|e| MergeError::Csv { input: INPUT, message: e.to_string() })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let login_id = record.get(sis_login_id_idx).unwrap_or("");
        if login_id.trim().is_empty() {
            skipped.push(line);
            continue;
        }

        roster.insert(RosterEntry {
            student: record.get(student_idx).unwrap_or("").to_string(),
            id: record.get(id_idx).unwrap_or("").to_string(),
            sis_user_id: record.get(sis_user_id_idx).unwrap_or("").to_string(),
            sis_login_id: login_id.to_string(),
            section: record.get(section_idx).unwrap_or("").to_string(),
        });
    }

    Ok(RosterLoad { roster, skipped })
}
