//! Key comparison and the scored join.
//!
//! Pure functions: roster and engagement in, scored rows and mismatch lists
//! out. No IO, no formatting.

use std::collections::HashSet;

use crate::model::{
    join_key, Engagement, EngagementEntry, MergeResult, MergeSummary, MismatchReport, Roster,
    ScoredRow,
};

/// Left outer join of the roster against the engagement mapping, plus the
/// advisory both-ways key report. One output row per roster entry, in roster
/// insertion order.
pub fn reconcile(roster: &Roster, engagement: &Engagement, minimum_answered: u32) -> MergeResult {
    let mismatches = compare_keys(roster, engagement);

    let mut rows = Vec::with_capacity(roster.len());
    let mut participated = 0usize;
    for entry in roster.iter() {
        let score = score(engagement.get(&join_key(&entry.sis_login_id)), minimum_answered);
        if score == 1 {
            participated += 1;
        }
        rows.push(ScoredRow { entry: entry.clone(), score });
    }

    let summary = MergeSummary {
        roster_rows: roster.len(),
        engagement_rows: engagement.len(),
        participated,
        absent: roster.len() - participated,
    };

    MergeResult { rows, mismatches, summary }
}

/// Score = 1 iff an engagement entry exists and met the threshold.
fn score(entry: Option<&EngagementEntry>, minimum_answered: u32) -> u8 {
    match entry {
        Some(e) if e.total_answered >= minimum_answered => 1,
        _ => 0,
    }
}

/// Set difference over join keys, both directions, each list sorted.
pub fn compare_keys(roster: &Roster, engagement: &Engagement) -> MismatchReport {
    let roster_keys: HashSet<&str> = roster.keys().collect();
    let engagement_keys: HashSet<&str> = engagement.keys().collect();

    let mut missing_from_engagement: Vec<String> = roster_keys
        .difference(&engagement_keys)
        .map(|k| k.to_string())
        .collect();
    missing_from_engagement.sort();

    let mut missing_from_roster: Vec<String> = engagement_keys
        .difference(&roster_keys)
        .map(|k| k.to_string())
        .collect();
    missing_from_roster.sort();

    MismatchReport { missing_from_engagement, missing_from_roster }
}
