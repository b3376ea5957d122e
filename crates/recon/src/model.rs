use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// One valid gradebook row. Field text is kept verbatim for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub student: String,
    pub id: String,
    pub sis_user_id: String,
    pub sis_login_id: String,
    pub section: String,
}

/// One poll-export row after identity normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngagementEntry {
    pub netid: String,
    pub total_answered: u32,
}

// ---------------------------------------------------------------------------
// Mappings
// ---------------------------------------------------------------------------

/// Join key for a raw login id: trimmed and ASCII-lowercased. Netids on the
/// engagement side are already lowercase.
pub fn join_key(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Insertion-ordered mapping from join key to roster entry. Output rows
/// follow this order.
///
/// Rows live in a `Vec` with a key index alongside. A duplicate key
/// overwrites the stored entry in place, keeping the first occurrence's
/// position.
#[derive(Debug, Default)]
pub struct Roster {
    entries: Vec<RosterEntry>,
    index: HashMap<String, usize>,
}

impl Roster {
    pub fn insert(&mut self, entry: RosterEntry) {
        let key = join_key(&entry.sis_login_id);
        match self.index.get(&key) {
            Some(&i) => self.entries[i] = entry,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&RosterEntry> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &RosterEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Mapping from netid to engagement entry. Last row wins on duplicates.
#[derive(Debug, Default)]
pub struct Engagement {
    by_netid: HashMap<String, EngagementEntry>,
}

impl Engagement {
    pub fn insert(&mut self, entry: EngagementEntry) {
        self.by_netid.insert(entry.netid.clone(), entry);
    }

    pub fn get(&self, netid: &str) -> Option<&EngagementEntry> {
        self.by_netid.get(netid)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.by_netid.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_netid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_netid.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Loader output
// ---------------------------------------------------------------------------

/// Roster plus the 1-based line numbers of rows skipped for an empty login id.
#[derive(Debug)]
pub struct RosterLoad {
    pub roster: Roster,
    pub skipped: Vec<u64>,
}

/// Engagement plus the line numbers of rows skipped for an empty email.
#[derive(Debug)]
pub struct EngagementLoad {
    pub engagement: Engagement,
    pub skipped: Vec<u64>,
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// One output row: a roster entry with its participation score.
#[derive(Debug, Clone)]
pub struct ScoredRow {
    pub entry: RosterEntry,
    pub score: u8,
}

/// Both-ways set difference over join keys, each side sorted ascending.
/// Advisory only; never alters output or exit status.
#[derive(Debug, Clone, Default)]
pub struct MismatchReport {
    /// In the gradebook but not in the poll export.
    pub missing_from_engagement: Vec<String>,
    /// In the poll export but not in the gradebook.
    pub missing_from_roster: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSummary {
    pub roster_rows: usize,
    pub engagement_rows: usize,
    pub participated: usize,
    pub absent: usize,
}

#[derive(Debug)]
pub struct MergeResult {
    pub rows: Vec<ScoredRow>,
    pub mismatches: MismatchReport,
    pub summary: MergeSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(login: &str, student: &str) -> RosterEntry {
        RosterEntry {
            student: student.to_string(),
            id: "1".to_string(),
            sis_user_id: "U1".to_string(),
            sis_login_id: login.to_string(),
            section: "LEC001".to_string(),
        }
    }

    #[test]
    fn roster_preserves_insertion_order() {
        let mut roster = Roster::default();
        roster.insert(entry("cd456", "second"));
        roster.insert(entry("ab123", "first"));

        let logins: Vec<&str> = roster.iter().map(|e| e.sis_login_id.as_str()).collect();
        assert_eq!(logins, ["cd456", "ab123"]);
    }

    #[test]
    fn roster_duplicate_keeps_first_position_last_value() {
        let mut roster = Roster::default();
        roster.insert(entry("ab123", "old"));
        roster.insert(entry("cd456", "other"));
        roster.insert(entry("ab123", "new"));

        assert_eq!(roster.len(), 2);
        let students: Vec<&str> = roster.iter().map(|e| e.student.as_str()).collect();
        assert_eq!(students, ["new", "other"]);
    }

    #[test]
    fn roster_lookup_is_case_insensitive() {
        let mut roster = Roster::default();
        roster.insert(entry(" AB123 ", "anyone"));

        assert!(roster.get("ab123").is_some());
        assert_eq!(roster.get("ab123").unwrap().sis_login_id, " AB123 ");
    }
}
