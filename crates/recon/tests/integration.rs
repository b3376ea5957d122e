// Engine integration: load both exports from CSV text, reconcile, check
// rows, scores, and the mismatch report.

use pollgrade_recon::{load_engagement, load_roster, reconcile, MergeError};

const GRADEBOOK_CSV: &str = "\
Student,ID,SIS User ID,SIS Login ID,Section
\"Alvarez, Maria\",1001,U100,ab123,LEC001
\"Okafor, Chinedu\",1002,U200,cd456,LEC001
\"Petrov, Ivan\",1003,U300,efg78,LEC002
";

const POLL_CSV: &str = "\
Email,Total answered
ab123@cornell.edu,3
EFG78@cornell.edu,1
";

#[test]
fn three_row_roster_two_row_poll() {
    let roster = load_roster(GRADEBOOK_CSV).unwrap().roster;
    let engagement = load_engagement(POLL_CSV).unwrap().engagement;

    let result = reconcile(&roster, &engagement, 1);

    // left outer join: one row per roster entry, roster order
    assert_eq!(result.rows.len(), 3);
    let scored: Vec<(&str, u8)> = result
        .rows
        .iter()
        .map(|r| (r.entry.sis_login_id.as_str(), r.score))
        .collect();
    assert_eq!(scored, [("ab123", 1), ("cd456", 0), ("efg78", 1)]);

    assert_eq!(result.mismatches.missing_from_engagement, ["cd456"]);
    assert!(result.mismatches.missing_from_roster.is_empty());

    assert_eq!(result.summary.roster_rows, 3);
    assert_eq!(result.summary.engagement_rows, 2);
    assert_eq!(result.summary.participated, 2);
    assert_eq!(result.summary.absent, 1);
}

#[test]
fn threshold_applies_across_the_join() {
    let roster = load_roster(GRADEBOOK_CSV).unwrap().roster;
    let engagement = load_engagement(POLL_CSV).unwrap().engagement;

    let result = reconcile(&roster, &engagement, 2);
    let scores: Vec<u8> = result.rows.iter().map(|r| r.score).collect();
    // efg78 answered once, below the threshold of 2
    assert_eq!(scores, [1, 0, 0]);
}

#[test]
fn join_is_case_insensitive_both_sides() {
    let gradebook = "\
Student,ID,SIS User ID,SIS Login ID,Section
\"Alvarez, Maria\",1001,U100,AB123,LEC001
";
    let poll = "\
Email,Total answered
Ab123@Cornell.edu,2
";
    let roster = load_roster(gradebook).unwrap().roster;
    let engagement = load_engagement(poll).unwrap().engagement;

    let result = reconcile(&roster, &engagement, 1);
    assert_eq!(result.rows[0].score, 1);
    // login id text is emitted verbatim even though the join key is folded
    assert_eq!(result.rows[0].entry.sis_login_id, "AB123");
    assert!(result.mismatches.missing_from_engagement.is_empty());
    assert!(result.mismatches.missing_from_roster.is_empty());
}

#[test]
fn identity_error_aborts_before_any_result() {
    let poll = "\
Email,Total answered
ab123@cornell.edu,3
prof.smith@cornell.edu,9
";
    let err = load_engagement(poll).unwrap_err();
    match err {
        MergeError::IdentityFormat { line, email } => {
            assert_eq!(line, 3);
            assert_eq!(email, "prof.smith@cornell.edu");
        }
        other => panic!("expected IdentityFormat, got {other:?}"),
    }
}

#[test]
fn skip_notices_do_not_leak_into_results() {
    let gradebook = "\
Student,ID,SIS User ID,SIS Login ID,Section
Points Possible,,,,
\"Alvarez, Maria\",1001,U100,ab123,LEC001
";
    let poll = "\
Email,Total answered
,0
ab123@cornell.edu,1
";
    let roster_load = load_roster(gradebook).unwrap();
    let engagement_load = load_engagement(poll).unwrap();
    assert_eq!(roster_load.skipped, [2]);
    assert_eq!(engagement_load.skipped, [2]);

    let result = reconcile(&roster_load.roster, &engagement_load.engagement, 1);
    assert_eq!(result.rows.len(), 1);
    assert!(result.mismatches.missing_from_engagement.is_empty());
    assert!(result.mismatches.missing_from_roster.is_empty());
}
