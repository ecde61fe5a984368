use ctestep::{SplitError, split};

const SMALL: &str = "WITH mbids(mbid, score) AS (VALUES %s), knockdown AS (SELECT * FROM mbids LIMIT %s) SELECT * FROM knockdown WHERE rank < %s";

#[test]
fn test_header_groups_merge_into_one_clause() {
    let clauses = split(SMALL).unwrap();

    assert_eq!(clauses.len(), 3);
    assert_eq!(clauses[0], "WITH mbids(mbid, score) AS (VALUES %s)");
    assert_eq!(clauses[1], ", knockdown AS (SELECT * FROM mbids LIMIT %s)");
    assert_eq!(clauses[2], " SELECT * FROM knockdown WHERE rank < %s");
}

#[test]
fn test_concatenation_reproduces_input() {
    let clauses = split(SMALL).unwrap();
    assert_eq!(clauses.concat(), SMALL);
}

#[test]
fn test_nested_groups_do_not_split() {
    let text = "WITH a(x) AS (SELECT PERCENT_RANK() OVER (ORDER BY s) FROM t WHERE (p OR q)) SELECT x FROM a";
    let clauses = split(text).unwrap();

    assert_eq!(clauses.len(), 2);
    assert!(clauses[0].ends_with("WHERE (p OR q))"));
}

#[test]
fn test_missing_terminal_select_is_allowed() {
    // Header plus body with nothing after the last ')'.
    let clauses = split("WITH a(x) AS (SELECT 1)").unwrap();
    assert_eq!(clauses, vec!["WITH a(x) AS (SELECT 1)".to_string()]);
}

#[test]
fn test_depth_never_negative() {
    let err = split("WITH a(x) AS )SELECT 1(").unwrap_err();
    assert_eq!(err, SplitError::UnbalancedClose { position: 13 });
}

#[test]
fn test_depth_returns_to_zero() {
    let err = split("WITH a(x) AS (SELECT 1").unwrap_err();
    assert_eq!(err, SplitError::UnbalancedOpen { depth: 1 });
}

#[test]
fn test_flat_text_is_rejected() {
    let err = split("SELECT 1 FROM t").unwrap_err();
    assert_eq!(err, SplitError::TooFewSegments { found: 1 });
}

#[test]
fn test_same_input_same_segments() {
    assert_eq!(split(SMALL).unwrap(), split(SMALL).unwrap());
}
