use crate::common::TckTest;

fn ids(json: &str) -> Vec<String> {
    let tickets: Vec<serde_json::Value> = serde_json::from_str(json).unwrap();
    tickets
        .iter()
        .map(|t| t["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_ls_on_fresh_store_lists_the_seed_set() {
    let tck = TckTest::new();

    let output = tck.run_success(&["ls", "--json"]);
    assert_eq!(ids(&output).len(), 5);
}

#[test]
fn test_ls_default_sort_is_newest_updated_first() {
    let tck = TckTest::new();

    let output = tck.run_success(&["ls", "--json"]);
    assert_eq!(
        ids(&output),
        ["TCK-1042", "TCK-1041", "TCK-1039", "TCK-1035", "TCK-1028"]
    );
}

#[test]
fn test_ls_sort_priority_desc_is_stable() {
    let tck = TckTest::new();

    let output = tck.run_success(&["ls", "--sort", "priority_desc", "--json"]);
    // The two p2 tickets keep their updated_desc-independent input order
    assert_eq!(
        ids(&output),
        ["TCK-1042", "TCK-1041", "TCK-1035", "TCK-1028", "TCK-1039"]
    );
}

#[test]
fn test_ls_text_query_matches_customer() {
    let tck = TckTest::new();

    let output = tck.run_success(&["ls", "meyer", "--json"]);
    assert_eq!(ids(&output), ["TCK-1042"]);
}

#[test]
fn test_ls_status_filter() {
    let tck = TckTest::new();

    let output = tck.run_success(&["ls", "--status", "waiting", "--json"]);
    assert_eq!(ids(&output), ["TCK-1039"]);
}

#[test]
fn test_ls_priority_filter() {
    let tck = TckTest::new();

    let output = tck.run_success(&["ls", "--priority", "p2", "--json"]);
    assert_eq!(ids(&output), ["TCK-1041", "TCK-1035"]);
}

#[test]
fn test_ls_filters_are_conjunctive() {
    let tck = TckTest::new();

    // "support" matches the owner of TCK-1042 (open) and TCK-1028 (closed)
    let broad = tck.run_success(&["ls", "support", "--json"]);
    assert_eq!(ids(&broad).len(), 2);

    let narrow = tck.run_success(&["ls", "support", "--status", "closed", "--json"]);
    assert_eq!(ids(&narrow), ["TCK-1028"]);
}

#[test]
fn test_ls_no_match() {
    let tck = TckTest::new();

    let output = tck.run_success(&["ls", "no such ticket"]);
    assert!(output.contains("0 matching"));

    let json = tck.run_success(&["ls", "no such ticket", "--json"]);
    assert_eq!(ids(&json).len(), 0);
}

#[test]
fn test_ls_table_output() {
    let tck = TckTest::new();

    let output = tck.run_success(&["ls"]);
    assert!(output.contains("5 matching"));
    assert!(output.contains("TCK-1042"));
    assert!(output.contains("Meyer GmbH"));
    assert!(output.contains("[Open]"));
    assert!(output.contains("P1"));
}

#[test]
fn test_ls_marks_the_selected_ticket() {
    let tck = TckTest::new();

    tck.run_success(&["select", "TCK-1041"]);
    let output = tck.run_success(&["ls"]);

    let row = output
        .lines()
        .find(|l| l.contains("TCK-1041"))
        .expect("selected ticket should be listed");
    assert!(row.contains('>'));

    let other = output
        .lines()
        .find(|l| l.contains("TCK-1035"))
        .expect("other ticket should be listed");
    assert!(!other.contains('>'));
}

#[test]
fn test_ls_rejects_invalid_sort_key() {
    let tck = TckTest::new();

    let stderr = tck.run_failure(&["ls", "--sort", "newest"]);
    assert!(stderr.contains("newest"));
    assert!(stderr.contains("updated_desc"));
}

#[test]
fn test_ls_does_not_create_the_state_file() {
    let tck = TckTest::new();

    tck.run_success(&["ls"]);
    assert!(!tck.state_exists());
}

#[test]
fn test_ls_uses_configured_default_sort() {
    let tck = TckTest::new();

    tck.write_config("default_sort: priority_desc\n");
    let output = tck.run_success(&["ls", "--json"]);
    assert_eq!(ids(&output)[..2], ["TCK-1042", "TCK-1041"]);

    // An explicit --sort wins over the configured default
    let explicit = tck.run_success(&["ls", "--sort", "updated_asc", "--json"]);
    assert_eq!(ids(&explicit)[0], "TCK-1028");
}
