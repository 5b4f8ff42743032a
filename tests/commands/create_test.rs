use crate::common::TckTest;

#[test]
fn test_create_prints_next_sequential_id() {
    let tck = TckTest::new();

    // Fresh store seeds TCK-1042 as the highest id
    let output = tck.run_success(&["create", "New ticket", "--customer", "Acme"]);
    assert_eq!(output.trim(), "TCK-1043");
}

#[test]
fn test_create_alias() {
    let tck = TckTest::new();

    let output = tck.run_success(&["c", "Aliased", "--customer", "Acme"]);
    assert_eq!(output.trim(), "TCK-1043");
}

#[test]
fn test_create_persists_and_prepends() {
    let tck = TckTest::new();

    tck.run_success(&["create", "New ticket", "--customer", "Acme"]);

    assert!(tck.state_exists());
    let ids = tck.state_ids();
    assert_eq!(ids.len(), 6);
    assert_eq!(ids[0], "TCK-1043");
}

#[test]
fn test_create_selects_the_new_ticket() {
    let tck = TckTest::new();

    tck.run_success(&["create", "New ticket", "--customer", "Acme"]);
    assert_eq!(tck.selected_id().as_deref(), Some("TCK-1043"));
}

#[test]
fn test_create_defaults() {
    let tck = TckTest::new();

    let output = tck.run_success(&["create", "Defaults", "--customer", "Acme", "--json"]);
    let ticket: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(ticket["priority"], "p2");
    assert_eq!(ticket["status"], "open");
    assert_eq!(ticket["owner"], "Unassigned");
    assert_eq!(ticket["sla"], "8h first response");
    assert_eq!(ticket["tags"], serde_json::json!([]));
    assert_eq!(ticket["createdAt"], ticket["updatedAt"]);
}

#[test]
fn test_create_p1_gets_tighter_sla() {
    let tck = TckTest::new();

    let output = tck.run_success(&[
        "create",
        "Prod down",
        "--customer",
        "Acme",
        "--priority",
        "p1",
        "--json",
    ]);
    let ticket: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(ticket["sla"], "4h first response");
}

#[test]
fn test_create_trims_fields() {
    let tck = TckTest::new();

    let output = tck.run_success(&[
        "create",
        "  Padded title  ",
        "--customer",
        " Acme ",
        "--description",
        "  body  ",
        "--json",
    ]);
    let ticket: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(ticket["title"], "Padded title");
    assert_eq!(ticket["customer"], "Acme");
    assert_eq!(ticket["description"], "body");
}

#[test]
fn test_create_rejects_invalid_priority() {
    let tck = TckTest::new();

    let stderr = tck.run_failure(&["create", "Bad", "--customer", "Acme", "--priority", "p9"]);
    assert!(stderr.contains("p9"));
    assert!(stderr.contains("p1"));
}

#[test]
fn test_created_ids_keep_increasing() {
    let tck = TckTest::new();

    let first = tck.run_success(&["create", "First", "--customer", "Acme"]);
    let second = tck.run_success(&["create", "Second", "--customer", "Acme"]);
    assert_eq!(first.trim(), "TCK-1043");
    assert_eq!(second.trim(), "TCK-1044");
}
