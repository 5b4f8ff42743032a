use crate::common::TckTest;

#[test]
fn test_copy_link_emits_link_or_confirmation() {
    let tck = TckTest::new();

    // Clipboard access depends on the environment: either the write
    // succeeds ("copied") or the fallback prints the link.
    let output = tck.run_success(&["copy-link", "TCK-1042"]);
    assert!(
        output.contains("copied") || output.contains("#ticket=TCK-1042"),
        "unexpected output: {output}"
    );
}

#[test]
fn test_copy_link_unknown_id_fails() {
    let tck = TckTest::new();

    let stderr = tck.run_failure(&["copy-link", "TCK-9999"]);
    assert!(stderr.contains("not found"));
}

#[test]
fn test_copy_link_without_selection_prints_hint() {
    let tck = TckTest::new();

    let output = tck.run_success(&["copy-link"]);
    assert!(output.contains("No ticket selected"));
}

#[test]
fn test_open_selects_a_known_ticket() {
    let tck = TckTest::new();

    let output = tck.run_success(&["open", "https://tickets.local/board#ticket=TCK-1039"]);
    assert!(output.contains("TCK-1039"));
    assert_eq!(tck.selected_id().as_deref(), Some("TCK-1039"));
}

#[test]
fn test_open_is_idempotent() {
    let tck = TckTest::new();

    let link = "https://tickets.local/board#ticket=TCK-1039";
    tck.run_success(&["open", link]);
    tck.run_success(&["open", link]);
    assert_eq!(tck.selected_id().as_deref(), Some("TCK-1039"));
}

#[test]
fn test_open_unknown_id_leaves_selection_unchanged() {
    let tck = TckTest::new();

    tck.run_success(&["select", "TCK-1041"]);
    let output = tck.run_success(&["open", "https://tickets.local/board#ticket=TCK-9999"]);
    assert!(output.contains("selection unchanged"));
    assert_eq!(tck.selected_id().as_deref(), Some("TCK-1041"));
}

#[test]
fn test_open_tolerates_extra_fragment_pairs() {
    let tck = TckTest::new();

    tck.run_success(&["open", "https://tickets.local/board#view=wide&ticket=TCK-1035"]);
    assert_eq!(tck.selected_id().as_deref(), Some("TCK-1035"));
}

#[test]
fn test_open_rejects_link_without_ticket_fragment() {
    let tck = TckTest::new();

    let stderr = tck.run_failure(&["open", "https://tickets.local/board"]);
    assert!(stderr.contains("not a ticket link"));
}
