use super::*;

#[test]
fn summary_counts_add_up() {
    let report = scan("example.com", "1-100").unwrap();
    let text = summary(&report);
    assert!(text.starts_with("example.com: "));
    assert!(text.ends_with("of 100 scanned"));
}

#[test]
fn summary_is_stable_for_same_input() {
    let a = summary(&scan("db.internal", "20-30").unwrap());
    let b = summary(&scan("db.internal", "20-30").unwrap());
    assert_eq!(a, b);
}
